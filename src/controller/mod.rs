//! Item View Controller
//!
//! Translates load / create / delete intents into API calls and keeps the
//! view equal to the server's collection. Every mutation goes through
//! [`ItemController::mutate_then_resync`], which runs at most one reload.

use std::cell::Cell;
use std::future::Future;

use crate::api::{ApiResult, ItemApi};
use crate::config::ResyncPolicy;
use crate::models::{Item, ItemId, NewItem};


/// What the controller needs from the rendered page
pub trait ItemView {
    /// Replace every rendered row, keeping order
    fn show_items(&self, items: Vec<Item>);
    /// Current contents of the name input
    fn draft(&self) -> String;
    fn clear_draft(&self);
    fn set_submitting(&self, submitting: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The view now shows this many rows
    Rendered(usize),
    /// A newer load already rendered; this response was dropped
    Superseded,
}

pub struct ItemController<A, V> {
    api: A,
    view: V,
    policy: ResyncPolicy,
    /// Sequence number of the last issued load
    issued: Cell<u64>,
    /// Sequence number of the load currently rendered
    rendered: Cell<u64>,
    submitting: Cell<bool>,
}

impl<A: ItemApi, V: ItemView> ItemController<A, V> {
    pub fn new(api: A, view: V, policy: ResyncPolicy) -> Self {
        Self {
            api,
            view,
            policy,
            issued: Cell::new(0),
            rendered: Cell::new(0),
            submitting: Cell::new(false),
        }
    }

    /// Fetch the collection and render it. Failures are logged and leave
    /// the current rows in place.
    pub async fn load(&self) {
        if let Err(err) = self.try_load().await {
            log::error!("Error fetching items: {}", err);
        }
    }

    pub async fn try_load(&self) -> ApiResult<LoadOutcome> {
        let seq = self.issued.get() + 1;
        self.issued.set(seq);

        let items = self.api.list_items().await?;
        if seq < self.rendered.get() {
            log::debug!("Dropping items from load #{} (load #{} already shown)", seq, self.rendered.get());
            return Ok(LoadOutcome::Superseded);
        }
        self.rendered.set(seq);

        let count = items.len();
        self.view.show_items(items);
        log::debug!("Rendered {} items from load #{}", count, seq);
        Ok(LoadOutcome::Rendered(count))
    }

    /// Submit the draft as a new item. Blank drafts and submissions made
    /// while another create is pending send nothing.
    pub async fn create(&self) {
        let Some(item) = NewItem::from_draft(&self.view.draft()) else {
            return;
        };
        if self.submitting.replace(true) {
            log::warn!("Create already in flight, ignoring {:?}", item.name);
            return;
        }
        self.view.set_submitting(true);

        let resynced = self.mutate_then_resync("creating", self.api.create_item(&item)).await;

        self.submitting.set(false);
        self.view.set_submitting(false);
        if resynced {
            self.view.clear_draft();
        }
    }

    pub async fn delete(&self, id: ItemId) {
        self.mutate_then_resync("deleting", self.api.delete_item(id)).await;
    }

    /// Await `mutation`, then reload once if the outcome and policy allow it.
    /// Returns whether the reload ran.
    pub async fn mutate_then_resync<F>(&self, action: &str, mutation: F) -> bool
    where
        F: Future<Output = ApiResult<()>>,
    {
        match mutation.await {
            Ok(()) => {}
            Err(err) if err.is_rejection() && self.policy == ResyncPolicy::Always => {
                log::warn!("Server refused {} item: {}", action, err);
            }
            Err(err) => {
                log::error!("Error {} item: {}", action, err);
                return false;
            }
        }
        self.load().await;
        true
    }
}
