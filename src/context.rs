//! Page Context
//!
//! Copyable handle to the item store and the controller, so event handlers
//! anywhere in the tree can start a load, create or delete.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;

use crate::api::HttpItemApi;
use crate::controller::ItemController;
use crate::models::ItemId;
use crate::store::{ListStore, StoreView};

pub type AppController = ItemController<HttpItemApi, StoreView>;

/// Page-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Rendered page state
    pub store: ListStore,
    /// The controller holds browser futures, so it stays on this thread
    controller: StoredValue<Rc<AppController>, LocalStorage>,
}

impl AppContext {
    pub fn new(store: ListStore, controller: AppController) -> Self {
        Self {
            store,
            controller: StoredValue::new_local(Rc::new(controller)),
        }
    }

    /// Re-fetch the item list
    pub fn load(&self) {
        let controller = self.controller.get_value();
        spawn_local(async move { controller.load().await });
    }

    /// Submit the current draft
    pub fn create(&self) {
        let controller = self.controller.get_value();
        spawn_local(async move { controller.create().await });
    }

    pub fn delete(&self, id: ItemId) {
        let controller = self.controller.get_value();
        spawn_local(async move { controller.delete(id).await });
    }
}
