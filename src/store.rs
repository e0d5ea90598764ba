//! Item Page Store
//!
//! Rendered rows, the name draft and the submitting flag. The controller
//! writes through `StoreView`; components read the individual fields.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::ItemView;
use crate::models::Item;

/// Everything the page renders
#[derive(Clone, Debug, Default, Store)]
pub struct ListState {
    /// Rows as last returned by the server
    pub items: Vec<Item>,
    /// Contents of the name input
    pub draft: String,
    /// A create request is in flight
    pub submitting: bool,
}

/// Type alias for the store
pub type ListStore = Store<ListState>;

/// Controller view backed by the store
#[derive(Clone, Copy)]
pub struct StoreView {
    store: ListStore,
}

impl StoreView {
    pub fn new(store: ListStore) -> Self {
        Self { store }
    }
}

impl ItemView for StoreView {
    fn show_items(&self, items: Vec<Item>) {
        self.store.items().set(items);
    }

    fn draft(&self) -> String {
        self.store.draft().get_untracked()
    }

    fn clear_draft(&self) {
        self.store.draft().set(String::new());
    }

    fn set_submitting(&self, submitting: bool) {
        self.store.submitting().set(submitting);
    }
}

// ========================
// Component accessors
// ========================

pub fn items(store: ListStore) -> Vec<Item> {
    store.items().get()
}

pub fn draft(store: ListStore) -> String {
    store.draft().get()
}

pub fn set_draft(store: ListStore, text: String) {
    store.draft().set(text);
}

pub fn submitting(store: ListStore) -> bool {
    store.submitting().get()
}
