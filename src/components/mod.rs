//! UI Components
//!
//! Leptos components making up the items page.

mod create_form;
mod item_list;

pub use create_form::CreateForm;
pub use item_list::ItemList;
