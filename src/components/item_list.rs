//! Item List Component
//!
//! One row per server item, each with its own delete button.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Item;
use crate::store;

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let list = ctx.store;

    view! {
        <ul id="itemList" class="list-group">
            <For
                each=move || store::items(list)
                key=|item| item.id
                children=move |item: Item| view! { <ItemRow item=item /> }
            />
        </ul>
    }
}

#[component]
fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = item.id;

    view! {
        <li class="list-group-item">
            {item.name}
            " "
            <button
                class="btn btn-danger btn-sm float-right"
                data-id=id.to_string()
                on:click=move |_| ctx.delete(id)
            >
                "Delete"
            </button>
        </li>
    }
}
