//! Items CRUD App
//!
//! Root component: form on top, item list below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpItemApi;
use crate::components::{CreateForm, ItemList};
use crate::config::ResyncPolicy;
use crate::context::AppContext;
use crate::controller::ItemController;
use crate::store::{ListState, StoreView};

#[component]
pub fn App(api: HttpItemApi, resync_policy: ResyncPolicy) -> impl IntoView {
    let store = Store::new(ListState::default());
    let controller = ItemController::new(api, StoreView::new(store), resync_policy);
    let ctx = AppContext::new(store, controller);

    // Provide context to all children
    provide_context(ctx);

    // Initial load on mount
    ctx.load();

    view! {
        <div class="container mt-5">
            <h1 class="text-center">"CRUD Application"</h1>

            <CreateForm />

            <hr />

            <h2>"Items List"</h2>

            <ItemList />
        </div>
    }
}
