//! Create Form Component
//!
//! Name input plus submit button for new items.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store;

#[component]
pub fn CreateForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let list = ctx.store;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctx.create();
    };

    view! {
        <form id="createForm" on:submit=on_submit>
            <div class="form-group">
                <label for="itemName">"Item Name:"</label>
                <input
                    type="text"
                    class="form-control"
                    id="itemName"
                    required=true
                    prop:value=move || store::draft(list)
                    on:input=move |ev| store::set_draft(list, event_target_value(&ev))
                />
            </div>
            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || store::submitting(list)
            >
                "Create Item"
            </button>
        </form>
    }
}
