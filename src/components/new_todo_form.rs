//! New Todo Form Component
//!
//! Draft input plus the Add button.

use leptos::prelude::*;

use crate::store::{store_dispatch, store_draft, use_app_store};
use crate::todo::TodoAction;

/// Form for appending a new item from the draft text
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();

    // Empty drafts are accepted and produce a blank item
    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_dispatch(&store, TodoAction::Add);
    };

    view! {
        <form class="todo_add" on:submit=add_item>
            <input
                type="text"
                prop:value=move || store_draft(&store)
                on:input=move |ev| {
                    store_dispatch(&store, TodoAction::SetDraft(event_target_value(&ev)));
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
