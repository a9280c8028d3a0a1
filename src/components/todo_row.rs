//! Todo Row Component
//!
//! A single item with its Done and Delete actions.

use leptos::prelude::*;

use crate::models::TodoItem;
use crate::store::{store_dispatch, use_app_store};
use crate::todo::TodoAction;

#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let style = item.style();
    let is_done = item.is_done;

    view! {
        <div class={if is_done { "todo_item done" } else { "todo_item" }}>
            <span style=style>{item.content}</span>
            <div class="todo_actions">
                <button on:click=move |_| store_dispatch(&store, TodoAction::MarkDone(id))>
                    "Done"
                </button>
                <button on:click=move |_| store_dispatch(&store, TodoAction::Delete(id))>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
