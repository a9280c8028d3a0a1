//! Todo List View Component
//!
//! Renders items in display order, open items first.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{store_items, use_app_store};

#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_app_store();

    let rows = move || store_items(&store).into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div class="todo_list">
            <For
                each=rows
                // Position is part of the key: length-derived ids can repeat
                key=|(position, item)| (*position, item.id, item.is_done, item.content.clone())
                children=move |(_, item)| view! { <TodoRow item=item /> }
            />
        </div>
    }
}
