//! Todo List App
//!
//! Root component: draft form, item list and summary line.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTodoForm, TodoListView};
use crate::store::{store_counts, AppState};
use crate::todo::IdStrategy;

/// Id policy for new items; `LengthDerived` reproduces the old `len + 1` ids
const ID_STRATEGY: IdStrategy = IdStrategy::Monotonic;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new(ID_STRATEGY));
    provide_context(store);
    log::info!("[APP] Mounted with {:?} ids", ID_STRATEGY);

    view! {
        <div class="App">
            <NewTodoForm />
            <TodoListView />
            <p class="item-count">
                {move || {
                    let (total, done) = store_counts(&store);
                    format!("{} items, {} done", total, done)
                }}
            </p>
        </div>
    }
}
