//! Global Application State Store
//!
//! Uses Leptos reactive_stores; components go through the helpers below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TodoItem;
use crate::todo::{IdStrategy, TodoAction, TodoList};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The to-do list and its draft buffer
    pub todos: TodoList,
}

impl AppState {
    pub fn new(id_strategy: IdStrategy) -> Self {
        Self {
            todos: TodoList::with_id_strategy(id_strategy),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply one UI action to the list
pub fn store_dispatch(store: &AppStore, action: TodoAction) {
    if !matches!(action, TodoAction::SetDraft(_)) {
        log::debug!("[STORE] {:?}", action);
    }
    store.todos().write().apply(action);
}

/// Current items in display order
pub fn store_items(store: &AppStore) -> Vec<TodoItem> {
    store.todos().with(|todos| todos.items().to_vec())
}

/// Current draft text
pub fn store_draft(store: &AppStore) -> String {
    store.todos().with(|todos| todos.draft().to_string())
}

/// (total, done) counts for the summary line
pub fn store_counts(store: &AppStore) -> (usize, usize) {
    store.todos().with(|todos| (todos.len(), todos.done_count()))
}
