//! UI Components
//!
//! Leptos components for the to-do list.

mod new_todo_form;
mod todo_row;
mod todo_list_view;

pub use new_todo_form::NewTodoForm;
pub use todo_row::TodoRow;
pub use todo_list_view::TodoListView;
