//! To-Do List State
//!
//! Pure state container behind the UI. Every user event maps to one
//! [`TodoAction`], applied synchronously; the store re-renders afterwards.

use crate::models::TodoItem;

/// How new item ids are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// Strictly increasing counter, never reused after deletes
    #[default]
    Monotonic,
    /// `len + 1` at creation time; may collide with a surviving id after a delete
    LengthDerived,
}

/// One state transition triggered by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    SetDraft(String),
    Add,
    MarkDone(u32),
    Delete(u32),
}

/// Ordered to-do items plus the uncommitted draft text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<TodoItem>,
    draft: String,
    next_id: u32,
    id_strategy: IdStrategy,
}

impl Default for TodoList {
    fn default() -> Self {
        Self::with_id_strategy(IdStrategy::default())
    }
}

impl TodoList {
    pub fn with_id_strategy(id_strategy: IdStrategy) -> Self {
        Self {
            items: Vec::new(),
            draft: String::new(),
            next_id: 1,
            id_strategy,
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_done).count()
    }

    /// Replace the draft buffer. No trimming, no validation.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Append the draft as a new open item and clear the draft.
    ///
    /// An empty draft still produces a (blank) item. Returns the assigned id.
    pub fn add(&mut self) -> u32 {
        let id = self.allocate_id();
        let content = std::mem::take(&mut self.draft);
        self.items.push(TodoItem::new(id, content));
        id
    }

    /// Remove every item with `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Flip matching items to done, then move done items below open ones.
    ///
    /// The partition runs even when nothing matched. `sort_by_key` is stable,
    /// so each group keeps its insertion order. Returns whether anything matched.
    pub fn mark_done(&mut self, id: u32) -> bool {
        let mut matched = false;
        for item in self.items.iter_mut().filter(|item| item.id == id) {
            item.is_done = true;
            matched = true;
        }
        self.items.sort_by_key(|item| item.is_done);
        matched
    }

    pub fn apply(&mut self, action: TodoAction) {
        match action {
            TodoAction::SetDraft(text) => self.set_draft(text),
            TodoAction::Add => {
                self.add();
            }
            TodoAction::MarkDone(id) => {
                self.mark_done(id);
            }
            TodoAction::Delete(id) => {
                self.delete(id);
            }
        }
    }

    /// Apply `action` and return the resulting state
    pub fn reduce(mut self, action: TodoAction) -> Self {
        self.apply(action);
        self
    }

    fn allocate_id(&mut self) -> u32 {
        match self.id_strategy {
            IdStrategy::LengthDerived => self.items.len() as u32 + 1,
            IdStrategy::Monotonic => {
                let id = self.next_id;
                self.next_id += 1;
                id
            }
        }
    }
}
