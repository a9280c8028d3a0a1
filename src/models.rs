//! Frontend Models
//!
//! Data structures rendered by the to-do list.

use serde::{Deserialize, Serialize};

/// Inline style for the text of a completed item
pub const DONE_STYLE: &str = "text-decoration: line-through; color: #8b8b8b;";
/// Inline style for the text of an open item
pub const NOT_DONE_STYLE: &str = "text-decoration: none;";

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: u32,
    pub content: String,
    pub is_done: bool,
}

impl TodoItem {
    /// Create a new open item
    pub fn new(id: u32, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            is_done: false,
        }
    }

    /// Inline CSS for the item's text span
    pub fn style(&self) -> &'static str {
        if self.is_done {
            DONE_STYLE
        } else {
            NOT_DONE_STYLE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = TodoItem::new(1, "buy milk");
        assert_eq!(item.id, 1);
        assert_eq!(item.content, "buy milk");
        assert!(!item.is_done);
        assert_eq!(item.style(), NOT_DONE_STYLE);
    }

    #[test]
    fn test_done_style() {
        let mut item = TodoItem::new(3, "walk dog");
        item.is_done = true;
        assert!(item.style().contains("line-through"));
        assert!(item.style().contains("#8b8b8b"));
    }

    #[test]
    fn test_item_serialization() {
        let item = TodoItem::new(2, "walk dog");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["content"], "walk dog");
        assert_eq!(json["isDone"], false);

        let back: TodoItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }
}
