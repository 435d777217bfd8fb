//! CompletedList - an archived shopping list
//!
//! Created only by the complete/archive transition and never mutated
//! afterwards, except for deletion of the whole entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::item::{next_id, ShoppingItem};

/// An immutable snapshot of a finished shopping list
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompletedList {
    /// Opaque identifier assigned at creation
    pub id: String,

    /// User-supplied name, or a date-based default
    pub name: String,

    /// The items exactly as they were when the list was completed
    pub items: Vec<ShoppingItem>,

    /// When the list was completed
    pub completed_at: DateTime<Utc>,

    /// Number of items on the list at completion
    pub total_items: usize,

    /// Number of items that were checked off at completion.
    /// Under the manual policy this may be less than `total_items`.
    pub completed_items: usize,
}

impl CompletedList {
    /// Archive the given items under an optional name.
    ///
    /// A missing or blank name falls back to `"Shopping List {date}"`.
    pub fn new(name: Option<String>, items: Vec<ShoppingItem>) -> Self {
        let completed_at = Utc::now();
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("Shopping List {}", completed_at.format("%Y-%m-%d")));

        Self {
            id: next_id(),
            name,
            completed_at,
            total_items: items.len(),
            completed_items: items.iter().filter(|i| i.completed).count(),
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_partial_completion() {
        let mut bread = ShoppingItem::new("Bread");
        bread.toggle();
        let entry = CompletedList::new(
            Some("Weekly Groceries".to_string()),
            vec![bread, ShoppingItem::new("Butter")],
        );

        assert_eq!(entry.name, "Weekly Groceries");
        assert_eq!(entry.total_items, 2);
        assert_eq!(entry.completed_items, 1);
        assert_eq!(entry.items.len(), 2);
    }

    #[test]
    fn test_blank_name_gets_date_default() {
        let entry = CompletedList::new(Some("   ".to_string()), vec![]);
        assert!(entry.name.starts_with("Shopping List "));

        let entry = CompletedList::new(None, vec![]);
        assert!(entry.name.starts_with("Shopping List "));
    }
}
