use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Creation timestamp in epoch ms, unique within the list
    pub id: i64,
    pub text: String,
    pub completed: bool,
}

/// Ordered todo list; insertion order is display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new(items: Vec<TodoItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TodoItem> {
        self.items.get(index)
    }

    /// Append a todo. Blank text is ignored.
    ///
    /// The id is the creation time, bumped past the largest existing id when
    /// two todos land on the same millisecond. If the largest id is already
    /// `i64::MAX` the smallest free non-negative id is used instead.
    pub fn add(&mut self, text: &str, now_ms: i64) -> Option<i64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = match self.items.iter().map(|item| item.id).max() {
            Some(max) if now_ms <= max => max
                .checked_add(1)
                .unwrap_or_else(|| self.smallest_free_id()),
            _ => now_ms,
        };
        self.items.push(TodoItem {
            id,
            text: text.to_string(),
            completed: false,
        });
        Some(id)
    }

    fn smallest_free_id(&self) -> i64 {
        let used: BTreeSet<i64> = self.items.iter().map(|item| item.id).collect();
        (0..i64::MAX).find(|id| !used.contains(id)).unwrap_or(0)
    }

    /// Flip completion. Returns false if the id is unknown.
    pub fn toggle(&mut self, id: i64) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Remove a todo. Returns the removed item if it existed.
    pub fn delete(&mut self, id: i64) -> Option<TodoItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Count of completed todos
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const T0: i64 = 1_700_000_000_000;

    #[test]
    fn test_add_trims_and_appends() {
        let mut list = TodoList::default();
        assert_eq!(list.add("  write report ", T0), Some(T0));
        assert_eq!(list.add("review PR", T0 + 10), Some(T0 + 10));
        assert_eq!(list.items()[0].text, "write report");
        assert_eq!(list.items()[1].text, "review PR");
        assert!(!list.items()[0].completed);
    }

    #[test]
    fn test_add_blank_is_ignored() {
        let mut list = TodoList::default();
        assert_eq!(list.add("   ", T0), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_ids_stay_unique_on_same_millisecond() {
        let mut list = TodoList::default();
        let a = list.add("a", T0).unwrap();
        let b = list.add("b", T0).unwrap();
        let c = list.add("c", T0 - 5).unwrap();
        assert_eq!(a, T0);
        assert_eq!(b, T0 + 1);
        assert_eq!(c, T0 + 2);
    }

    #[test]
    fn test_id_past_i64_max_takes_smallest_free() {
        let mut list = TodoList::new(vec![
            TodoItem {
                id: 0,
                text: "zero".to_string(),
                completed: false,
            },
            TodoItem {
                id: i64::MAX,
                text: "max".to_string(),
                completed: false,
            },
        ]);

        assert_eq!(list.add("next", T0), Some(1));
        assert_eq!(list.add("after", T0), Some(2));
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_toggle() {
        let mut list = TodoList::default();
        let id = list.add("a", T0).unwrap();
        assert!(list.toggle(id));
        assert!(list.items()[0].completed);
        assert_eq!(list.completed_count(), 1);
        assert!(list.toggle(id));
        assert!(!list.items()[0].completed);
        assert!(!list.toggle(42));
    }

    #[test]
    fn test_add_then_delete_restores_list() {
        let mut list = TodoList::default();
        list.add("first", T0);
        list.add("second", T0 + 1);
        let before = list.clone();

        let id = list.add("temporary", T0 + 2).unwrap();
        let removed = list.delete(id).unwrap();
        assert_eq!(removed.text, "temporary");
        assert_eq!(list, before);
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut list = TodoList::default();
        list.add("a", T0);
        let b = list.add("b", T0 + 1).unwrap();
        list.add("c", T0 + 2);
        list.delete(b);
        let texts: Vec<&str> = list.items().iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
        assert_eq!(list.delete(b), None);
    }

    #[test]
    fn test_json_shape() {
        let mut list = TodoList::default();
        list.add("a", 1);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"id":1,"text":"a","completed":false}]"#);
    }
}
