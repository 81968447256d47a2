//! # Todo List Model
//!
//! The in-memory, capacity-bounded list of todos.
//!
//! ```text
//! TodoList
//! ├── records: Vec<TodoRecord>   // insertion order = display order = file order
//! └── capacity: usize            // hard upper bound on records.len()
//! ```
//!
//! Positions are 1-based and refer to the current display order. They are not
//! stable: deleting position `k` shifts every later record down by one.

use chrono::{Local, NaiveDateTime};
use std::fmt;

/// Default maximum number of todos held at once.
pub const MAX_TODOS: usize = 20;

/// Longest title, in bytes, that fits the persisted title field.
pub const TITLE_MAX_BYTES: usize = 49;

/// Display format for `created_at`, e.g. `25/12 14:05`.
pub const CREATED_AT_FORMAT: &str = "%d/%m %H:%M";

/// One task entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRecord {
    pub title: String,
    pub created_at: String,
    pub completed: bool,
}

impl TodoRecord {
    /// Builds a pending record stamped with `now`.
    pub fn new(title: String, now: NaiveDateTime) -> Self {
        Self {
            title,
            created_at: now.format(CREATED_AT_FORMAT).to_string(),
            completed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    CapacityExceeded { capacity: usize },
    EmptyTitle,
    InvalidId { position: i64, len: usize },
    MalformedInput(String),
}

impl fmt::Display for TodoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoError::CapacityExceeded { capacity } => {
                write!(f, "Todo list is full ({capacity} max)! Delete some todos first.")
            }
            TodoError::EmptyTitle => write!(f, "Todo title cannot be empty!"),
            TodoError::InvalidId { position, len } => {
                if *len == 0 {
                    write!(f, "Invalid ID {position}! The list is empty.")
                } else {
                    write!(f, "Invalid ID {position}! Pick a number from 1 to {len}.")
                }
            }
            TodoError::MalformedInput(input) => {
                write!(f, "Please enter a number! (got {input:?})")
            }
        }
    }
}

impl std::error::Error for TodoError {}

/// Trims surrounding whitespace and cuts the title to [`TITLE_MAX_BYTES`]
/// on a character boundary. Returns `None` when nothing is left.
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let mut end = trimmed.len().min(TITLE_MAX_BYTES);
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    Some(trimmed[..end].trim_end().to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    records: Vec<TodoRecord>,
    capacity: usize,
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoList {
    pub fn new() -> Self {
        Self::with_capacity(MAX_TODOS)
    }

    /// An empty list holding at most `capacity` records (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Read-only view in display order.
    pub fn list(&self) -> &[TodoRecord] {
        &self.records
    }

    /// Appends a new pending todo stamped with the current local time.
    pub fn add(&mut self, title: &str) -> Result<&TodoRecord, TodoError> {
        self.add_at(title, Local::now().naive_local())
    }

    /// Same as [`add`](Self::add) with an explicit creation time.
    pub fn add_at(&mut self, title: &str, now: NaiveDateTime) -> Result<&TodoRecord, TodoError> {
        if self.is_full() {
            return Err(TodoError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let title = normalize_title(title).ok_or(TodoError::EmptyTitle)?;
        self.records.push(TodoRecord::new(title, now));
        Ok(&self.records[self.records.len() - 1])
    }

    /// Marks the todo at `position` done. Completing a done todo is a no-op.
    pub fn complete(&mut self, position: i64) -> Result<&TodoRecord, TodoError> {
        let index = self.index_of(position)?;
        let record = &mut self.records[index];
        record.completed = true;
        Ok(record)
    }

    /// Removes the todo at `position`, closing the gap.
    pub fn delete(&mut self, position: i64) -> Result<TodoRecord, TodoError> {
        let index = self.index_of(position)?;
        Ok(self.records.remove(index))
    }

    /// Pushes an already-built record, used when loading from the store.
    /// Returns `false` (and drops the record) once the list is full.
    pub(crate) fn push_loaded(&mut self, record: TodoRecord) -> bool {
        if self.is_full() {
            return false;
        }
        self.records.push(record);
        true
    }

    fn index_of(&self, position: i64) -> Result<usize, TodoError> {
        let len = self.records.len();
        match usize::try_from(position) {
            Ok(p) if (1..=len).contains(&p) => Ok(p - 1),
            _ => Err(TodoError::InvalidId { position, len }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fixed_time, list_with};

    #[test]
    fn test_add_appends_pending_record() {
        let mut list = list_with(&["Walk dog"]);
        let record = list.add_at("Buy milk", fixed_time()).unwrap().clone();

        assert_eq!(record.title, "Buy milk");
        assert!(!record.completed);
        assert_eq!(record.created_at, "25/12 14:05");
        assert_eq!(list.len(), 2);
        assert_eq!(list.list()[1], record);
    }

    #[test]
    fn test_add_trims_whitespace_and_newline() {
        let mut list = TodoList::new();
        list.add_at("  Call mum \n", fixed_time()).unwrap();
        assert_eq!(list.list()[0].title, "Call mum");
    }

    #[test]
    fn test_add_rejects_blank_title() {
        let mut list = TodoList::new();
        assert_eq!(list.add_at("", fixed_time()), Err(TodoError::EmptyTitle));
        assert_eq!(list.add_at(" \t\n", fixed_time()), Err(TodoError::EmptyTitle));
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_when_full_fails_and_leaves_list_alone() {
        let mut list = TodoList::with_capacity(2);
        list.add_at("one", fixed_time()).unwrap();
        list.add_at("two", fixed_time()).unwrap();
        let before = list.clone();

        let err = list.add_at("three", fixed_time()).unwrap_err();
        assert_eq!(err, TodoError::CapacityExceeded { capacity: 2 });
        assert_eq!(list, before);
    }

    #[test]
    fn test_capacity_checked_before_title() {
        let mut list = TodoList::with_capacity(1);
        list.add_at("one", fixed_time()).unwrap();
        assert!(matches!(
            list.add_at("", fixed_time()),
            Err(TodoError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn test_long_title_truncated_to_field_width() {
        let mut list = TodoList::new();
        let long = "x".repeat(80);
        list.add_at(&long, fixed_time()).unwrap();
        assert_eq!(list.list()[0].title.len(), TITLE_MAX_BYTES);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // 'é' is two bytes, so byte 49 falls inside a character
        let title = "é".repeat(30);
        let normalized = normalize_title(&title).unwrap();
        assert_eq!(normalized.len(), 48);
        assert!(normalized.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_complete_is_idempotent() {
        let mut list = list_with(&["a", "b"]);
        list.complete(2).unwrap();
        let once = list.clone();
        list.complete(2).unwrap();

        assert_eq!(list, once);
        assert!(list.list()[1].completed);
        assert!(!list.list()[0].completed);
    }

    #[test]
    fn test_delete_shifts_later_records() {
        let mut list = list_with(&["a", "b", "c"]);
        let removed = list.delete(2).unwrap();

        assert_eq!(removed.title, "b");
        let titles: Vec<_> = list.list().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["a", "c"]);
    }

    #[test]
    fn test_out_of_range_positions_are_invalid() {
        let mut list = list_with(&["a", "b"]);
        let before = list.clone();

        for position in [0, -1, 3, i64::MAX, i64::MIN] {
            assert_eq!(
                list.delete(position),
                Err(TodoError::InvalidId { position, len: 2 })
            );
            assert!(matches!(
                list.complete(position),
                Err(TodoError::InvalidId { .. })
            ));
        }
        assert_eq!(list, before);
    }

    #[test]
    fn test_positions_on_empty_list_are_invalid() {
        let mut list = TodoList::new();
        let err = TodoError::InvalidId { position: 1, len: 0 };
        assert_eq!(list.delete(1), Err(err.clone()));
        assert_eq!(list.complete(1), Err(err.clone()));
        assert_eq!(err.to_string(), "Invalid ID 1! The list is empty.");
        assert!(list.is_empty());
    }

    #[test]
    fn test_push_loaded_stops_at_capacity() {
        let mut list = TodoList::with_capacity(1);
        assert!(list.push_loaded(TodoRecord::new("a".into(), fixed_time())));
        assert!(!list.push_loaded(TodoRecord::new("b".into(), fixed_time())));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        assert_eq!(TodoList::with_capacity(0).capacity(), 1);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TodoError::InvalidId { position: 7, len: 3 }.to_string(),
            "Invalid ID 7! Pick a number from 1 to 3."
        );
        assert_eq!(
            TodoError::InvalidId { position: 0, len: 0 }.to_string(),
            "Invalid ID 0! The list is empty."
        );
        assert!(TodoError::MalformedInput("abc".into())
            .to_string()
            .starts_with("Please enter a number!"));
    }
}
