//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::{NaiveDate, NaiveDateTime};

use crate::core::state::App;
use crate::core::todo::{TodoList, TodoRecord};

/// 25 December 2024, 14:05.
pub fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 12, 25)
        .and_then(|d| d.and_hms_opt(14, 5, 0))
        .unwrap()
}

/// A pending record created at `fixed_time()`.
pub fn record(title: &str) -> TodoRecord {
    TodoRecord::new(title.to_string(), fixed_time())
}

/// A default-capacity list holding `titles` in order.
pub fn list_with(titles: &[&str]) -> TodoList {
    let mut list = TodoList::new();
    for title in titles {
        list.add_at(title, fixed_time()).unwrap();
    }
    list
}

/// Creates an empty running App.
pub fn test_app() -> App {
    App::new(TodoList::new())
}
