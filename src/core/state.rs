//! # Application State
//!
//! Core business state for todoman. Domain data only; presentation state
//! (prompt buffer, input mode) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── todos: TodoList          // the one list, owned here
//! ├── run_state: RunState      // Running until a quit is dispatched
//! └── notice: Option<Notice>   // outcome of the last command
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::store::LoadOutcome;
use crate::core::todo::TodoList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Exiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// A one-line message shown under the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            text: text.into(),
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub todos: TodoList,
    pub run_state: RunState,
    pub notice: Option<Notice>,
}

impl App {
    pub fn new(todos: TodoList) -> Self {
        Self {
            todos,
            run_state: RunState::Running,
            notice: None,
        }
    }

    /// Builds the app from a store load, greeting the user accordingly.
    pub fn from_load(todos: TodoList, outcome: LoadOutcome) -> Self {
        let notice = match outcome {
            LoadOutcome::Missing => Notice::info("No existing todos found. Let's start fresh!"),
            LoadOutcome::Loaded { loaded: 1 } => Notice::info("Loaded 1 existing todo."),
            LoadOutcome::Loaded { loaded } => Notice::info(format!("Loaded {loaded} existing todos.")),
        };
        Self {
            notice: Some(notice),
            ..Self::new(todos)
        }
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }
}
