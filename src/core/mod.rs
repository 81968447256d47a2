//! # Core Application Logic
//!
//! This module contains todoman's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • TodoList (model)     │
//!                    │  • App (state)          │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │   Store    │
//!           │  Adapter   │              │ (todos.dat)│
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`todo`]: `TodoList` and `TodoRecord`, the capacity-bounded model
//! - [`store`]: the fixed-width file codec
//! - [`state`]: the `App` struct
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: config file and CLI resolution

pub mod action;
pub mod config;
pub mod state;
pub mod store;
pub mod todo;
