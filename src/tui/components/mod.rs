//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: banner with item count and data file
//! - `TodoTable`: the list, or an empty-state hint
//! - `Menu`: the single-letter command menu
//! - `NoticeBar`: outcome of the last command
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `Prompt`: single-line input for a title or a position
//!
//! Components receive external data as props, never by reaching into `App`,
//! so each one can be rendered against a `TestBackend` in isolation:
//!
//! ```rust,ignore
//! TodoTable::new(app.todos.list()).render(frame, table_area);
//! ```

pub mod menu;
pub mod notice_bar;
pub mod prompt;
pub mod title_bar;
pub mod todo_table;

pub use menu::Menu;
pub use notice_bar::NoticeBar;
pub use prompt::{Prompt, PromptEvent};
pub use title_bar::TitleBar;
pub use todo_table::TodoTable;
