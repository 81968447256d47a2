//! # Actions
//!
//! Everything that can happen in todoman becomes an `Action`.
//! User presses `d`? That's `Action::Command('d')`.
//! User types "3" into the delete prompt and hits Enter? That's
//! `Action::SubmitPosition { command: PositionCommand::Delete, input: "3" }`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` describing the I/O the caller must perform
//! (open a prompt, save, quit). No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::state::{App, Notice, RunState};
use crate::core::todo::TodoError;

/// Commands that take a 1-based position argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionCommand {
    Delete,
    Complete,
}

/// Which argument the controller needs to ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Title,
    Position(PositionCommand),
}

impl PromptKind {
    pub fn label(&self) -> &'static str {
        match self {
            PromptKind::Title => "Enter todo description",
            PromptKind::Position(PositionCommand::Delete) => "Enter todo ID to delete",
            PromptKind::Position(PositionCommand::Complete) => "Enter todo ID to mark complete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A single-letter menu command (case-insensitive).
    Command(char),
    SubmitTitle(String),
    SubmitPosition {
        command: PositionCommand,
        input: String,
    },
    CancelPrompt,
    SaveFailed(String),
    /// Leave immediately (Ctrl+C). Still saves on the way out.
    Quit,
}

/// Side effects requested by `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Prompt(PromptKind),
    Save,
    Quit,
}

/// Parses a position typed by the user. Range checks belong to the list.
pub fn parse_position(input: &str) -> Result<i64, TodoError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| TodoError::MalformedInput(trimmed.to_string()))
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Command(c) => match c.to_ascii_uppercase() {
            'A' => {
                if app.todos.is_full() {
                    let err = TodoError::CapacityExceeded {
                        capacity: app.todos.capacity(),
                    };
                    app.notice = Some(Notice::warning(err.to_string()));
                    Effect::None
                } else {
                    Effect::Prompt(PromptKind::Title)
                }
            }
            'D' => Effect::Prompt(PromptKind::Position(PositionCommand::Delete)),
            'C' => Effect::Prompt(PromptKind::Position(PositionCommand::Complete)),
            'Q' => quit(app),
            _ => {
                app.notice = Some(Notice::warning("Invalid choice! Please try again."));
                Effect::None
            }
        },
        Action::SubmitTitle(title) => match app.todos.add(&title) {
            Ok(_) => {
                app.notice = Some(Notice::info("Todo added successfully!"));
                Effect::Save
            }
            Err(e) => warn(app, e),
        },
        Action::SubmitPosition { command, input } => {
            let outcome = parse_position(&input).and_then(|position| match command {
                PositionCommand::Delete => app
                    .todos
                    .delete(position)
                    .map(|removed| format!("Todo \"{}\" deleted successfully!", removed.title)),
                PositionCommand::Complete => app
                    .todos
                    .complete(position)
                    .map(|_| "Todo marked as complete!".to_string()),
            });
            match outcome {
                Ok(message) => {
                    app.notice = Some(Notice::info(message));
                    Effect::Save
                }
                Err(e) => warn(app, e),
            }
        }
        Action::CancelPrompt => {
            app.notice = Some(Notice::info("Cancelled."));
            Effect::None
        }
        Action::SaveFailed(reason) => {
            app.notice = Some(Notice::warning(format!("Couldn't save todos: {reason}")));
            Effect::None
        }
        Action::Quit => quit(app),
    }
}

fn quit(app: &mut App) -> Effect {
    app.run_state = RunState::Exiting;
    Effect::Quit
}

fn warn(app: &mut App, err: TodoError) -> Effect {
    app.notice = Some(Notice::warning(err.to_string()));
    Effect::None
}
