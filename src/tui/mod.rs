//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop
//!
//! ```text
//! load → [ draw → wait for one event → update() → perform Effect ]* → save → restore
//! ```
//!
//! The loop blocks on input and redraws after every event; there is nothing
//! to animate. It runs while `App::run_state` is `Running`.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::{self, stdout};

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, PromptKind, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Notice};
use crate::core::store::Store;
use crate::core::todo::TodoList;
use crate::tui::component::EventHandler;
use crate::tui::components::{Prompt, PromptEvent};
use crate::tui::event::{TuiEvent, next_event};

/// Printed after the terminal is restored on a normal quit.
pub const FAREWELL: &str = "Goodbye! Your todos are saved.";

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Open argument prompt (None = menu mode)
    pub prompt: Option<Prompt>,
    /// Data file path as shown in the title bar
    pub data_file: String,
    /// Startup splash in the title bar, cleared by the first keypress
    pub show_splash: bool,
}

impl TuiState {
    pub fn new(data_file: String) -> Self {
        Self {
            prompt: None,
            data_file,
            show_splash: true,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> Self {
        // Bracketed paste keeps a pasted title from arriving as a burst of menu commands
        if let Err(e) = execute!(stdout(), EnableBracketedPaste, SetCursorStyle::SteadyBlock) {
            warn!("Failed to enable terminal modes: {}", e);
        } else {
            info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        }
        Self
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

/// Load the list, building the starting `App`. A failed load starts empty.
pub fn load_app(store: &Store, capacity: usize) -> App {
    match store.load(capacity) {
        Ok((todos, outcome)) => App::from_load(todos, outcome),
        Err(e) => {
            warn!("Failed to load todos from {}: {}", store.path().display(), e);
            let mut app = App::new(TodoList::with_capacity(capacity));
            app.notice = Some(Notice::warning(format!(
                "Couldn't read {}: {e}. Starting with an empty list.",
                store.path().display()
            )));
            app
        }
    }
}

pub fn run(config: &ResolvedConfig) -> io::Result<()> {
    let store = Store::new(config.data_file.clone());
    let mut app = load_app(&store, config.max_todos);
    let mut tui = TuiState::new(config.data_file.display().to_string());

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();

    let mut result = Ok(());
    while app.is_running() {
        if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)) {
            result = Err(e);
            break;
        }
        match next_event() {
            Ok(event) => handle_event(&mut app, &mut tui, &store, event),
            Err(e) => {
                result = Err(e);
                break;
            }
        }
    }

    // Save once more on the way out, whatever ended the loop
    let saved = store.save(&app.todos);

    drop(terminal_mode_guard);
    ratatui::restore();

    match saved {
        Ok(()) => {
            info!("Exiting with {} todos saved", app.todos.len());
            println!("{FAREWELL}");
        }
        Err(e) => {
            warn!("Final save failed: {}", e);
            eprintln!("Couldn't save todos to {}: {e}", store.path().display());
        }
    }
    result
}

/// Route one terminal event: to the open prompt if any, else to the menu.
pub fn handle_event(app: &mut App, tui: &mut TuiState, store: &Store, event: TuiEvent) {
    match event {
        TuiEvent::Resize => {}
        TuiEvent::ForceQuit => dispatch(app, tui, store, Action::Quit),
        event => {
            tui.show_splash = false;
            if let Some(prompt) = tui.prompt.as_mut() {
                let kind = prompt.kind;
                let action = match prompt.handle_event(&event) {
                    Some(PromptEvent::Submit(text)) => Some(submit_action(kind, text)),
                    Some(PromptEvent::Cancel) => Some(Action::CancelPrompt),
                    Some(PromptEvent::ContentChanged) | None => None,
                };
                if let Some(action) = action {
                    tui.prompt = None;
                    dispatch(app, tui, store, action);
                }
            } else if let TuiEvent::InputChar(c) = event {
                dispatch(app, tui, store, Action::Command(c));
            }
        }
    }
}

fn submit_action(kind: PromptKind, text: String) -> Action {
    match kind {
        PromptKind::Title => Action::SubmitTitle(text),
        PromptKind::Position(command) => Action::SubmitPosition {
            command,
            input: text,
        },
    }
}

/// Run `update` and perform the effect it asks for.
fn dispatch(app: &mut App, tui: &mut TuiState, store: &Store, action: Action) {
    match update(app, action) {
        Effect::Prompt(kind) => tui.prompt = Some(Prompt::new(kind)),
        Effect::Save => {
            if let Err(e) = store.save(&app.todos) {
                warn!("Failed to save todos: {}", e);
                update(app, Action::SaveFailed(e.to_string()));
            }
        }
        Effect::Quit => debug!("Quit requested"),
        Effect::None => {}
    }
}
