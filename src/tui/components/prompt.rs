//! # Prompt Component
//!
//! Single-line input shown in place of the menu when a command needs an
//! argument: a title for `A`, a position for `D` and `C`.
//!
//! ## Responsibilities
//!
//! - Capture text input and paste (newlines collapse to spaces)
//! - Handle editing (backspace, delete, left/right, home/end)
//! - Emit `Submit` on Enter and `Cancel` on Esc
//!
//! Validation is not done here. An empty submit is passed through so the
//! core can report it like any other bad input.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::action::PromptKind;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the Prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Submit(String),
    Cancel,
    ContentChanged,
}

pub struct Prompt {
    pub kind: PromptKind,
    pub buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            buffer: String::new(),
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map_or(0, |(i, _)| i)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..].chars().next().map_or(pos, |c| pos + c.len_utf8())
}

impl Component for Prompt {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green))
            .title(format!(" {} ", self.kind.label()))
            .title_bottom(
                Line::styled(" Enter submit  Esc cancel ", Style::default().fg(Color::DarkGray))
                    .right_aligned(),
            );

        // Keep the cursor inside the box by scrolling horizontally
        let inner_width = area.width.saturating_sub(2).max(1) as usize;
        let before_cursor = self.buffer[..self.cursor].width();
        let offset = before_cursor.saturating_sub(inner_width - 1);

        let input = Paragraph::new(self.buffer.as_str())
            .style(Style::default().fg(Color::Green))
            .scroll((0, offset as u16))
            .block(block);
        frame.render_widget(input, area);

        let cursor_x = area.x + 1 + (before_cursor - offset) as u16;
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

impl EventHandler for Prompt {
    type Event = PromptEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut buf = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut buf));
                Some(PromptEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                let flattened: String = text
                    .chars()
                    .map(|c| if c.is_control() { ' ' } else { c })
                    .collect();
                self.insert_str(&flattened);
                Some(PromptEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                PromptEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                PromptEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                PromptEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                PromptEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                PromptEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                PromptEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                self.cursor = 0;
                Some(PromptEvent::Submit(std::mem::take(&mut self.buffer)))
            }
            TuiEvent::Escape => Some(PromptEvent::Cancel),
            _ => None,
        }
    }
}
