//! # Menu Component
//!
//! The single-letter command menu shown while no prompt is open.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

/// (key, rest of the label) pairs, rendered as `[A]dd new todo`.
pub const MENU_ENTRIES: [(&str, &str); 4] = [
    ("A", "dd new todo"),
    ("D", "elete todo"),
    ("C", "omplete todo"),
    ("Q", "uit program"),
];

pub struct Menu;

impl Component for Menu {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(Color::Cyan);
        let mut spans = Vec::with_capacity(MENU_ENTRIES.len() * 3);
        for (i, (key, rest)) in MENU_ENTRIES.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(format!("[{key}]"), key_style));
            spans.push(Span::raw(*rest));
        }

        let block = Block::bordered()
            .title(" Main Menu ")
            .border_style(Style::default().fg(Color::Yellow));

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}
