//! # NoticeBar Component
//!
//! One line under the menu showing the outcome of the last command.
//! Info notices are green, warnings red. Renders nothing without a notice.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::{Notice, NoticeLevel};
use crate::tui::component::Component;

pub struct NoticeBar<'a> {
    pub notice: Option<&'a Notice>,
}

impl<'a> NoticeBar<'a> {
    pub fn new(notice: Option<&'a Notice>) -> Self {
        Self { notice }
    }
}

impl Component for NoticeBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(notice) = self.notice else {
            return;
        };
        let (marker, color) = match notice.level {
            NoticeLevel::Info => ("✔", Color::Green),
            NoticeLevel::Warning => ("⚠", Color::Red),
        };
        frame.render_widget(
            Span::styled(format!(" {marker} {}", notice.text), Style::default().fg(color)),
            area,
        );
    }
}
