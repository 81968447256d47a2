//! # TodoTable Component
//!
//! Renders the list as a bordered table: `ID | Description | Created | Status`.
//!
//! IDs are 1-based display positions. Pending rows get a bold title and a red
//! `PENDING`; completed rows get a dimmed, crossed-out title and a green `DONE`.
//! An empty list renders a hint instead of an empty table.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table};

use crate::core::todo::TodoRecord;
use crate::tui::component::Component;

pub const EMPTY_MESSAGE: &str = "No todos found! Add some todos to get started.";

pub struct TodoTable<'a> {
    pub records: &'a [TodoRecord],
}

impl<'a> TodoTable<'a> {
    pub fn new(records: &'a [TodoRecord]) -> Self {
        Self { records }
    }
}

fn status_cell(completed: bool) -> Cell<'static> {
    if completed {
        Cell::from(Span::styled("DONE", Style::default().fg(Color::Green)))
    } else {
        Cell::from(Span::styled("PENDING", Style::default().fg(Color::Red)))
    }
}

fn title_style(completed: bool) -> Style {
    if completed {
        Style::default().add_modifier(Modifier::CROSSED_OUT | Modifier::DIM)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

impl Component for TodoTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Todo List ")
            .border_style(Style::default().fg(Color::Cyan));

        if self.records.is_empty() {
            let empty = Paragraph::new(Line::from(EMPTY_MESSAGE))
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let header = Row::new(["ID", "Description", "Created", "Status"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let rows = self.records.iter().enumerate().map(|(index, record)| {
            Row::new([
                Cell::from(Span::styled(
                    format!("{:>3}", index + 1),
                    Style::default().fg(Color::Yellow),
                )),
                Cell::from(Span::styled(
                    record.title.as_str(),
                    title_style(record.completed),
                )),
                Cell::from(record.created_at.as_str()),
                status_cell(record.completed),
            ])
        });

        let widths = [
            Constraint::Length(4),
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(8),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(2)
            .block(block);

        frame.render_widget(table, area);
    }
}
