//! # TitleBar Component
//!
//! The "TODO MANAGER 3000" banner at the top of the screen.
//!
//! Stateless: it receives the item count, capacity and data file as props and
//! renders them into a bordered block. The count sits in the top-right corner
//! so a full list is visible before pressing `A`. Until the first keypress the
//! top-left corner carries the startup splash.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

pub const APP_TITLE: &str = "TODO MANAGER 3000";
pub const SPLASH: &str = "Initializing Todo Manager... ✨✨✨";

/// Top banner showing the app name, fill level and backing file.
pub struct TitleBar {
    pub count: usize,
    pub capacity: usize,
    pub data_file: String,
    pub splash: bool,
}

impl TitleBar {
    pub fn new(count: usize, capacity: usize, data_file: String) -> Self {
        Self {
            count,
            capacity,
            data_file,
            splash: false,
        }
    }

    pub fn with_splash(mut self, splash: bool) -> Self {
        self.splash = splash;
        self
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let count_style = if self.count >= self.capacity {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan));
        if self.splash {
            block = block.title_top(
                Line::styled(format!(" {SPLASH} "), Style::default().fg(Color::Magenta))
                    .left_aligned(),
            );
        }
        let block = block
            .title_top(
                Line::styled(format!(" {}/{} ", self.count, self.capacity), count_style)
                    .right_aligned(),
            )
            .title_bottom(
                Line::styled(
                    format!(" {} ", self.data_file),
                    Style::default().fg(Color::DarkGray),
                )
                .left_aligned(),
            );

        let banner = Paragraph::new(APP_TITLE)
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(banner, area);
    }
}
