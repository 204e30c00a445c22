//! Colors and block styling for the dashboard

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;
use sysview_core::Level;

pub const BORDER: Color = Color::Green;
pub const TITLE: Color = Color::Cyan;
pub const LABEL: Color = Color::Cyan;
pub const VALUE: Color = Color::LightGreen;
pub const BAR: Color = Color::Yellow;
pub const BANNER: Color = Color::Green;
pub const FOOTER: Color = Color::LightGreen;
pub const ERROR: Color = Color::Red;

/// Gauge color for a level
pub fn level_color(level: Level) -> Color {
    match level {
        Level::Normal => Color::Green,
        Level::Warning => Color::Yellow,
        Level::Critical => Color::Red,
    }
}

/// Process rows stay neutral until they cross a threshold
pub fn process_level_color(level: Level) -> Color {
    match level {
        Level::Normal => Color::White,
        other => level_color(other),
    }
}

/// Green bordered panel with a bold cyan title
pub fn panel(title: &str) -> Block<'static> {
    Block::bordered()
        .border_style(Style::new().fg(BORDER))
        .title(Line::from(Span::styled(
            title.to_string(),
            Style::new().fg(TITLE).add_modifier(Modifier::BOLD),
        )))
}
