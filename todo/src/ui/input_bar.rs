//! Input row: the text field and the "Add" button.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use todo_core::INPUT_PLACEHOLDER;

use super::theme;
use crate::app::{App, Focus};

/// Label of the add button.
pub const ADD_LABEL: &str = "+ Add";

/// Render the input field and add button side by side.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(9)])
        .split(area);

    render_input(frame, chunks[0], app);
    render_button(frame, chunks[1], app);
}

/// Render the text field.
fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == Focus::Input;

    let input_line = if app.input.is_empty() {
        let mut spans = Vec::new();
        if is_focused {
            spans.push(Span::styled("█", theme::normal()));
        }
        spans.push(Span::styled(INPUT_PLACEHOLDER, theme::dimmed()));
        Line::from(spans)
    } else {
        Line::from(Span::styled(
            input_with_cursor(&app.input, app.cursor_position, is_focused),
            theme::normal(),
        ))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(is_focused));

    frame.render_widget(Paragraph::new(input_line).block(block), area);
}

/// Render the add button.
fn render_button(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == Focus::AddButton;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(is_focused));

    let button = Paragraph::new(Span::styled(ADD_LABEL, theme::button(is_focused)))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(button, area);
}

/// Input text with a block cursor inserted at a character index.
fn input_with_cursor(input: &str, cursor: usize, show_cursor: bool) -> String {
    if !show_cursor {
        return input.to_string();
    }
    let mut text = String::with_capacity(input.len() + '█'.len_utf8());
    let mut inserted = false;
    for (i, c) in input.chars().enumerate() {
        if i == cursor {
            text.push('█');
            inserted = true;
        }
        text.push(c);
    }
    if !inserted {
        text.push('█');
    }
    text
}
