//! Terminal UI rendering.
//!
//! [`draw`] is the root shell: the title header, a centered card holding
//! the input row and task list, and the status bar.

pub mod header;
pub mod input_bar;
pub mod status_bar;
pub mod task_panel;
pub mod theme;

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    widgets::{Block, BorderType, Borders},
};

use crate::app::App;

/// Widest the card gets, in columns.
pub const CARD_MAX_WIDTH: u16 = 60;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Card
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    header::render(frame, main_chunks[0], app, now);
    render_card(frame, main_chunks[1], app, now);
    status_bar::render(frame, main_chunks[2], app);
}

/// Render the card container and its contents.
fn render_card(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let transition = app.animations.card();
    if transition.progress(now) <= 0.0 {
        // Still waiting for the entrance delay.
        return;
    }
    let progress = transition.eased(now);
    let card = card_rect(area, progress);

    let border_style = if progress < 1.0 {
        theme::normal().fg(theme::fade(theme::FADE_FROM, theme::BORDER, progress))
    } else {
        theme::border(false)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let inner = block.inner(card).inner(Margin {
        horizontal: 1,
        vertical: 0,
    });
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    input_bar::render(frame, chunks[0], app);
    task_panel::render(frame, chunks[1], app, now);
}

/// Card rectangle centered in `area`, scaled from 90 % to full size as
/// `progress` goes from 0.0 to 1.0.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn card_rect(area: Rect, progress: f32) -> Rect {
    let scale = 0.1f32.mul_add(progress.clamp(0.0, 1.0), 0.9);
    let full_width = area.width.min(CARD_MAX_WIDTH);
    let width = (f32::from(full_width) * scale).round() as u16;
    let height = (f32::from(area.height) * scale).round() as u16;

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
