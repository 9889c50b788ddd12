//! Title header.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Modifier,
    widgets::Paragraph,
};

use super::theme;
use crate::app::App;

/// Render the title, dropping into place and fading in during the shell
/// entrance.
pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    if area.height == 0 {
        return;
    }

    let progress = app.animations.header().eased(now);
    let resting_row = area.y + area.height / 2;
    let row = if progress < 0.5 {
        resting_row.saturating_sub(1).max(area.y)
    } else {
        resting_row
    };

    let style = theme::normal()
        .fg(theme::fade(theme::FADE_FROM, theme::FG_PRIMARY, progress))
        .add_modifier(Modifier::BOLD);

    let title = Paragraph::new(app.title.as_str())
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(title, Rect::new(area.x, row, area.width, 1));
}
