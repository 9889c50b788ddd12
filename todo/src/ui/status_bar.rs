//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, Focus};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = match app.focus {
        Focus::Input => "Enter: add | Tab: switch | Esc: quit | ←→: move cursor",
        Focus::AddButton => "Enter/Space: add | Tab: switch | Esc: quit",
        Focus::List => "↑↓/jk: select | Enter/x: toggle | d: delete | Tab: switch | Esc: quit",
    };

    let status_line = Line::from(vec![
        Span::styled(concat!("Todo v", env!("CARGO_PKG_VERSION")), theme::bold()),
        Span::raw(" | "),
        Span::styled("●", theme::normal().fg(theme::ACCENT)),
        Span::raw(format!(
            " {} pending, {} done",
            app.tasks.pending_count(),
            app.tasks.completed_count()
        )),
        Span::raw(" | "),
        Span::styled(help_text, theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
