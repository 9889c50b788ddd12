//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};
use todo_core::TaskStyle;

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::Rgb(235, 235, 235);

/// Muted foreground (completed tasks, placeholders, empty state).
pub const FG_MUTED: Color = Color::Rgb(136, 136, 136);

/// Accent color (focused borders, status dot, add button).
pub const ACCENT: Color = Color::Rgb(102, 126, 234);

/// Secondary accent, the add button background while it has focus.
pub const ACCENT_ALT: Color = Color::Rgb(118, 75, 162);

/// Unfocused border color.
pub const BORDER: Color = Color::Rgb(224, 224, 224);

/// Toggle-complete affordance color.
pub const SUCCESS: Color = Color::Rgb(81, 207, 102);

/// Delete affordance color.
pub const DANGER: Color = Color::Rgb(255, 107, 107);

/// Color animated elements fade in from.
pub const FADE_FROM: Color = Color::Rgb(30, 30, 50);

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (placeholders, hints).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_MUTED)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Border style for a control, accented when focused.
#[must_use]
pub fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(BORDER)
    }
}

/// Selected row style (list has focus).
#[must_use]
pub fn selected() -> Style {
    Style::default().bg(Color::Rgb(45, 50, 80))
}

/// Add button style.
#[must_use]
pub fn button(focused: bool) -> Style {
    let bg = if focused { ACCENT_ALT } else { ACCENT };
    Style::default()
        .fg(Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

/// Style for the text of a task row.
#[must_use]
pub fn task_text(style: TaskStyle) -> Style {
    let mut s = if style.dimmed { dimmed() } else { normal() };
    if style.struck_through {
        s = s.add_modifier(Modifier::CROSSED_OUT);
    }
    s
}

/// Style for the status bar background.
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}

/// Linear blend between two RGB colors; non-RGB colors snap at the midpoint.
#[must_use]
pub fn fade(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            Color::Rgb(lerp(r1, r2, t), lerp(g1, g2, t), lerp(b1, b2, t))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (f32::from(b) - f32::from(a))
        .mul_add(t, f32::from(a))
        .round()
        .clamp(0.0, 255.0) as u8
}
