//! Task list rendering.
//!
//! Live tasks come from the [`TaskList`](todo_core::TaskList); rows that
//! are sliding out come from [`Animations::exiting`] and are slotted back
//! in at the index they were deleted from.
//!
//! [`Animations::exiting`]: crate::animation::Animations::exiting

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};
use todo_core::{EMPTY_STATE_MESSAGE, Task, TaskStyle};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme;
use crate::animation::ExitingRow;
use crate::app::{App, Focus};

/// Toggle and delete affordances drawn at the right edge of a row.
const TOGGLE_AFFORDANCE: &str = " \u{2713} ";
const DELETE_AFFORDANCE: &str = " \u{2717} ";

/// Columns an exiting row travels left before it disappears.
const EXIT_SLIDE: f32 = 8.0;

/// One row as it should be drawn this frame.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    /// Task shown in the row.
    pub task: &'a Task,
    /// Whether the row is live or sliding out.
    pub kind: RowKind,
}

/// Animation state of a row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowKind {
    /// Task is in the list; `enter` is its fade-in progress.
    Live {
        /// Eased enter progress, 1.0 once settled.
        enter: f32,
    },
    /// Task was deleted; `exit` is its slide-out progress.
    Exiting {
        /// Eased exit progress.
        exit: f32,
    },
}

/// Render the task rows, or the empty-state message when there are no
/// tasks.
pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let (rows, selected_row) = build_rows(app, now);
    let width = area.width;

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(row_line(row, width)))
        .collect();
    let row_count = u16::try_from(items.len()).unwrap_or(u16::MAX);

    if app.tasks.is_empty() {
        let list_area = Rect {
            height: row_count.min(area.height),
            ..area
        };
        frame.render_widget(List::new(items), list_area);

        let message_y = area.y.saturating_add(row_count).saturating_add(1);
        if message_y < area.bottom() {
            let message = Paragraph::new(Span::styled(EMPTY_STATE_MESSAGE, theme::dimmed()))
                .alignment(Alignment::Center);
            frame.render_widget(message, Rect::new(area.x, message_y, area.width, 1));
        }
        return;
    }

    let mut state = ListState::default();
    if app.focus == Focus::List {
        state.select(selected_row);
    }
    let list = List::new(items).highlight_style(theme::selected());
    frame.render_stateful_widget(list, area, &mut state);
}

/// Merge live tasks with exiting rows, returning the rows in display order
/// and the row index of the selected task.
#[must_use]
pub fn build_rows(app: &App, now: Instant) -> (Vec<RowView<'_>>, Option<usize>) {
    let mut exiting: Vec<_> = app.animations.exiting().iter().collect();
    exiting.sort_by_key(|row| row.index);
    let mut exiting = exiting.into_iter().peekable();

    let mut rows = Vec::with_capacity(app.tasks.len() + exiting.len());
    let mut selected_row = None;

    for (index, task) in app.tasks.iter().enumerate() {
        while let Some(row) = exiting.next_if(|row| row.index <= index) {
            rows.push(exiting_row(row, now));
        }
        if index == app.selected {
            selected_row = Some(rows.len());
        }
        rows.push(RowView {
            task,
            kind: RowKind::Live {
                enter: app.animations.enter_progress(task.id, now),
            },
        });
    }
    rows.extend(exiting.map(|row| exiting_row(row, now)));

    (rows, selected_row)
}

fn exiting_row(row: &ExitingRow, now: Instant) -> RowView<'_> {
    RowView {
        task: &row.task,
        kind: RowKind::Exiting {
            exit: row.transition.eased(now),
        },
    }
}

/// Build the line for one row, `width` columns wide.
#[must_use]
pub fn row_line(row: &RowView<'_>, width: u16) -> Line<'static> {
    let style = TaskStyle::for_task(row.task);
    match row.kind {
        RowKind::Live { enter } => live_line(row.task, style, enter, width),
        RowKind::Exiting { exit } => exiting_line(row.task, style, exit),
    }
}

fn live_line(task: &Task, style: TaskStyle, enter: f32, width: u16) -> Line<'static> {
    let mut text_style = theme::task_text(style);
    let mut marker_style = if style.struck_through {
        theme::normal().fg(theme::SUCCESS)
    } else {
        theme::dimmed()
    };
    if enter < 1.0 {
        let target = if style.dimmed {
            theme::FG_MUTED
        } else {
            theme::FG_PRIMARY
        };
        text_style = text_style.fg(theme::fade(theme::FADE_FROM, target, enter));
        marker_style = marker_style.fg(theme::fade(theme::FADE_FROM, theme::FG_MUTED, enter));
    }

    let marker = style.marker.symbol();
    let fixed = marker.width() + 1 + TOGGLE_AFFORDANCE.width() + DELETE_AFFORDANCE.width() + 1;
    let available = usize::from(width).saturating_sub(fixed);
    let text = truncate(&task.text, available);
    let pad = available.saturating_sub(text.width());

    Line::from(vec![
        Span::styled(marker, marker_style),
        Span::raw(" "),
        Span::styled(text, text_style),
        Span::raw(" ".repeat(pad + 1)),
        Span::styled(TOGGLE_AFFORDANCE, theme::normal().fg(theme::SUCCESS)),
        Span::styled(DELETE_AFFORDANCE, theme::normal().fg(theme::DANGER)),
    ])
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn exiting_line(task: &Task, style: TaskStyle, exit: f32) -> Line<'static> {
    let from = if style.dimmed {
        theme::FG_MUTED
    } else {
        theme::FG_PRIMARY
    };
    let faded = theme::task_text(style).fg(theme::fade(from, theme::FADE_FROM, exit));
    let shift = (exit.clamp(0.0, 1.0) * EXIT_SLIDE) as usize;

    let content: String = format!("{} {}", style.marker.symbol(), task.text)
        .chars()
        .skip(shift)
        .collect();
    Line::from(Span::styled(content, faded))
}

/// Cut `text` to at most `max` display columns, ending in an ellipsis when
/// cut.
fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let budget = max - 1;
    let mut used = 0;
    let mut cut = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        cut.push(c);
    }
    cut.push('…');
    cut
}
