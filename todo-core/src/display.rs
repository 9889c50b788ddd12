//! Display attributes derived from task state.
//!
//! Rendering code never stores styling on a task; it asks
//! [`TaskStyle::for_task`] each frame.

use crate::task::Task;

/// Message shown in place of the list when there are no tasks.
pub const EMPTY_STATE_MESSAGE: &str = "No todos yet. Add some tasks to get started!";

/// Placeholder shown in the empty input field.
pub const INPUT_PLACEHOLDER: &str = "Add a new task...";

/// Completion marker drawn in front of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Task is still open.
    Pending,
    /// Task has been completed.
    Done,
}

impl Marker {
    /// Get the display symbol for this marker.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Pending => "[ ]",
            Self::Done => "[\u{2713}]",
        }
    }
}

/// How a task row should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStyle {
    /// Draw the text with a line through it.
    pub struck_through: bool,
    /// Draw the text in a muted color.
    pub dimmed: bool,
    /// Completion marker.
    pub marker: Marker,
}

impl TaskStyle {
    /// Computes the display attributes of a task.
    #[must_use]
    pub const fn for_task(task: &Task) -> Self {
        if task.completed {
            Self {
                struck_through: true,
                dimmed: true,
                marker: Marker::Done,
            }
        } else {
            Self {
                struck_through: false,
                dimmed: false,
                marker: Marker::Pending,
            }
        }
    }
}
