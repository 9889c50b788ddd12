//! Task types.

/// Identifier of a task, unique within the [`TaskList`](crate::TaskList)
/// that issued it.
///
/// Ids are issued in strictly increasing order and are never reused, even
/// after the task they named has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a `TaskId` from a raw value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single todo entry.
///
/// `id` and `text` are fixed at creation; only `completed` changes, and
/// only through [`TaskList::toggle`](crate::TaskList::toggle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier.
    pub id: TaskId,
    /// Text as entered by the user.
    pub text: String,
    /// Whether the task has been marked done.
    pub completed: bool,
}

impl Task {
    /// Creates a pending task.
    #[must_use]
    pub const fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}
