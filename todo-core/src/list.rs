//! The task collection.
//!
//! `TaskList` is the only stateful piece of the application. Insertion
//! order is display order, and every mutation goes through [`add`],
//! [`toggle`] or [`delete`]. None of them fail: blank input and unknown
//! ids are ignored, which callers observe through the `Option` returned.
//!
//! [`add`]: TaskList::add
//! [`toggle`]: TaskList::toggle
//! [`delete`]: TaskList::delete

use std::slice;

use crate::task::{Task, TaskId};

/// Ordered, in-memory collection of tasks.
#[derive(Debug, Clone)]
pub struct TaskList {
    tasks: Vec<Task>,
    /// Raw value of the next id to hand out.
    next_id: u64,
}

impl TaskList {
    /// Creates an empty task list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a new pending task.
    ///
    /// The text is stored exactly as given. Returns `None` without touching
    /// the list if `text` is empty or whitespace only.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        if text.trim().is_empty() {
            tracing::debug!("ignoring blank task text");
            return None;
        }

        let id = TaskId::from_raw(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task::new(id, text.to_string()));

        tracing::debug!(task = %id, "task added");
        Some(id)
    }

    /// Flips the `completed` flag of the task with the given id.
    ///
    /// Returns the new value, or `None` if no such task exists.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;

        tracing::debug!(task = %id, completed = task.completed, "task toggled");
        Some(task.completed)
    }

    /// Removes the task with the given id, keeping the order of the rest.
    ///
    /// Returns the removed task, or `None` if no such task exists.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let index = self.position(id)?;
        let task = self.tasks.remove(index);

        tracing::debug!(task = %id, "task deleted");
        Some(task)
    }

    /// Returns the task with the given id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Returns the display index of the task with the given id.
    #[must_use]
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Returns the task at a display index.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list has no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of completed tasks.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Number of tasks not yet completed.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    /// Iterates over tasks in display order.
    ///
    /// The iterator borrows the list and can be cloned to restart it.
    pub fn iter(&self) -> slice::Iter<'_, Task> {
        self.tasks.iter()
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
