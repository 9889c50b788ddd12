//! Task model and in-memory task collection for the todo list.
//!
//! This crate has no terminal dependencies. It owns the only state of the
//! application: an ordered list of tasks that can be added, toggled and
//! deleted.

pub mod display;
pub mod list;
pub mod task;

pub use display::{EMPTY_STATE_MESSAGE, INPUT_PLACEHOLDER, Marker, TaskStyle};
pub use list::TaskList;
pub use task::{Task, TaskId};
