//! Application state and event handling.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todo_core::{Task, TaskId, TaskList};

use crate::animation::Animations;
use crate::config::AppConfig;

/// Which control currently receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Text input is focused (default).
    Input,
    /// The "Add" button next to the input.
    AddButton,
    /// The task list.
    List,
}

/// Main application state.
pub struct App {
    /// The task collection.
    pub tasks: TaskList,
    /// Current text input.
    pub input: String,
    /// Cursor position in input (character index).
    pub cursor_position: usize,
    /// Which control is focused.
    pub focus: Focus,
    /// Selected row in the task list.
    pub selected: usize,
    /// Header text.
    pub title: String,
    /// Running UI transitions.
    pub animations: Animations,
    /// Trim whitespace from input before storing it.
    pub trim_input: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create an empty application with animations enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: TaskList::new(),
            input: String::new(),
            cursor_position: 0,
            focus: Focus::Input,
            selected: 0,
            title: AppConfig::default().title,
            animations: Animations::new(true, Instant::now()),
            trim_input: false,
            should_quit: false,
        }
    }

    /// Create an application from resolved configuration.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new()
            .with_title(config.title.clone())
            .with_animations(config.animations)
            .with_trim_input(config.trim_input)
    }

    /// Set the header text.
    #[must_use]
    pub fn with_title(mut self, title: String) -> Self {
        self.title = title;
        self
    }

    /// Enable or disable animations, restarting the shell entrance.
    #[must_use]
    pub fn with_animations(mut self, enabled: bool) -> Self {
        self.animations = Animations::new(enabled, Instant::now());
        self
    }

    /// Store input trimmed instead of as typed.
    #[must_use]
    pub fn with_trim_input(mut self, trim: bool) -> Self {
        self.trim_input = trim;
        self
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                tracing::info!("quit requested");
                self.should_quit = true;
                return;
            }
            (KeyCode::Tab, KeyModifiers::SHIFT) | (KeyCode::BackTab, _) => {
                self.cycle_focus_backward();
                return;
            }
            (KeyCode::Tab, _) => {
                self.cycle_focus_forward();
                return;
            }
            _ => {}
        }

        // Focus-specific shortcuts
        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::AddButton => self.handle_button_key(key),
            Focus::List => self.handle_list_key(key),
        }
    }

    /// Handle key event when input is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Char(c) => self.enter_char(c),
            KeyCode::Backspace => self.delete_char_before(),
            KeyCode::Delete => self.delete_char_at(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input.chars().count(),
            _ => {}
        }
    }

    /// Handle key event when the add button is focused.
    fn handle_button_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.submit();
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter | KeyCode::Char(' ' | 'x') => {
                self.toggle_selected();
            }
            KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => {
                self.delete_selected();
            }
            _ => {}
        }
    }

    /// Cycle focus forward: Input -> AddButton -> List -> Input.
    const fn cycle_focus_forward(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::AddButton,
            Focus::AddButton => Focus::List,
            Focus::List => Focus::Input,
        };
    }

    /// Cycle focus backward: Input -> List -> AddButton -> Input.
    const fn cycle_focus_backward(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::List,
            Focus::List => Focus::AddButton,
            Focus::AddButton => Focus::Input,
        };
    }

    /// Add the current input as a task.
    ///
    /// Blank input is ignored and left in place. On success the input is
    /// cleared and the new row starts fading in.
    pub fn submit(&mut self) -> Option<TaskId> {
        let text = if self.trim_input {
            self.input.trim()
        } else {
            self.input.as_str()
        };
        let id = self.tasks.add(text)?;

        self.input.clear();
        self.cursor_position = 0;
        self.animations.task_added(id, Instant::now());

        tracing::info!(task = %id, total = self.tasks.len(), "added task");
        Some(id)
    }

    /// Flip the completion flag of a task.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        self.tasks.toggle(id)
    }

    /// Delete a task, keeping a copy on screen while it slides out.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.position(id)?;
        let task = self.tasks.delete(id)?;

        self.animations.task_deleted(task.clone(), index, Instant::now());
        self.clamp_selection();

        tracing::info!(task = %id, total = self.tasks.len(), "deleted task");
        Some(task)
    }

    /// Id of the task under the list selection.
    #[must_use]
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.tasks.get_index(self.selected).map(|t| t.id)
    }

    /// Toggle the selected task.
    pub fn toggle_selected(&mut self) -> Option<bool> {
        let id = self.selected_task_id()?;
        self.toggle(id)
    }

    /// Delete the selected task.
    pub fn delete_selected(&mut self) -> Option<Task> {
        let id = self.selected_task_id()?;
        self.delete(id)
    }

    /// Drop finished transitions.
    pub fn tick(&mut self, now: Instant) {
        self.animations.prune(now);
    }

    /// Byte offset in `input` of the character at `cursor_position`.
    fn cursor_byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_position)
            .map_or(self.input.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor position.
    fn enter_char(&mut self, c: char) {
        let index = self.cursor_byte_index();
        self.input.insert(index, c);
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor.
    fn delete_char_before(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let index = self.cursor_byte_index();
            self.input.remove(index);
        }
    }

    /// Delete the character under the cursor.
    fn delete_char_at(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            let index = self.cursor_byte_index();
            self.input.remove(index);
        }
    }

    /// Move cursor left.
    const fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    /// Move cursor right.
    fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Select the previous task.
    const fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Select the next task.
    const fn select_next(&mut self) {
        if self.selected < self.tasks.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// Keep the selection on an existing row.
    const fn clamp_selection(&mut self) {
        let last = self.tasks.len().saturating_sub(1);
        if self.selected > last {
            self.selected = last;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
