//! Integration tests driving the app with key events and rendering it
//! into ratatui's `TestBackend`.
//!
//! # Verification Focus
//!
//! - Empty state message shown exactly when there are no tasks
//! - Adding, toggling and deleting through the keyboard
//! - Blank input ignored without clearing the field
//! - Completed tasks drawn crossed out and dimmed

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, style::Modifier};
use todo::app::{App, Focus};
use todo::ui::{self, task_panel, task_panel::RowKind, theme};
use todo_core::EMPTY_STATE_MESSAGE;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
}

fn add(app: &mut App, text: &str) {
    type_str(app, text);
    app.handle_key_event(key(KeyCode::Enter));
}

fn quiet_app() -> App {
    App::new().with_animations(false)
}

/// Render the app and return the screen as one string per row.
fn render(app: &App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal
        .draw(|frame| ui::draw(frame, app, Instant::now()))
        .unwrap();
    let buffer = terminal.backend().buffer();
    let width = usize::from(buffer.area.width);
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect())
        .collect()
}

fn screen_contains(screen: &[String], needle: &str) -> bool {
    screen.iter().any(|row| row.contains(needle))
}

// =============================================================================
// Scenario D: empty collection shows the empty-state message
// =============================================================================

#[test]
fn test_empty_list_shows_message() {
    let app = quiet_app();
    let screen = render(&app);
    assert!(screen_contains(&screen, EMPTY_STATE_MESSAGE));
    assert!(screen_contains(&screen, "Todo List"));
    assert!(screen_contains(&screen, "Add a new task..."));
    assert!(screen_contains(&screen, "+ Add"));
}

// =============================================================================
// Scenario A: adding a task hides the empty state
// =============================================================================

#[test]
fn test_add_task_hides_empty_state() {
    let mut app = quiet_app();
    add(&mut app, "Buy milk");

    let tasks: Vec<_> = app.tasks.iter().collect();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].text, "Buy milk");
    assert!(!tasks[0].completed);
    assert!(app.input.is_empty(), "input should be cleared after add");

    let screen = render(&app);
    assert!(screen_contains(&screen, "[ ] Buy milk"));
    assert!(!screen_contains(&screen, EMPTY_STATE_MESSAGE));
    assert!(screen_contains(&screen, "1 pending, 0 done"));
}

#[test]
fn test_blank_input_is_ignored() {
    let mut app = quiet_app();
    add(&mut app, "   ");

    assert!(app.tasks.is_empty());
    assert_eq!(app.input, "   ", "blank input should stay in the field");
    assert!(screen_contains(&render(&app), EMPTY_STATE_MESSAGE));
}

// =============================================================================
// Scenario B: toggle flips only the selected task
// =============================================================================

#[test]
fn test_toggle_first_task() {
    let mut app = quiet_app();
    add(&mut app, "A");
    add(&mut app, "B");

    app.handle_key_event(key(KeyCode::BackTab));
    assert_eq!(app.focus, Focus::List);
    app.handle_key_event(key(KeyCode::Enter));

    let done: Vec<bool> = app.tasks.iter().map(|t| t.completed).collect();
    assert_eq!(done, [true, false]);

    let screen = render(&app);
    assert!(screen_contains(&screen, "[\u{2713}] A"));
    assert!(screen_contains(&screen, "[ ] B"));
    assert!(screen_contains(&screen, "1 pending, 1 done"));
}

#[test]
fn test_completed_text_is_crossed_out() {
    let mut app = quiet_app();
    add(&mut app, "Laundry");
    let id = app.tasks.iter().next().unwrap().id;
    app.toggle(id);

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal
        .draw(|frame| ui::draw(frame, &app, Instant::now()))
        .unwrap();
    let buffer = terminal.backend().buffer();

    let completed: Vec<_> = buffer
        .content
        .iter()
        .filter(|cell| cell.symbol() == "L")
        .filter(|cell| cell.modifier.contains(Modifier::CROSSED_OUT))
        .collect();
    assert!(
        !completed.is_empty(),
        "completed task text should be crossed out"
    );
    assert!(
        completed.iter().all(|cell| cell.fg == theme::FG_MUTED),
        "completed task text should be dimmed"
    );
}

// =============================================================================
// Scenario C: delete removes exactly one task and keeps order
// =============================================================================

#[test]
fn test_delete_first_task() {
    let mut app = quiet_app();
    add(&mut app, "First");
    add(&mut app, "Second");
    let first = app.tasks.iter().next().unwrap().id;

    app.delete(first);

    let texts: Vec<&str> = app.tasks.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["Second"]);
    let screen = render(&app);
    assert!(!screen_contains(&screen, "First"));
    assert!(screen_contains(&screen, "Second"));
}

#[test]
fn test_deleting_last_task_restores_empty_state() {
    let mut app = quiet_app();
    add(&mut app, "Only");
    app.handle_key_event(key(KeyCode::BackTab));
    app.handle_key_event(key(KeyCode::Char('d')));

    assert!(app.tasks.is_empty());
    assert!(screen_contains(&render(&app), EMPTY_STATE_MESSAGE));
}

// =============================================================================
// Animations are decorative only
// =============================================================================

#[test]
fn test_exiting_row_kept_until_pruned() {
    let mut app = App::new();
    add(&mut app, "Fading");
    let id = app.tasks.iter().next().unwrap().id;
    app.delete(id);
    assert!(app.tasks.is_empty(), "delete is immediate in the collection");

    let now = Instant::now();
    let (rows, selected) = task_panel::build_rows(&app, now);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].task.text, "Fading");
    assert!(matches!(rows[0].kind, RowKind::Exiting { .. }));
    assert!(selected.is_none());

    app.tick(now + Duration::from_secs(2));
    assert!(app.animations.exiting().is_empty());
    assert!(task_panel::build_rows(&app, now).0.is_empty());
}

#[test]
fn test_deleted_row_keeps_its_slot() {
    let mut app = App::new();
    add(&mut app, "A");
    add(&mut app, "B");
    let a = app.tasks.iter().next().unwrap().id;
    app.delete(a);

    let (rows, _) = task_panel::build_rows(&app, Instant::now());
    let kinds: Vec<bool> = rows
        .iter()
        .map(|row| matches!(row.kind, RowKind::Exiting { .. }))
        .collect();
    assert_eq!(kinds, [true, false], "deleted row stays in its old slot");
}

#[test]
fn test_custom_title_is_rendered() {
    let app = quiet_app().with_title("Pranav's Todo List".to_string());
    assert!(screen_contains(&render(&app), "Pranav's Todo List"));
}
