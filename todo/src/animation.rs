//! Decorative time-based transitions.
//!
//! Nothing here touches the task list. [`Animations`] only remembers when
//! things appeared or disappeared so the renderer can fade and slide them;
//! a deleted task is kept as an [`ExitingRow`] copy until its exit
//! transition finishes.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use todo_core::{Task, TaskId};

/// Duration of the header slide-in.
pub const HEADER_ENTRANCE: Duration = Duration::from_millis(800);

/// Duration of the card grow-in.
pub const CARD_ENTRANCE: Duration = Duration::from_millis(600);

/// Delay before the card grow-in starts.
pub const CARD_DELAY: Duration = Duration::from_millis(200);

/// Duration of a new row fading in.
pub const ROW_ENTER: Duration = Duration::from_millis(300);

/// Duration of a deleted row sliding out.
pub const ROW_EXIT: Duration = Duration::from_millis(300);

/// A single transition from 0.0 to 1.0 over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    start: Instant,
    delay: Duration,
    duration: Duration,
}

impl Transition {
    /// Creates a transition starting at `start`.
    #[must_use]
    pub const fn new(start: Instant, duration: Duration) -> Self {
        Self {
            start,
            delay: Duration::ZERO,
            duration,
        }
    }

    /// A transition that is already complete.
    #[must_use]
    pub const fn finished(start: Instant) -> Self {
        Self::new(start, Duration::ZERO)
    }

    /// Holds the transition at 0.0 for `delay` before it starts moving.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Linear progress in `[0.0, 1.0]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start);
        if elapsed < self.delay {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        let running = elapsed - self.delay;
        (running.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Progress passed through [`ease_out`].
    #[must_use]
    pub fn eased(&self, now: Instant) -> f32 {
        ease_out(self.progress(now))
    }

    /// Whether the transition has reached 1.0.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Cubic ease-out: fast start, slow finish.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    inv.mul_add(-(inv * inv), 1.0)
}

/// A deleted task still being drawn while it slides out.
#[derive(Debug, Clone)]
pub struct ExitingRow {
    /// Copy of the task as it was when deleted.
    pub task: Task,
    /// Display index the task had before deletion.
    pub index: usize,
    /// Exit transition.
    pub transition: Transition,
}

/// All running transitions of the UI.
#[derive(Debug, Clone)]
pub struct Animations {
    enabled: bool,
    header: Transition,
    card: Transition,
    entering: HashMap<TaskId, Transition>,
    exiting: Vec<ExitingRow>,
}

impl Animations {
    /// Starts the shell entrance at `now`.
    ///
    /// With `enabled == false` every transition is complete from the start
    /// and row transitions are never recorded.
    #[must_use]
    pub fn new(enabled: bool, now: Instant) -> Self {
        let (header, card) = if enabled {
            (
                Transition::new(now, HEADER_ENTRANCE),
                Transition::new(now, CARD_ENTRANCE).with_delay(CARD_DELAY),
            )
        } else {
            (Transition::finished(now), Transition::finished(now))
        };

        Self {
            enabled,
            header,
            card,
            entering: HashMap::new(),
            exiting: Vec::new(),
        }
    }

    /// Whether animations are enabled.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Header entrance transition.
    #[must_use]
    pub const fn header(&self) -> &Transition {
        &self.header
    }

    /// Card entrance transition.
    #[must_use]
    pub const fn card(&self) -> &Transition {
        &self.card
    }

    /// Records that a task row just appeared.
    pub fn task_added(&mut self, id: TaskId, now: Instant) {
        if self.enabled {
            self.entering.insert(id, Transition::new(now, ROW_ENTER));
        }
    }

    /// Records that a task was removed from display index `index`.
    pub fn task_deleted(&mut self, task: Task, index: usize, now: Instant) {
        self.entering.remove(&task.id);
        if self.enabled {
            self.exiting.push(ExitingRow {
                task,
                index,
                transition: Transition::new(now, ROW_EXIT),
            });
        }
    }

    /// Eased enter progress of a row; 1.0 once it has settled.
    #[must_use]
    pub fn enter_progress(&self, id: TaskId, now: Instant) -> f32 {
        self.entering.get(&id).map_or(1.0, |t| t.eased(now))
    }

    /// Rows still sliding out, in deletion order.
    #[must_use]
    pub fn exiting(&self) -> &[ExitingRow] {
        &self.exiting
    }

    /// Drops transitions that have finished.
    pub fn prune(&mut self, now: Instant) {
        self.entering.retain(|_, t| !t.is_finished(now));
        self.exiting.retain(|row| !row.transition.is_finished(now));
    }

    /// Whether nothing is moving anymore.
    #[must_use]
    pub fn is_idle(&self, now: Instant) -> bool {
        self.header.is_finished(now)
            && self.card.is_finished(now)
            && self.entering.is_empty()
            && self.exiting.is_empty()
    }
}
