//! UI event types.
//!
//! All external inputs (terminal, async results) are converted to `UiEvent`
//! before being processed by the reducer.

use crossterm::event::Event as CrosstermEvent;
use gate_core::users::User;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

/// Unified event enum for the TUI.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (drives redraws and the spinner).
    Tick,

    /// Terminal input event (key, paste, resize).
    Terminal(CrosstermEvent),

    /// An async task was spawned.
    TaskStarted { kind: TaskKind, started: TaskStarted },

    /// An async task finished; `result` is the event it produced.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    /// User lookup finished (Err = formatted error chain).
    UserLoaded(Result<User, String>),

    /// User lookup stopped by its cancellation token.
    LookupCancelled,
}
