//! Application state.
//!
//! ```text
//! AppState
//! ├── form: FormState      (fields, focus, loading, error, user)
//! ├── user_id: u64         (record fetched on submit)
//! ├── task_seq: TaskSeq    (async task id generator)
//! ├── last_lookup: Option<TaskId>
//! ├── tasks: Tasks         (task lifecycle state)
//! └── should_quit: bool
//! ```

use crate::common::{TaskId, TaskSeq, Tasks};
use crate::form::FormState;

/// Combined application state for the TUI.
#[derive(Debug)]
pub struct AppState {
    /// The login form.
    pub form: FormState,
    /// Id looked up when the form is submitted.
    pub user_id: u64,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Most recently submitted lookup.
    pub last_lookup: Option<TaskId>,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
    /// Flag indicating the app should quit.
    pub should_quit: bool,
}

impl AppState {
    pub fn new(user_id: u64) -> Self {
        Self {
            form: FormState::new(),
            user_id,
            task_seq: TaskSeq::default(),
            last_lookup: None,
            tasks: Tasks::default(),
            should_quit: false,
        }
    }
}
