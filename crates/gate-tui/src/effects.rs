//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations), so the
//! reducer never performs I/O itself.
//!
//! Cancellation is decided by the reducer via `UiEffect::CancelTask`; the
//! runtime calls `token.cancel()` on the provided token.

use tokio_util::sync::CancellationToken;

use crate::common::{TaskId, TaskKind};

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Look up a user by id.
    FetchUser { task: Option<TaskId>, id: u64 },

    /// Cancel an in-progress task.
    CancelTask {
        kind: TaskKind,
        token: Option<CancellationToken>,
    },
}
