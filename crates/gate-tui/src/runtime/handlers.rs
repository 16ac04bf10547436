//! Effect handlers.
//!
//! Pure async functions that perform I/O and return the `UiEvent` describing
//! the outcome. They never touch state; the runtime spawns them and routes
//! the result through the inbox.

use gate_core::users::UsersClient;
use tokio_util::sync::CancellationToken;

use crate::events::UiEvent;

/// Looks up a user, stopping early if `cancel` fires.
pub async fn fetch_user(
    client: UsersClient,
    id: u64,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    let lookup = client.fetch_user(id);
    let result = match cancel {
        Some(token) => {
            tokio::select! {
                biased;
                () = token.cancelled() => return UiEvent::LookupCancelled,
                result = lookup => result,
            }
        }
        None => lookup.await,
    };
    UiEvent::UserLoaded(result.map_err(|e| format!("{e:#}")))
}
