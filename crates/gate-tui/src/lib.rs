//! Full-screen login form for Gate.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

#[cfg(test)]
mod testing;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
pub use features::form;
use gate_core::users::{User, UsersClient};
pub use runtime::TuiRuntime;

/// Runs the interactive login form and returns the user fetched, if any.
///
/// Must be called from inside a tokio runtime.
///
/// # Errors
/// Returns an error if stdout is not a terminal or the terminal fails.
pub fn run_login_form(client: UsersClient, user_id: u64) -> Result<Option<User>> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The login form requires a terminal.\n\
             Use `gate fetch` for non-interactive lookups."
        );
    }

    let mut runtime = TuiRuntime::new(client, user_id)?;
    runtime.run()?;
    Ok(runtime.state.form.user.take())
}
