//! Interactive login form.

use anyhow::{Context, Result};
use gate_core::users::UsersClient;

pub fn run(client: UsersClient, user_id: u64) -> Result<()> {
    let user = gate_tui::run_login_form(client, user_id).context("login form failed")?;

    // Printed after the TUI exits (terminal restored)
    match user {
        Some(user) => println!("Signed in as {}", user.name),
        None => println!("Goodbye!"),
    }
    Ok(())
}
