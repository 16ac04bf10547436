//! One-shot user lookup.

use anyhow::{Context, Result};
use gate_core::users::UsersClient;

pub async fn run(client: &UsersClient, id: u64, json: bool) -> Result<()> {
    let user = client
        .fetch_user(id)
        .await
        .with_context(|| format!("fetch user {id}"))?;

    if json {
        let out = serde_json::to_string_pretty(&user).context("serialize user")?;
        println!("{out}");
    } else {
        println!("{}", user.name);
    }
    Ok(())
}
