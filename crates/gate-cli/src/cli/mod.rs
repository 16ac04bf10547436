//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use gate_core::users::UsersClient;
use gate_core::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "gate")]
#[command(version)]
#[command(about = "Sign in from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the user id looked up on submit
    #[arg(long, value_name = "ID", global = true)]
    user_id: Option<u64>,

    /// Override the user-lookup base URL
    #[arg(long, value_name = "URL", global = true)]
    base_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Look up a user without opening the form
    Fetch {
        /// User id to look up (defaults to --user-id, then config)
        #[arg(long, value_name = "ID")]
        id: Option<u64>,

        /// Print the full record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the config file path
    Path,
    /// Create a default config file
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        command,
        user_id,
        base_url,
    } = cli;

    // Config commands must work even when the existing file is broken.
    if let Some(Commands::Config { command }) = &command {
        return match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        };
    }

    let config = config::Config::load().context("load config")?;
    let _log_guard = logging::init(&config.log).context("init logging")?;

    let user_id = user_id.unwrap_or(config.user_id);
    let client = users_client(&config, base_url.as_deref())?;
    tracing::debug!(base_url = client.base_url(), user_id, "resolved user lookup");

    match command {
        None => commands::form::run(client, user_id),
        Some(Commands::Fetch { id, json }) => {
            commands::fetch::run(&client, id.unwrap_or(user_id), json).await
        }
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn users_client(config: &config::Config, base_url: Option<&str>) -> Result<UsersClient> {
    match base_url {
        Some(url) => UsersClient::new(url, &config.users),
        None => UsersClient::from_config(&config.users),
    }
    .context("create user-lookup client")
}
