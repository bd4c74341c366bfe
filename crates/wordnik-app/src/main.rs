use std::env;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordnik_config::{Settings, SettingsStore};
use wordnik_config::store::default_settings_path;

pub mod cli;
pub mod commands;
pub mod host;
pub mod prompt;

use self::cli::{Cli, Command};
use self::commands::config::handle_config;
use self::commands::lookup::{handle_note, handle_search};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    let settings_path = match cli.config {
        Some(path) => path,
        None => default_settings_path()?,
    };
    let mut store = SettingsStore::load(settings_path)?;

    match cli.command {
        Command::Note { path, print } => {
            let settings = store.settings().clone();
            handle_note(&with_env_overrides(settings), path, print).await
        }
        Command::Search { term, into } => {
            let settings = store.settings().clone();
            handle_search(&with_env_overrides(settings), term, into).await
        }
        Command::Config(command) => handle_config(&mut store, command),
    }
}

/// `WORDNIK_API_KEY` replaces the stored key for this run only
fn with_env_overrides(mut settings: Settings) -> Settings {
    if let Ok(api_key) = env::var("WORDNIK_API_KEY")
        && !api_key.is_empty()
    {
        tracing::debug!("Using api key from WORDNIK_API_KEY");
        settings.api_key = api_key;
    }

    if settings.api_key.is_empty() {
        tracing::warn!("No Wordnik api key configured");
    }

    settings
}

fn init_tracing(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
