use rmdex::config::Config;
use rmdex::{logging, tui};

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser};

/// Browse the Rick and Morty character catalog from your terminal.
#[derive(Parser, Debug)]
#[command(name = "rmdex", version, about)]
struct Cli {
    /// API root, e.g. https://rickandmortyapi.com/api
    #[arg(long)]
    base_url: Option<String>,

    /// Accept any TLS certificate (self-hosted mirrors only)
    #[arg(long)]
    insecure: bool,

    /// Episode requests in flight per character (1 = one at a time)
    #[arg(long, value_name = "N")]
    episode_concurrency: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = Config::get_path_string()
        .unwrap_or_else(|_| "[Could not determine config path]".to_string());
    let matches = Cli::command()
        .after_help(format!(
            "Configuration File: {}\n\nConfig Options:\n  base_url = \"https://...\"\n  allow_insecure_certs = false\n  episode_concurrency = 1\n  request_timeout_secs = 30",
            config_path
        ))
        .get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    let logging = logging::init();

    let mut config = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Could not read config file: {:#}", e);
            eprintln!("Please fix or remove:");
            eprintln!("  {}", config_path);
            return Ok(());
        }
    };
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }
    if cli.insecure {
        config.allow_insecure_certs = true;
    }
    if let Some(n) = cli.episode_concurrency {
        config.episode_concurrency = n;
    }
    log::info!(
        "Starting with base_url={} episode_concurrency={}",
        config.base_url,
        config.effective_concurrency()
    );

    tui::run(config).await?;

    if let Some(guard) = &logging {
        log::info!("Bye. Logs are in {}", guard.log_dir().display());
    }
    Ok(())
}
