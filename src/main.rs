use std::path::PathBuf;
use std::sync::Arc;

use eyre::Result;
use log::{debug, info};

mod cli;

use cli::Cli;
use ytapi::DEFAULT_LANGUAGES;
use ytapi::server::AppState;
use ytapi::youtube::YoutubeGateway;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytapi.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytapi")
        .join("logs")
}

fn build_after_help() -> String {
    format!(
        "\nConfig is read from: {}\nLogs are written to: {}",
        ytapi::config::config_path().display(),
        log_dir().join("ytapi.log").display()
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let cmd = <Cli as clap::CommandFactory>::command().after_help(build_after_help());
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Load config file (non-fatal if missing/invalid)
    let config = ytapi::config::Config::load().unwrap_or_else(|e| {
        eprintln!("Ignoring config file: {e}");
        ytapi::config::Config::default()
    });

    // CLI flags take priority over config
    let host = cli.host.or(config.host).unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = cli.port.or(config.port).unwrap_or(DEFAULT_PORT);
    let default_languages = if !cli.langs.is_empty() {
        cli.langs
    } else {
        config
            .default_langs
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect())
    };

    if cli.verbose {
        let config_path = ytapi::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
        eprintln!("Default languages: {}", default_languages.join(", "));
    }
    debug!("Effective settings: host={host} port={port} default_languages={default_languages:?}");

    let state = Arc::new(AppState {
        gateway: Arc::new(YoutubeGateway::new(reqwest::Client::new())),
        default_languages,
    });

    ytapi::server::run(&format!("{host}:{port}"), state).await
}
