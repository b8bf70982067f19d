#![forbid(unsafe_code)]

mod catalog;
mod client;
mod commands;
mod config;
mod constants;
mod content;
mod document;
mod font;
mod font_discovery;
mod gui;
mod nav;
mod selection;
mod view_model;

use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use catalog::Catalog;
use commands::Command;
use config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "solution-configurator", version, about = "Build tailored solution overviews for prospective clients")]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// trace, debug, info, warn or error; LOG_LEVEL takes precedence
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

fn parse_level(level: &str) -> TraceLevel {
    match level.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

/// Log level set in the config file, read quietly so it can pick the
/// subscriber level before anything is logged
fn configured_level(path: &Path) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    AppConfig::parse(&contents).ok().map(|config| config.log_level)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::default_path);

    // Parse log level from environment variable, then CLI, then config
    let log_level = std::env::var("LOG_LEVEL")
        .ok()
        .or(cli.log_level.clone())
        .or_else(|| configured_level(&config_path))
        .map(|level| parse_level(&level))
        .unwrap_or(TraceLevel::INFO);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let loaded = AppConfig::load_or_create(&config_path);
    let config = match loaded {
        Ok(config) => {
            info!(path = %config_path.display(), "Using config");
            config
        }
        Err(err) => {
            warn!(error = ?err, "Failed to load config, using defaults");
            AppConfig::default()
        }
    };

    if let Err(err) = Catalog::seed().validate() {
        error!(error = ?err, "Feature catalog is inconsistent");
    }

    commands::run(cli.command.unwrap_or(Command::Gui), &config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), TraceLevel::DEBUG);
        assert_eq!(parse_level("warn"), TraceLevel::WARN);
        assert_eq!(parse_level("verbose"), TraceLevel::INFO);
    }

    #[test]
    fn test_configured_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert_eq!(configured_level(&path), None);
        // reading the level never creates the file
        assert!(!path.exists());

        fs::write(&path, "log_level = \"debug\"\n").unwrap();
        assert_eq!(configured_level(&path).as_deref(), Some("debug"));

        fs::write(&path, "log_level = [").unwrap();
        assert_eq!(configured_level(&path), None);
    }

    #[test]
    fn test_cli_defaults_to_gui() {
        let cli = Cli::try_parse_from(["solution-configurator"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_render_arguments() {
        let cli = Cli::try_parse_from([
            "solution-configurator",
            "render",
            "--request",
            "req.json",
            "--format",
            "text",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Some(Command::Render { request, format, out }) => {
                assert_eq!(request, PathBuf::from("req.json"));
                assert_eq!(format, commands::OutputFormat::Text);
                assert!(out.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
