//! svclog command line
//!
//! - `svclog smoke`: emit one message per level through a configured logger
//! - `svclog check <root>`: report logger usage per service directory
//! - `svclog config`: print the resolved configuration

mod check;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use svclog_core::{ConfigLevel, Format, Level, Logger, LoggerConfig, LoggerRegistry};

use crate::check::Checker;

#[derive(Parser, Debug)]
#[command(name = "svclog", version, about = "Service logger tools")]
struct Cli {
    /// YAML config file used instead of the user config
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Workspace root whose .config/svclog/config.yaml overrides the user config
    #[arg(long, global = true)]
    workspace: Option<PathBuf>,

    /// Minimum level to emit (info, warn, error)
    #[arg(long, global = true)]
    level: Option<Level>,

    /// Output format (text, json)
    #[arg(long, global = true)]
    format: Option<Format>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Emit one info, warn and error message
    Smoke {
        /// Logger name
        #[arg(long, default_value = "test")]
        name: String,
    },
    /// Check each service under ROOT for logger usage
    Check {
        root: PathBuf,

        /// Exit non-zero if any service lacks logger usage or prints directly
        #[arg(long)]
        strict: bool,
    },
    /// Print the resolved configuration as YAML
    Config,
}

/// Defaults, then `--config` (or `user_config`), then the workspace file,
/// then environment through `lookup`, then command line flags
fn resolve_config<F>(cli: &Cli, user_config: &Path, lookup: F) -> anyhow::Result<LoggerConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let user = match &cli.config {
        Some(path) if !path.exists() => {
            anyhow::bail!("config file {} does not exist", path.display())
        }
        Some(path) => path.as_path(),
        None => user_config,
    };
    let workspace = cli.workspace.as_ref().map(|root| ConfigLevel::workspace_path(root));

    let mut config =
        LoggerConfig::load_layers(LoggerConfig::default(), user, workspace.as_deref(), lookup)
            .context("loading config")?;

    if let Some(level) = cli.level {
        config.level = level;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    Ok(config)
}

/// Returns whether every record was delivered
fn smoke(registry: &LoggerRegistry, name: &str) -> anyhow::Result<bool> {
    let logger = registry.get_logger(name)?;
    logger.info("Logger test (info)");
    logger.warn("Logger test (warn)");
    logger.error("Logger test (error)");
    registry.flush();

    Ok(registry.diagnostics().failure_count() == 0)
}

/// Returns false only in strict mode when some service is not clean
fn check(registry: &LoggerRegistry, root: &Path, strict: bool) -> anyhow::Result<bool> {
    let logger = registry.get_logger("check-loggers")?;
    let checker = Checker::new()?;
    let reports = checker
        .check(root)
        .with_context(|| format!("scanning {}", root.display()))?;

    for report in &reports {
        report.emit(&logger);
    }
    registry.flush();

    Ok(!strict || reports.iter().all(|r| r.is_clean()))
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = resolve_config(&cli, &ConfigLevel::User.default_path(), |key| {
        std::env::var(key).ok()
    })?;

    if let Command::Config = cli.command {
        print!("{}", serde_yaml::to_string(&config)?);
        return Ok(ExitCode::SUCCESS);
    }

    let registry = LoggerRegistry::from_config(&config).context("opening log sink")?;

    let passed = match &cli.command {
        Command::Smoke { name } => smoke(&registry, name)?,
        Command::Check { root, strict } => check(&registry, root, *strict)?,
        Command::Config => true,
    };

    Ok(if passed { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
