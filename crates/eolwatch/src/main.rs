//! eolwatch - end-of-life check for the installed OS release
//!
//! Wires together:
//! - Configuration loading
//! - The os-release reader and lifecycle API client (Linux host)
//! - The notifier behind the `eol` command and the post-refresh hook

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eolwatch_config::{EolConfig, load_config};
use eolwatch_core::EolNotifier;
use eolwatch_host_api::{LifecycleHooks, MetadataFreshness, RefreshOutcome};
use eolwatch_host_linux::{HttpStatusSource, metadata_freshness};
use eolwatch_util::{config_path_without_env, default_os_release_path};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// eolwatch - Warn when the installed OS release has reached end of life
#[derive(Parser, Debug)]
#[command(name = "eolwatch", version)]
#[command(about = "Warn when the installed OS release has reached end of life", long_about = None)]
struct Args {
    /// Configuration file path (or set EOLWATCH_CONFIG env var)
    #[arg(short, long, env = "EOLWATCH_CONFIG", default_value_os_t = config_path_without_env())]
    config: PathBuf,

    /// os-release file providing VERSION_ID
    #[arg(long, default_value_os_t = default_os_release_path())]
    os_release: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// get the lifecycle stage of your system
    Eol,

    /// Post-refresh hook: warn if the system has reached its End of Life
    Refreshed(RefreshedArgs),
}

#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
struct RefreshedArgs {
    /// Age of the repository metadata in seconds
    #[arg(long)]
    age_secs: Option<u64>,

    /// Repository metadata file; its modification time gives the age
    #[arg(long)]
    metadata: Option<PathBuf>,
}

impl RefreshedArgs {
    fn freshness(&self) -> Result<MetadataFreshness> {
        match (self.age_secs, &self.metadata) {
            (Some(secs), _) => Ok(MetadataFreshness::from_age_secs(secs)),
            (None, Some(path)) => metadata_freshness(path)
                .with_context(|| format!("Failed to read metadata age from {:?}", path)),
            (None, None) => unreachable!("clap requires one of --age-secs or --metadata"),
        }
    }
}

fn build_notifier(config: &EolConfig, os_release: &Path) -> Result<EolNotifier<HttpStatusSource>> {
    let source = HttpStatusSource::new(&config.eol_url)
        .context("Failed to set up lifecycle API client")?
        .with_os_release_path(os_release);
    Ok(EolNotifier::new(source))
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args.config)
        .with_context(|| format!("Failed to load config from {:?}", args.config))?;

    debug!(
        config_path = %args.config.display(),
        eol_url = %config.eol_url,
        "Configuration loaded"
    );

    let notifier = build_notifier(&config, &args.os_release)?;

    match args.command {
        Command::Eol => {
            notifier
                .on_invoke()
                .context("Failed to determine the lifecycle stage")?;
        }
        Command::Refreshed(refreshed) => {
            let freshness = refreshed.freshness()?;
            let outcome = notifier
                .on_metadata_refreshed(freshness)
                .context("End of Life check failed")?;
            if outcome == RefreshOutcome::Skipped {
                debug!(age_secs = freshness.age.as_secs(), "Skipped EOL check");
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    run(args)
}
