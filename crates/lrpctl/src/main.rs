//! lrpctl — inspect desired and actual LRP state.
//!
//! # Usage
//!
//! ```text
//! lrpctl --store /var/lib/lrpgrid/state.redb desired list
//! lrpctl actual list --process-guid web-1 --running
//! lrpctl import fixtures/cluster.json
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use lrpgrid_bbs::LrpBbs;
use lrpgrid_store::RedbStore;
use tracing::debug;

mod commands;
mod config;

use config::CtlConfig;

#[derive(Parser)]
#[command(
    name = "lrpctl",
    about = "lrpgrid — query long-running process placement state",
    version,
    propagate_version = true,
)]
struct Cli {
    /// Config file (default: ./lrpctl.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// redb store file, overriding [store].path.
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query desired LRPs
    Desired {
        #[command(subcommand)]
        action: DesiredAction,
    },
    /// Query actual LRPs
    Actual {
        #[command(subcommand)]
        action: ActualAction,
    },
    /// Load a JSON fixture of `{ "<store key>": <record>, ... }` into the store.
    Import {
        /// Path to the fixture file
        fixture: PathBuf,
    },
}

#[derive(Subcommand)]
enum DesiredAction {
    /// List every desired LRP
    List,
    /// Show the desired LRP for one process guid
    Get { process_guid: String },
}

#[derive(Subcommand)]
enum ActualAction {
    /// List actual LRPs
    List {
        /// Only instances of this process
        #[arg(short, long)]
        process_guid: Option<String>,
        /// Only instances in the RUNNING state
        #[arg(short, long)]
        running: bool,
    },
}

fn init_tracing(config: &CtlConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.log.filter))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.log.json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = CtlConfig::load(cli.config.as_deref())?;
    if let Some(store) = cli.store {
        config.store.path = store;
    }
    init_tracing(&config)?;

    let output = run(cli.command, &config)?;
    println!("{output}");
    Ok(())
}

fn run(command: Commands, config: &CtlConfig) -> anyhow::Result<String> {
    match command {
        Commands::Desired { action } => {
            let bbs = open_for_queries(&config.store.path)?;
            match action {
                DesiredAction::List => commands::desired::list(&bbs),
                DesiredAction::Get { process_guid } => commands::desired::get(&bbs, &process_guid),
            }
        }
        Commands::Actual { action } => {
            let bbs = open_for_queries(&config.store.path)?;
            match action {
                ActualAction::List {
                    process_guid,
                    running,
                } => commands::actual::list(&bbs, process_guid.as_deref(), running),
            }
        }
        Commands::Import { fixture } => {
            let store = RedbStore::open(&config.store.path)?;
            commands::import::import(&store, &fixture)
        }
    }
}

/// Queries only read, so a missing store file is an error rather than an
/// empty namespace.
fn open_for_queries(path: &Path) -> anyhow::Result<LrpBbs> {
    let store = RedbStore::open_existing(path)
        .with_context(|| format!("cannot open store {}", path.display()))?;
    debug!(?path, "store ready");
    Ok(LrpBbs::new(Arc::new(store)))
}
