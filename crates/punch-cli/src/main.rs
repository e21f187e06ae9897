use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use punch_cli::commands::{edit, export, list, mark, reset};
use punch_cli::{Cli, Commands, Config};
use punch_core::WorkStatus;
use punch_store::WorkLogStore;

/// Load config and open the work log store, ensuring the slot's parent
/// directory exists.
fn open_store(config_path: Option<&Path>) -> Result<(WorkLogStore, Config)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    if let Some(parent) = config.log_path.parent() {
        std::fs::create_dir_all(parent).context("failed to create work log directory")?;
    }

    let store = WorkLogStore::open(&config.log_path).context("failed to open work log")?;
    Ok((store, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Some(Commands::Start { desc }) => {
            let (mut store, _config) = open_store(cli.config.as_deref())?;
            mark::run(&mut out, &mut store, WorkStatus::Start, desc.as_deref())?;
        }
        Some(Commands::Finish { desc }) => {
            let (mut store, _config) = open_store(cli.config.as_deref())?;
            mark::run(&mut out, &mut store, WorkStatus::Finish, desc.as_deref())?;
        }
        Some(Commands::Doing { desc }) => {
            let (mut store, _config) = open_store(cli.config.as_deref())?;
            mark::run(&mut out, &mut store, WorkStatus::Doing, desc.as_deref())?;
        }
        Some(Commands::List) => {
            let (store, _config) = open_store(cli.config.as_deref())?;
            list::run(&mut out, store.entries())?;
        }
        Some(Commands::Insert { index }) => {
            let (mut store, _config) = open_store(cli.config.as_deref())?;
            edit::insert(&mut out, &mut store, *index)?;
        }
        Some(Commands::Edit {
            index,
            time,
            desc,
            status,
        }) => {
            let (mut store, _config) = open_store(cli.config.as_deref())?;
            edit::run(
                &mut out,
                &mut store,
                *index,
                time.as_deref(),
                desc.as_deref(),
                status.as_deref(),
            )?;
        }
        Some(Commands::Remove { index }) => {
            let (mut store, _config) = open_store(cli.config.as_deref())?;
            edit::remove(&mut out, &mut store, *index)?;
        }
        Some(Commands::Reset { yes }) => {
            let (mut store, _config) = open_store(cli.config.as_deref())?;
            reset::run(&mut out, &mut store, *yes)?;
        }
        Some(Commands::Export) => {
            let (store, _config) = open_store(cli.config.as_deref())?;
            export::run(&mut out, store.entries())?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            writeln!(out)?;
        }
    }

    Ok(())
}
