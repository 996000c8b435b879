use anyhow::Context;
use clap::Parser;
use pawbook::config::{Config, ConfigStore};
use pawbook::logging;
use pawbook::store::{JsonStore, MemoryStore, PetStore};
use pawbook::ui::runtime;
use pawbook::viewmodel::PetViewModel;
use std::path::PathBuf;
use std::sync::Arc;

/// Terminal pet roster with live search.
#[derive(Debug, Parser)]
#[command(name = "pawbook", version, about)]
struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the pet data file (overrides the config).
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Keep records in memory only; nothing is written to disk.
    #[arg(long)]
    in_memory: bool,

    /// Path to the log file (defaults to the platform data dir).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    let log_file = cli.log_file.clone().unwrap_or_else(logging::default_log_file);
    logging::init(&log_file)
        .with_context(|| format!("failed to open log file '{}'", log_file.display()))?;

    let store: Arc<dyn PetStore> = if cli.in_memory {
        Arc::new(MemoryStore::new())
    } else {
        let data_file = cli
            .data_file
            .clone()
            .unwrap_or_else(|| config.storage.resolved_data_file());
        Arc::new(JsonStore::open(data_file)?)
    };

    let config = ConfigStore::new(config, config_path);
    let viewmodel = PetViewModel::new(store);
    runtime::run(viewmodel, &config).context("terminal session failed")?;
    Ok(())
}
