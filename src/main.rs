use crate::config::Config;
use crate::error::Result;
use crate::infrastructure::FileSystemStore;
use crate::services::roster_service::RosterService;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

fn main() -> Result<()> {
    let config = Config::new()?;

    let level = tracing::Level::from_str(&config.args.log_level).unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    config.ensure_directories()?;

    let store = Arc::new(FileSystemStore::new(&config.args.output_dir));
    let service = RosterService::from_config(&config, store);
    service.process()?;

    info!("Report written to {:?}", config.args.output_dir);
    Ok(())
}
