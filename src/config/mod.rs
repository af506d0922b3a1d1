use crate::config::cli::Args;
use crate::error::{Result, RosterError};
use crate::services::dedup::DedupConfig;
use clap::Parser;
use tracing::info;

pub(crate) mod cli;

pub use cli::{AcronymMode, ScorerKind};

pub struct Config {
    pub args: Args,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        if !args.delimiter.is_ascii() {
            return Err(RosterError::InvalidArgument(format!(
                "delimiter must be a single ASCII character, got {:?}",
                args.delimiter
            )));
        }
        Ok(Self { args })
    }

    pub fn delimiter(&self) -> u8 {
        self.args.delimiter as u8
    }

    pub fn dedup_config(&self) -> DedupConfig {
        DedupConfig {
            threshold: self.args.threshold,
            acronyms: self.args.acronyms,
            show_progress: self.args.progress,
        }
    }

    pub fn ensure_directories(&self) -> Result<()> {
        if !self.args.output_dir.exists() {
            std::fs::create_dir_all(&self.args.output_dir)?;
        }

        info!("Output dir exists: {:?}", self.args.output_dir);
        Ok(())
    }
}
