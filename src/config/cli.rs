use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the team roster CSV
    #[arg(long, default_value = "2015.csv")]
    pub input: PathBuf,

    /// Field delimiter of the roster file
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Directory to store the report, name list and summary
    #[arg(long, default_value = "data")]
    pub output_dir: PathBuf,

    /// Similarity score (0-100) a pair of names must exceed to be merged
    #[arg(long, default_value_t = 90, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub threshold: u8,

    /// String similarity measure used for fuzzy matching
    #[arg(long, value_enum, default_value_t = ScorerKind::Ratio)]
    pub scorer: ScorerKind,

    /// How short names are matched against acronyms of longer names
    #[arg(long, value_enum, default_value_t = AcronymMode::Off)]
    pub acronyms: AcronymMode,

    /// Number of institutions listed under "most teams"
    #[arg(long, default_value_t = 5)]
    pub top: usize,

    /// Country whose meritorious-or-better teams are listed
    #[arg(long, default_value = "USA")]
    pub country: String,

    /// Show a progress bar during deduplication
    #[arg(long)]
    pub progress: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScorerKind {
    /// Indel ratio, the same score as Python's `fuzz.ratio`
    Ratio,
    Levenshtein,
    JaroWinkler,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AcronymMode {
    Off,
    /// Raw name shorter than 5 characters against the case-sensitive
    /// initials of every word ("MIoT")
    Literal,
    /// Punctuation-free short form against the initials of the words that
    /// are not connectors ("M.I.T." and "MIT" both match "Massachusetts
    /// Institute of Technology")
    Compact,
}
