use crate::config::Config;
use crate::domain::storage::Storage;
use crate::domain::{DedupedRegistry, Registry, Summary, SummaryMetadata};
use crate::error::Result;
use crate::infrastructure::CsvRosterReader;
use crate::services::dedup::Deduplicator;
use crate::services::reporting::{Report, Reporter};
use crate::services::similarity::scorer_for;
use std::sync::Arc;
use tracing::info;

pub struct RosterService {
    reader: CsvRosterReader,
    store: Arc<dyn Storage>,
    deduplicator: Deduplicator,
    reporter: Reporter,
}

impl RosterService {
    pub fn new(
        reader: CsvRosterReader,
        store: Arc<dyn Storage + 'static>,
        deduplicator: Deduplicator,
        reporter: Reporter,
    ) -> Self {
        Self {
            reader,
            store,
            deduplicator,
            reporter,
        }
    }

    pub fn from_config(config: &Config, store: Arc<dyn Storage + 'static>) -> Self {
        let args = &config.args;
        Self::new(
            CsvRosterReader::new(&args.input, config.delimiter()),
            store,
            Deduplicator::new(scorer_for(args.scorer), config.dedup_config()),
            Reporter::new(args.top, args.country.clone()),
        )
    }

    /// Load, deduplicate, report and save.
    pub fn process(&self) -> Result<Report> {
        info!("Starting roster pipeline for {:?}", self.reader.path());

        let rows = self.reader.read_rows()?;
        let registry = Registry::from_rows(rows)?;

        let deduped = self.deduplicator.deduplicate(registry);
        info!("{} institutions after deduplication", deduped.len());

        let report = self.reporter.build(&deduped)?;
        self.save(&deduped, &report)?;

        info!("Roster pipeline completed successfully");
        Ok(report)
    }

    fn save(&self, deduped: &DedupedRegistry, report: &Report) -> Result<()> {
        self.store.save_report(&report.to_string())?;
        self.store.save_institution_names(&deduped.best_names())?;

        let dedup_config = self.deduplicator.config();
        let summary = Summary::new(
            deduped,
            SummaryMetadata {
                threshold: dedup_config.threshold,
                scorer: self.deduplicator.scorer_name().to_string(),
                acronyms: format!("{:?}", dedup_config.acronyms).to_lowercase(),
                ..Default::default()
            },
        );
        self.store.save_summary(&summary)
    }
}
