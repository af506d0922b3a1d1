use super::Summary;
use crate::error::Result;

pub trait Storage: Send + Sync {
    fn save_report(&self, report: &str) -> Result<()>;
    fn save_institution_names(&self, names: &[String]) -> Result<()>;
    fn save_summary(&self, summary: &Summary) -> Result<()>;
}

pub struct StorageKeys;

impl StorageKeys {
    pub const REPORT: &'static str = "report.txt";
    pub const INSTITUTIONS: &'static str = "institutions.txt";
    pub const SUMMARY: &'static str = "summary.json";
}
