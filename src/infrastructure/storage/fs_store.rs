use crate::domain::storage::{Storage, StorageKeys};
use crate::domain::Summary;
use crate::error::Result;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Clone)]
pub struct FileSystemStore {
    output_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn get_path_for_key(&self, key: &str) -> PathBuf {
        self.output_dir.join(key)
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    fn write_text_file(&self, key: &str, content: &str) -> Result<()> {
        self.ensure_dir(&self.output_dir)?;
        let path = self.get_path_for_key(key);

        let mut writer = BufWriter::new(File::create(&path)?);
        writer.write_all(content.as_bytes())?;
        writer.flush()?;

        info!("Wrote {:?}", path);
        Ok(())
    }
}

impl Storage for FileSystemStore {
    fn save_report(&self, report: &str) -> Result<()> {
        self.write_text_file(StorageKeys::REPORT, report)
    }

    fn save_institution_names(&self, names: &[String]) -> Result<()> {
        let mut sorted = names.to_vec();
        sorted.sort();
        self.write_text_file(StorageKeys::INSTITUTIONS, &sorted.join("\n"))
    }

    fn save_summary(&self, summary: &Summary) -> Result<()> {
        let content = serde_json::to_string_pretty(summary)?;
        self.write_text_file(StorageKeys::SUMMARY, &content)
    }
}
