mod readers;
mod storage;

pub use readers::csv_reader::CsvRosterReader;
pub use storage::fs_store::FileSystemStore;
