use crate::domain::RosterRow;
use crate::error::{Result, RosterError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::info;

/// Byte-order mark as read from UTF-8 and as left behind when the file was
/// decoded as Latin-1.
const BOM_PREFIXES: [&str; 2] = ["\u{feff}", "ï»¿"];

const TEAM_NUMBER: &str = "Team Number";
const ADVISOR: &str = "Advisor";
const PROBLEM: &str = "Problem";
const RANKING: &str = "Ranking";
const INSTITUTION: &str = "Institution";
const CITY: &str = "City";
const STATE: &str = "State/Province";
const COUNTRY: &str = "Country";

struct Columns {
    team_number: usize,
    advisor: usize,
    problem: usize,
    ranking: usize,
    institution: usize,
    city: usize,
    state: usize,
    country: usize,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let names: Vec<&str> = headers.iter().map(clean_header).collect();
        let find = |column: &str| {
            names
                .iter()
                .position(|name| *name == column)
                .ok_or_else(|| RosterError::MissingColumn(column.to_string()))
        };

        Ok(Self {
            team_number: find(TEAM_NUMBER)?,
            advisor: find(ADVISOR)?,
            problem: find(PROBLEM)?,
            ranking: find(RANKING)?,
            institution: find(INSTITUTION)?,
            city: find(CITY)?,
            state: find(STATE)?,
            country: find(COUNTRY)?,
        })
    }
}

fn clean_header(header: &str) -> &str {
    let mut header = header;
    for bom in BOM_PREFIXES {
        header = header.trim_start_matches(bom);
    }
    header.trim()
}

pub struct CsvRosterReader {
    path: PathBuf,
    delimiter: u8,
}

impl CsvRosterReader {
    pub fn new(path: impl Into<PathBuf>, delimiter: u8) -> Self {
        Self {
            path: path.into(),
            delimiter,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_rows(&self) -> Result<Vec<RosterRow>> {
        info!("Reading roster from {:?}", self.path);
        let file = File::open(&self.path)?;
        let rows = Self::from_reader(BufReader::new(file), self.delimiter)?;
        info!("Read {} rows", rows.len());
        Ok(rows)
    }

    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Vec<RosterRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = Columns::from_headers(reader.headers()?)?;

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let field = |index: usize, column: &str| {
                record
                    .get(index)
                    .map(str::to_string)
                    .ok_or_else(|| RosterError::MalformedRow {
                        line,
                        reason: format!("missing {column:?} field"),
                    })
            };

            rows.push(RosterRow {
                line,
                team_number: field(columns.team_number, TEAM_NUMBER)?,
                advisor: field(columns.advisor, ADVISOR)?,
                problem: field(columns.problem, PROBLEM)?,
                ranking: field(columns.ranking, RANKING)?,
                institution: field(columns.institution, INSTITUTION)?,
                city: field(columns.city, CITY)?,
                state: field(columns.state, STATE)?,
                country: field(columns.country, COUNTRY)?,
            });
        }

        Ok(rows)
    }
}
