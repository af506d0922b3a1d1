use serde::{Deserialize, Serialize};

/// One validated line of the input roster. Fields may be empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterRow {
    pub line: u64,
    pub team_number: String,
    pub advisor: String,
    pub problem: String,
    pub ranking: String,
    pub institution: String,
    pub city: String,
    pub state: String,
    pub country: String,
}
