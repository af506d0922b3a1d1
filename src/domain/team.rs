use crate::domain::InstitutionId;
use crate::error::RosterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub usize);

/// Final placement of a team. The six values are the only ones the
/// competition awards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ranking {
    Unsuccessful,
    #[serde(rename = "Successful Participant")]
    SuccessfulParticipant,
    #[serde(rename = "Honorable Mention")]
    HonorableMention,
    Meritorious,
    Finalist,
    #[serde(rename = "Outstanding Winner")]
    OutstandingWinner,
}

impl Ranking {
    pub const ALL: [Ranking; 6] = [
        Ranking::Unsuccessful,
        Ranking::SuccessfulParticipant,
        Ranking::HonorableMention,
        Ranking::Meritorious,
        Ranking::Finalist,
        Ranking::OutstandingWinner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Ranking::Unsuccessful => "Unsuccessful",
            Ranking::SuccessfulParticipant => "Successful Participant",
            Ranking::HonorableMention => "Honorable Mention",
            Ranking::Meritorious => "Meritorious",
            Ranking::Finalist => "Finalist",
            Ranking::OutstandingWinner => "Outstanding Winner",
        }
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ranking {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ranking::ALL
            .into_iter()
            .find(|ranking| ranking.as_str() == s)
            .ok_or_else(|| RosterError::InvalidArgument(format!("Invalid ranking: {s:?}")))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub team_number: String,
    pub advisor: String,
    pub problem: String,
    pub ranking: Ranking,
    /// Owning institution. Only rewritten when that institution is merged away.
    pub institution: InstitutionId,
}
