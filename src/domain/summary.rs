use crate::domain::{DedupedRegistry, Ranking};
use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Summary {
    pub total_institutions: usize,
    pub total_teams: usize,
    pub merged_away: usize,
    pub last_updated: String,
    pub institutions: Vec<InstitutionSummary>,
    pub metadata: SummaryMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstitutionSummary {
    pub id: usize,
    pub best_name: String,
    pub names: Vec<String>,
    pub city: String,
    pub state: String,
    pub country: String,
    pub teams: Vec<TeamSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSummary {
    pub team_number: String,
    pub advisor: String,
    pub problem: String,
    pub ranking: Ranking,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct SummaryMetadata {
    pub threshold: u8,
    pub scorer: String,
    pub acronyms: String,
    pub version: String,
}

impl Summary {
    pub fn new(deduped: &DedupedRegistry, metadata: SummaryMetadata) -> Self {
        let institutions: Vec<InstitutionSummary> = deduped
            .institutions()
            .into_iter()
            .map(|inst| InstitutionSummary {
                id: inst.id.0,
                best_name: inst.best_name().to_string(),
                names: inst.names().to_vec(),
                city: inst.city.clone(),
                state: inst.state.clone(),
                country: inst.country.clone(),
                teams: deduped
                    .teams_of(inst)
                    .into_iter()
                    .map(|team| TeamSummary {
                        team_number: team.team_number.clone(),
                        advisor: team.advisor.clone(),
                        problem: team.problem.clone(),
                        ranking: team.ranking,
                    })
                    .collect(),
            })
            .collect();

        Self {
            total_institutions: institutions.len(),
            total_teams: institutions.iter().map(|inst| inst.teams.len()).sum(),
            merged_away: deduped.registry().len() - deduped.len(),
            last_updated: Local::now().to_rfc3339(),
            institutions,
            metadata: SummaryMetadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..metadata
            },
        }
    }
}
