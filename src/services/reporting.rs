use crate::domain::{DedupedRegistry, Institution, Ranking, Team};
use crate::error::{Result, RosterError};
use std::fmt;

/// Rankings listed under "Meritorious or Better", best first.
const MERITORIOUS_OR_BETTER: [Ranking; 3] = [
    Ranking::OutstandingWinner,
    Ranking::Finalist,
    Ranking::Meritorious,
];

pub fn average_teams_per_institution(institutions: &[&Institution]) -> Result<f64> {
    if institutions.is_empty() {
        return Err(RosterError::EmptyInput(
            "cannot average teams over zero institutions".to_string(),
        ));
    }

    let teams: usize = institutions.iter().map(|inst| inst.team_count()).sum();
    Ok(teams as f64 / institutions.len() as f64)
}

/// Institutions with the most teams first. Equal counts keep their input order.
pub fn top_n_by_team_count<'a>(
    institutions: &[&'a Institution],
    n: usize,
) -> Vec<&'a Institution> {
    let mut ranked = institutions.to_vec();
    ranked.sort_by(|a, b| b.team_count().cmp(&a.team_count()));
    ranked.truncate(n);
    ranked
}

pub fn filter_teams_by_ranking<'a>(teams: &[&'a Team], ranking: &str) -> Result<Vec<&'a Team>> {
    let ranking: Ranking = ranking.parse()?;
    Ok(teams
        .iter()
        .filter(|team| team.ranking == ranking)
        .copied()
        .collect())
}

pub fn filter_institutions_by_country<'a>(
    institutions: &[&'a Institution],
    country: &str,
) -> Vec<&'a Institution> {
    institutions
        .iter()
        .filter(|inst| inst.country == country)
        .copied()
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamLine {
    pub team_number: String,
    pub advisor: String,
    pub institution: String,
    pub ranking: Ranking,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub average_teams: f64,
    /// (best name, team count)
    pub most_teams: Vec<(String, usize)>,
    pub outstanding_institutions: Vec<String>,
    pub meritorious_teams: Vec<TeamLine>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average teams per institution: {:.2}", self.average_teams)?;

        writeln!(f)?;
        writeln!(f, "Institutions with most teams:")?;
        for (name, count) in &self.most_teams {
            writeln!(f, "- {}: {}", name, count)?;
        }

        writeln!(f)?;
        writeln!(f, "Outstanding Institutions:")?;
        for name in &self.outstanding_institutions {
            writeln!(f, "- {}", name)?;
        }

        writeln!(f)?;
        writeln!(f, "Meritorious or Better US Teams:")?;
        for line in &self.meritorious_teams {
            writeln!(
                f,
                "- Team #{}, advisor {}, {}: {}",
                line.team_number, line.advisor, line.institution, line.ranking
            )?;
        }
        Ok(())
    }
}

pub struct Reporter {
    top_n: usize,
    country: String,
}

impl Reporter {
    pub fn new(top_n: usize, country: impl Into<String>) -> Self {
        Self {
            top_n,
            country: country.into(),
        }
    }

    pub fn build(&self, deduped: &DedupedRegistry) -> Result<Report> {
        let institutions = deduped.institutions();

        let average_teams = average_teams_per_institution(&institutions)?;

        let most_teams = top_n_by_team_count(&institutions, self.top_n)
            .into_iter()
            .map(|inst| (inst.best_name().to_string(), inst.team_count()))
            .collect();

        let teams = deduped.teams();
        let outstanding = filter_teams_by_ranking(&teams, Ranking::OutstandingWinner.as_str())?;
        let outstanding_institutions = institutions
            .iter()
            .filter(|inst| outstanding.iter().any(|team| team.institution == inst.id))
            .map(|inst| inst.best_name().to_string())
            .collect();

        let domestic: Vec<&Team> = filter_institutions_by_country(&institutions, &self.country)
            .into_iter()
            .flat_map(|inst| deduped.teams_of(inst))
            .collect();

        let mut meritorious_teams = Vec::new();
        for ranking in MERITORIOUS_OR_BETTER {
            let mut tier: Vec<TeamLine> = filter_teams_by_ranking(&domestic, ranking.as_str())?
                .into_iter()
                .map(|team| TeamLine {
                    team_number: team.team_number.clone(),
                    advisor: team.advisor.clone(),
                    institution: deduped.institution(team.institution).best_name().to_string(),
                    ranking: team.ranking,
                })
                .collect();
            tier.sort_by(|a, b| a.institution.cmp(&b.institution));
            meritorious_teams.extend(tier);
        }

        Ok(Report {
            average_teams,
            most_teams,
            outstanding_institutions,
            meritorious_teams,
        })
    }
}
