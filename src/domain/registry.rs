use super::{Institution, InstitutionId, Ranking, RosterRow, Team, TeamId};
use crate::error::{Result, RosterError};
use tracing::info;

/// Arena of institutions and teams. Institutions are never removed, only
/// flagged, so ids stay valid for the whole run.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    institutions: Vec<Institution>,
    teams: Vec<Team>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds one institution and one team per row.
    pub fn from_rows(rows: Vec<RosterRow>) -> Result<Self> {
        let mut registry = Self::new();
        for row in rows {
            let ranking: Ranking = row.ranking.parse().map_err(|_| RosterError::MalformedRow {
                line: row.line,
                reason: format!("unknown ranking {:?}", row.ranking),
            })?;

            let institution =
                registry.add_institution(row.institution, row.city, row.state, row.country);
            registry.add_team(
                institution,
                row.team_number,
                row.advisor,
                row.problem,
                ranking,
            );
        }

        info!(
            "Loaded {} institutions and {} teams",
            registry.institutions.len(),
            registry.teams.len()
        );
        Ok(registry)
    }

    pub fn add_institution(
        &mut self,
        name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
    ) -> InstitutionId {
        let id = InstitutionId(self.institutions.len());
        self.institutions
            .push(Institution::new(id, name, city, state, country));
        id
    }

    pub fn add_team(
        &mut self,
        institution: InstitutionId,
        team_number: impl Into<String>,
        advisor: impl Into<String>,
        problem: impl Into<String>,
        ranking: Ranking,
    ) -> TeamId {
        let id = TeamId(self.teams.len());
        self.teams.push(Team {
            id,
            team_number: team_number.into(),
            advisor: advisor.into(),
            problem: problem.into(),
            ranking,
            institution,
        });
        self.institutions[institution.0].add_team(id);
        id
    }

    pub fn len(&self) -> usize {
        self.institutions.len()
    }

    pub fn institutions(&self) -> &[Institution] {
        &self.institutions
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn institution(&self, id: InstitutionId) -> &Institution {
        &self.institutions[id.0]
    }

    #[cfg(test)]
    pub fn institution_mut(&mut self, id: InstitutionId) -> &mut Institution {
        &mut self.institutions[id.0]
    }

    pub fn team(&self, id: TeamId) -> &Team {
        &self.teams[id.0]
    }

    /// `target` absorbs `source`: names and teams are appended to the target,
    /// absorbed teams point at the target and the source is flagged. The
    /// source keeps its own data. Merging an institution with itself is a no-op.
    pub fn merge(&mut self, target: InstitutionId, source: InstitutionId) {
        if target == source {
            return;
        }

        let source_inst = &mut self.institutions[source.0];
        source_inst.flagged_for_deletion = true;
        let names = source_inst.names().to_vec();
        let teams = source_inst.teams.clone();

        for team in &teams {
            self.teams[team.0].institution = target;
        }
        self.institutions[target.0].absorb(&names, &teams);
    }
}

/// Read-only view over the institutions that survived deduplication, ordered
/// by best name.
#[derive(Debug)]
pub struct DedupedRegistry {
    registry: Registry,
    survivors: Vec<InstitutionId>,
}

impl DedupedRegistry {
    pub fn new(registry: Registry) -> Self {
        let mut survivors: Vec<InstitutionId> = registry
            .institutions
            .iter()
            .filter(|inst| !inst.flagged_for_deletion)
            .map(|inst| inst.id)
            .collect();
        survivors.sort_by(|a, b| {
            registry
                .institution(*a)
                .best_name()
                .cmp(registry.institution(*b).best_name())
        });

        Self {
            registry,
            survivors,
        }
    }

    pub fn len(&self) -> usize {
        self.survivors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.survivors.is_empty()
    }

    /// The full arena, flagged institutions included.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn institution(&self, id: InstitutionId) -> &Institution {
        self.registry.institution(id)
    }

    pub fn institutions(&self) -> Vec<&Institution> {
        self.survivors
            .iter()
            .map(|id| self.registry.institution(*id))
            .collect()
    }

    pub fn teams_of(&self, institution: &Institution) -> Vec<&Team> {
        institution
            .teams
            .iter()
            .map(|id| self.registry.team(*id))
            .collect()
    }

    /// Teams of all survivors, grouped by institution in survivor order.
    pub fn teams(&self) -> Vec<&Team> {
        self.institutions()
            .into_iter()
            .flat_map(|inst| self.teams_of(inst))
            .collect()
    }

    pub fn best_names(&self) -> Vec<String> {
        self.institutions()
            .iter()
            .map(|inst| inst.best_name().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(line: u64, team: &str, institution: &str, ranking: &str) -> RosterRow {
        RosterRow {
            line,
            team_number: team.to_string(),
            advisor: format!("Advisor {team}"),
            problem: "A".to_string(),
            ranking: ranking.to_string(),
            institution: institution.to_string(),
            city: "Boston".to_string(),
            state: "MA".to_string(),
            country: "USA".to_string(),
        }
    }

    #[test]
    fn rows_load_one_to_one() {
        let registry = Registry::from_rows(vec![
            row(2, "100", "MIT", "Finalist"),
            row(3, "101", "MIT", "Meritorious"),
        ])
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.teams().len(), 2);
        for (inst, team) in registry.institutions().iter().zip(registry.teams()) {
            assert_eq!(inst.teams, vec![team.id]);
            assert_eq!(team.institution, inst.id);
        }
    }

    #[test]
    fn unknown_ranking_is_malformed_row() {
        let err = Registry::from_rows(vec![
            row(2, "100", "MIT", "Finalist"),
            row(3, "101", "MIT", "Winner"),
        ])
        .unwrap_err();
        assert!(matches!(err, RosterError::MalformedRow { line: 3, .. }));
    }

    #[test]
    fn empty_fields_are_accepted() {
        let mut empty = row(2, "", "", "Unsuccessful");
        empty.city.clear();
        empty.country.clear();
        let registry = Registry::from_rows(vec![empty]).unwrap();
        assert_eq!(registry.institution(InstitutionId(0)).best_name(), "");
    }

    #[test]
    fn merge_moves_teams_and_back_references() {
        let mut registry = Registry::from_rows(vec![
            row(2, "1", "Yale", "Finalist"),
            row(3, "2", "Yale University", "Meritorious"),
        ])
        .unwrap();

        registry.merge(InstitutionId(0), InstitutionId(1));

        let target = registry.institution(InstitutionId(0));
        let source = registry.institution(InstitutionId(1));
        assert_eq!(target.names(), ["Yale", "Yale University"]);
        assert_eq!(target.teams, vec![TeamId(0), TeamId(1)]);
        assert!(!target.flagged_for_deletion);
        assert!(source.flagged_for_deletion);
        assert_eq!(source.names(), ["Yale University"]);
        assert_eq!(registry.team(TeamId(1)).institution, InstitutionId(0));
    }

    #[test]
    fn merge_with_self_is_noop() {
        let mut registry = Registry::from_rows(vec![row(2, "1", "Yale", "Finalist")]).unwrap();
        registry.merge(InstitutionId(0), InstitutionId(0));

        let inst = registry.institution(InstitutionId(0));
        assert!(!inst.flagged_for_deletion);
        assert_eq!(inst.names().len(), 1);
        assert_eq!(inst.teams.len(), 1);
    }

    #[test]
    fn deduped_view_skips_flagged_and_sorts_by_best_name() {
        let mut registry = Registry::from_rows(vec![
            row(2, "1", "Yale", "Finalist"),
            row(3, "2", "Amherst", "Meritorious"),
            row(4, "3", "Yale", "Unsuccessful"),
        ])
        .unwrap();
        registry.merge(InstitutionId(0), InstitutionId(2));

        let deduped = DedupedRegistry::new(registry);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped.best_names(), vec!["Amherst", "Yale"]);
        assert_eq!(deduped.teams().len(), 3);
        assert_eq!(deduped.registry().len(), 3);
    }
}
