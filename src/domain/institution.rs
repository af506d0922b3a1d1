use crate::domain::TeamId;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstitutionId(pub usize);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Institution {
    pub id: InstitutionId,
    names: Vec<String>,
    best_name: String,
    pub teams: Vec<TeamId>,
    pub city: String,
    pub state: String,
    pub country: String,
    pub flagged_for_deletion: bool,
}

impl Institution {
    pub fn new(
        id: InstitutionId,
        name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            id,
            names: vec![name.clone()],
            best_name: name,
            teams: Vec::new(),
            city: city.into(),
            state: state.into(),
            country: country.into(),
            flagged_for_deletion: false,
        }
    }

    /// Every raw name seen for this institution, in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn best_name(&self) -> &str {
        &self.best_name
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    #[cfg(test)]
    pub fn add_name(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
        self.update_best_name();
    }

    pub fn add_team(&mut self, team: TeamId) {
        self.teams.push(team);
    }

    /// Appends another institution's names and teams. Back-references and the
    /// deletion flag of the absorbed record are the registry's job.
    pub(crate) fn absorb(&mut self, names: &[String], teams: &[TeamId]) {
        self.names.extend_from_slice(names);
        self.teams.extend_from_slice(teams);
        self.update_best_name();
    }

    // Most frequent name wins; ties go to the name seen first.
    fn update_best_name(&mut self) {
        let mut counts: FxHashMap<&str, usize> =
            FxHashMap::with_capacity_and_hasher(self.names.len(), Default::default());
        for name in &self.names {
            *counts.entry(name.as_str()).or_default() += 1;
        }

        let mut best: Option<(&str, usize)> = None;
        for name in &self.names {
            let count = counts[name.as_str()];
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((name.as_str(), count));
            }
        }

        if let Some((name, _)) = best {
            self.best_name = name.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn institution(name: &str) -> Institution {
        Institution::new(InstitutionId(0), name, "Cambridge", "MA", "USA")
    }

    #[test]
    fn starts_with_single_name() {
        let inst = institution("MIT");
        assert_eq!(inst.names(), ["MIT"]);
        assert_eq!(inst.best_name(), "MIT");
        assert!(!inst.flagged_for_deletion);
        assert_eq!(inst.team_count(), 0);
    }

    #[test]
    fn most_frequent_name_becomes_best() {
        let mut inst = institution("M.I.T.");
        inst.add_name("MIT");
        assert_eq!(inst.best_name(), "M.I.T.");
        inst.add_name("MIT");
        assert_eq!(inst.best_name(), "MIT");
    }

    #[test]
    fn ties_resolve_to_first_seen() {
        let mut inst = institution("Massachusetts Institute of Technology");
        inst.absorb(&["MIT".to_string(), "M.I.T.".to_string()], &[]);
        assert_eq!(inst.best_name(), "Massachusetts Institute of Technology");
    }

    #[test]
    fn absorb_keeps_insertion_order() {
        let mut inst = institution("A");
        inst.add_team(TeamId(0));
        inst.absorb(&["B".to_string(), "B".to_string()], &[TeamId(3), TeamId(1)]);
        assert_eq!(inst.names(), ["A", "B", "B"]);
        assert_eq!(inst.teams, vec![TeamId(0), TeamId(3), TeamId(1)]);
        assert_eq!(inst.best_name(), "B");
    }
}
