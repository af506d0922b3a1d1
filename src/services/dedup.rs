use crate::config::AcronymMode;
use crate::domain::{DedupedRegistry, Institution, InstitutionId, Registry};
use crate::services::normalize::{acronym, initials, normalize, short_form};
use crate::services::similarity::SimilarityScorer;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Names shorter than this are treated as abbreviations by the acronym
/// rules.
const SHORT_NAME_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DedupConfig {
    /// A pair of names matches when its score is strictly above this.
    pub threshold: u8,
    pub acronyms: AcronymMode,
    pub show_progress: bool,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            threshold: 90,
            acronyms: AcronymMode::Off,
            show_progress: false,
        }
    }
}

pub struct Deduplicator {
    scorer: Box<dyn SimilarityScorer>,
    config: DedupConfig,
}

impl Deduplicator {
    pub fn new(scorer: Box<dyn SimilarityScorer>, config: DedupConfig) -> Self {
        info!(
            "Created new Deduplicator ({} scorer, threshold {})",
            scorer.name(),
            config.threshold
        );
        Self { scorer, config }
    }

    pub fn scorer_name(&self) -> &'static str {
        self.scorer.name()
    }

    pub fn config(&self) -> DedupConfig {
        self.config
    }

    /// Single greedy pass: every institution that still carries exactly one
    /// name is merged into the first institution in list order that matches
    /// it. An institution always matches itself, so only earlier institutions
    /// can absorb it.
    pub fn deduplicate(&self, mut registry: Registry) -> DedupedRegistry {
        let start = Instant::now();
        let total = registry.len();
        let pb = self.progress_bar(total);

        let mut min_names: Vec<String> = registry
            .institutions()
            .par_iter()
            .map(|inst| normalize(inst.best_name()))
            .collect();

        let mut merges = 0;
        for index in 0..total {
            pb.inc(1);
            let current = registry.institution(InstitutionId(index));
            if current.names().len() != 1 || current.flagged_for_deletion {
                continue;
            }

            let Some(target) = self.find_target(&registry, &min_names, index) else {
                continue;
            };
            if target == index {
                continue;
            }

            debug!(
                "Merging {:?} into {:?}",
                registry.institution(InstitutionId(index)).best_name(),
                registry.institution(InstitutionId(target)).best_name()
            );
            registry.merge(InstitutionId(target), InstitutionId(index));
            min_names[target] =
                normalize(registry.institution(InstitutionId(target)).best_name());
            merges += 1;
        }
        pb.finish_and_clear();

        let deduped = DedupedRegistry::new(registry);
        info!(
            "Deduplicated {} institutions into {} ({} merges) in {:?}",
            total,
            deduped.len(),
            merges,
            start.elapsed()
        );
        if deduped.is_empty() {
            warn!("No institutions left after deduplication");
        }
        deduped
    }

    // Read-only scan; the caller applies the merge afterwards.
    fn find_target(
        &self,
        registry: &Registry,
        min_names: &[String],
        current: usize,
    ) -> Option<usize> {
        let institutions = registry.institutions();
        let current_inst = &institutions[current];
        let current_min = &min_names[current];

        (0..institutions.len()).into_par_iter().find_first(|&candidate| {
            let candidate_inst = &institutions[candidate];
            !candidate_inst.flagged_for_deletion
                && self.is_match(
                    current_inst,
                    current_min,
                    candidate_inst,
                    &min_names[candidate],
                )
        })
    }

    fn is_match(
        &self,
        current: &Institution,
        current_min: &str,
        candidate: &Institution,
        candidate_min: &str,
    ) -> bool {
        if current_min == candidate_min {
            return true;
        }
        if self.scorer.score(current_min, candidate_min) > self.config.threshold {
            return true;
        }
        match self.config.acronyms {
            AcronymMode::Off => false,
            AcronymMode::Literal => {
                self.is_initials_match(current.best_name(), candidate.best_name())
            }
            AcronymMode::Compact => {
                self.is_compact_acronym_match(current.best_name(), candidate.best_name())
            }
        }
    }

    // Raw names, case-sensitive: "MIT" scores 86 against "MIoT".
    fn is_initials_match(&self, a: &str, b: &str) -> bool {
        let is_short = |s: &str| s.chars().count() < SHORT_NAME_LEN;
        if !is_short(a) && !is_short(b) {
            return false;
        }

        self.scorer.score(a, &initials(b)) > self.config.threshold
            || self.scorer.score(&initials(a), b) > self.config.threshold
    }

    fn is_compact_acronym_match(&self, a: &str, b: &str) -> bool {
        let (short_a, short_b) = (short_form(a), short_form(b));
        let is_short = |s: &str| s.chars().count() < SHORT_NAME_LEN;
        if !is_short(&short_a) && !is_short(&short_b) {
            return false;
        }

        let abbreviate = |name: &str, short: String| {
            if is_short(&short) {
                short
            } else {
                acronym(name)
            }
        };
        let abbrev_a = abbreviate(a, short_a);
        let abbrev_b = abbreviate(b, short_b);
        if abbrev_a.is_empty() || abbrev_b.is_empty() {
            return false;
        }

        self.scorer.score(&abbrev_a, &abbrev_b) > self.config.threshold
    }

    fn progress_bar(&self, total: usize) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total as u64);
        match ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {percent}%")
        {
            Ok(style) => pb.set_style(style),
            Err(e) => warn!("Falling back to default progress style: {}", e),
        }
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Ranking;
    use crate::services::similarity::RatioScorer;

    fn registry(names: &[&str]) -> Registry {
        let mut registry = Registry::new();
        for (i, name) in names.iter().enumerate() {
            let id = registry.add_institution(*name, "City", "State", "USA");
            registry.add_team(id, i.to_string(), "Advisor", "A", Ranking::Meritorious);
        }
        registry
    }

    fn dedup(names: &[&str]) -> DedupedRegistry {
        dedup_with(names, AcronymMode::Off)
    }

    fn dedup_with(names: &[&str], acronyms: AcronymMode) -> DedupedRegistry {
        let config = DedupConfig {
            acronyms,
            ..DedupConfig::default()
        };
        Deduplicator::new(Box::new(RatioScorer), config).deduplicate(registry(names))
    }

    fn dedup_with_acronyms(names: &[&str]) -> DedupedRegistry {
        dedup_with(names, AcronymMode::Compact)
    }

    fn team_total(deduped: &DedupedRegistry) -> usize {
        deduped.institutions().iter().map(|i| i.team_count()).sum()
    }

    #[test]
    fn matching_names_merge_into_first() {
        let deduped = dedup(&["Harvey Mudd College", "harvey mudd", "Harvey Mudd College"]);
        assert_eq!(deduped.len(), 1);

        let survivor = deduped.institutions()[0];
        assert_eq!(survivor.id, InstitutionId(0));
        assert_eq!(survivor.best_name(), "Harvey Mudd College");
        assert_eq!(
            survivor.names(),
            ["Harvey Mudd College", "harvey mudd", "Harvey Mudd College"]
        );
        assert_eq!(survivor.team_count(), 3);
    }

    #[test]
    fn fuzzy_names_above_threshold_merge() {
        let deduped = dedup(&["Xavier Pacifica", "Xavier Pacifico"]);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped.institutions()[0].team_count(), 2);
    }

    #[test]
    fn distinct_names_stay_apart_and_sorted() {
        let deduped = dedup(&["Tsinghua University", "Harbin Engineering University", "Peking"]);
        assert_eq!(
            deduped.best_names(),
            vec!["Harbin Engineering University", "Peking", "Tsinghua University"]
        );
    }

    #[test]
    fn university_of_michigan_absorbs_michigan() {
        // " michigan" vs "michigan" is a single insertion: 94.
        let deduped = dedup(&["University of Michigan", "Michigan"]);
        assert_eq!(deduped.len(), 1);
        let survivor = deduped.institutions()[0];
        assert_eq!(survivor.best_name(), "University of Michigan");
        assert_eq!(survivor.team_count(), 2);
    }

    #[test]
    fn later_sources_match_the_target_current_best_name() {
        // After absorbing two "Alpha University" rows the target is known as
        // "Alpha University" ("alpha "), which "Alpha U" matches at 92 while
        // the original "alpha" only scores 83.
        let deduped = dedup(&["Alpha", "Alpha University", "Alpha University", "Alpha U"]);
        assert_eq!(deduped.len(), 1);
        let survivor = deduped.institutions()[0];
        assert_eq!(survivor.best_name(), "Alpha University");
        assert_eq!(
            survivor.names(),
            ["Alpha", "Alpha University", "Alpha University", "Alpha U"]
        );
        assert_eq!(survivor.team_count(), 4);
    }

    #[test]
    fn single_pass_depends_on_input_order() {
        // A~B and B~C, but A and C are two edits apart.
        let a = "Xavier Pacifica";
        let b = "Xavier Pacifico";
        let c = "Xavior Pacifico";

        let abc = dedup(&[a, b, c]);
        let bac = dedup(&[b, a, c]);
        let cba = dedup(&[c, b, a]);

        assert_eq!(abc.len(), 2);
        assert_eq!(bac.len(), 1);
        assert_eq!(cba.len(), 2);
        for deduped in [&abc, &bac, &cba] {
            assert_eq!(team_total(deduped), 3);
        }
    }

    #[test]
    fn teams_are_conserved_and_point_at_survivors() {
        let names = [
            "Harvey Mudd College",
            "Xavier Pacifica",
            "harvey mudd",
            "Xavier Pacifico",
            "Colorado School of Mines",
            "",
            "",
        ];
        let deduped = dedup(&names);

        assert_eq!(team_total(&deduped), names.len());
        let mut seen: Vec<_> = deduped.teams().iter().map(|t| t.id).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), names.len());

        for inst in deduped.institutions() {
            assert!(!inst.flagged_for_deletion);
            for team in deduped.teams_of(inst) {
                assert_eq!(team.institution, inst.id);
            }
        }
    }

    #[test]
    fn institution_with_several_names_is_not_a_source() {
        let mut registry = registry(&["Xavier Pacifica", "Xavier Pacifica"]);
        registry.institution_mut(InstitutionId(1)).add_name("Xavier Pacifica");

        let deduped = Deduplicator::new(Box::new(RatioScorer), DedupConfig::default())
            .deduplicate(registry);
        assert_eq!(deduped.len(), 2);
    }

    #[test]
    fn flagged_institutions_are_skipped() {
        let mut registry = registry(&["Yale", "Yale"]);
        registry.institution_mut(InstitutionId(0)).flagged_for_deletion = true;

        let deduped = Deduplicator::new(Box::new(RatioScorer), DedupConfig::default())
            .deduplicate(registry);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped.institutions()[0].id, InstitutionId(1));
        assert_eq!(deduped.institutions()[0].team_count(), 1);
    }

    #[test]
    fn higher_threshold_blocks_fuzzy_merge() {
        let config = DedupConfig {
            threshold: 95,
            ..DedupConfig::default()
        };
        let deduped = Deduplicator::new(Box::new(RatioScorer), config)
            .deduplicate(registry(&["Xavier Pacifica", "Xavier Pacifico"]));
        assert_eq!(deduped.len(), 2);
    }

    #[test]
    fn abbreviations_need_acronym_matching() {
        let names = ["MIT", "M.I.T.", "Massachusetts Institute of Technology"];
        assert_eq!(dedup(&names).len(), 3);

        let deduped = dedup_with_acronyms(&names);
        assert_eq!(deduped.len(), 1);
        let survivor = deduped.institutions()[0];
        assert_eq!(survivor.team_count(), 3);
        assert_eq!(survivor.best_name(), "MIT");
    }

    #[test]
    fn most_frequent_variant_names_the_survivor() {
        let deduped = dedup_with_acronyms(&[
            "Massachusetts Institute of Technology",
            "M.I.T.",
            "MIT",
            "MIT",
        ]);
        assert_eq!(deduped.len(), 1);
        let survivor = deduped.institutions()[0];
        assert_eq!(survivor.team_count(), 4);
        assert_eq!(survivor.best_name(), "MIT");
    }

    #[test]
    fn literal_initials_keep_connectors_and_case() {
        let names = ["MIT", "M.I.T.", "Massachusetts Institute of Technology"];
        assert_eq!(dedup_with(&names, AcronymMode::Literal).len(), 3);

        let deduped = dedup_with(&["MIT", "Michigan Institute Technology"], AcronymMode::Literal);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped.institutions()[0].team_count(), 2);
    }

    #[test]
    fn long_names_never_use_the_acronym_rule() {
        let deduped = dedup_with_acronyms(&[
            "Beijing Normal University",
            "Boston Northeastern University",
        ]);
        assert_eq!(deduped.len(), 2);
    }

    #[test]
    fn empty_registry_dedups_to_empty() {
        let deduped = dedup(&[]);
        assert!(deduped.is_empty());
    }
}
