use crate::config::ScorerKind;
use rapidfuzz::fuzz;
use strsim::{jaro_winkler, normalized_levenshtein};

/// Scores how alike two strings are, from 0 (nothing shared) to 100
/// (identical).
pub trait SimilarityScorer: Send + Sync {
    fn score(&self, a: &str, b: &str) -> u8;

    fn name(&self) -> &'static str;
}

fn to_percent(similarity: f64) -> u8 {
    (similarity.clamp(0.0, 1.0) * 100.0).round_ties_even() as u8
}

/// Indel ratio, `1 - indel / (len_a + len_b)`. Insertions and deletions cost
/// one each and a substitution costs two, so a dropped trailing character
/// scores higher than under plain Levenshtein.
#[derive(Debug, Default, Clone, Copy)]
pub struct RatioScorer;

impl SimilarityScorer for RatioScorer {
    fn score(&self, a: &str, b: &str) -> u8 {
        to_percent(fuzz::ratio(a.chars(), b.chars()))
    }

    fn name(&self) -> &'static str {
        "ratio"
    }
}

/// Edit-distance ratio: one edit in a 15 character name scores 93.
#[derive(Debug, Default, Clone, Copy)]
pub struct LevenshteinScorer;

impl SimilarityScorer for LevenshteinScorer {
    fn score(&self, a: &str, b: &str) -> u8 {
        to_percent(normalized_levenshtein(a, b))
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JaroWinklerScorer;

impl SimilarityScorer for JaroWinklerScorer {
    fn score(&self, a: &str, b: &str) -> u8 {
        to_percent(jaro_winkler(a, b))
    }

    fn name(&self) -> &'static str {
        "jaro-winkler"
    }
}

pub fn scorer_for(kind: ScorerKind) -> Box<dyn SimilarityScorer> {
    match kind {
        ScorerKind::Ratio => Box::new(RatioScorer),
        ScorerKind::Levenshtein => Box::new(LevenshteinScorer),
        ScorerKind::JaroWinkler => Box::new(JaroWinklerScorer),
    }
}
