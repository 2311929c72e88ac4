//! Suggestion payloads—the resolver's structured response.
//!
//! A resolution returns one suggested consulate (when any candidate
//! exists), the remaining candidates ranked as alternatives, and a
//! one-sentence summary. Together suggested and alternatives partition
//! the input candidate set exactly once each.

use serde::{Deserialize, Serialize};

use crate::consulate::ConsulateProfile;
use crate::tier::MatchKind;

/// A candidate consulate annotated with its ranking evidence.
///
/// Created fresh on every resolution call; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// The consulate, with its jurisdiction rules stripped.
    pub consulate: ConsulateProfile,

    /// The evidence category behind the score.
    pub match_type: MatchKind,

    /// Numeric confidence score (tier base plus matched-rule priority).
    pub score: i64,

    /// Human-readable justification for this candidate.
    pub explanation: String,

    /// Named regions this consulate is known to cover.
    #[serde(default)]
    pub covered_regions: Vec<String>,
}

/// The resolver's response: best suggestion, ranked alternatives, and an
/// overall summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The highest-ranked candidate. `None` iff no candidates were given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested: Option<ScoredCandidate>,

    /// Remaining candidates, sorted by descending score.
    #[serde(default)]
    pub alternatives: Vec<ScoredCandidate>,

    /// One-sentence summary of the whole result.
    pub explanation: String,
}

impl Suggestion {
    /// Creates the empty-result suggestion.
    #[must_use]
    pub fn empty(explanation: impl Into<String>) -> Self {
        Self {
            suggested: None,
            alternatives: Vec::new(),
            explanation: explanation.into(),
        }
    }

    /// Total number of candidates in the response.
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        usize::from(self.suggested.is_some()) + self.alternatives.len()
    }

    /// Returns true if the top alternative ties the suggestion on score.
    ///
    /// Ambiguous coverage (several consulates claiming the same residence
    /// country with equal weight) is a valid real-world state; this
    /// surfaces it so callers can prompt the applicant to double-check.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        match (&self.suggested, self.alternatives.first()) {
            (Some(best), Some(runner_up)) => best.score == runner_up.score,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consulate::{Consulate, CountryId, OfficeType};

    fn profile(name: &str) -> ConsulateProfile {
        let consulate = Consulate::builder()
            .name(name)
            .office_type(OfficeType::Consulate)
            .country_id(CountryId::new())
            .host_country_id(CountryId::new())
            .city("Testville")
            .build()
            .unwrap();
        ConsulateProfile::from(&consulate)
    }

    fn candidate(name: &str, score: i64) -> ScoredCandidate {
        ScoredCandidate {
            consulate: profile(name),
            match_type: MatchKind::CountryWide,
            score,
            explanation: String::new(),
            covered_regions: Vec::new(),
        }
    }

    #[test]
    fn test_empty_suggestion() {
        let suggestion = Suggestion::empty("no data");
        assert!(suggestion.suggested.is_none());
        assert!(suggestion.alternatives.is_empty());
        assert_eq!(suggestion.candidate_count(), 0);
        assert!(!suggestion.is_ambiguous());
    }

    #[test]
    fn test_candidate_count() {
        let suggestion = Suggestion {
            suggested: Some(candidate("A", 55)),
            alternatives: vec![candidate("B", 50), candidate("C", 10)],
            explanation: String::new(),
        };
        assert_eq!(suggestion.candidate_count(), 3);
    }

    #[test]
    fn test_ambiguity_on_score_tie() {
        let tied = Suggestion {
            suggested: Some(candidate("A", 50)),
            alternatives: vec![candidate("B", 50)],
            explanation: String::new(),
        };
        assert!(tied.is_ambiguous());

        let clear = Suggestion {
            suggested: Some(candidate("A", 110)),
            alternatives: vec![candidate("B", 50)],
            explanation: String::new(),
        };
        assert!(!clear.is_ambiguous());
    }

    #[test]
    fn test_serialization_shape() {
        let suggestion = Suggestion {
            suggested: Some(candidate("A", 110)),
            alternatives: vec![],
            explanation: "summary".to_string(),
        };
        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json["suggested"]["score"], 110);
        assert_eq!(json["suggested"]["match_type"], "country_wide");
        assert!(json["suggested"]["consulate"].get("jurisdictions").is_none());

        let empty = serde_json::to_value(Suggestion::empty("none")).unwrap();
        assert!(empty.get("suggested").is_none());
    }
}
