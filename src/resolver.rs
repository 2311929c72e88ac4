//! The jurisdiction resolver.
//!
//! A pure function over materialized data: no I/O, no shared state, safe
//! to call concurrently. Cost is linear in the number of candidates times
//! their rule counts.

use crate::consulate::{Consulate, ConsulateProfile};
use crate::explain;
use crate::residence::Residence;
use crate::suggestion::{ScoredCandidate, Suggestion};
use crate::tier::MatchTier;

/// Resolves which consulate an applicant should use.
///
/// Evaluates every candidate's active jurisdiction rules in strict tier
/// order (region match, then country-wide catch-all, then unverified),
/// ranks the candidates, and explains each one. The result partitions the
/// input exactly: one suggested candidate (absent iff `candidates` is
/// empty) plus the rest as alternatives in descending score order. Ties
/// keep input order; the sort is stable by contract, not by accident.
///
/// Total over its input domain—malformed-but-well-typed data degrades to
/// the unverified tier rather than erroring.
///
/// # Examples
///
/// ```
/// use jurisolve::{resolve, Residence};
///
/// let suggestion = resolve(&[], &Residence::country("Iceland"));
/// assert!(suggestion.suggested.is_none());
/// assert!(suggestion.explanation.contains("Iceland"));
/// ```
#[must_use]
pub fn resolve(candidates: &[Consulate], residence: &Residence) -> Suggestion {
    let mut scored: Vec<(MatchTier, &Consulate)> = candidates
        .iter()
        .map(|c| (score_candidate(c, residence), c))
        .collect();

    // Stable sort: among equal tiers the first-encountered candidate wins.
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    let mut ranked: Vec<ScoredCandidate> = scored
        .into_iter()
        .map(|(tier, consulate)| {
            let covered_regions = consulate.covered_region_names();
            let explanation =
                explain::candidate_explanation(consulate, &tier, residence, &covered_regions);
            ScoredCandidate {
                consulate: ConsulateProfile::from(consulate),
                match_type: tier.kind(),
                score: tier.score(),
                explanation,
                covered_regions,
            }
        })
        .collect();

    let explanation = explain::overall_explanation(&ranked, residence);
    let suggested = if ranked.is_empty() {
        None
    } else {
        Some(ranked.remove(0))
    };

    Suggestion {
        suggested,
        alternatives: ranked,
        explanation,
    }
}

/// Scores one candidate against the applicant's residence.
///
/// Stops at the first applicable case: region match (only when the caller
/// supplied at least one region descriptor), then country-wide catch-all,
/// then unverified. Inactive rules are never considered.
fn score_candidate(consulate: &Consulate, residence: &Residence) -> MatchTier {
    if residence.has_region_hint() {
        let region_rule = consulate.active_jurisdictions().find(|rule| {
            let name_hit = residence
                .region
                .as_deref()
                .is_some_and(|region| rule.scope.matches_name(region));
            let code_hit = residence
                .region_code
                .as_deref()
                .is_some_and(|code| rule.scope.matches_code(code));
            name_hit || code_hit
        });
        if let Some(rule) = region_rule {
            return MatchTier::Region {
                priority: rule.priority,
            };
        }
    }

    if let Some(rule) = consulate
        .active_jurisdictions()
        .find(|rule| rule.is_country_wide())
    {
        return MatchTier::CountryWide {
            priority: rule.priority,
        };
    }

    MatchTier::Unverified
}
