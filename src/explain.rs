//! Explanation text for suggestions.
//!
//! Every candidate gets a templated sentence keyed on its match tier, and
//! the response as a whole gets a one-sentence summary. The templates live
//! here so the resolver stays pure ranking logic.

use crate::consulate::Consulate;
use crate::residence::Residence;
use crate::suggestion::ScoredCandidate;
use crate::tier::MatchTier;

/// Builds the per-candidate justification sentence.
///
/// `covered_regions` is the consulate's full list of named regions; it is
/// appended to region-tier explanations when the office covers more than
/// one region, so the applicant can see the whole claim.
#[must_use]
pub fn candidate_explanation(
    consulate: &Consulate,
    tier: &MatchTier,
    residence: &Residence,
    covered_regions: &[String],
) -> String {
    match tier {
        MatchTier::Region { .. } => {
            let mut text = format!(
                "{} in {} serves applicants residing in {}.",
                consulate.name,
                consulate.city,
                residence.location_phrase(),
            );
            if covered_regions.len() > 1 {
                text.push_str(&format!(
                    " Its jurisdiction covers: {}.",
                    covered_regions.join(", ")
                ));
            }
            text
        }
        MatchTier::CountryWide { .. } => format!(
            "{} in {} serves all of {}. Please verify that your specific region is covered.",
            consulate.name, consulate.city, residence.country_name,
        ),
        MatchTier::Unverified => format!(
            "{} in {} was found for this destination, but no jurisdiction data is available for your region. Please verify with the office directly.",
            consulate.name, consulate.city,
        ),
    }
}

/// Builds the top-level summary for a ranked candidate list.
///
/// Zero candidates gets a no-data sentence, a single candidate reuses its
/// own explanation verbatim, and multiple candidates get a count plus the
/// top-ranked office named as the most likely match.
#[must_use]
pub fn overall_explanation(ranked: &[ScoredCandidate], residence: &Residence) -> String {
    match ranked {
        [] => format!(
            "No consulate data is available for this destination in {} yet.",
            residence.country_name,
        ),
        [only] => only.explanation.clone(),
        [best, ..] => format!(
            "Found {} consulates that may serve your region in {}. {} is the most likely match.",
            ranked.len(),
            residence.location_phrase(),
            best.consulate.name,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consulate::{ConsulateProfile, CountryId, OfficeType};
    use crate::tier::MatchKind;

    fn consulate(name: &str, city: &str) -> Consulate {
        Consulate::builder()
            .name(name)
            .office_type(OfficeType::Consulate)
            .country_id(CountryId::new())
            .host_country_id(CountryId::new())
            .city(city)
            .build()
            .unwrap()
    }

    fn scored(consulate: &Consulate, explanation: &str) -> ScoredCandidate {
        ScoredCandidate {
            consulate: ConsulateProfile::from(consulate),
            match_type: MatchKind::Region,
            score: 100,
            explanation: explanation.to_string(),
            covered_regions: Vec::new(),
        }
    }

    #[test]
    fn test_region_explanation_cites_region_and_city() {
        let c = consulate("Consulate General of France", "San Francisco");
        let residence = Residence::country("United States").with_region("California");
        let text = candidate_explanation(
            &c,
            &MatchTier::Region { priority: 0 },
            &residence,
            &["California".to_string()],
        );
        assert!(text.contains("Consulate General of France"));
        assert!(text.contains("San Francisco"));
        assert!(text.contains("California, United States"));
        assert!(!text.contains("jurisdiction covers"));
    }

    #[test]
    fn test_region_explanation_lists_multiple_covered_regions() {
        let c = consulate("Consulate General of France", "San Francisco");
        let residence = Residence::country("United States").with_region("Nevada");
        let covered = vec![
            "California".to_string(),
            "Nevada".to_string(),
            "Oregon".to_string(),
        ];
        let text =
            candidate_explanation(&c, &MatchTier::Region { priority: 0 }, &residence, &covered);
        assert!(text.contains("California, Nevada, Oregon"));
    }

    #[test]
    fn test_country_wide_explanation_asks_to_verify() {
        let c = consulate("Embassy of France", "Washington, D.C.");
        let residence = Residence::country("United States");
        let text = candidate_explanation(
            &c,
            &MatchTier::CountryWide { priority: 0 },
            &residence,
            &[],
        );
        assert!(text.contains("all of United States"));
        assert!(text.contains("verify"));
    }

    #[test]
    fn test_unverified_explanation_asks_direct_verification() {
        let c = consulate("Embassy of France", "Washington, D.C.");
        let residence = Residence::country("United States").with_region("Guam");
        let text = candidate_explanation(&c, &MatchTier::Unverified, &residence, &[]);
        assert!(text.contains("no jurisdiction data"));
        assert!(text.contains("directly"));
    }

    #[test]
    fn test_overall_no_candidates() {
        let residence = Residence::country("Iceland");
        let text = overall_explanation(&[], &residence);
        assert!(text.contains("No consulate data"));
        assert!(text.contains("Iceland"));
    }

    #[test]
    fn test_overall_single_candidate_reuses_its_explanation() {
        let c = consulate("Embassy of France", "Reykjavik");
        let residence = Residence::country("Iceland");
        let only = scored(&c, "its very own sentence");
        assert_eq!(
            overall_explanation(&[only], &residence),
            "its very own sentence"
        );
    }

    #[test]
    fn test_overall_many_candidates_names_the_top() {
        let a = consulate("Office A", "CityA");
        let b = consulate("Office B", "CityB");
        let residence = Residence::country("United States").with_region("California");
        let ranked = vec![scored(&a, ""), scored(&b, "")];
        let text = overall_explanation(&ranked, &residence);
        assert!(text.contains("Found 2 consulates"));
        assert!(text.contains("California, United States"));
        assert!(text.contains("Office A is the most likely match"));
    }

    #[test]
    fn test_overall_many_without_region_uses_country_only() {
        let a = consulate("Office A", "CityA");
        let b = consulate("Office B", "CityB");
        let residence = Residence::country("United States");
        let ranked = vec![scored(&a, ""), scored(&b, "")];
        let text = overall_explanation(&ranked, &residence);
        assert!(text.contains("in United States."));
    }
}
