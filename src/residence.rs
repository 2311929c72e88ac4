//! The applicant's residence descriptors.
//!
//! Either region descriptor, both, or neither may be present. The country
//! name is display-only: matching works purely on the region descriptors,
//! since the candidate set is already fetched for one residence country.

use serde::{Deserialize, Serialize};

/// Where the applicant lives, as supplied by the caller.
///
/// # Examples
///
/// ```
/// use jurisolve::Residence;
///
/// let residence = Residence::country("United States")
///     .with_region("California")
///     .with_region_code("US-CA");
///
/// assert!(residence.has_region_hint());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Residence {
    /// Free-text region name, e.g. "California". Optional.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Structured region code, e.g. "US-CA". Optional.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,

    /// Display name of the residence country. Used only in explanation
    /// text, never for matching.
    pub country_name: String,
}

impl Residence {
    /// Creates residence descriptors with no region hint.
    #[must_use]
    pub fn country(country_name: impl Into<String>) -> Self {
        Self {
            region: None,
            region_code: None,
            country_name: country_name.into(),
        }
    }

    /// Adds the applicant's region name.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Adds the applicant's region code.
    #[must_use]
    pub fn with_region_code(mut self, code: impl Into<String>) -> Self {
        self.region_code = Some(code.into());
        self
    }

    /// Returns true if at least one region descriptor was supplied.
    /// Region-tier matching is skipped entirely when this is false.
    #[must_use]
    pub const fn has_region_hint(&self) -> bool {
        self.region.is_some() || self.region_code.is_some()
    }

    /// The region text to show in explanations: the name when given,
    /// otherwise the code.
    #[must_use]
    pub fn region_label(&self) -> Option<&str> {
        self.region.as_deref().or(self.region_code.as_deref())
    }

    /// "Region, Country" when a region was given, otherwise just the
    /// country name.
    #[must_use]
    pub fn location_phrase(&self) -> String {
        match self.region_label() {
            Some(region) => format!("{region}, {}", self.country_name),
            None => self.country_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_hint_by_default() {
        let residence = Residence::country("France");
        assert!(!residence.has_region_hint());
        assert!(residence.region_label().is_none());
        assert_eq!(residence.location_phrase(), "France");
    }

    #[test]
    fn test_region_name_hint() {
        let residence = Residence::country("United States").with_region("California");
        assert!(residence.has_region_hint());
        assert_eq!(residence.region_label(), Some("California"));
        assert_eq!(residence.location_phrase(), "California, United States");
    }

    #[test]
    fn test_code_only_hint_labels_with_code() {
        let residence = Residence::country("United States").with_region_code("US-CA");
        assert!(residence.has_region_hint());
        assert_eq!(residence.region_label(), Some("US-CA"));
        assert_eq!(residence.location_phrase(), "US-CA, United States");
    }

    #[test]
    fn test_name_preferred_over_code_in_label() {
        let residence = Residence::country("United States")
            .with_region("California")
            .with_region_code("US-CA");
        assert_eq!(residence.region_label(), Some("California"));
    }

    #[test]
    fn test_serialization_skips_absent_descriptors() {
        let json = serde_json::to_string(&Residence::country("Spain")).unwrap();
        assert!(!json.contains("region"));
        assert!(json.contains("Spain"));
    }
}
