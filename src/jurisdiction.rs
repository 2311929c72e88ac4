//! Jurisdiction rules—the claims that drive the resolver.
//!
//! A jurisdiction rule is the claim "this consulate serves applicants who
//! reside in this region (or anywhere) within this residence country."
//! The catch-all case is an explicit variant, not a null region name, so
//! "serves the whole country" can never be confused with "no data."

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consulate::{ConsulateId, CountryId};
use crate::error::ValidationError;

/// Which residents of the residence country a rule covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RegionScope {
    /// A named region, a coded region, or both (e.g. "California" / "US-CA").
    Specific {
        /// Free-text region name, e.g. "California".
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,

        /// Structured region code, e.g. an ISO 3166-2 subdivision like "US-CA".
        #[serde(skip_serializing_if = "Option::is_none")]
        code: Option<String>,
    },

    /// Every region in the residence country. A deliberate catch-all,
    /// distinct from a rule with no region data.
    CountryWide,
}

impl RegionScope {
    /// Creates a specific scope from a region name and/or code.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyRegionScope` if both are absent or blank.
    pub fn specific(
        name: Option<impl Into<String>>,
        code: Option<impl Into<String>>,
    ) -> Result<Self, ValidationError> {
        let name = name.map(Into::into).filter(|s| !s.trim().is_empty());
        let code = code.map(Into::into).filter(|s| !s.trim().is_empty());
        if name.is_none() && code.is_none() {
            return Err(ValidationError::EmptyRegionScope);
        }
        Ok(Self::Specific { name, code })
    }

    /// Creates a specific scope from a region name alone.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyRegionScope` if the name is blank.
    pub fn region(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::specific(Some(name), None::<String>)
    }

    /// Creates a specific scope from a region code alone.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyRegionScope` if the code is blank.
    pub fn code(code: impl Into<String>) -> Result<Self, ValidationError> {
        Self::specific(None::<String>, Some(code))
    }

    /// Returns true if this scope covers the whole residence country.
    #[must_use]
    pub const fn is_country_wide(&self) -> bool {
        matches!(self, Self::CountryWide)
    }

    /// Case-insensitive match against an applicant-supplied region name.
    #[must_use]
    pub fn matches_name(&self, region: &str) -> bool {
        match self {
            Self::Specific { name: Some(n), .. } => n.to_lowercase() == region.to_lowercase(),
            _ => false,
        }
    }

    /// Case-insensitive match against an applicant-supplied region code.
    #[must_use]
    pub fn matches_code(&self, region_code: &str) -> bool {
        match self {
            Self::Specific { code: Some(c), .. } => {
                c.to_lowercase() == region_code.to_lowercase()
            }
            _ => false,
        }
    }

    /// The region name, if this scope carries one.
    #[must_use]
    pub fn region_name(&self) -> Option<&str> {
        match self {
            Self::Specific { name, .. } => name.as_deref(),
            Self::CountryWide => None,
        }
    }
}

impl fmt::Display for RegionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Specific {
                name: Some(n),
                code: Some(c),
            } => write!(f, "{n} ({c})"),
            Self::Specific {
                name: Some(n),
                code: None,
            } => write!(f, "{n}"),
            Self::Specific {
                name: None,
                code: Some(c),
            } => write!(f, "{c}"),
            // Unreachable through the constructors, but Specific is an open struct variant.
            Self::Specific {
                name: None,
                code: None,
            } => write!(f, "(unspecified)"),
            Self::CountryWide => write!(f, "country-wide"),
        }
    }
}

/// The claim that a consulate serves applicants residing in a scope
/// within a residence country.
///
/// Rules are owned by their consulate and have no independent lifecycle.
/// `priority` is a tie-break weight among rules in the same match tier;
/// higher wins.
///
/// # Examples
///
/// ```
/// use jurisolve::{ConsulateId, CountryId, JurisdictionRule, RegionScope};
///
/// let rule = JurisdictionRule::new(
///     ConsulateId::new(),
///     CountryId::new(),
///     RegionScope::region("California").unwrap(),
/// )
/// .with_priority(10);
///
/// assert!(rule.is_active);
/// assert_eq!(rule.priority, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JurisdictionRule {
    /// The consulate that owns this rule.
    pub consulate_id: ConsulateId,

    /// The residence country the rule applies to.
    pub residence_country_id: CountryId,

    /// Which residents of that country the rule covers.
    pub scope: RegionScope,

    /// Tie-break weight within a match tier. Defaults to 0.
    #[serde(default)]
    pub priority: i32,

    /// Inactive rules are ignored by the resolver.
    #[serde(default = "default_active")]
    pub is_active: bool,

    /// Free-text operator notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

const fn default_active() -> bool {
    true
}

impl JurisdictionRule {
    /// Creates an active rule with priority 0.
    #[must_use]
    pub fn new(consulate_id: ConsulateId, residence_country_id: CountryId, scope: RegionScope) -> Self {
        Self {
            consulate_id,
            residence_country_id,
            scope,
            priority: 0,
            is_active: true,
            notes: None,
        }
    }

    /// Sets the tie-break priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Attaches operator notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Deactivates the rule.
    #[must_use]
    pub const fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Returns true if this rule is the country-wide catch-all.
    #[must_use]
    pub const fn is_country_wide(&self) -> bool {
        self.scope.is_country_wide()
    }
}
