//! Match tiers—the ordered evidence categories behind a suggestion.
//!
//! The three tiers form a strict hierarchy: a region-specific match beats
//! any country-wide match, which beats any unverified candidate. The
//! hierarchy is structural (variant order drives `Ord`), so rule priority
//! can only break ties within a tier, never across tiers. The numeric
//! score is derived at the output boundary, not carried around.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The category of evidence justifying a suggestion, with the matched
/// rule's tie-break priority where one exists.
///
/// Variants are declared weakest-first so the derived `Ord` compares the
/// tier before the payload.
///
/// # Examples
///
/// ```
/// use jurisolve::MatchTier;
///
/// // A region match outranks a country-wide match regardless of priority.
/// assert!(MatchTier::Region { priority: 0 } > MatchTier::CountryWide { priority: 100 });
/// assert!(MatchTier::CountryWide { priority: 0 } > MatchTier::Unverified);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MatchTier {
    /// No active rule applies to the applicant's residence.
    Unverified,

    /// A country-wide catch-all rule applies.
    CountryWide {
        /// Tie-break priority of the matched rule.
        priority: i32,
    },

    /// A rule names the applicant's region (by name or code).
    Region {
        /// Tie-break priority of the matched rule.
        priority: i32,
    },
}

impl MatchTier {
    /// Base score of a region-tier match.
    pub const REGION_BASE: i64 = 100;

    /// Base score of a country-wide match.
    pub const COUNTRY_WIDE_BASE: i64 = 50;

    /// Score of an unverified candidate. No priority bonus applies;
    /// there is no matching rule to draw one from.
    pub const UNVERIFIED_SCORE: i64 = 10;

    /// Derives the numeric score for output payloads.
    ///
    /// The 50-point gaps keep the tiers separated as long as rule
    /// priorities stay below 40—a documented assumption about upstream
    /// data, not an enforced invariant. Ranking itself compares tiers
    /// structurally and is immune to large priorities.
    #[must_use]
    pub const fn score(&self) -> i64 {
        match self {
            Self::Region { priority } => Self::REGION_BASE + *priority as i64,
            Self::CountryWide { priority } => Self::COUNTRY_WIDE_BASE + *priority as i64,
            Self::Unverified => Self::UNVERIFIED_SCORE,
        }
    }

    /// The payload-facing category, without the priority payload.
    #[must_use]
    pub const fn kind(&self) -> MatchKind {
        match self {
            Self::Region { .. } => MatchKind::Region,
            Self::CountryWide { .. } => MatchKind::CountryWide,
            Self::Unverified => MatchKind::Unverified,
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Region { priority } => write!(f, "region (priority {priority})"),
            Self::CountryWide { priority } => write!(f, "country_wide (priority {priority})"),
            Self::Unverified => write!(f, "unverified"),
        }
    }
}

/// The match category as it appears in output payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Region,
    CountryWide,
    Unverified,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Region => write!(f, "region"),
            Self::CountryWide => write!(f, "country_wide"),
            Self::Unverified => write!(f, "unverified"),
        }
    }
}
