//! # jurisolve - Consulate Jurisdiction Resolution
//!
//! Given a destination country's consulates in an applicant's residence
//! country, jurisolve determines which office the applicant should use,
//! ranked by confidence, with a human-readable justification for every
//! candidate.
//!
//! ## Core Concepts
//!
//! - **Consulate**: a physical office (embassy, consulate, or visa
//!   application center) with the jurisdiction rules it owns
//! - **Jurisdiction rule**: the claim that an office serves a residence
//!   region, or a whole residence country (an explicit catch-all scope)
//! - **Match tier**: the ordered evidence category behind a suggestion—
//!   `region` beats `country_wide` beats `unverified`, structurally
//! - **Suggestion**: one best candidate plus ranked alternatives, each
//!   carrying its score and explanation
//!
//! The resolver is a pure function over materialized data. Fetching the
//! candidates, authenticating callers, and shipping the JSON response are
//! the surrounding application's concern.
//!
//! ## Usage
//!
//! ```rust
//! use jurisolve::{
//!     resolve, Consulate, CountryId, JurisdictionRule, OfficeType, RegionScope, Residence,
//! };
//!
//! let destination = CountryId::new();
//! let host = CountryId::new();
//!
//! let consulate = Consulate::builder()
//!     .name("Consulate General of France, San Francisco")
//!     .office_type(OfficeType::Consulate)
//!     .country_id(destination)
//!     .host_country_id(host)
//!     .city("San Francisco")
//!     .build()
//!     .unwrap();
//! let rule = JurisdictionRule::new(
//!     consulate.id,
//!     host,
//!     RegionScope::region("California").unwrap(),
//! );
//! let consulate = consulate.with_rule(rule);
//!
//! let residence = Residence::country("United States").with_region("California");
//! let suggestion = resolve(&[consulate], &residence);
//! assert!(suggestion.suggested.is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod consulate;
pub mod error;
pub mod explain;
pub mod jurisdiction;
pub mod residence;
pub mod resolver;
pub mod suggestion;
pub mod tier;

// Re-export primary types at crate root for convenience
pub use consulate::{Consulate, ConsulateBuilder, ConsulateId, ConsulateProfile, CountryId, OfficeType};
pub use error::ValidationError;
pub use jurisdiction::{JurisdictionRule, RegionScope};
pub use residence::Residence;
pub use resolver::resolve;
pub use suggestion::{ScoredCandidate, Suggestion};
pub use tier::{MatchKind, MatchTier};
