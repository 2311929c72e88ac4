//! Error types for jurisolve.
//!
//! Only data construction can fail. The resolver itself is a total
//! function over its input domain: empty candidate lists, absent region
//! descriptors, and no-match cases are valid outputs, not errors.

use thiserror::Error;

/// Validation errors raised while building consulates and jurisdiction rules.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Consulate name cannot be empty")]
    EmptyConsulateName,

    #[error("Consulate city cannot be empty")]
    EmptyCity,

    #[error("A specific region scope needs a region name, a region code, or both")]
    EmptyRegionScope,

    #[error("Required field '{field}' is missing")]
    MissingField {
        field: String,
    },
}
