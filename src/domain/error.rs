//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Defects in explanation data. Decoding absorbs them and reports them as issues.
/// `location` is a JSON-pointer-like path to the offending node, e.g. `/part/1`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("missing field `{field}` at {location}")]
    MissingField { location: String, field: &'static str },

    #[error("field `{field}` at {location} must be {expected}")]
    InvalidField {
        location: String,
        field: &'static str,
        expected: &'static str,
    },

    #[error("unknown subset kind `{kind}` at {location}")]
    UnknownSubsetKind { location: String, kind: String },

    #[error("partition on `{variable}` at {location} has no elements")]
    EmptyPartition { location: String, variable: String },
}
