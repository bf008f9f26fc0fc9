//! Domain layer: the partition tree model and its pure functions
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod decode;
pub mod entities;
pub mod error;
pub mod format;
pub mod path;

pub use decode::{classify, decode_explanation, Decoded, NodeKind};
pub use entities::*;
pub use error::DomainError;
pub use format::{format_subset, Emphasis, FormattedSubset, Label, DOMAIN_WILDCARD};
pub use path::SelectionPath;
