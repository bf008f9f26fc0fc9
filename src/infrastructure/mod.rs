//! Infrastructure layer: I/O implementations, menu hosts and DI container
//!
//! This layer implements I/O boundary traits and wires up services.

pub mod di;
pub mod error;
pub mod traits;
pub mod tree_view;

pub use error::{InfraError, InfraResult};
