//! expltree: explore partition-tree explanations
//!
//! An evaluator explains a verdict as a nested partition of free-variable
//! domains. This crate decodes such explanations, renders them as nested
//! menus (one level per partition, one entry per partition element) and
//! reports the root-to-leaf path when a leaf is selected.
//!
//! Layers, innermost first:
//! - [`domain`]: partition tree model, value formatting, selection paths, decoding
//! - [`application`]: menu rendering, selection dispatch, services
//! - [`infrastructure`]: filesystem/selector implementations, tree view host, DI
//! - [`cli`]: argument parsing and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
