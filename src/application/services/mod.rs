//! Application services

pub mod explanation;
pub mod navigator;

pub use explanation::{ExplanationDocument, ExplanationService};
pub use navigator::{MenuNavigator, NavigationOutcome, BACK_VALUE, SUBMENU_MARKER};
