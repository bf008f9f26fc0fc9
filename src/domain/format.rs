//! Domain-value formatting: short display labels and canonical value strings
//!
//! | subset                 | label            | value          |
//! |------------------------|------------------|----------------|
//! | any kind, no values    | see below        | `𝔻`            |
//! | finite `[a, b]`        | `a, b`           | `a, b`         |
//! | cofinite `[a, b]`      | **Other**        | `∁{a, b}`      |
//!
//! Joining no values gives an empty label. For an empty finite subset the
//! label deliberately departs from the plain join and falls back to `𝔻`, so
//! the entry stays visible. An empty cofinite subset is still labelled **Other**.

use std::fmt;

use itertools::Itertools;

use crate::domain::{Subset, SubsetKind};

/// Canonical marker for "the whole remaining domain".
pub const DOMAIN_WILDCARD: &str = "𝔻";

/// Prefix of a complement set.
pub const COMPLEMENT: char = '∁';

/// Label of a cofinite (complement) element.
pub const OTHER_LABEL: &str = "Other";

pub const VALUE_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    Plain,
    /// Rendered bold by hosts that support it.
    Strong,
}

/// Display label of a partition element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub emphasis: Emphasis,
}

impl Label {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Plain,
        }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Strong,
        }
    }

    pub fn is_strong(&self) -> bool {
        self.emphasis == Emphasis::Strong
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedSubset {
    pub label: Label,
    /// Canonical value string, recorded in selection paths.
    pub value: String,
}

/// Format a subset into its display label and canonical value string.
pub fn format_subset(subset: &Subset) -> FormattedSubset {
    let joined = subset.values.iter().join(VALUE_SEPARATOR);

    let (label, value) = match subset.kind {
        SubsetKind::Finite => (Label::plain(joined.clone()), joined),
        SubsetKind::Cofinite => (
            Label::strong(OTHER_LABEL),
            format!("{COMPLEMENT}{{{joined}}}"),
        ),
    };

    if subset.values.is_empty() {
        let label = match subset.kind {
            SubsetKind::Finite => Label::plain(DOMAIN_WILDCARD),
            SubsetKind::Cofinite => label,
        };
        return FormattedSubset {
            label,
            value: DOMAIN_WILDCARD.to_string(),
        };
    }

    FormattedSubset { label, value }
}
