//! Selection paths: the (variable, value) pairs taken from the root to a node

use std::fmt;

use im::Vector;

/// Root-to-node path through a partition tree.
///
/// Backed by persistent vectors: `extend` shares structure with the receiver
/// and never modifies it, so sibling branches cannot see each other's steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionPath {
    variable_names: Vector<String>,
    domain_values: Vector<String>,
}

impl SelectionPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path one level deeper.
    pub fn extend(&self, variable: impl Into<String>, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.variable_names.push_back(variable.into());
        next.domain_values.push_back(value.into());
        next
    }

    pub fn len(&self) -> usize {
        self.variable_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_names.is_empty()
    }

    pub fn variable_names(&self) -> Vec<String> {
        self.variable_names.iter().cloned().collect()
    }

    pub fn domain_values(&self) -> Vec<String> {
        self.domain_values.iter().cloned().collect()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.variable_names
            .iter()
            .zip(self.domain_values.iter())
            .map(|(var, val)| (var.as_str(), val.as_str()))
    }
}

impl fmt::Display for SelectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (var, val)) in self.pairs().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{var}={val}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_path_when_extending_then_receiver_is_unchanged() {
        let root = SelectionPath::new().extend("x", "a");
        let left = root.extend("y", "1");
        let right = root.extend("y", "2");

        assert_eq!(root.domain_values(), vec!["a"]);
        assert_eq!(left.domain_values(), vec!["a", "1"]);
        assert_eq!(right.domain_values(), vec!["a", "2"]);
        assert_eq!(left.variable_names(), right.variable_names());
    }

    #[test]
    fn given_empty_path_when_displayed_then_is_empty_string() {
        assert!(SelectionPath::new().is_empty());
        assert_eq!(SelectionPath::new().to_string(), "");
    }

    #[test]
    fn given_two_level_path_when_displayed_then_joins_pairs() {
        let path = SelectionPath::new().extend("x", "1, 2").extend("y", "∁{3}");
        assert_eq!(path.len(), 2);
        assert_eq!(path.to_string(), "x=1, 2; y=∁{3}");
    }
}
