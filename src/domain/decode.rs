//! Decoding evaluator output into partition trees
//!
//! The evaluator emits explanations as JSON. A partition node looks like
//!
//! ```json
//! { "type": "node", "kind": "partition", "var": "x",
//!   "part": [ { "subset_type": "finite", "subset_values": ["1", "2"], "type": "leaf", ... } ] }
//! ```
//!
//! Every entry of `part` carries its subset and is, at the same time, the
//! child of that subset: a partition-tagged entry is decoded recursively,
//! any other entry becomes a leaf whose payload is the entry itself.
//!
//! Decoding never fails. Defects are absorbed where they occur and reported
//! as issues next to the tree:
//! - a partition without a usable `var` becomes [`Child::Empty`] (or no tree
//!   at the top level)
//! - a missing or non-array `part` leaves the node with no elements
//! - any `subset_type` other than `finite` is treated as cofinite
//! - non-string subset values are stringified, a non-array `subset_values`
//!   counts as no values

use serde_json::Value;
use tracing::{debug, trace};

use crate::domain::{
    Child, DomainError, Leaf, PartitionElement, PartitionNode, Subset, SubsetKind,
};

/// Whether a JSON value is a further partitioned node or a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Partition,
    Leaf,
}

/// A decoded explanation and the defects absorbed while decoding it.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<P> {
    pub node: Option<PartitionNode<P>>,
    pub issues: Vec<DomainError>,
}

/// Classify a value: `type == "node"` or `kind == "partition"` marks a partition.
pub fn classify(value: &Value) -> NodeKind {
    let tagged = |field: &str, expected: &str| {
        value.get(field).and_then(Value::as_str) == Some(expected)
    };
    if tagged("type", "node") || tagged("kind", "partition") {
        NodeKind::Partition
    } else {
        NodeKind::Leaf
    }
}

/// Decode a top-level explanation.
///
/// Values that are not partitions (a bare verdict, `null`, ...) decode to
/// no tree and render as nothing.
pub fn decode_explanation(value: &Value) -> Decoded<Value> {
    let mut issues = Vec::new();
    let node = match classify(value) {
        NodeKind::Partition => decode_partition(value, "", &mut issues),
        NodeKind::Leaf => {
            trace!("decode_explanation: top-level value is not a partition");
            None
        }
    };
    if !issues.is_empty() {
        debug!("decode_explanation: absorbed {} issue(s)", issues.len());
    }
    Decoded { node, issues }
}

fn decode_partition(
    value: &Value,
    location: &str,
    issues: &mut Vec<DomainError>,
) -> Option<PartitionNode<Value>> {
    let variable = match value.get("var") {
        Some(Value::String(var)) => var,
        Some(_) => {
            issues.push(invalid(location, "var", "a string"));
            return None;
        }
        None => {
            issues.push(missing(location, "var"));
            return None;
        }
    };

    let elements = match value.get("part") {
        Some(Value::Array(part)) => {
            if part.is_empty() {
                issues.push(DomainError::EmptyPartition {
                    location: display_location(location),
                    variable: variable.clone(),
                });
            }
            part.iter()
                .enumerate()
                .map(|(i, el)| decode_element(el, &format!("{location}/part/{i}"), issues))
                .collect()
        }
        Some(_) => {
            issues.push(invalid(location, "part", "an array"));
            Vec::new()
        }
        None => {
            issues.push(missing(location, "part"));
            Vec::new()
        }
    };

    trace!(
        "decode_partition: var={} elements={} at {}",
        variable,
        elements.len(),
        display_location(location)
    );
    Some(PartitionNode::new(variable.as_str(), elements))
}

fn decode_element(
    value: &Value,
    location: &str,
    issues: &mut Vec<DomainError>,
) -> PartitionElement<Value> {
    let subset = decode_subset(value, location, issues);
    let child = match classify(value) {
        NodeKind::Partition => {
            decode_partition(value, location, issues).map_or(Child::Empty, Child::Partition)
        }
        NodeKind::Leaf => Child::Leaf(Leaf::new(value.clone())),
    };
    PartitionElement::new(subset, child)
}

fn decode_subset(value: &Value, location: &str, issues: &mut Vec<DomainError>) -> Subset {
    let kind = match value.get("subset_type") {
        Some(Value::String(kind)) if kind == "finite" => SubsetKind::Finite,
        Some(Value::String(kind)) if kind == "cofinite" => SubsetKind::Cofinite,
        Some(other) => {
            issues.push(DomainError::UnknownSubsetKind {
                location: display_location(location),
                kind: value_text(other),
            });
            SubsetKind::Cofinite
        }
        None => {
            issues.push(missing(location, "subset_type"));
            SubsetKind::Cofinite
        }
    };

    let values = match value.get("subset_values") {
        Some(Value::Array(values)) => values.iter().map(value_text).collect(),
        Some(_) => {
            issues.push(invalid(location, "subset_values", "an array"));
            Vec::new()
        }
        None => {
            issues.push(missing(location, "subset_values"));
            Vec::new()
        }
    };

    Subset::new(kind, values)
}

/// Strings as-is, `null` as empty, anything else as compact JSON.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn display_location(location: &str) -> String {
    if location.is_empty() {
        "/".to_string()
    } else {
        location.to_string()
    }
}

fn missing(location: &str, field: &'static str) -> DomainError {
    DomainError::MissingField {
        location: display_location(location),
        field,
    }
}

fn invalid(location: &str, field: &'static str, expected: &'static str) -> DomainError {
    DomainError::InvalidField {
        location: display_location(location),
        field,
        expected,
    }
}
