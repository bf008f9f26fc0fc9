//! Domain entities: the partition tree

use std::fmt;

use serde::{Deserialize, Serialize};

/// Internal node of an explanation: the domain of `variable` split into
/// disjoint, covering subsets, one per element.
///
/// Element order is display order. Disjointness and coverage are the
/// evaluator's business and are never checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionNode<P> {
    pub variable: String,
    pub elements: Vec<PartitionElement<P>>,
}

impl<P> PartitionNode<P> {
    pub fn new(variable: impl Into<String>, elements: Vec<PartitionElement<P>>) -> Self {
        Self {
            variable: variable.into(),
            elements,
        }
    }

    /// Number of partition levels from this node down to the deepest leaf.
    pub fn depth(&self) -> usize {
        1 + self
            .elements
            .iter()
            .map(|el| match &el.child {
                Child::Partition(node) => node.depth(),
                Child::Leaf(_) | Child::Empty => 0,
            })
            .max()
            .unwrap_or(0)
    }

    /// Total number of leaves below this node.
    pub fn leaf_count(&self) -> usize {
        self.elements
            .iter()
            .map(|el| match &el.child {
                Child::Partition(node) => node.leaf_count(),
                Child::Leaf(_) => 1,
                Child::Empty => 0,
            })
            .sum()
    }
}

/// One branch of a partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionElement<P> {
    pub subset: Subset,
    pub child: Child<P>,
}

impl<P> PartitionElement<P> {
    pub fn new(subset: Subset, child: Child<P>) -> Self {
        Self { subset, child }
    }

    /// Shorthand for an element ending in a leaf.
    pub fn leaf(subset: Subset, payload: P) -> Self {
        Self::new(subset, Child::Leaf(Leaf::new(payload)))
    }

    /// Shorthand for an element partitioned further.
    pub fn partition(subset: Subset, node: PartitionNode<P>) -> Self {
        Self::new(subset, Child::Partition(node))
    }
}

/// What hangs below a partition element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child<P> {
    Partition(PartitionNode<P>),
    Leaf(Leaf<P>),
    /// A partition that could not be decoded; renders nothing.
    Empty,
}

/// Terminal node carrying the evaluator's explanation for one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf<P> {
    pub payload: P,
}

impl<P> Leaf<P> {
    pub fn new(payload: P) -> Self {
        Self { payload }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubsetKind {
    /// The listed values are the members.
    Finite,
    /// The members are the domain minus the listed values.
    Cofinite,
}

impl SubsetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubsetKind::Finite => "finite",
            SubsetKind::Cofinite => "cofinite",
        }
    }
}

impl fmt::Display for SubsetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A subset of a variable's domain, as raw value strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subset {
    pub kind: SubsetKind,
    pub values: Vec<String>,
}

impl Subset {
    pub fn new<I, S>(kind: SubsetKind, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn finite<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(SubsetKind::Finite, values)
    }

    pub fn cofinite<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(SubsetKind::Cofinite, values)
    }
}

/// Identifies which of several side-by-side explanation trees a selection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(pub usize);

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for ColumnId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}
