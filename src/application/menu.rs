//! Nested menu rendering of partition trees and leaf selection dispatch
//!
//! `render` turns one partition node into one menu level: a group header
//! naming the variable, then one item per partition element in input order.
//! Elements that are partitioned further become submenus, rendered lazily
//! when a host opens them; elements ending in a leaf become entries whose
//! activation reports the full root-to-leaf path to a [`SelectionHandler`].

use serde::Serialize;
use tracing::{debug, trace};

use crate::domain::{
    format_subset, Child, ColumnId, Label, Leaf, PartitionNode, SelectionPath,
};

/// What a host receives when the user activates a leaf entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection<P> {
    pub leaf: P,
    pub column: ColumnId,
    pub variable_names: Vec<String>,
    pub domain_values: Vec<String>,
}

/// Host callbacks invoked on leaf activation.
pub trait SelectionHandler<P> {
    /// Called once per activated leaf, with the complete path.
    fn on_activate(&mut self, selection: Selection<P>);

    /// Close the whole menu tree.
    fn on_dismiss(&mut self);
}

/// Adapts a pair of closures into a [`SelectionHandler`].
pub struct Callbacks<A, D> {
    on_activate: A,
    on_dismiss: D,
}

impl<A, D> Callbacks<A, D> {
    pub fn new(on_activate: A, on_dismiss: D) -> Self {
        Self {
            on_activate,
            on_dismiss,
        }
    }
}

impl<P, A, D> SelectionHandler<P> for Callbacks<A, D>
where
    A: FnMut(Selection<P>),
    D: FnMut(),
{
    fn on_activate(&mut self, selection: Selection<P>) {
        (self.on_activate)(selection)
    }

    fn on_dismiss(&mut self) {
        (self.on_dismiss)()
    }
}

/// The host's nested collapsible menu primitive.
pub trait MenuHost<'a, P> {
    /// A labelled, non-selectable group header.
    fn group(&mut self, header: &str);

    /// A clickable leaf entry.
    fn entry(&mut self, entry: &LeafEntry<'a, P>);

    /// An entry that opens a nested level. Hosts call [`Submenu::open`] when
    /// (and if) the user expands it.
    fn submenu(&mut self, submenu: &Submenu<'a, P>);
}

/// One rendered menu level.
#[derive(Debug)]
pub struct MenuLevel<'a, P> {
    header: Option<&'a str>,
    items: Vec<MenuItem<'a, P>>,
}

impl<'a, P> MenuLevel<'a, P> {
    fn empty() -> Self {
        Self {
            header: None,
            items: Vec::new(),
        }
    }

    pub fn header(&self) -> Option<&'a str> {
        self.header
    }

    pub fn items(&self) -> &[MenuItem<'a, P>] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.items.is_empty()
    }

    /// Walk this level into a host: header first, then items in order.
    pub fn present<H>(&self, host: &mut H)
    where
        H: MenuHost<'a, P> + ?Sized,
    {
        if let Some(header) = self.header {
            host.group(header);
        }
        for item in &self.items {
            match item {
                MenuItem::Entry(entry) => host.entry(entry),
                MenuItem::Submenu(submenu) => host.submenu(submenu),
            }
        }
    }

    /// All leaf entries reachable from this level, depth-first, left to right.
    pub fn leaf_entries(&self) -> Vec<LeafEntry<'a, P>> {
        let mut entries = Vec::new();
        for item in &self.items {
            match item {
                MenuItem::Entry(entry) => entries.push(entry.clone()),
                MenuItem::Submenu(submenu) => {
                    if let Some(level) = submenu.open() {
                        entries.extend(level.leaf_entries());
                    }
                }
            }
        }
        entries
    }
}

#[derive(Debug)]
pub enum MenuItem<'a, P> {
    Entry(LeafEntry<'a, P>),
    Submenu(Submenu<'a, P>),
}

impl<'a, P> MenuItem<'a, P> {
    pub fn label(&self) -> &Label {
        match self {
            MenuItem::Entry(entry) => &entry.label,
            MenuItem::Submenu(submenu) => &submenu.label,
        }
    }

    pub fn path(&self) -> &SelectionPath {
        match self {
            MenuItem::Entry(entry) => &entry.path,
            MenuItem::Submenu(submenu) => &submenu.path,
        }
    }
}

impl<P> Clone for MenuItem<'_, P> {
    fn clone(&self) -> Self {
        match self {
            MenuItem::Entry(entry) => MenuItem::Entry(entry.clone()),
            MenuItem::Submenu(submenu) => MenuItem::Submenu(submenu.clone()),
        }
    }
}

/// A clickable entry for a leaf.
#[derive(Debug)]
pub struct LeafEntry<'a, P> {
    label: Label,
    leaf: &'a Leaf<P>,
    column: ColumnId,
    path: SelectionPath,
}

impl<'a, P> LeafEntry<'a, P> {
    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn path(&self) -> &SelectionPath {
        &self.path
    }

    pub fn payload(&self) -> &'a P {
        &self.leaf.payload
    }

    pub fn column(&self) -> ColumnId {
        self.column
    }
}

impl<P: Clone> LeafEntry<'_, P> {
    pub fn selection(&self) -> Selection<P> {
        Selection {
            leaf: self.leaf.payload.clone(),
            column: self.column,
            variable_names: self.path.variable_names(),
            domain_values: self.path.domain_values(),
        }
    }

    /// Report this leaf to the handler, then close the menu.
    pub fn activate<H>(&self, handler: &mut H)
    where
        H: SelectionHandler<P> + ?Sized,
    {
        debug!("activate: column={} path=[{}]", self.column, self.path);
        handler.on_activate(self.selection());
        handler.on_dismiss();
    }
}

impl<P> Clone for LeafEntry<'_, P> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            leaf: self.leaf,
            column: self.column,
            path: self.path.clone(),
        }
    }
}

/// An entry that expands into the partition of its child node.
#[derive(Debug)]
pub struct Submenu<'a, P> {
    label: Label,
    node: &'a PartitionNode<P>,
    column: ColumnId,
    path: SelectionPath,
    parent_open: bool,
}

impl<'a, P> Submenu<'a, P> {
    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn path(&self) -> &SelectionPath {
        &self.path
    }

    /// Variable partitioned by the nested level.
    pub fn variable(&self) -> &'a str {
        &self.node.variable
    }

    /// Whether the enclosing menu is open, i.e. whether this submenu may open.
    pub fn can_open(&self) -> bool {
        self.parent_open
    }

    /// Render the nested level. Nothing is rendered while the enclosing menu is closed.
    pub fn open(&self) -> Option<MenuLevel<'a, P>> {
        if !self.parent_open {
            trace!("open: parent menu closed, not expanding {}", self.label);
            return None;
        }
        Some(render(Some(self.node), self.column, &self.path, true))
    }
}

impl<P> Clone for Submenu<'_, P> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            node: self.node,
            column: self.column,
            path: self.path.clone(),
            parent_open: self.parent_open,
        }
    }
}

/// Render one menu level for `node`.
///
/// `path` holds the (variable, value) pairs leading to `node`; `open` tells
/// whether the menu holding this level is open. An absent node renders as an
/// empty level; elements whose subtree could not be decoded render nothing.
pub fn render<'a, P>(
    node: Option<&'a PartitionNode<P>>,
    column: ColumnId,
    path: &SelectionPath,
    open: bool,
) -> MenuLevel<'a, P> {
    let Some(node) = node else {
        trace!("render: no partition for column {}", column);
        return MenuLevel::empty();
    };

    let items = node
        .elements
        .iter()
        .filter_map(|element| {
            let formatted = format_subset(&element.subset);
            let child_path = path.extend(node.variable.as_str(), formatted.value);
            match &element.child {
                Child::Partition(child) => Some(MenuItem::Submenu(Submenu {
                    label: formatted.label,
                    node: child,
                    column,
                    path: child_path,
                    parent_open: open,
                })),
                Child::Leaf(leaf) => Some(MenuItem::Entry(LeafEntry {
                    label: formatted.label,
                    leaf,
                    column,
                    path: child_path,
                })),
                Child::Empty => {
                    trace!("render: skipping undecodable subtree at [{}]", child_path);
                    None
                }
            }
        })
        .collect::<Vec<_>>();

    trace!(
        "render: var={} items={} depth={}",
        node.variable,
        items.len(),
        path.len()
    );
    MenuLevel {
        header: Some(node.variable.as_str()),
        items,
    }
}

/// Render the top level of a column's explanation.
pub fn render_root<P>(node: Option<&PartitionNode<P>>, column: ColumnId) -> MenuLevel<'_, P> {
    render(node, column, &SelectionPath::new(), true)
}
