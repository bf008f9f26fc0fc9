//! Tree view host: prints a fully expanded menu tree with termtree

use std::fmt::Display;

use colored::Colorize;
use itertools::Itertools;
use termtree::Tree;
use tracing::instrument;

use crate::application::menu::{LeafEntry, MenuHost, MenuLevel, Submenu};
use crate::domain::Label;

/// Payload summaries longer than this are cut off.
const SUMMARY_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeViewOptions {
    /// Render strong labels bold.
    pub color: bool,
    /// Append a payload summary to each leaf.
    pub payload: bool,
}

/// Menu host collecting one level into a `termtree::Tree`, opening every submenu.
pub struct TreeView {
    options: TreeViewOptions,
    header: Option<String>,
    children: Vec<Tree<String>>,
}

impl TreeView {
    pub fn new(options: TreeViewOptions) -> Self {
        Self {
            options,
            header: None,
            children: Vec::new(),
        }
    }

    pub fn finish(self) -> Tree<String> {
        let root = self.header.unwrap_or_else(|| "(no partition)".to_string());
        Tree::new(root).with_leaves(self.children)
    }

    fn style(&self, label: &Label) -> String {
        if self.options.color && label.is_strong() {
            label.text.bold().to_string()
        } else {
            label.text.clone()
        }
    }
}

impl<'a, P: Display> MenuHost<'a, P> for TreeView {
    fn group(&mut self, header: &str) {
        self.header = Some(header.to_string());
    }

    fn entry(&mut self, entry: &LeafEntry<'a, P>) {
        let mut text = self.style(entry.label());
        if self.options.payload {
            text.push_str(" → ");
            text.push_str(&summarize(entry.payload()));
        }
        self.children.push(Tree::new(text));
    }

    fn submenu(&mut self, submenu: &Submenu<'a, P>) {
        let mut node = Tree::new(self.style(submenu.label()));
        if let Some(level) = submenu.open() {
            node.push(level.to_tree(self.options));
        }
        self.children.push(node);
    }
}

/// Conversion of a rendered level into a printable tree.
pub trait TreeConvert {
    fn to_tree(&self, options: TreeViewOptions) -> Tree<String>;
}

impl<P: Display> TreeConvert for MenuLevel<'_, P> {
    #[instrument(level = "trace", skip_all)]
    fn to_tree(&self, options: TreeViewOptions) -> Tree<String> {
        let mut view = TreeView::new(options);
        self.present(&mut view);
        view.finish()
    }
}

/// Single-line payload summary.
pub fn summarize<P: Display + ?Sized>(payload: &P) -> String {
    let text = payload.to_string();
    let text = text.split_whitespace().join(" ");
    if text.chars().count() > SUMMARY_WIDTH {
        let cut: String = text.chars().take(SUMMARY_WIDTH).collect();
        format!("{cut}…")
    } else {
        text
    }
}
