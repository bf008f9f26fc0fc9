//! Interactive drill-down through a rendered menu tree
//!
//! Each menu level is presented through a [`Selector`]; picking a submenu
//! opens it, `..` goes back up, picking a leaf entry activates it.

use std::sync::Arc;

use tracing::debug;

use crate::application::menu::{MenuItem, MenuLevel, SelectionHandler};
use crate::application::{ApplicationError, ApplicationResult};
use crate::infrastructure::traits::{SelectionItem, Selector};

/// Value of the synthetic "go back" item.
pub const BACK_VALUE: &str = "..";

/// Marker appended to submenu items.
pub const SUBMENU_MARKER: &str = "▸";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// A leaf was activated (the handler saw `on_activate` then `on_dismiss`).
    Activated,
    /// The menu was closed without a selection (the handler saw `on_dismiss`).
    Dismissed,
}

pub struct MenuNavigator {
    selector: Arc<dyn Selector>,
    prompt_suffix: String,
}

impl MenuNavigator {
    pub fn new(selector: Arc<dyn Selector>) -> Self {
        Self {
            selector,
            prompt_suffix: "> ".to_string(),
        }
    }

    pub fn with_prompt_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.prompt_suffix = suffix.into();
        self
    }

    /// Drill down from `root` until a leaf is activated or the user cancels.
    pub fn navigate<'a, P, H>(
        &self,
        root: MenuLevel<'a, P>,
        handler: &mut H,
    ) -> ApplicationResult<NavigationOutcome>
    where
        P: Clone,
        H: SelectionHandler<P> + ?Sized,
    {
        if root.items().is_empty() {
            debug!("navigate: nothing to select");
            handler.on_dismiss();
            return Ok(NavigationOutcome::Dismissed);
        }

        let mut stack = vec![root];
        loop {
            // Going back from the top level closes the menu.
            let Some(level) = stack.last() else {
                debug!("navigate: left the top level");
                handler.on_dismiss();
                return Ok(NavigationOutcome::Dismissed);
            };
            let depth = stack.len() - 1;

            let items = selection_items(level, depth > 0);
            let prompt = format!("{}{}", level.header().unwrap_or_default(), self.prompt_suffix);
            let choice = self
                .selector
                .select_one(&items, &prompt)
                .map_err(|message| ApplicationError::Selector { message })?;

            let Some(choice) = choice else {
                debug!("navigate: cancelled at depth {}", depth);
                handler.on_dismiss();
                return Ok(NavigationOutcome::Dismissed);
            };

            if choice.value == BACK_VALUE {
                stack.pop();
                continue;
            }

            let index: usize = choice.value.parse().map_err(|_| ApplicationError::Selector {
                message: format!("unexpected selection: {}", choice.value),
            })?;

            let next = match level.items().get(index) {
                Some(MenuItem::Entry(entry)) => {
                    entry.activate(handler);
                    return Ok(NavigationOutcome::Activated);
                }
                Some(MenuItem::Submenu(submenu)) => {
                    debug!("navigate: open {} at depth {}", submenu.label(), depth);
                    submenu.open()
                }
                None => {
                    return Err(ApplicationError::Selector {
                        message: format!("selection out of range: {index}"),
                    })
                }
            };
            if let Some(next) = next {
                stack.push(next);
            }
        }
    }
}

/// Selector items for one level; values are item indices.
fn selection_items<P>(level: &MenuLevel<'_, P>, with_back: bool) -> Vec<SelectionItem> {
    let mut items: Vec<SelectionItem> = level
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let display = match item {
                MenuItem::Entry(entry) => format!("{}. {}", i + 1, entry.label()),
                MenuItem::Submenu(submenu) => format!(
                    "{}. {} {} {}",
                    i + 1,
                    submenu.label(),
                    SUBMENU_MARKER,
                    submenu.variable()
                ),
            };
            SelectionItem {
                display,
                value: i.to_string(),
            }
        })
        .collect();

    if with_back {
        items.push(SelectionItem {
            display: BACK_VALUE.to_string(),
            value: BACK_VALUE.to_string(),
        });
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::menu::render_root;
    use crate::domain::{ColumnId, PartitionElement, PartitionNode, Subset};

    #[test]
    fn given_level_with_submenu_when_building_items_then_marks_submenu_and_back() {
        let node = PartitionNode::new(
            "x",
            vec![
                PartitionElement::leaf(Subset::finite(["a"]), "P1"),
                PartitionElement::partition(
                    Subset::cofinite(["a"]),
                    PartitionNode::new("y", vec![PartitionElement::leaf(Subset::finite(["b"]), "P2")]),
                ),
            ],
        );
        let level = render_root(Some(&node), ColumnId(0));

        let items = selection_items(&level, true);

        let displays: Vec<_> = items.iter().map(|i| i.display.as_str()).collect();
        assert_eq!(displays, vec!["1. a", "2. Other ▸ y", ".."]);
        assert_eq!(items[1].value, "1");
    }
}
