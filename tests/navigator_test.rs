//! Tests for interactive drill-down with a scripted selector

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use expltree::application::menu::{render_root, Selection, SelectionHandler};
use expltree::application::services::{MenuNavigator, NavigationOutcome, BACK_VALUE};
use expltree::application::ApplicationError;
use expltree::domain::{ColumnId, PartitionElement, PartitionNode, Subset};
use expltree::infrastructure::traits::{SelectionItem, Selector};
use expltree::util::testing::init_test_setup;

/// Selector answering from a script of item values (`None` = cancel).
/// Records the prompt and displayed items of every call.
struct ScriptedSelector {
    script: Mutex<VecDeque<Option<&'static str>>>,
    seen: Mutex<Vec<(String, Vec<String>)>>,
}

impl ScriptedSelector {
    fn new(script: &[Option<&'static str>]) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.iter().copied().collect()),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.seen.lock().unwrap().iter().map(|(p, _)| p.clone()).collect()
    }

    fn displays(&self, call: usize) -> Vec<String> {
        self.seen.lock().unwrap()[call].1.clone()
    }
}

impl Selector for ScriptedSelector {
    fn select_one(
        &self,
        items: &[SelectionItem],
        prompt: &str,
    ) -> Result<Option<SelectionItem>, String> {
        self.seen.lock().unwrap().push((
            prompt.to_string(),
            items.iter().map(|i| i.display.clone()).collect(),
        ));
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| "script exhausted".to_string())?;
        match next {
            None => Ok(None),
            // `..` is answered even where it is not offered.
            Some(BACK_VALUE) => Ok(Some(SelectionItem {
                display: BACK_VALUE.to_string(),
                value: BACK_VALUE.to_string(),
            })),
            Some(value) => items
                .iter()
                .find(|i| i.value == value)
                .cloned()
                .map(Some)
                .ok_or_else(|| format!("no item with value {value}")),
        }
    }
}

#[derive(Default)]
struct Recorder {
    activated: Vec<Selection<&'static str>>,
    dismissed: usize,
}

impl SelectionHandler<&'static str> for Recorder {
    fn on_activate(&mut self, selection: Selection<&'static str>) {
        self.activated.push(selection);
    }

    fn on_dismiss(&mut self) {
        self.dismissed += 1;
    }
}

/// x: {1, 2} -> (y: {a} -> P1, ∁{a} -> P2), ∁{1, 2} -> P3
fn sample() -> PartitionNode<&'static str> {
    PartitionNode::new(
        "x",
        vec![
            PartitionElement::partition(
                Subset::finite(["1", "2"]),
                PartitionNode::new(
                    "y",
                    vec![
                        PartitionElement::leaf(Subset::finite(["a"]), "P1"),
                        PartitionElement::leaf(Subset::cofinite(["a"]), "P2"),
                    ],
                ),
            ),
            PartitionElement::leaf(Subset::cofinite(["1", "2"]), "P3"),
        ],
    )
}

#[test]
fn given_nested_partition_when_drilling_to_leaf_then_activates_with_full_path() {
    init_test_setup();
    let node = sample();
    let selector = ScriptedSelector::new(&[Some("0"), Some("1")]);
    let navigator = MenuNavigator::new(selector.clone());
    let mut recorder = Recorder::default();

    let outcome = navigator
        .navigate(render_root(Some(&node), ColumnId(2)), &mut recorder)
        .unwrap();

    assert_eq!(outcome, NavigationOutcome::Activated);
    assert_eq!(
        recorder.activated,
        vec![Selection {
            leaf: "P2",
            column: ColumnId(2),
            variable_names: vec!["x".to_string(), "y".to_string()],
            domain_values: vec!["1, 2".to_string(), "∁{a}".to_string()],
        }]
    );
    assert_eq!(recorder.dismissed, 1);
    assert_eq!(selector.prompts(), vec!["x> ", "y> "]);
    assert_eq!(selector.displays(0), vec!["1. 1, 2 ▸ y", "2. Other"]);
    assert_eq!(selector.displays(1), vec!["1. a", "2. Other", BACK_VALUE]);
}

#[test]
fn given_submenu_when_going_back_then_returns_to_parent_level() {
    let node = sample();
    let selector = ScriptedSelector::new(&[Some("0"), Some(BACK_VALUE), Some("1")]);
    let navigator = MenuNavigator::new(selector.clone()).with_prompt_suffix(": ");
    let mut recorder = Recorder::default();

    let outcome = navigator
        .navigate(render_root(Some(&node), ColumnId(0)), &mut recorder)
        .unwrap();

    assert_eq!(outcome, NavigationOutcome::Activated);
    assert_eq!(recorder.activated.len(), 1);
    assert_eq!(recorder.activated[0].leaf, "P3");
    assert_eq!(recorder.activated[0].domain_values, vec!["∁{1, 2}".to_string()]);
    assert_eq!(selector.prompts(), vec!["x: ", "y: ", "x: "]);
}

#[test]
fn given_cancel_in_submenu_when_navigating_then_dismisses_without_activation() {
    let node = sample();
    let selector = ScriptedSelector::new(&[Some("0"), None]);
    let navigator = MenuNavigator::new(selector);
    let mut recorder = Recorder::default();

    let outcome = navigator
        .navigate(render_root(Some(&node), ColumnId(0)), &mut recorder)
        .unwrap();

    assert_eq!(outcome, NavigationOutcome::Dismissed);
    assert!(recorder.activated.is_empty());
    assert_eq!(recorder.dismissed, 1);
}

#[test]
fn given_back_at_top_level_when_navigating_then_dismisses() {
    let node = sample();
    let selector = ScriptedSelector::new(&[Some(BACK_VALUE)]);
    let navigator = MenuNavigator::new(selector.clone());
    let mut recorder = Recorder::default();

    let outcome = navigator
        .navigate(render_root(Some(&node), ColumnId(0)), &mut recorder)
        .unwrap();

    assert_eq!(outcome, NavigationOutcome::Dismissed);
    assert!(recorder.activated.is_empty());
    assert_eq!(recorder.dismissed, 1);
    assert_eq!(selector.prompts(), vec!["x> "]);
}

#[test]
fn given_absent_partition_when_navigating_then_dismisses_without_asking() {
    let selector = ScriptedSelector::new(&[]);
    let navigator = MenuNavigator::new(selector.clone());
    let mut recorder = Recorder::default();

    let outcome = navigator
        .navigate(render_root::<&'static str>(None, ColumnId(0)), &mut recorder)
        .unwrap();

    assert_eq!(outcome, NavigationOutcome::Dismissed);
    assert!(selector.prompts().is_empty());
    assert!(recorder.activated.is_empty());
}

#[test]
fn given_failing_selector_when_navigating_then_returns_selector_error() {
    let node = sample();
    let selector = ScriptedSelector::new(&[Some("9")]);
    let navigator = MenuNavigator::new(selector);
    let mut recorder = Recorder::default();

    let result = navigator.navigate(render_root(Some(&node), ColumnId(0)), &mut recorder);

    assert!(matches!(result, Err(ApplicationError::Selector { .. })));
    assert!(recorder.activated.is_empty());
}
