//! Tests for loading explanation documents

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use rstest::rstest;
use serde_json::{json, Value};
use tempfile::TempDir;

use expltree::application::menu::{render_root, Callbacks, Selection};
use expltree::application::services::ExplanationService;
use expltree::application::ApplicationError;
use expltree::domain::{ColumnId, DomainError};
use expltree::infrastructure::traits::RealFileSystem;
use expltree::util::testing::{init_test_setup, leaf_json, nested_json, partition_json};

fn service() -> ExplanationService {
    ExplanationService::new(Arc::new(RealFileSystem))
}

fn resource(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/resources/explanations")
        .join(name)
}

// ============================================================
// Document shapes
// ============================================================

#[test]
fn given_resource_with_two_columns_when_loading_then_decodes_each_column() {
    init_test_setup();
    let document = service().load(&resource("two_columns.json")).unwrap();

    assert_eq!(document.len(), 2);
    let first = document.column(ColumnId(0)).unwrap().expect("partition");
    assert_eq!(first.variable, "x");
    assert_eq!(first.depth(), 2);
    assert_eq!(first.leaf_count(), 3);
    assert!(document.column(ColumnId(1)).unwrap().is_none());

    let paths: Vec<String> = render_root(Some(first), ColumnId(0))
        .leaf_entries()
        .iter()
        .map(|e| e.path().to_string())
        .collect();
    assert_eq!(paths, vec!["x=1, 2; y=a", "x=1, 2; y=∁{a}", "x=∁{1, 2}"]);
}

#[rstest]
#[case::single(json!(partition_json("x", vec![leaf_json("finite", &["1"], json!(1))])), 1)]
#[case::array(json!([partition_json("x", vec![leaf_json("finite", &["1"], json!(1))]), null]), 2)]
#[case::wrapped(json!({"columns": [null, true, partition_json("x", vec![leaf_json("cofinite", &[], json!(1))])]}), 3)]
fn given_document_shape_when_parsing_then_counts_columns(
    #[case] value: Value,
    #[case] expected: usize,
) {
    let document = service().parse(&value.to_string(), "test").unwrap();
    assert_eq!(document.len(), expected);
}

#[test]
fn given_nested_fixture_when_parsing_then_leaf_payload_is_whole_element() {
    let leaf = leaf_json("finite", &["a"], json!({"tp": 3}));
    let value = partition_json(
        "x",
        vec![nested_json("finite", &["1"], "y", vec![leaf.clone()])],
    );

    let document = service().parse(&value.to_string(), "test").unwrap();
    let node = document.column(ColumnId(0)).unwrap().expect("partition");
    let entries = render_root(Some(node), ColumnId(0)).leaf_entries();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].payload(), &leaf);
}

// ============================================================
// Malformed input
// ============================================================

#[test]
fn given_malformed_subtrees_when_loading_then_only_those_branches_degrade() {
    init_test_setup();
    let document = service().load(&resource("degraded.json")).unwrap();

    assert_eq!(document.len(), 2);
    assert_eq!(
        document.issues(),
        &[
            (
                ColumnId(0),
                DomainError::MissingField {
                    location: "/part/1".into(),
                    field: "var",
                }
            ),
            (
                ColumnId(0),
                DomainError::MissingField {
                    location: "/part/2".into(),
                    field: "part",
                }
            ),
            (
                ColumnId(0),
                DomainError::UnknownSubsetKind {
                    location: "/part/3".into(),
                    kind: "infinite".into(),
                }
            ),
        ]
    );

    let node = document.column(ColumnId(0)).unwrap().expect("partition");
    let level = render_root(Some(node), ColumnId(0));
    let labels: Vec<_> = level.items().iter().map(|i| i.label().text.as_str()).collect();
    assert_eq!(labels, vec!["1", "3", "Other"]);

    let mut activated: Vec<Selection<Value>> = Vec::new();
    let mut dismissed = 0;
    {
        let mut handler = Callbacks::new(
            |selection: Selection<Value>| activated.push(selection),
            || dismissed += 1,
        );
        for entry in level.leaf_entries() {
            entry.activate(&mut handler);
        }
    }

    let paths: Vec<_> = activated.iter().map(|s| s.domain_values.clone()).collect();
    assert_eq!(paths, vec![vec!["1".to_string()], vec!["∁{1, 2, 3}".to_string()]]);
    assert_eq!(activated[0].leaf["tp"], json!(1));
    assert_eq!(activated[1].leaf["tp"], json!(4));
    assert_eq!(dismissed, 2);

    let healthy = document.column(ColumnId(1)).unwrap().expect("partition");
    assert_eq!(healthy.leaf_count(), 1);
}

#[test]
fn given_partition_missing_part_in_one_column_when_parsing_then_other_columns_survive() {
    let value = json!([
        partition_json("x", vec![leaf_json("finite", &["1"], json!(1))]),
        partition_json("y", vec![json!({"subset_type": "finite", "subset_values": [1, 2], "type": "node", "var": "z"})]),
    ]);

    let document = service().parse(&value.to_string(), "test").unwrap();

    let first = document.column(ColumnId(0)).unwrap().expect("partition");
    assert_eq!(render_root(Some(first), ColumnId(0)).leaf_entries().len(), 1);

    let second = document.column(ColumnId(1)).unwrap().expect("partition");
    let level = render_root(Some(second), ColumnId(1));
    assert_eq!(level.items()[0].label().text, "1, 2");
    assert!(level.leaf_entries().is_empty());
    assert_eq!(document.issues().len(), 1);
}

#[test]
fn given_invalid_json_when_parsing_then_is_json_error() {
    let result = service().parse("{ not json", "broken.json");
    assert!(matches!(result, Err(ApplicationError::Json { context, .. }) if context == "broken.json"));
}

#[test]
fn given_missing_file_when_loading_then_operation_fails() {
    let temp = TempDir::new().unwrap();
    let result = service().load(&temp.path().join("absent.json"));
    assert!(matches!(result, Err(ApplicationError::OperationFailed { .. })));
}

#[test]
fn given_column_past_end_when_selecting_then_is_out_of_range() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("one.json");
    fs::write(&path, "null").unwrap();

    let document = service().load(&path).unwrap();
    let err = document.column(ColumnId(3)).unwrap_err();

    assert_eq!(err.to_string(), "column 3 not found (1 available)");
}
