//! Test support: logging setup and explanation fixtures

use std::sync::Once;

use serde_json::{json, Value};
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

static TEST_SETUP: Once = Once::new();

/// Install a global tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`; defaults to `expltree=trace`.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("expltree=trace"));

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_test_writer()
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE)
                .with_filter(env_filter),
        );

        if tracing::dispatcher::has_been_set() {
            return;
        }
        if let Err(e) = subscriber.try_init() {
            eprintln!("Error: Failed to set up logging: {}", e);
        }
        info!("Test Setup complete");
    });
}

/// Evaluator-shaped partition node.
pub fn partition_json(variable: &str, part: Vec<Value>) -> Value {
    json!({ "type": "node", "kind": "partition", "var": variable, "part": part })
}

/// Evaluator-shaped leaf element.
pub fn leaf_json(subset_type: &str, values: &[&str], payload: Value) -> Value {
    json!({
        "type": "leaf",
        "subset_type": subset_type,
        "subset_values": values,
        "payload": payload,
    })
}

/// Evaluator-shaped element that is partitioned further.
pub fn nested_json(subset_type: &str, values: &[&str], variable: &str, part: Vec<Value>) -> Value {
    let mut node = partition_json(variable, part);
    node["subset_type"] = json!(subset_type);
    node["subset_values"] = json!(values);
    node
}
