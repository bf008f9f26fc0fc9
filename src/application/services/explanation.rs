//! Explanation document service
//!
//! Loads evaluator output and decodes it into one partition tree per column.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{decode_explanation, ColumnId, DomainError, PartitionNode};
use crate::infrastructure::traits::FileSystem;

/// Decoded explanations, one per column.
///
/// A column whose explanation is not a partition (e.g. a plain verdict) holds `None`.
/// Defects absorbed while decoding are kept per column in `issues`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplanationDocument {
    columns: Vec<Option<PartitionNode<Value>>>,
    issues: Vec<(ColumnId, DomainError)>,
}

impl ExplanationDocument {
    pub fn new(
        columns: Vec<Option<PartitionNode<Value>>>,
        issues: Vec<(ColumnId, DomainError)>,
    ) -> Self {
        Self { columns, issues }
    }

    pub fn issues(&self) -> &[(ColumnId, DomainError)] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Columns with their ids, in document order.
    pub fn columns(&self) -> impl Iterator<Item = (ColumnId, Option<&PartitionNode<Value>>)> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, node)| (ColumnId(i), node.as_ref()))
    }

    pub fn column(&self, column: ColumnId) -> ApplicationResult<Option<&PartitionNode<Value>>> {
        self.columns
            .get(column.0)
            .map(Option::as_ref)
            .ok_or(ApplicationError::ColumnOutOfRange {
                column,
                available: self.columns.len(),
            })
    }
}

/// Service for loading explanation documents.
pub struct ExplanationService {
    fs: Arc<dyn FileSystem>,
}

impl ExplanationService {
    /// Create a new explanation service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Load and decode an explanation document from a file.
    pub fn load(&self, path: &Path) -> ApplicationResult<ExplanationDocument> {
        debug!("load: path={}", path.display());
        if !self.fs.exists(path) {
            return Err(ApplicationError::OperationFailed {
                context: format!("file not found: {}", path.display()),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "file does not exist",
                )),
            });
        }
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read explanation", path)?;
        self.parse(&content, &path.display().to_string())
    }

    /// Decode an explanation document from text.
    ///
    /// Only unparseable JSON is an error; malformed subtrees degrade locally.
    ///
    /// Accepted shapes:
    /// - a single explanation object (one column)
    /// - an array of explanations (column `i` is element `i`)
    /// - `{"columns": [...]}`
    pub fn parse(&self, content: &str, origin: &str) -> ApplicationResult<ExplanationDocument> {
        let value: Value = serde_json::from_str(content).map_err(|e| ApplicationError::Json {
            context: origin.to_string(),
            source: e,
        })?;

        let value = match value {
            Value::Object(mut map) if map.get("columns").is_some_and(Value::is_array) => {
                map.remove("columns").unwrap_or_default()
            }
            other => other,
        };
        let explanations = match value {
            Value::Array(items) => items,
            single => vec![single],
        };

        let mut columns = Vec::with_capacity(explanations.len());
        let mut issues = Vec::new();
        for (i, explanation) in explanations.iter().enumerate() {
            let column = ColumnId(i);
            let decoded = decode_explanation(explanation);
            for issue in decoded.issues {
                warn!("column {}: {}", column, issue);
                issues.push((column, issue));
            }
            columns.push(decoded.node);
        }

        debug!(
            "parse: origin={} columns={} partitioned={} issues={}",
            origin,
            columns.len(),
            columns.iter().filter(|c| c.is_some()).count(),
            issues.len()
        );
        Ok(ExplanationDocument::new(columns, issues))
    }
}
