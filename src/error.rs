//! Issue and error types shared across the crate.

use serde::{Deserialize, Serialize};

/// How the editor must treat an issue: `Error` blocks activation,
/// `Warning` is advisory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single validation finding.
///
/// Serializes as `{id, type, message, nodeId}`, the shape the editor keys
/// its issue badges on. `id` is stable per occurrence (node-scoped issues
/// embed the node id, e.g. `orphan-<nodeId>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub id: String,
    #[serde(rename = "type")]
    pub severity: Severity,
    pub message: String,
    pub node_id: Option<String>,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.node_id {
            Some(id) => write!(f, "[{}:{}] {} (node '{}')", self.severity, self.id, self.message, id),
            None => write!(f, "[{}:{}] {}", self.severity, self.id, self.message),
        }
    }
}

impl ValidationIssue {
    pub fn error(id: impl Into<String>, message: impl Into<String>, node_id: Option<String>) -> Self {
        ValidationIssue {
            id: id.into(),
            severity: Severity::Error,
            message: message.into(),
            node_id,
        }
    }

    pub fn warning(id: impl Into<String>, message: impl Into<String>, node_id: Option<String>) -> Self {
        ValidationIssue {
            id: id.into(),
            severity: Severity::Warning,
            message: message.into(),
            node_id,
        }
    }
}

/// Failure to ingest a workflow document.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to parse workflow JSON: {0}")]
    Json(#[from] serde_json::Error),
}
