//! Rust types mirroring the editor's workflow document.
//!
//! These types are the serde target for the frontend's graph-state JSON.
//! Node `config` is an open map on purpose: its shape depends on node type
//! and label, and the validator only inspects specific known keys after an
//! explicit presence check.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A workflow snapshot as the editor serializes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(default)]
    pub nodes: Vec<WorkflowNode>,
    #[serde(default)]
    pub edges: Vec<WorkflowEdge>,
}

/// The fixed tag set the editor assigns to workflow steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Trigger,
    Selector,
    Condition,
    Action,
    Approval,
    Notification,
    Ai,
    Analytics,
}

/// One step in the workflow graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowNode {
    pub id: String,
    pub node_type: NodeType,
    /// Display name. Not unique; some rules key off exact label text.
    pub label: String,
    #[serde(default)]
    pub config: Map<String, Value>,
}

/// A directed connector between two nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowEdge {
    pub source: String,
    pub target: String,
}

impl WorkflowNode {
    pub fn is_trigger(&self) -> bool {
        self.node_type == NodeType::Trigger
    }

    pub fn config_value(&self, key: &str) -> Option<&Value> {
        self.config.get(key)
    }

    /// The config value under `key`, if present and a JSON number.
    pub fn config_number(&self, key: &str) -> Option<f64> {
        self.config.get(key).and_then(Value::as_f64)
    }
}

/// JS-style truthiness over a JSON value. The editor historically treated
/// absent, `null`, `false`, `0`, and `""` config entries as "not set".
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
