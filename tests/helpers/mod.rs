#![allow(dead_code)] // not every test binary uses every builder

use serde_json::{Map, Value};
use workflow_validator::parse::{NodeType, WorkflowEdge, WorkflowNode};

pub fn node(id: &str, node_type: NodeType, label: &str) -> WorkflowNode {
    WorkflowNode {
        id: id.into(),
        node_type,
        label: label.into(),
        config: Map::new(),
    }
}

/// Builder variant taking a `serde_json::json!` object as config.
pub fn node_with_config(id: &str, node_type: NodeType, label: &str, config: Value) -> WorkflowNode {
    let Value::Object(config) = config else {
        panic!("config must be a JSON object");
    };
    WorkflowNode {
        id: id.into(),
        node_type,
        label: label.into(),
        config,
    }
}

pub fn edge(source: &str, target: &str) -> WorkflowEdge {
    WorkflowEdge {
        source: source.into(),
        target: target.into(),
    }
}
