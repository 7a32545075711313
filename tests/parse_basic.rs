//! Integration tests for the Parse phase: workflow JSON parsing and graph building.

use workflow_validator::parse::{self, NodeType};

#[test]
fn parse_example_workflow() {
    let json = include_str!("fixtures/example_workflow.json");
    let workflow = parse::parse(json).expect("Should parse successfully");
    assert_eq!(workflow.nodes.len(), 2);
    assert_eq!(workflow.edges.len(), 1);
    assert_eq!(workflow.nodes[0].node_type, NodeType::Trigger);
    assert_eq!(workflow.nodes[0].label, "Manual Trigger");
    assert_eq!(workflow.nodes[1].config_number("change_pct"), Some(50.0));
}

#[test]
fn parse_round_trip() {
    let json = include_str!("fixtures/example_workflow.json");
    let workflow = parse::parse(json).expect("Should parse");
    let serialized = serde_json::to_string(&workflow).expect("Should serialize");
    let workflow2 = parse::parse(&serialized).expect("Should parse again");
    assert_eq!(workflow.nodes.len(), workflow2.nodes.len());
    assert_eq!(workflow.edges.len(), workflow2.edges.len());
}

#[test]
fn parse_missing_config_defaults_to_empty() {
    let json = include_str!("fixtures/dangling_edge.json");
    let workflow = parse::parse(json).expect("Should parse nodes without config");
    assert!(workflow.nodes.iter().all(|n| n.config.is_empty()));
}

#[test]
fn parse_invalid_json_returns_error() {
    let result = parse::parse("not valid json");
    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.starts_with("failed to parse workflow JSON"), "{message}");
}

#[test]
fn parse_unknown_node_type_rejected() {
    let json = r#"{"nodes": [{"id": "x1", "nodeType": "webhook", "label": "Webhook"}], "edges": []}"#;
    assert!(parse::parse(json).is_err());
}

#[test]
fn build_graph_skips_dangling_edges() {
    let json = include_str!("fixtures/dangling_edge.json");
    let (workflow, graph) = parse::parse_and_build(json).expect("Should parse");
    assert_eq!(workflow.edges.len(), 2);
    assert_eq!(graph.node_indices.len(), 2);
    // a1 -> ghost has no matching target node, so only t1 -> a1 survives
    assert_eq!(graph.graph.edge_count(), 1);
    assert_eq!(graph.successors("t1"), vec!["a1"]);
    assert!(graph.successors("a1").is_empty());
    assert!(graph.successors("ghost").is_empty());
}
