//! Graph-level structural rules: trigger presence, orphans, cycles.

use petgraph::algo::is_cyclic_directed;

use crate::error::ValidationIssue;
use crate::parse::graph::WorkflowGraph;
use crate::parse::types::{WorkflowEdge, WorkflowNode};

/// Every workflow needs at least one trigger to ever run.
pub fn check_trigger_presence(nodes: &[WorkflowNode], issues: &mut Vec<ValidationIssue>) {
    if !nodes.iter().any(|n| n.is_trigger()) {
        issues.push(ValidationIssue::error(
            "no-trigger",
            "Workflow must contain at least one trigger node",
            None,
        ));
    }
}

/// Flag non-trigger nodes with no edge touching them at all.
///
/// Scans the raw edge list rather than the built graph: an edge whose other
/// endpoint is dangling still counts as attachment, matching what the editor
/// shows on canvas. Triggers are exempt (no incoming edge by design, and a
/// trigger without successors is a draft state, not a defect).
pub fn check_orphans(
    nodes: &[WorkflowNode],
    edges: &[WorkflowEdge],
    issues: &mut Vec<ValidationIssue>,
) {
    for node in nodes {
        if node.is_trigger() {
            continue;
        }
        let connected = edges
            .iter()
            .any(|e| e.source == node.id || e.target == node.id);
        if !connected {
            issues.push(ValidationIssue::warning(
                format!("orphan-{}", node.id),
                format!("'{}' is not connected to the workflow", node.label),
                Some(node.id.clone()),
            ));
        }
    }
}

/// At most one cycle error per run: the first cycle found is reported and
/// the phase stops, the editor does not want a cycle enumerated per member.
pub fn check_cycles(graph: &WorkflowGraph, issues: &mut Vec<ValidationIssue>) {
    if is_cyclic_directed(&graph.graph) {
        issues.push(ValidationIssue::error(
            "cycle-detected",
            "Workflow contains a cycle. Cycles are not allowed.",
            None,
        ));
    }
}
