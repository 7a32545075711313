//! Workflow graph validation.
//!
//! Runs every rule over a snapshot of the editor's graph state and collects
//! the findings. Issue order is fixed and part of the contract the editor
//! relies on: trigger presence, per-node orphan warnings, at most one cycle
//! error, per-node approval warnings, then per-node config errors; node-
//! scoped rules emit in node-list order.

pub mod node_rules;
pub mod policy;
pub mod structural;

use crate::error::ValidationIssue;
use crate::parse::graph::WorkflowGraph;
use crate::parse::types::{WorkflowEdge, WorkflowNode};

/// Validate a workflow snapshot. Returns all issues found; an empty list
/// means the graph is clean. Never fails: dangling edges and absent config
/// keys are handled by the individual rules.
pub fn validate(nodes: &[WorkflowNode], edges: &[WorkflowEdge]) -> Vec<ValidationIssue> {
    let graph = WorkflowGraph::build(nodes, edges);
    let mut issues = Vec::new();

    structural::check_trigger_presence(nodes, &mut issues);
    structural::check_orphans(nodes, edges, &mut issues);
    structural::check_cycles(&graph, &mut issues);
    policy::check_approval_gating(nodes, &graph, &mut issues);
    node_rules::check_required_fields(nodes, &mut issues);

    issues
}
