//! Cross-node policy rules.

use std::collections::HashMap;

use crate::error::ValidationIssue;
use crate::parse::graph::WorkflowGraph;
use crate::parse::types::{NodeType, WorkflowNode};

/// Budget changes above this percentage should pass through an approval
/// gate before executing.
const APPROVAL_THRESHOLD_PCT: f64 = 30.0;

/// Warn on action nodes that change budget by more than 30% without a
/// direct approval successor.
///
/// Strictly greater than the threshold, and one hop only: an approval node
/// further downstream does not satisfy the check.
pub fn check_approval_gating(
    nodes: &[WorkflowNode],
    graph: &WorkflowGraph,
    issues: &mut Vec<ValidationIssue>,
) {
    let by_id: HashMap<&str, &WorkflowNode> =
        nodes.iter().map(|n| (n.id.as_str(), n)).collect();

    for node in nodes {
        if node.node_type != NodeType::Action {
            continue;
        }
        let Some(change_pct) = node.config_number("change_pct") else {
            continue;
        };
        if change_pct <= APPROVAL_THRESHOLD_PCT {
            continue;
        }

        let gated = graph.successors(&node.id).iter().any(|succ| {
            by_id
                .get(succ)
                .is_some_and(|n| n.node_type == NodeType::Approval)
        });
        if !gated {
            issues.push(ValidationIssue::warning(
                format!("approval-{}", node.id),
                format!(
                    "'{}' changes budget by more than 30% but is not followed by an approval step",
                    node.label
                ),
                Some(node.id.clone()),
            ));
        }
    }
}
