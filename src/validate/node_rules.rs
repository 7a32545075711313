//! Per-node required-field rules.
//!
//! Requirements are keyed on exact label text because the editor encodes a
//! node's semantic subtype only in its display label. Renaming a node
//! therefore detaches it from its rule; existing workflow documents depend
//! on this behavior, so it is preserved as-is.

use crate::error::ValidationIssue;
use crate::parse::types::{is_truthy, WorkflowNode};

/// Check label-keyed mandatory config fields. Currently the only rule is
/// that a "Cron Schedule" trigger must carry a schedule expression.
pub fn check_required_fields(nodes: &[WorkflowNode], issues: &mut Vec<ValidationIssue>) {
    for node in nodes {
        if node.is_trigger() && node.label == "Cron Schedule" {
            let schedule_set = node
                .config_value("schedule")
                .is_some_and(is_truthy);
            if !schedule_set {
                issues.push(ValidationIssue::error(
                    format!("config-{}", node.id),
                    format!("'{}' is missing its schedule configuration", node.label),
                    Some(node.id.clone()),
                ));
            }
        }
    }
}
