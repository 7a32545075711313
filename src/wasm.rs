//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::error::ValidationIssue;

/// Validate a workflow document: parse + graph validation.
/// Returns a JSON array of ValidationIssue objects; a parse failure comes
/// back as a single-element issue list so the editor has one rendering path.
#[wasm_bindgen]
pub fn validate_workflow(json: &str) -> JsValue {
    let result = validate_workflow_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_workflow_inner(json: &str) -> Vec<ValidationIssue> {
    let workflow = match crate::parse::parse(json) {
        Ok(w) => w,
        Err(e) => return vec![ValidationIssue::error("parse-error", e.to_string(), None)],
    };

    crate::validate::validate(&workflow.nodes, &workflow.edges)
}
