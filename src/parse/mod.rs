//! Parse phase: editor JSON → Rust types + graph construction.

pub mod graph;
pub mod types;

pub use graph::WorkflowGraph;
pub use types::*;

use crate::error::ParseError;

/// Deserialize a workflow document into a `Workflow` struct.
pub fn parse(json: &str) -> Result<Workflow, ParseError> {
    Ok(serde_json::from_str::<Workflow>(json)?)
}

/// Parse JSON and build the graph in one step.
pub fn parse_and_build(json: &str) -> Result<(Workflow, WorkflowGraph), ParseError> {
    let workflow = parse(json)?;
    let graph = WorkflowGraph::build(&workflow.nodes, &workflow.edges);
    Ok((workflow, graph))
}
