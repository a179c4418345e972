//! Parse phase: frontend JSON → document types + graph construction.

pub mod graph;
pub mod types;

pub use graph::WorkflowGraph;
pub use types::*;

use crate::error::AnalyzerError;

/// Deserialize a workflow JSON document into a `Workflow`.
pub fn parse(json: &str) -> Result<Workflow, AnalyzerError> {
    Ok(serde_json::from_str::<Workflow>(json)?)
}

/// Parse JSON and build the traversal graph in one step.
pub fn parse_and_build(json: &str) -> Result<(Workflow, WorkflowGraph), AnalyzerError> {
    let workflow = parse(json)?;
    let graph = WorkflowGraph::build(&workflow.nodes, &workflow.edges);
    Ok((workflow, graph))
}
