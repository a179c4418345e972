//! Single-pass structural scans: disconnected and dead-end nodes.

use crate::parse::graph::WorkflowGraph;
use crate::parse::types::WorkflowNode;

/// Nodes with no incoming and no outgoing edges. An isolated start node is
/// a single-node workflow and is not reported.
pub fn find_disconnected(nodes: &[WorkflowNode], graph: &WorkflowGraph) -> Vec<String> {
    nodes
        .iter()
        .filter(|n| {
            !n.is_start()
                && graph.incoming_count(n.id()) == 0
                && graph.outgoing_count(n.id()) == 0
        })
        .map(|n| n.id().to_string())
        .collect()
}

/// Non-end nodes with no outgoing edges. End nodes are expected to be
/// terminal; anything else that stops the flow is a modeling defect.
pub fn find_dead_ends(nodes: &[WorkflowNode], graph: &WorkflowGraph) -> Vec<String> {
    nodes
        .iter()
        .filter(|n| !n.is_end() && graph.outgoing_count(n.id()) == 0)
        .map(|n| n.id().to_string())
        .collect()
}
