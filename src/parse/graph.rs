//! petgraph-based directed graph wrapper for the visual workflow.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{WorkflowEdge, WorkflowNode};

/// Directed view of a workflow snapshot.
///
/// Edges whose source or target id is absent from the node set are skipped
/// during construction: the editor can transiently produce such edges
/// mid-edit, and they must not affect traversal. Outgoing adjacency keeps
/// edge declaration order, so every traversal over it is deterministic.
pub struct WorkflowGraph {
    pub graph: DiGraph<String, String>,
    pub node_indices: HashMap<String, NodeIndex>,
    outgoing: HashMap<String, Vec<String>>,
    incoming: HashMap<String, usize>,
}

impl WorkflowGraph {
    pub fn build(nodes: &[WorkflowNode], edges: &[WorkflowEdge]) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();
        let mut outgoing: HashMap<String, Vec<String>> = HashMap::new();
        let mut incoming: HashMap<String, usize> = HashMap::new();

        for node in nodes {
            let id = node.id().to_string();
            let idx = graph.add_node(id.clone());
            node_indices.insert(id.clone(), idx);
            outgoing.insert(id.clone(), Vec::new());
            incoming.insert(id, 0);
        }

        for edge in edges {
            let (Some(&s), Some(&t)) = (
                node_indices.get(&edge.source),
                node_indices.get(&edge.target),
            ) else {
                // Dangling endpoint, ineffective for traversal.
                continue;
            };
            graph.add_edge(s, t, edge.id.clone());
            if let Some(targets) = outgoing.get_mut(&edge.source) {
                targets.push(edge.target.clone());
            }
            if let Some(count) = incoming.get_mut(&edge.target) {
                *count += 1;
            }
        }

        WorkflowGraph {
            graph,
            node_indices,
            outgoing,
            incoming,
        }
    }

    /// Immediate targets of `node_id`'s outgoing edges, in edge declaration
    /// order. Parallel edges to one target appear once per edge.
    pub fn successors(&self, node_id: &str) -> &[String] {
        self.outgoing.get(node_id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn outgoing_count(&self, node_id: &str) -> usize {
        self.successors(node_id).len()
    }

    pub fn incoming_count(&self, node_id: &str) -> usize {
        self.incoming.get(node_id).copied().unwrap_or(0)
    }
}
