//! Reachability analysis from the designated start node.

use std::collections::HashSet;

use petgraph::algo::dijkstra;
use petgraph::visit::Bfs;

use crate::parse::graph::WorkflowGraph;
use crate::parse::types::WorkflowNode;

/// Node ids not reachable by following edges forward from `start_id`,
/// reported in node input order. An unknown `start_id` leaves every node
/// unreachable.
pub fn find_unreachable(
    nodes: &[WorkflowNode],
    graph: &WorkflowGraph,
    start_id: &str,
) -> Vec<String> {
    let Some(&start_idx) = graph.node_indices.get(start_id) else {
        return nodes.iter().map(|n| n.id().to_string()).collect();
    };

    let mut reachable = HashSet::new();
    let mut bfs = Bfs::new(&graph.graph, start_idx);
    while let Some(nx) = bfs.next(&graph.graph) {
        reachable.insert(nx);
    }

    nodes
        .iter()
        .filter(|n| {
            !graph
                .node_indices
                .get(n.id())
                .is_some_and(|idx| reachable.contains(idx))
        })
        .map(|n| n.id().to_string())
        .collect()
}

/// Minimum hop count from the first start node to `node_id`; -1 when there
/// is no start node, the id is unknown, or the node cannot be reached.
pub fn node_depth(node_id: &str, nodes: &[WorkflowNode], graph: &WorkflowGraph) -> i32 {
    let Some(start) = nodes.iter().find(|n| n.is_start()) else {
        return -1;
    };
    if node_id == start.id() {
        return 0;
    }
    let (Some(&start_idx), Some(&target_idx)) = (
        graph.node_indices.get(start.id()),
        graph.node_indices.get(node_id),
    ) else {
        return -1;
    };

    dijkstra(&graph.graph, start_idx, Some(target_idx), |_| 1)
        .get(&target_idx)
        .copied()
        .unwrap_or(-1)
}
