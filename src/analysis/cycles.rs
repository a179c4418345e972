//! Cycle detection over the workflow graph.

use std::collections::HashSet;

use crate::parse::graph::WorkflowGraph;
use crate::parse::types::WorkflowNode;

/// One DFS frame: a node plus the position of the next outgoing edge to try.
struct Frame<'a> {
    node: &'a str,
    next: usize,
}

/// Find cycles by depth-first search with an explicit frame stack.
///
/// Nodes are tried in input order, successors in edge declaration order. A
/// successor already on the current path closes a cycle, recorded as the
/// path suffix from that successor's first occurrence, and the search for
/// that root stops. Every node is visited at most once globally, so the
/// walk terminates on arbitrarily cyclic input and reports at most one
/// cycle per DFS root.
pub fn find_cycles(nodes: &[WorkflowNode], graph: &WorkflowGraph) -> Vec<Vec<String>> {
    let mut cycles = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();

    for node in nodes {
        if visited.contains(node.id()) {
            continue;
        }
        if let Some(cycle) = dfs_from(node.id(), graph, &mut visited) {
            cycles.push(cycle);
        }
    }

    cycles
}

fn dfs_from<'a>(
    root: &'a str,
    graph: &'a WorkflowGraph,
    visited: &mut HashSet<&'a str>,
) -> Option<Vec<String>> {
    let mut stack = vec![Frame { node: root, next: 0 }];
    let mut on_path: HashSet<&str> = HashSet::new();
    let mut path: Vec<&str> = vec![root];
    visited.insert(root);
    on_path.insert(root);

    while let Some(frame) = stack.last_mut() {
        let successors = graph.successors(frame.node);
        if frame.next >= successors.len() {
            on_path.remove(frame.node);
            path.pop();
            stack.pop();
            continue;
        }

        let target = successors[frame.next].as_str();
        frame.next += 1;

        if on_path.contains(target) {
            let first = path.iter().position(|id| *id == target)?;
            return Some(path[first..].iter().map(|id| id.to_string()).collect());
        }
        if !visited.contains(target) {
            visited.insert(target);
            on_path.insert(target);
            path.push(target);
            stack.push(Frame { node: target, next: 0 });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::types::*;

    fn node(id: &str) -> WorkflowNode {
        WorkflowNode::Function(NodeBase {
            id: id.into(),
            position: Position { x: 0.0, y: 0.0 },
            data: FunctionData {
                label: id.into(),
                description: None,
                function_code: String::new(),
                input_state: vec![],
                output_state: vec![],
            },
        })
    }

    fn edge(source: &str, target: &str) -> WorkflowEdge {
        WorkflowEdge {
            id: format!("{source}-{target}"),
            source: source.into(),
            target: target.into(),
            kind: EdgeKind::Default,
            label: None,
            condition: None,
        }
    }

    fn cycles_of(nodes: &[WorkflowNode], edges: &[WorkflowEdge]) -> Vec<Vec<String>> {
        let graph = WorkflowGraph::build(nodes, edges);
        find_cycles(nodes, &graph)
    }

    #[test]
    fn self_loop_is_a_cycle_of_length_one() {
        let nodes = vec![node("a")];
        let edges = vec![edge("a", "a")];
        assert_eq!(cycles_of(&nodes, &edges), vec![vec!["a".to_string()]]);
    }

    #[test]
    fn acyclic_graph_reports_nothing() {
        let nodes = vec![node("a"), node("b"), node("c")];
        let edges = vec![edge("a", "b"), edge("b", "c")];
        assert!(cycles_of(&nodes, &edges).is_empty());
    }

    #[test]
    fn cycle_is_the_suffix_from_the_re_entry_point() {
        // a -> b -> c -> b: the reported cycle starts at b, not a
        let nodes = vec![node("a"), node("b"), node("c")];
        let edges = vec![edge("a", "b"), edge("b", "c"), edge("c", "b")];
        assert_eq!(
            cycles_of(&nodes, &edges),
            vec![vec!["b".to_string(), "c".to_string()]]
        );
    }

    #[test]
    fn disjoint_cycles_are_each_reported() {
        let nodes = vec![node("a"), node("b"), node("c"), node("d")];
        let edges = vec![
            edge("a", "b"),
            edge("b", "a"),
            edge("c", "d"),
            edge("d", "c"),
        ];
        assert_eq!(
            cycles_of(&nodes, &edges),
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string(), "d".to_string()],
            ]
        );
    }

    #[test]
    fn terminates_on_dense_cyclic_input() {
        // Complete digraph over four nodes: one cycle per DFS root at most.
        let ids = ["a", "b", "c", "d"];
        let nodes: Vec<_> = ids.iter().map(|id| node(id)).collect();
        let mut edges = Vec::new();
        for s in ids {
            for t in ids {
                edges.push(edge(s, t));
            }
        }
        let found = cycles_of(&nodes, &edges);
        assert!(!found.is_empty());
    }
}
