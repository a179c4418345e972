//! Fan-out/fan-in convergence analysis for concurrency grouping.
//!
//! A branch point whose arms reconverge at a common descendant forms a
//! diamond: the arms carry no ordering dependency between each other, so a
//! scheduler may run them concurrently.

use std::collections::{HashSet, VecDeque};

use crate::parse::graph::WorkflowGraph;
use crate::parse::types::WorkflowNode;

/// Group the immediate targets of fan-out nodes whose branches reconverge.
///
/// Fan-out nodes are processed in input order and each node id can belong
/// to at most one group: the earliest fan-out wins any overlap. The claim
/// set is local to one call.
pub fn find_groups(nodes: &[WorkflowNode], graph: &WorkflowGraph) -> Vec<Vec<String>> {
    let mut groups = Vec::new();
    let mut claimed: HashSet<&str> = HashSet::new();

    for node in nodes {
        let targets = graph.successors(node.id());
        if targets.len() < 2 {
            continue;
        }

        // Distinct branch roots, first occurrence first. Parallel edges to
        // a single target do not make a diamond on their own.
        let mut seen: HashSet<&str> = HashSet::new();
        let branch_roots: Vec<&str> = targets
            .iter()
            .map(String::as_str)
            .filter(|t| seen.insert(*t))
            .collect();
        if branch_roots.len() < 2 {
            continue;
        }

        let descendant_lists: Vec<Vec<&str>> = branch_roots
            .iter()
            .map(|root| descendants(root, graph))
            .collect();
        if convergence_point(&descendant_lists).is_none() {
            continue;
        }

        let group: Vec<&str> = branch_roots
            .iter()
            .filter(|root| !claimed.contains(**root))
            .copied()
            .collect();
        if group.len() > 1 {
            claimed.extend(group.iter().copied());
            groups.push(group.into_iter().map(String::from).collect());
        }
    }

    groups
}

/// First id in the first branch's traversal order that every branch can
/// reach. The traversal order is the BFS order of [`descendants`], which
/// follows edge declaration order, keeping the tie-break deterministic.
fn convergence_point<'a>(descendant_lists: &[Vec<&'a str>]) -> Option<&'a str> {
    let (first, rest) = descendant_lists.split_first()?;
    let rest_sets: Vec<HashSet<&str>> = rest
        .iter()
        .map(|list| list.iter().copied().collect())
        .collect();
    first
        .iter()
        .copied()
        .find(|candidate| rest_sets.iter().all(|set| set.contains(candidate)))
}

/// Every node reachable by following edges forward from `root`, in BFS
/// discovery order. The local visited set bounds the walk on cyclic input;
/// a node reached along several edges appears once per traversed edge.
fn descendants<'g>(root: &'g str, graph: &'g WorkflowGraph) -> Vec<&'g str> {
    let mut found = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        for target in graph.successors(current) {
            found.push(target.as_str());
            queue.push_back(target.as_str());
        }
    }

    found
}
