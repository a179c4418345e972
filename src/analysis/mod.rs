//! Graph analysis: the validation orchestrator and concurrency grouping.
//!
//! Every function here is a pure, total function of a (nodes, edges)
//! snapshot. Structural problems come back as findings inside the report,
//! never as `Err` values or panics, and identical input always yields an
//! identical report.

pub mod cycles;
pub mod parallel;
pub mod reachability;
pub mod report;
pub mod structural;

use crate::parse::graph::WorkflowGraph;
use crate::parse::types::{WorkflowEdge, WorkflowNode};
use report::{Finding, ValidationReport};

/// Run every validation check over a workflow snapshot.
///
/// Checks are independent; a failing check never short-circuits the rest.
/// `valid` is true exactly when no error-level finding was produced.
pub fn validate(nodes: &[WorkflowNode], edges: &[WorkflowEdge]) -> ValidationReport {
    let graph = WorkflowGraph::build(nodes, edges);
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let start_ids: Vec<String> = nodes
        .iter()
        .filter(|n| n.is_start())
        .map(|n| n.id().to_string())
        .collect();
    if start_ids.is_empty() {
        errors.push(Finding::new("Workflow must have at least one start node"));
    } else if start_ids.len() > 1 {
        warnings.push(Finding::with_nodes(
            "Multiple start nodes detected. Only one will be used.",
            start_ids.clone(),
        ));
    }

    // An empty canvas is just "missing a start node", not also endless.
    if !nodes.is_empty() && !nodes.iter().any(|n| n.is_end()) {
        warnings.push(Finding::new(
            "Workflow has no end node. It may run indefinitely.",
        ));
    }

    let cycles = cycles::find_cycles(nodes, &graph);
    if !cycles.is_empty() {
        errors.push(Finding::with_nodes(
            format!(
                "Detected {} cycle(s) in the workflow. Cycles are not allowed.",
                cycles.len()
            ),
            cycles.concat(),
        ));
    }

    let disconnected = structural::find_disconnected(nodes, &graph);
    if !disconnected.is_empty() {
        warnings.push(Finding::with_nodes(
            format!("Found {} disconnected node(s)", disconnected.len()),
            disconnected.clone(),
        ));
    }

    if let Some(first_start) = start_ids.first() {
        // Edge-less nodes are already covered by the disconnected finding.
        let unreachable: Vec<String> =
            reachability::find_unreachable(nodes, &graph, first_start)
                .into_iter()
                .filter(|id| !disconnected.contains(id))
                .collect();
        if !unreachable.is_empty() {
            warnings.push(Finding::with_nodes(
                format!("Found {} unreachable node(s) from start", unreachable.len()),
                unreachable,
            ));
        }
    }

    let dead_ends = structural::find_dead_ends(nodes, &graph);
    if !dead_ends.is_empty() {
        warnings.push(Finding::with_nodes(
            format!(
                "Found {} node(s) without outgoing connections",
                dead_ends.len()
            ),
            dead_ends,
        ));
    }

    let parallel_groups = parallel::find_groups(nodes, &graph);

    ValidationReport {
        valid: errors.is_empty(),
        errors,
        warnings,
        parallel_groups,
    }
}

/// Concurrency groups for a snapshot; also queried on its own by the
/// canvas overlay that draws bounding boxes around concurrent nodes.
pub fn detect_parallel_groups(
    nodes: &[WorkflowNode],
    edges: &[WorkflowEdge],
) -> Vec<Vec<String>> {
    let graph = WorkflowGraph::build(nodes, edges);
    parallel::find_groups(nodes, &graph)
}

/// Minimum hop count from the first start node to `node_id`; -1 when there
/// is no start node or the node cannot be reached.
pub fn node_depth(node_id: &str, nodes: &[WorkflowNode], edges: &[WorkflowEdge]) -> i32 {
    let graph = WorkflowGraph::build(nodes, edges);
    reachability::node_depth(node_id, nodes, &graph)
}
