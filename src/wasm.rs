//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::analysis;
use crate::analysis::report::{Finding, ValidationReport};
use crate::error::AnalyzerError;

/// Validate a workflow document JSON: parse + full analysis.
/// Returns a ValidationReport object; a parse failure becomes an invalid
/// report with a single error finding rather than a throw.
#[wasm_bindgen]
pub fn validate_workflow(json: &str) -> JsValue {
    let report = match crate::parse::parse(json) {
        Ok(workflow) => analysis::validate(&workflow.nodes, &workflow.edges),
        Err(e) => parse_failure_report(e),
    };
    serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::NULL)
}

/// Concurrency groups for the canvas overlay. Returns an array of arrays
/// of node ids; unparseable input yields an empty array.
#[wasm_bindgen]
pub fn detect_parallel_groups(json: &str) -> JsValue {
    let groups = match crate::parse::parse(json) {
        Ok(workflow) => analysis::detect_parallel_groups(&workflow.nodes, &workflow.edges),
        Err(_) => Vec::new(),
    };
    serde_wasm_bindgen::to_value(&groups).unwrap_or(JsValue::NULL)
}

/// Minimum hop count from the first start node to `node_id`, or -1.
#[wasm_bindgen]
pub fn node_depth(json: &str, node_id: &str) -> i32 {
    match crate::parse::parse(json) {
        Ok(workflow) => analysis::node_depth(node_id, &workflow.nodes, &workflow.edges),
        Err(_) => -1,
    }
}

fn parse_failure_report(error: AnalyzerError) -> ValidationReport {
    ValidationReport {
        valid: false,
        errors: vec![Finding::new(error.to_string())],
        warnings: Vec::new(),
        parallel_groups: Vec::new(),
    }
}
