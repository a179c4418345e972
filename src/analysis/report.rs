//! Validation report data types shared with the editing frontend.

use serde::{Deserialize, Serialize};

/// A single validation finding. Severity is implied by which report list it
/// lives in; `node_ids`/`edge_ids` locate the offending elements on canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_ids: Option<Vec<String>>,
}

impl Finding {
    pub fn new(message: impl Into<String>) -> Self {
        Finding {
            message: message.into(),
            node_ids: None,
            edge_ids: None,
        }
    }

    pub fn with_nodes(message: impl Into<String>, node_ids: Vec<String>) -> Self {
        Finding {
            message: message.into(),
            node_ids: Some(node_ids),
            edge_ids: None,
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.node_ids {
            Some(ids) => write!(f, "{} ({})", self.message, ids.join(", ")),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Outcome of a full validation pass. `valid` is true exactly when the
/// error list is empty; warnings never affect it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub parallel_groups: Vec<Vec<String>>,
}
