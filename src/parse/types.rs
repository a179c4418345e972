//! Rust types mirroring the frontend workflow document.
//!
//! These types are the serde target for the editor's workflow JSON. The
//! analysis passes read only node ids, node kinds, and edge endpoints;
//! every payload field round-trips untouched.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// TOP-LEVEL WORKFLOW DOCUMENT
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub state_schema: StateSchema,
    pub reducers: HashMap<String, Reducer>,
    pub nodes: Vec<WorkflowNode>,
    pub edges: Vec<WorkflowEdge>,
    pub metadata: WorkflowMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowMetadata {
    pub version: String,
    pub created: String,
    pub modified: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSchema {
    pub fields: Vec<StateField>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub required: bool,
    pub description: Option<String>,
}

/// Merge strategy for concurrent updates to a single state field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Reducer {
    #[serde(rename = "append")]
    Append,
    #[serde(rename = "overwrite")]
    Overwrite,
    #[serde(rename = "merge")]
    Merge,
    #[serde(rename = "custom")]
    Custom {
        #[serde(rename = "customCode")]
        custom_code: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

// =============================================================================
// EDGES
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type", default)]
    pub kind: EdgeKind,
    pub label: Option<String>,
    /// Predicate expression for conditional edges.
    pub condition: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeKind {
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "conditional")]
    Conditional,
}

// =============================================================================
// WORKFLOW NODE — tagged union over the editor's node kinds
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WorkflowNode {
    #[serde(rename = "start")]
    Start(NodeBase<BaseData>),
    #[serde(rename = "end")]
    End(NodeBase<BaseData>),
    #[serde(rename = "function")]
    Function(NodeBase<FunctionData>),
    #[serde(rename = "llm")]
    Llm(NodeBase<LlmData>),
    #[serde(rename = "tool")]
    Tool(NodeBase<ToolData>),
    #[serde(rename = "conditional")]
    Conditional(NodeBase<ConditionalData>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeBase<D> {
    pub id: String,
    pub position: Position,
    pub data: D,
}

impl WorkflowNode {
    pub fn id(&self) -> &str {
        match self {
            WorkflowNode::Start(n) => &n.id,
            WorkflowNode::End(n) => &n.id,
            WorkflowNode::Function(n) => &n.id,
            WorkflowNode::Llm(n) => &n.id,
            WorkflowNode::Tool(n) => &n.id,
            WorkflowNode::Conditional(n) => &n.id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            WorkflowNode::Start(n) => &n.data.label,
            WorkflowNode::End(n) => &n.data.label,
            WorkflowNode::Function(n) => &n.data.label,
            WorkflowNode::Llm(n) => &n.data.label,
            WorkflowNode::Tool(n) => &n.data.label,
            WorkflowNode::Conditional(n) => &n.data.label,
        }
    }

    pub fn node_type(&self) -> &'static str {
        match self {
            WorkflowNode::Start(_) => "start",
            WorkflowNode::End(_) => "end",
            WorkflowNode::Function(_) => "function",
            WorkflowNode::Llm(_) => "llm",
            WorkflowNode::Tool(_) => "tool",
            WorkflowNode::Conditional(_) => "conditional",
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, WorkflowNode::Start(_))
    }

    pub fn is_end(&self) -> bool {
        matches!(self, WorkflowNode::End(_))
    }
}

// =============================================================================
// NODE PAYLOADS
// =============================================================================

/// Start and end nodes carry only presentation fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseData {
    pub label: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionData {
    pub label: String,
    pub description: Option<String>,
    pub function_code: String,
    pub input_state: Vec<String>,
    pub output_state: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmData {
    pub label: String,
    pub description: Option<String>,
    pub provider: LlmProvider,
    pub model: String,
    pub system_prompt: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub input_state: Vec<String>,
    pub output_state: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LlmProvider {
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "anthropic")]
    Anthropic,
    #[serde(rename = "google")]
    Google,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolData {
    pub label: String,
    pub description: Option<String>,
    pub tool_name: String,
    pub tool_code: String,
    pub input_state: Vec<String>,
    pub output_state: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalData {
    pub label: String,
    pub description: Option<String>,
    pub predicate_code: String,
    pub input_state: Vec<String>,
}
