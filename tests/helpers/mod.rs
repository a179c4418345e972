#![allow(dead_code)]

use analyzer::parse::types::*;

fn origin() -> Position {
    Position { x: 0.0, y: 0.0 }
}

// =============================================================================
// Node builders
// =============================================================================

pub fn start(id: &str) -> WorkflowNode {
    WorkflowNode::Start(NodeBase {
        id: id.into(),
        position: origin(),
        data: BaseData {
            label: "Start".into(),
            description: None,
        },
    })
}

pub fn end(id: &str) -> WorkflowNode {
    WorkflowNode::End(NodeBase {
        id: id.into(),
        position: origin(),
        data: BaseData {
            label: "End".into(),
            description: None,
        },
    })
}

pub fn function(id: &str) -> WorkflowNode {
    WorkflowNode::Function(NodeBase {
        id: id.into(),
        position: origin(),
        data: FunctionData {
            label: id.into(),
            description: None,
            function_code: "return state".into(),
            input_state: vec![],
            output_state: vec![],
        },
    })
}

pub fn llm(id: &str) -> WorkflowNode {
    WorkflowNode::Llm(NodeBase {
        id: id.into(),
        position: origin(),
        data: LlmData {
            label: id.into(),
            description: None,
            provider: LlmProvider::Anthropic,
            model: "claude-3-5-sonnet".into(),
            system_prompt: None,
            temperature: None,
            max_tokens: None,
            input_state: vec![],
            output_state: vec![],
        },
    })
}

pub fn conditional(id: &str) -> WorkflowNode {
    WorkflowNode::Conditional(NodeBase {
        id: id.into(),
        position: origin(),
        data: ConditionalData {
            label: id.into(),
            description: None,
            predicate_code: "state.done".into(),
            input_state: vec![],
        },
    })
}

// =============================================================================
// Edge builders
// =============================================================================

pub fn edge(id: &str, source: &str, target: &str) -> WorkflowEdge {
    WorkflowEdge {
        id: id.into(),
        source: source.into(),
        target: target.into(),
        kind: EdgeKind::Default,
        label: None,
        condition: None,
    }
}

pub fn conditional_edge(id: &str, source: &str, target: &str, condition: &str) -> WorkflowEdge {
    WorkflowEdge {
        id: id.into(),
        source: source.into(),
        target: target.into(),
        kind: EdgeKind::Conditional,
        label: Some(condition.into()),
        condition: Some(condition.into()),
    }
}
