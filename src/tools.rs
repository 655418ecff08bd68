//! MCP tool definitions
//!
//! The five tools exposed by the server:
//!
//! - `analyze_case` - Render a case analysis report for a category
//! - `track_evidence` - Record a piece of evidence with handling notes
//! - `monitor_deadline` - Compute days remaining and urgency for a deadline
//! - `document_bias` - Record a bias incident
//! - `assess_child_welfare` - Record a welfare assessment with follow-up steps
//!
//! Definitions are built once at server construction and never change; the
//! order here is the order `tools/list` reports.

use serde::{Deserialize, Serialize};

/// Tool definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// Result from a tool invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

/// Content types for tool results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolResult {
    /// Create a successful text result
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: content.into(),
            }],
            is_error: None,
        }
    }

    /// Create an error result
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: Some(true),
        }
    }
}

/// Get all available tool definitions
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "analyze_case".to_string(),
            description: "Analyze the custody case and report findings for a category"
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "case_id": {
                        "type": "string",
                        "description": "Docket number (defaults to the configured case)"
                    },
                    "analysis_type": {
                        "type": "string",
                        "enum": ["strengths", "weaknesses", "precedents", "strategy"],
                        "description": "Category of analysis to run"
                    },
                    "focus_area": {
                        "type": "string",
                        "enum": ["custody", "visitation", "child_support", "protective_orders"],
                        "description": "Area of the case to focus on"
                    }
                },
                "required": ["analysis_type"]
            }),
        },
        ToolDefinition {
            name: "track_evidence".to_string(),
            description: "Record a piece of evidence with handling notes".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "evidence_type": {
                        "type": "string",
                        "enum": ["document", "communication", "photo", "witness_statement", "physical"],
                        "description": "Kind of evidence"
                    },
                    "description": {
                        "type": "string",
                        "description": "What the evidence is"
                    },
                    "date_collected": {
                        "type": "string",
                        "description": "When it was collected (YYYY-MM-DD)"
                    },
                    "relevance": {
                        "type": "string",
                        "enum": ["critical", "high", "moderate", "low"],
                        "description": "How relevant it is to the case"
                    }
                },
                "required": ["evidence_type", "description"]
            }),
        },
        ToolDefinition {
            name: "monitor_deadline".to_string(),
            description: "Track a court deadline and classify its urgency".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "deadline_type": {
                        "type": "string",
                        "enum": ["court_filing", "hearing", "discovery", "appeal"],
                        "description": "Kind of deadline"
                    },
                    "date": {
                        "type": "string",
                        "description": "Deadline date (YYYY-MM-DD)"
                    },
                    "description": {
                        "type": "string",
                        "description": "What is due"
                    },
                    "priority": {
                        "type": "string",
                        "enum": ["high", "medium", "low"],
                        "description": "Caller-assigned priority"
                    }
                },
                "required": ["deadline_type", "date", "description"]
            }),
        },
        ToolDefinition {
            name: "document_bias".to_string(),
            description: "Document a bias incident observed during proceedings".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "incident_date": {
                        "type": "string",
                        "description": "When the incident occurred (YYYY-MM-DD)"
                    },
                    "bias_type": {
                        "type": "string",
                        "enum": ["gender", "cultural", "socioeconomic", "disability"],
                        "description": "Kind of bias observed"
                    },
                    "description": {
                        "type": "string",
                        "description": "What happened"
                    },
                    "impact": {
                        "type": "string",
                        "enum": ["severe", "moderate", "minor"],
                        "description": "Impact on the proceedings"
                    },
                    "witnesses": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "People who witnessed the incident"
                    }
                },
                "required": ["bias_type", "description"]
            }),
        },
        ToolDefinition {
            name: "assess_child_welfare".to_string(),
            description: "Record a child welfare assessment with suggested follow-up"
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "assessment_date": {
                        "type": "string",
                        "description": "Date of the assessment (YYYY-MM-DD)"
                    },
                    "concern_type": {
                        "type": "string",
                        "enum": ["neglect", "emotional_harm", "physical_safety", "educational"],
                        "description": "Category of concern"
                    },
                    "severity": {
                        "type": "string",
                        "enum": ["critical", "high", "moderate", "low"],
                        "description": "How serious the concern is"
                    },
                    "evidence": {
                        "type": "string",
                        "description": "Supporting evidence, if any"
                    },
                    "recommended_action": {
                        "type": "string",
                        "description": "Action the caller recommends"
                    }
                },
                "required": ["assessment_date", "concern_type", "severity"]
            }),
        },
    ]
}
