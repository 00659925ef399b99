use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::llm::AnalysisError;
use crate::models::AnalysisResult;

/// Configuration for the Anthropic API client
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    /// API key (from ANTHROPIC_API_KEY env var)
    pub api_key: String,
    /// Model to use (e.g., "claude-sonnet-4-20250514")
    pub model: String,
    /// Temperature; pinned to 0 for deterministic extraction
    pub temperature: f64,
    /// Maximum tokens in response
    pub max_tokens: u32,
}

impl AnthropicConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self, AnalysisError> {
        let api_key =
            std::env::var("ANTHROPIC_API_KEY").map_err(|_| AnalysisError::MissingCredential)?;

        Ok(Self {
            api_key,
            model: "claude-sonnet-4-20250514".to_string(),
            temperature: 0.0,
            max_tokens: 4096,
        })
    }

    /// Create with custom settings
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            temperature: 0.0,
            max_tokens: 4096,
        }
    }
}

/// Anthropic API client
pub struct AnthropicClient {
    client: Client,
    config: AnthropicConfig,
}

impl AnthropicClient {
    pub fn new(config: AnthropicConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Run one analysis with tool use forcing the result schema
    ///
    /// The tool input schema mirrors `AnalysisResult` exactly, so the
    /// returned document parses straight into the model types. Numeric
    /// ranges are documented in the schema but not locally validated.
    pub async fn send_analysis(
        &self,
        system: &str,
        user: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        let tool = Tool {
            name: "submit_analysis".to_string(),
            description: "Submit the structured sales-call analysis".to_string(),
            input_schema: analysis_schema(),
        };

        let request = AnthropicToolRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            temperature: Some(self.config.temperature),
            system: Some(system.to_string()),
            messages: vec![Message {
                role: "user".to_string(),
                content: user.to_string(),
            }],
            tools: vec![tool],
            tool_choice: Some(ToolChoice {
                choice_type: "tool".to_string(),
                name: "submit_analysis".to_string(),
            }),
        };

        let response = self
            .client
            .post("https://api.anthropic.com/v1/messages")
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Api { status, body });
        }

        let response: AnthropicResponse = response.json().await?;

        // Find the tool_use content block
        for content in &response.content {
            if content.content_type == "tool_use"
                && content.name.as_deref() == Some("submit_analysis")
            {
                if let Some(input) = &content.input {
                    let result: AnalysisResult = serde_json::from_value(input.clone())?;
                    return Ok(result);
                }
            }
        }

        Err(AnalysisError::EmptyResponse)
    }
}

/// JSON schema for the `submit_analysis` tool, mirroring `AnalysisResult`
fn analysis_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "metrics": {
                "type": "object",
                "properties": {
                    "satisfactionScore": {
                        "type": "number",
                        "description": "Calculated based on positive vs negative signals (0-100)"
                    },
                    "engagementRate": {
                        "type": "number",
                        "description": "Percentage of conversation where prospect is talking or asking questions"
                    },
                    "objectionCount": {"type": "number"},
                    "positiveSignalCount": {"type": "number"}
                },
                "required": ["satisfactionScore", "engagementRate", "objectionCount", "positiveSignalCount"]
            },
            "timeline": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "time": {"type": "string", "description": "Timestamp (MM:SS)"},
                        "description": {"type": "string"},
                        "sentiment": {"type": "string", "enum": ["positive", "negative", "neutral"]},
                        "type": {"type": "string", "enum": ["engagement", "objection", "question", "feature"]},
                        "quote": {"type": "string", "description": "Verbatim quote from the transcript"}
                    },
                    "required": ["time", "description", "sentiment", "type"]
                }
            },
            "painPoints": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "category": {"type": "string", "description": "Standardized pain point category"},
                        "resonanceScore": {
                            "type": "number",
                            "description": "0-100, how deeply this pain was felt"
                        },
                        "mentionCount": {"type": "number"},
                        "evidence": {"type": "string", "description": "Direct quote from prospect"}
                    },
                    "required": ["category", "resonanceScore", "mentionCount", "evidence"]
                }
            },
            "featureHeatmap": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": {
                            "type": "string",
                            "description": "Specific product name from Knowledge Base (e.g. 'APM', 'Watchdog')"
                        },
                        "category": {"type": "string", "enum": ["Monitoring", "Data", "Intelligence", "Workflow", "Security"]},
                        "interestLevel": {"type": "string", "enum": ["High", "Medium", "Low"]},
                        "timeSpentMinutes": {"type": "number"}
                    },
                    "required": ["name", "category", "interestLevel", "timeSpentMinutes"]
                }
            },
            "emailDraft": {
                "type": "object",
                "properties": {
                    "subject": {"type": "string"},
                    "body": {"type": "string"}
                },
                "required": ["subject", "body"]
            }
        },
        "required": ["metrics", "timeline", "painPoints", "featureHeatmap", "emailDraft"]
    })
}

#[derive(Debug, Serialize)]
struct AnthropicToolRequest {
    model: String,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<Message>,
    tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<ToolChoice>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: String,
    description: String,
    input_schema: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct ToolChoice {
    #[serde(rename = "type")]
    choice_type: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    input: Option<serde_json::Value>,
}
