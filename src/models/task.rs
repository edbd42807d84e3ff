use serde::Serialize;
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";
pub const TASKS_SEND_METHOD: &str = "tasks/send";

/// Top-level fields every task request must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["jsonrpc", "id", "method", "params"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Assistant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartType {
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextPart {
    #[serde(rename = "type")]
    pub part_type: PartType,
    pub text: String,
}

impl TextPart {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            part_type: PartType::Text,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseMessage {
    pub role: Role,
    pub parts: Vec<TextPart>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskResult {
    pub response: ResponseMessage,
}

/// Success envelope for `tasks/send`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskResponse {
    pub jsonrpc: String,
    pub id: Value,
    pub result: TaskResult,
}

impl TaskResponse {
    /// Wraps generated plan text as a single assistant text part.
    pub fn assistant_text(id: Value, text: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: TaskResult {
                response: ResponseMessage {
                    role: Role::Assistant,
                    parts: vec![TextPart::new(text)],
                },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorObject {
    pub code: i32,
    pub message: String,
}

/// Error envelope for `tasks/send`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskErrorResponse {
    pub jsonrpc: String,
    pub id: Value,
    pub error: ErrorObject,
}

/// A request that passed shape, method and params validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRequest {
    pub id: Value,
    pub user_text: String,
}

/// Joins the `text` of every `type == "text"` part with single spaces and trims the result.
///
/// Anything that is not shaped like `params.message.parts[]` contributes no text.
pub fn collect_user_text(params: &Value) -> String {
    let parts = params
        .get("message")
        .and_then(|message| message.get("parts"))
        .and_then(Value::as_array);

    let Some(parts) = parts else {
        return String::new();
    };

    parts
        .iter()
        .filter(|part| part.get("type").and_then(Value::as_str) == Some("text"))
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
