use serde::Serialize;
use serde_json::{Map, Value};

/// Capability descriptor served from `/.well-known/agent.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCard {
    pub schema_version: String,
    pub name: String,
    pub version: String,
    pub description: String,
    pub logo: Logo,
    pub api: ApiEndpoint,
    pub capabilities: Map<String, Value>,
    pub examples: Vec<UsageExample>,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Logo {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiEndpoint {
    pub url: String,
    #[serde(rename = "type")]
    pub api_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageExample {
    #[serde(rename = "for")]
    pub use_case: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
}
