use anyhow::{Context, Result};
use bytes::Bytes;
use serde_json::Map;
use std::path::{Path, PathBuf};

use crate::models::{AgentCard, ApiEndpoint, Contact, Logo, UsageExample};

pub const AGENT_CARD_FILE: &str = "agent.json";

/// Descriptor contents as written to disk, plus where they were written.
#[derive(Debug, Clone)]
pub struct PublishedAgentCard {
    pub path: PathBuf,
    pub content: Bytes,
}

pub fn build_agent_card(task_endpoint_url: &str) -> AgentCard {
    AgentCard {
        schema_version: "1.0".to_string(),
        name: "FitMealPlanner".to_string(),
        version: "1.0.0".to_string(),
        description: "A personalized meal and workout planning assistant that creates customized plans based on your fitness goals, body metrics, and preferences.".to_string(),
        logo: Logo {
            url: "https://example.com/logo.png".to_string(),
            alt: "FitMealPlanner Logo".to_string(),
        },
        api: ApiEndpoint {
            url: task_endpoint_url.to_string(),
            api_type: "JSON-RPC".to_string(),
        },
        capabilities: Map::new(),
        examples: vec![
            UsageExample {
                use_case: "Personal Meal Plan".to_string(),
                message: "I'm 32 years old, 5'10\", 180 lbs. I work out 3 times a week focusing on weight training. My goal is to lose weight and build muscle. Can you create a meal plan for me?".to_string(),
            },
            UsageExample {
                use_case: "Workout Routine".to_string(),
                message: "I'm a 28-year-old woman, 5'5\", 130 lbs. I want to improve my flexibility and build core strength. I currently don't exercise much. What workout routine would you recommend?".to_string(),
            },
        ],
        contact: Contact {
            name: "Support Team".to_string(),
            email: "support@fitmealplanner.example.com".to_string(),
        },
    }
}

/// Serializes the descriptor with two-space indentation and writes it to
/// `<dir>/agent.json`, creating the directory if needed.
pub async fn publish_agent_card(dir: &Path, card: &AgentCard) -> Result<PublishedAgentCard> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let content = serde_json::to_vec_pretty(card).context("Failed to serialize agent card")?;
    let path = dir.join(AGENT_CARD_FILE);

    tokio::fs::write(&path, &content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(PublishedAgentCard {
        path,
        content: Bytes::from(content),
    })
}
