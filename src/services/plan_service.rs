use std::sync::Arc;
use tracing::{info, warn};

use super::completion_client::{CompletionClient, CompletionOutcome};
use crate::prompts::{FALLBACK_PLAN, SYSTEM_INSTRUCTION};

/// Where the text of a plan came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    Model,
    Fallback,
}

impl PlanSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanSource::Model => "model",
            PlanSource::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPlan {
    pub text: String,
    pub source: PlanSource,
}

#[derive(Clone)]
pub struct PlanService {
    client: Arc<dyn CompletionClient>,
}

impl PlanService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Generates a meal and workout plan, degrading to the fallback plan when
    /// the upstream model is unavailable.
    pub async fn create_personalized_plan(&self, user_message: &str) -> GeneratedPlan {
        match self.client.complete(SYSTEM_INSTRUCTION, user_message).await {
            CompletionOutcome::Success(text) => {
                info!(plan_chars = text.len(), "Generated personalized plan");
                GeneratedPlan {
                    text,
                    source: PlanSource::Model,
                }
            }
            CompletionOutcome::UpstreamUnavailable(reason) => {
                warn!(fallback = true, reason = %reason, "Returning fallback plan");
                GeneratedPlan {
                    text: FALLBACK_PLAN.to_string(),
                    source: PlanSource::Fallback,
                }
            }
        }
    }
}
