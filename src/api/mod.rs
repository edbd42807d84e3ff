// API routes and handlers

pub mod agent_card;
pub mod error;
pub mod health;
pub mod routes;
pub mod tasks;

use bytes::Bytes;

use crate::config::AppConfig;
use crate::services::PlanService;

/// Read-only state shared by every handler, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub plan_service: PlanService,
    pub agent_card: Bytes,
    pub openai_api_key_configured: bool,
    pub redact_internal_errors: bool,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(config: &AppConfig, plan_service: PlanService, agent_card: Bytes) -> Self {
        Self {
            plan_service,
            agent_card,
            openai_api_key_configured: config.upstream.is_key_configured(),
            redact_internal_errors: config.redact_internal_errors,
            max_body_bytes: config.max_body_bytes,
        }
    }
}
