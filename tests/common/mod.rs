#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, Response},
    Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use fit_meal_planner::api::{routes::create_routes, AppState};
use fit_meal_planner::config::AppConfig;
use fit_meal_planner::services::{
    build_agent_card, publish_agent_card, CompletionClient, CompletionOutcome, PlanService,
    PublishedAgentCard,
};

/// Builds configuration from explicit pairs, ignoring the process environment.
pub fn test_config(pairs: &[(&str, &str)]) -> AppConfig {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned()).expect("valid test config")
}

/// Writes the descriptor into `dir` and wires the router around `client`.
pub async fn test_app(
    config: &AppConfig,
    client: Arc<dyn CompletionClient>,
    dir: &Path,
) -> (Router, PublishedAgentCard) {
    let card = build_agent_card(&config.task_endpoint_url());
    let published = publish_agent_card(dir, &card)
        .await
        .expect("descriptor written");

    let state = AppState::new(config, PlanService::new(client), published.content.clone());
    (create_routes(state), published)
}

pub fn post_json(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Answers every completion with the same outcome.
pub struct FixedClient(pub CompletionOutcome);

#[async_trait]
impl CompletionClient for FixedClient {
    async fn complete(&self, _system_instruction: &str, _user_prompt: &str) -> CompletionOutcome {
        self.0.clone()
    }
}

/// Fails inside plan generation the way an unforeseen bug would.
pub struct PanickingClient;

#[async_trait]
impl CompletionClient for PanickingClient {
    async fn complete(&self, _system_instruction: &str, _user_prompt: &str) -> CompletionOutcome {
        panic!("plan store exploded")
    }
}
