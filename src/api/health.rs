use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use super::AppState;

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "service": "FitMealPlanner",
        "openai_api_key_configured": state.openai_api_key_configured
    })))
}
