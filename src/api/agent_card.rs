use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};

use super::AppState;

/// Serves the descriptor bytes exactly as they were written at startup.
pub async fn get_agent_card(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, mime::APPLICATION_JSON.to_string())],
        state.agent_card,
    )
}
