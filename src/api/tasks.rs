use axum::{
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use bytes::Bytes;
use serde_json::Value;
use std::any::Any;
use tokio::task::JoinError;
use tracing::{error, info, instrument};

use super::error::{RpcError, RpcErrorResponse};
use super::AppState;
use crate::models::{
    collect_user_text, TaskRequest, TaskResponse, JSONRPC_VERSION, REQUIRED_FIELDS,
    TASKS_SEND_METHOD,
};

pub const PLAN_SOURCE_HEADER: &str = "x-plan-source";

const REQUEST_LOG_LIMIT: usize = 100;
const REDACTED_INTERNAL_MESSAGE: &str = "unexpected failure while generating plan";

/// Handle a `tasks/send` JSON-RPC call.
#[instrument(skip_all)]
pub async fn send_task(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let parsed = match body {
        Ok(body) => parse_task_request(&body),
        Err(rejection) => Err(unreadable_body(rejection)),
    };

    let request = match parsed {
        Ok(request) => request,
        Err(rejection) => {
            info!(code = rejection.error.code(), "Rejected task request: {}", rejection.error);
            return rejection.into_response();
        }
    };

    let plan_service = state.plan_service.clone();
    let user_text = request.user_text;
    let generation =
        tokio::spawn(async move { plan_service.create_personalized_plan(&user_text).await });

    match generation.await {
        Ok(plan) => (
            StatusCode::OK,
            [(PLAN_SOURCE_HEADER, plan.source.as_str())],
            Json(TaskResponse::assistant_text(request.id, plan.text)),
        )
            .into_response(),
        Err(join_error) => {
            let detail = describe_join_error(join_error);
            error!("General error: {}", detail);

            let message = if state.redact_internal_errors {
                REDACTED_INTERNAL_MESSAGE.to_string()
            } else {
                detail
            };

            RpcError::Internal(message).for_id(request.id).into_response()
        }
    }
}

/// Runs the validation sequence over a raw request body. The first failing
/// check decides the error.
pub fn parse_task_request(body: &[u8]) -> Result<TaskRequest, RpcErrorResponse> {
    let payload: Value = serde_json::from_slice(body).map_err(|e| {
        RpcError::InvalidRequest(format!("body is not valid JSON ({})", e)).for_id(Value::Null)
    })?;

    info!("Received request: {}...", truncate(&payload.to_string(), REQUEST_LOG_LIMIT));

    let Some(fields) = payload.as_object() else {
        return Err(
            RpcError::InvalidRequest("body must be a JSON object".to_string()).for_id(Value::Null),
        );
    };

    let id = fields.get("id").cloned().unwrap_or(Value::Null);

    if !REQUIRED_FIELDS.iter().all(|field| fields.contains_key(*field)) {
        return Err(
            RpcError::InvalidRequest("Missing required JSON-RPC fields".to_string()).for_id(id),
        );
    }

    if fields["jsonrpc"].as_str() != Some(JSONRPC_VERSION) {
        return Err(
            RpcError::InvalidRequest("unsupported jsonrpc version".to_string()).for_id(id),
        );
    }

    let method = &fields["method"];
    if method.as_str() != Some(TASKS_SEND_METHOD) {
        let name = match method {
            Value::String(name) => name.clone(),
            other => other.to_string(),
        };
        return Err(RpcError::MethodNotFound(name).for_id(id));
    }

    let user_text = collect_user_text(&fields["params"]);
    if user_text.is_empty() {
        return Err(RpcError::InvalidParams("No text message provided".to_string()).for_id(id));
    }

    Ok(TaskRequest { id, user_text })
}

/// Body could not be buffered, typically because it exceeds the route's size limit.
fn unreadable_body(rejection: BytesRejection) -> RpcErrorResponse {
    RpcError::InvalidRequest(format!("unreadable request body ({})", rejection.body_text()))
        .for_id(Value::Null)
}

fn truncate(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

fn describe_join_error(join_error: JoinError) -> String {
    if !join_error.is_panic() {
        return join_error.to_string();
    }

    let payload: Box<dyn Any + Send> = join_error.into_panic();
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "plan generation panicked".to_string()
    }
}
