use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use thiserror::Error;

use crate::models::{ErrorObject, TaskErrorResponse, JSONRPC_VERSION};

/// Client-facing JSON-RPC failures of the task endpoint.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RpcError {
    #[error("Invalid Request: {0}")]
    InvalidRequest(String),
    #[error("Method not found: {0}")]
    MethodNotFound(String),
    #[error("Invalid params: {0}")]
    InvalidParams(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RpcError {
    pub fn code(&self) -> i32 {
        match self {
            RpcError::InvalidRequest(_) => -32600,
            RpcError::MethodNotFound(_) => -32601,
            RpcError::InvalidParams(_) => -32602,
            RpcError::Internal(_) => -32603,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            RpcError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RpcError::MethodNotFound(_) => StatusCode::NOT_FOUND,
            RpcError::InvalidParams(_) => StatusCode::BAD_REQUEST,
            RpcError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Binds the error to the request id it answers.
    pub fn for_id(self, id: Value) -> RpcErrorResponse {
        RpcErrorResponse { id, error: self }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RpcErrorResponse {
    pub id: Value,
    pub error: RpcError,
}

impl IntoResponse for RpcErrorResponse {
    fn into_response(self) -> Response {
        let status = self.error.status();
        let body = Json(TaskErrorResponse {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: self.id,
            error: ErrorObject {
                code: self.error.code(),
                message: self.error.to_string(),
            },
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_statuses() {
        let cases = [
            (RpcError::InvalidRequest("x".into()), -32600, StatusCode::BAD_REQUEST),
            (RpcError::MethodNotFound("x".into()), -32601, StatusCode::NOT_FOUND),
            (RpcError::InvalidParams("x".into()), -32602, StatusCode::BAD_REQUEST),
            (RpcError::Internal("x".into()), -32603, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, code, status) in cases {
            assert_eq!(error.code(), code);
            assert_eq!(error.status(), status);
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            RpcError::MethodNotFound("tasks/cancel".into()).to_string(),
            "Method not found: tasks/cancel"
        );
        assert_eq!(
            RpcError::InvalidParams("No text message provided".into()).to_string(),
            "Invalid params: No text message provided"
        );
    }
}
