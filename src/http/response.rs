//! Error-to-status mapping and the wire error envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::endpoint::EndpointError;
use crate::service::ServiceError;

/// Fixed envelope carried by every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Everything the transport can answer with besides a success body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Expected, user-triggerable domain failure.
    #[error(transparent)]
    Domain(#[from] ServiceError),

    /// The request body could not be decoded into the operation's request.
    #[error("malformed request body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The endpoint chain failed for a reason the domain does not know.
    #[error("{0}")]
    Endpoint(EndpointError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(ServiceError::IntOverflow) => StatusCode::BAD_REQUEST,
            ApiError::Decode(_) | ApiError::Endpoint(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> ErrorBody {
        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_overflow_maps_to_client_error() {
        let response = ApiError::Domain(ServiceError::IntOverflow).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await.error, "integer overflow");
    }

    #[tokio::test]
    async fn test_decode_failure_maps_to_server_error() {
        let err = serde_json::from_str::<crate::endpoint::SumRequest>("{").unwrap_err();
        let response = ApiError::Decode(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_of(response).await.error.starts_with("malformed request body"));
    }

    #[tokio::test]
    async fn test_endpoint_failure_maps_to_server_error() {
        let response = ApiError::Endpoint("downstream unavailable".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await.error, "downstream unavailable");
    }
}
