use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize)]
struct SumRequest {
    #[serde(rename = "X")]
    x: i64,
    #[serde(rename = "Y")]
    y: i64,
}

#[derive(Debug, Deserialize)]
struct SumResponse {
    #[serde(rename = "V")]
    v: i64,
    #[serde(rename = "Err")]
    err: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Errors surfaced by [`SumClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service rejected the request with its overflow domain error.
    #[error("integer overflow")]
    IntOverflow,

    /// The service answered with some other error envelope.
    #[error("server error: {0}")]
    Remote(String),

    /// The request never completed.
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not in the expected shape.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client for the sum service.
pub struct SumClient {
    client: Client,
    base_url: String,
}

impl SumClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Sum two integers on the remote service.
    ///
    /// Non-success statuses are decoded through the error envelope; a
    /// success body carrying a non-empty `Err` field is converted back to
    /// the domain error it names.
    pub async fn sum(&self, x: i64, y: i64) -> Result<i64, ClientError> {
        let res = self
            .client
            .post(format!("{}/sum", self.base_url))
            .json(&SumRequest { x, y })
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            let envelope: ErrorBody = serde_json::from_str(&body)?;
            return Err(match envelope.error.as_str() {
                "integer overflow" => ClientError::IntOverflow,
                _ => ClientError::Remote(envelope.error),
            });
        }

        let response: SumResponse = serde_json::from_str(&body)?;
        match response.err.as_str() {
            "" => Ok(response.v),
            "integer overflow" => Err(ClientError::IntOverflow),
            other => Err(ClientError::Remote(other.to_string())),
        }
    }
}
