use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use thiserror::Error;

use crate::config::DashboardConfig;

/// Shown for any non-success HTTP status.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load campaigns";

/// Shown when a failure carries no message of its own.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Authentication required")]
    Unauthorized,
    #[error("Access denied")]
    Forbidden,
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Server error: {0}")]
    Server(String),
    #[error("Invalid response: {0}")]
    Parse(String),
    /// Reported by sources that abort their own requests.
    #[allow(dead_code)]
    #[error("Request cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl ApiError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }

    /// The text the dashboard shows for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized
            | ApiError::Forbidden
            | ApiError::NotFound(_)
            | ApiError::Server(_) => LOAD_FAILED_MESSAGE.to_string(),
            ApiError::Network(msg) | ApiError::Parse(msg) if msg.trim().is_empty() => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

/// HTTP client bound to the configured campaigns endpoint.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    endpoint: String,
    client: Client,
}

impl ApiClient {
    pub fn new(config: &DashboardConfig) -> Self {
        // On wasm, we can't use timeout
        #[cfg(target_arch = "wasm32")]
        let client = Client::new();

        #[cfg(not(target_arch = "wasm32"))]
        let client = {
            let mut builder = Client::builder();
            if let Some(timeout) = config.request_timeout {
                builder = builder.timeout(timeout);
            }
            builder.build().unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client, using defaults: {}", e);
                Client::new()
            })
        };

        ApiClient {
            inner: Arc::new(ApiClientInner {
                endpoint: config.campaigns_url.clone(),
                client,
            }),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// `GET` the endpoint and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        let response = self.inner.client.get(&self.inner.endpoint).send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_success() {
            return response.json::<T>().await.map_err(|e| ApiError::Parse(e.to_string()));
        }

        match status {
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden),
            StatusCode::NOT_FOUND => {
                let text = response.text().await.unwrap_or_default();
                Err(ApiError::NotFound(text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ApiError::Server(format!("{}: {}", status, text)))
            }
        }
    }
}
