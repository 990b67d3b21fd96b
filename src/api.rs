use std::future::Future;

use reqwest::{Client, header};
use thiserror::Error;

use crate::config::Config;
use crate::types::ApiEnvelope;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP call itself could not complete.
    #[error("API request error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered outside the 2xx range.
    #[error("API request failed: {status}")]
    Status { status: u16 },
}

/// Read access to the backend API. The one seam in this crate: the dispatcher
/// is generic over it so tests can substitute a stub.
pub trait Backend {
    fn get(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> impl Future<Output = Result<ApiEnvelope, ApiError>> + Send;
}

/// HTTP client for the image library backend. No retry, no cache, no timeout
/// beyond reqwest's transport defaults.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: Config,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }
}

impl Backend for ApiClient {
    async fn get(&self, endpoint: &str, query: &[(&str, String)]) -> Result<ApiEnvelope, ApiError> {
        let url = format!("{}{}", self.config.api_base_url, endpoint);
        let mut request = self
            .http
            .get(&url)
            .header(header::CONTENT_TYPE, "application/json");
        if !self.config.api_key.is_empty() {
            request = request.header("X-API-Key", &self.config.api_key);
        }
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response.json::<ApiEnvelope>().await?)
    }
}
