// client.rs - HTTP client for the clustering server
use super::types::{RunRequest, RunResponse, StepReply};
use crate::dataset::Point;
use reqwest::{Client, Response};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Server returned error status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("{0}")]
    Rejected(String),

    #[error("Malformed reply: {0}")]
    BadReply(String),
}

/// The two operations the clustering server exposes.
#[allow(async_fn_in_trait)]
pub trait ClusterBackend {
    /// Replace the server's dataset.
    async fn set_data(&self, data: &[Point]) -> Result<(), ServerError>;

    /// Run one algorithm step over `data` using the named initialization.
    async fn run_step(
        &self,
        data: &[Point],
        init_method: &str,
    ) -> Result<StepReply, ServerError>;
}

pub struct KMeansClient {
    http: Client,
    endpoint: String,
}

impl KMeansClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::from_client(Client::new(), endpoint)
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ServerError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::from_client(http, endpoint))
    }

    /// Use a preconfigured `reqwest::Client` (proxy, TLS or timeout settings).
    pub fn from_client(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Turn a non-2xx reply into `ServerError::Status`, keeping its text.
    async fn check_status(response: Response) -> Result<Response, ServerError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        warn!(status = status.as_u16(), %body, "server error");
        Err(ServerError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

impl ClusterBackend for KMeansClient {
    async fn set_data(&self, data: &[Point]) -> Result<(), ServerError> {
        let response = self
            .http
            .post(format!("{}/set_data", self.endpoint))
            .json(data)
            .send()
            .await?;

        Self::check_status(response).await?;
        Ok(())
    }

    async fn run_step(
        &self,
        data: &[Point],
        init_method: &str,
    ) -> Result<StepReply, ServerError> {
        let req = RunRequest { data, init_method };
        let response = self
            .http
            .post(format!("{}/run", self.endpoint))
            .json(&req)
            .send()
            .await?;

        let res: RunResponse = Self::check_status(response).await?.json().await?;
        debug!(?res, "server response");

        // An empty `error` is no error at all.
        if let Some(message) = res.error.filter(|m| !m.is_empty()) {
            return Err(ServerError::Rejected(message));
        }

        match (res.centroids, res.clusters) {
            (Some(centroids), Some(clusters)) => Ok(StepReply {
                centroids,
                clusters,
            }),
            _ => Err(ServerError::BadReply(
                "reply is missing centroids or clusters".to_string(),
            )),
        }
    }
}
