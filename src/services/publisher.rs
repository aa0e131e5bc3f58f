use std::time::Duration;

use serde::Deserialize;

use crate::error::PublishError;
use crate::models::{GraphHash, PublishConfig, SaveRequest};

/// Result of a successful save
#[derive(Debug, Clone, PartialEq)]
pub struct PublishOutcome {
    /// Hash the service stored the graph under
    pub hash: String,
    /// Public link to the saved graph
    pub url: String,
    /// Unencoded size of the posted form
    pub payload_bytes: usize,
}

#[derive(Debug, Deserialize)]
struct SaveResponse {
    hash: String,
}

/// Posts calculator state to the save endpoint
pub struct GraphPublisher {
    client: reqwest::blocking::Client,
    endpoint: String,
    graph_base_url: String,
}

impl GraphPublisher {
    pub fn new(config: &PublishConfig) -> Result<Self, PublishError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            graph_base_url: config.graph_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Link a saved graph is reachable at
    pub fn graph_url(&self, hash: &str) -> String {
        format!("{}/{}", self.graph_base_url, hash)
    }

    /// Send one save request. Blocking; no retries.
    pub fn publish(&self, request: &SaveRequest) -> Result<PublishOutcome, PublishError> {
        let payload_bytes = request.payload_bytes();
        tracing::info!(
            endpoint = %self.endpoint,
            graph_hash = %request.graph_hash,
            payload_bytes,
            "Publishing graph"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::REFERER, &self.graph_base_url)
            .header("X-Requested-With", "XMLHttpRequest")
            .form(request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Save request rejected");
            return Err(PublishError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SaveResponse = response
            .json()
            .map_err(|e| PublishError::Response(e.to_string()))?;

        let url = self.graph_url(&parsed.hash);
        tracing::info!(hash = %parsed.hash, url = %url, "Graph saved");

        Ok(PublishOutcome {
            hash: parsed.hash,
            url,
            payload_bytes,
        })
    }
}

/// Pick the caller's hash or generate a fresh one
pub fn resolve_hash(id: Option<&str>) -> Result<GraphHash, crate::error::InvalidIdError> {
    match id {
        Some(id) => GraphHash::parse(id),
        None => Ok(GraphHash::generate()),
    }
}
