//! Mock calculator save endpoint.

use pixgraph::models::PublishConfig;
use wiremock::{
    matchers::{body_string_contains, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const SAVE_PATH: &str = "/api/v1/calculator/save";

/// Wrapper around wiremock MockServer with convenience methods
pub struct MockSaveServer {
    pub server: MockServer,
}

impl MockSaveServer {
    /// Start a new mock HTTP server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Publish settings pointing at this server
    pub fn publish_config(&self) -> PublishConfig {
        PublishConfig {
            endpoint: format!("{}{}", self.server.uri(), SAVE_PATH),
            graph_base_url: format!("{}/calculator", self.server.uri()),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Accept a form post for `graph_hash` and echo the hash back
    pub async fn mock_save_ok(&self, graph_hash: &str) {
        Mock::given(method("POST"))
            .and(path(SAVE_PATH))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(header("x-requested-with", "XMLHttpRequest"))
            .and(body_string_contains(format!("graph_hash={graph_hash}")))
            .and(body_string_contains("is_update=false"))
            .and(body_string_contains("my_graphs=false"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "hash": graph_hash })),
            )
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Respond to any post with `status` and a text body
    pub async fn mock_save_status(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path(SAVE_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Respond with 200 but a body that is not the expected JSON
    pub async fn mock_save_malformed(&self) {
        Mock::given(method("POST"))
            .and(path(SAVE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
            .mount(&self.server)
            .await;
    }
}
