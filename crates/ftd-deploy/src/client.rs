//! Asynchronous deployment-trigger client.

use crate::models::DeploymentJob;
use crate::Result;
use ftd_core::config::FtdClientConfig;
use ftd_core::transport::{HttpTransport, Transport};
use ftd_core::Error;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;

const DEPLOY_ENDPOINT: &str = "operational/deploy";

/// Asynchronous client for the appliance's deployment trigger.
#[derive(Clone)]
pub struct DeployClient {
    transport: Arc<dyn Transport>,
}

impl DeployClient {
    /// Construct a client directly from the appliance base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::from_config(&FtdClientConfig::new(base_url.as_ref().to_string())?)
    }

    /// Construct a client from an existing configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot be built.
    pub fn from_config(config: &FtdClientConfig) -> Result<Self> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new(config)?)))
    }

    /// Construct a client over an arbitrary transport.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Ask the appliance to apply staged configuration changes.
    ///
    /// `limit` caps the number of staged changes included in this
    /// deployment; `None` deploys everything pending. Returns the queued
    /// [`DeploymentJob`], whose progress can be observed with
    /// [`DeployClient::get_deployment`].
    pub async fn start_deployment(&self, limit: Option<u32>) -> Result<DeploymentJob> {
        let path = match limit {
            Some(limit) => format!("{DEPLOY_ENDPOINT}?limit={limit}"),
            None => DEPLOY_ENDPOINT.to_string(),
        };

        tracing::debug!(?limit, "triggering deployment");
        let bytes = self.transport.post(&path, json!({})).await?;
        decode(&bytes)
    }

    /// Fetch the current state of a deployment job.
    pub async fn get_deployment(&self, job_id: &str) -> Result<DeploymentJob> {
        let path = format!("{DEPLOY_ENDPOINT}/{job_id}");
        let bytes = self.transport.get(&path, &[]).await?;
        decode(&bytes)
    }
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> DeployClient {
        DeployClient::new(server.uri()).unwrap()
    }

    fn job_body(state: &str) -> serde_json::Value {
        json!({
            "id": "deploy-1",
            "type": "deploymentstatus",
            "state": state,
            "statusMessage": "deployment job",
            "queuedTime": 1_526_924_400_000u64
        })
    }

    #[tokio::test]
    async fn start_deployment_posts_to_trigger_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/fdm/latest/operational/deploy"))
            .respond_with(ResponseTemplate::new(200).set_body_json(job_body("QUEUED")))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let job = client.start_deployment(None).await.unwrap();
        assert_eq!(job.id.as_deref(), Some("deploy-1"));
        assert_eq!(job.state.as_deref(), Some("QUEUED"));
        assert!(!job.is_terminal());
    }

    #[tokio::test]
    async fn start_deployment_forwards_limit() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/fdm/latest/operational/deploy"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(job_body("QUEUED")))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.start_deployment(Some(5)).await.unwrap();
    }

    #[tokio::test]
    async fn get_deployment_reports_terminal_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/fdm/latest/operational/deploy/deploy-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(job_body("DEPLOYED")))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let job = client.get_deployment("deploy-1").await.unwrap();
        assert!(job.is_terminal());
    }

    #[tokio::test]
    async fn get_missing_deployment_surfaces_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/fdm/latest/operational/deploy/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.get_deployment("missing").await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
