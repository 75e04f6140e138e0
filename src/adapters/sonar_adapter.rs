use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::constants::{request_timeout, ISSUE_PAGE_SIZE, ISSUE_SEARCH_PATH, QUALITY_GATE_PATH};
use crate::errors::{BridgeError, BridgeResult};
use crate::structs::issue::{Issue, IssuesResponse};
use crate::structs::quality_gate::{ProjectStatus, QualityGateResponse};
use crate::traits::analysis_server::AnalysisServer;

/// Read-side client for the analysis server. Authenticates with basic auth,
/// token as username and an empty password.
pub struct SonarAdapter {
    client: Client,
    host: String,
    token: String,
}

impl SonarAdapter {
    pub fn new(host: &str, token: &str) -> BridgeResult<Self> {
        let client = Client::builder().timeout(request_timeout()).build()?;

        Ok(Self {
            client,
            host: host.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    async fn get_json<R>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        operation_name: &str,
    ) -> BridgeResult<R>
    where
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.host, path);

        let response = match self
            .client
            .get(&url)
            .basic_auth(&self.token, Some(""))
            .query(query)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("Network error during {}: {}", operation_name, e);
                return Err(BridgeError::network_error(
                    operation_name,
                    Some(&url),
                    &e.to_string(),
                ));
            }
        };

        match response.status() {
            status if status.is_success() => match response.json().await {
                Ok(data) => Ok(data),
                Err(e) => {
                    log::error!("Failed to parse JSON response for {}: {}", operation_name, e);
                    Err(BridgeError::ParseError {
                        content_type: "JSON".to_string(),
                        reason: format!("invalid response body for {}: {}", operation_name, e),
                    })
                }
            },
            status => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                log::error!(
                    "{} failed with status {}: {}",
                    operation_name,
                    status,
                    body
                );
                Err(BridgeError::http_error(operation_name, status.as_u16(), &body))
            }
        }
    }
}

#[async_trait]
impl AnalysisServer for SonarAdapter {
    async fn quality_gate_status(&self, project_key: &str) -> BridgeResult<ProjectStatus> {
        let response: QualityGateResponse = self
            .get_json(
                QUALITY_GATE_PATH,
                &[("projectKey", project_key)],
                "quality gate fetch",
            )
            .await?;

        Ok(response.project_status)
    }

    async fn unresolved_issues(&self, project_key: &str) -> BridgeResult<Vec<Issue>> {
        let page_size = ISSUE_PAGE_SIZE.to_string();
        let response: IssuesResponse = self
            .get_json(
                ISSUE_SEARCH_PATH,
                &[
                    ("resolved", "false"),
                    ("componentKeys", project_key),
                    ("ps", page_size.as_str()),
                ],
                "issue search",
            )
            .await?;

        Ok(response.issues)
    }
}
