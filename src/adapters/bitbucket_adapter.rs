use async_trait::async_trait;
use reqwest::{Client, Proxy, Response, StatusCode};

use crate::config::constants::{request_timeout, BITBUCKET_API_BASE};
use crate::errors::{BridgeError, BridgeResult};
use crate::structs::annotation::Annotation;
use crate::structs::report::Report;
use crate::structs::run_config::RunConfig;
use crate::traits::insights_publisher::InsightsPublisher;

/// Write-side client for the Code Insights API. All calls go through the
/// configured local proxy, which injects platform credentials.
pub struct BitbucketAdapter {
    client: Client,
    report_url: String,
}

impl BitbucketAdapter {
    pub fn new(config: &RunConfig) -> BridgeResult<Self> {
        let proxy = Proxy::all(config.proxy.url()).map_err(|e| {
            BridgeError::system_error("proxy setup", &format!("invalid proxy target: {}", e))
        })?;
        let client = Client::builder()
            .proxy(proxy)
            .timeout(request_timeout())
            .build()?;

        Ok(Self {
            client,
            report_url: format!(
                "{}/repositories/{}/commit/{}/reports/{}",
                BITBUCKET_API_BASE, config.reposlug, config.commit, config.report_id
            ),
        })
    }

    async fn expect_success(response: Response, operation_name: &str) -> BridgeResult<()> {
        match response.status() {
            status if status.is_success() => Ok(()),
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

    fn send_error(operation_name: &str, url: &str, error: reqwest::Error) -> BridgeError {
        log::error!("Network error during {}: {}", operation_name, error);
        BridgeError::network_error(operation_name, Some(url), &error.to_string())
    }
}

#[async_trait]
impl InsightsPublisher for BitbucketAdapter {
    async fn delete_report(&self) -> BridgeResult<()> {
        let response = self
            .client
            .delete(&self.report_url)
            .send()
            .await
            .map_err(|e| Self::send_error("report delete", &self.report_url, e))?;

        // First-ever publish has nothing to delete, treat 404 as success
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }

        Self::expect_success(response, "report delete").await
    }

    async fn put_report(&self, report: &Report) -> BridgeResult<()> {
        let response = self
            .client
            .put(&self.report_url)
            .json(report)
            .send()
            .await
            .map_err(|e| Self::send_error("report create", &self.report_url, e))?;

        Self::expect_success(response, "report create").await
    }

    async fn post_annotations(&self, annotations: &[Annotation]) -> BridgeResult<()> {
        let url = format!("{}/annotations", self.report_url);
        let response = self
            .client
            .post(&url)
            .json(&annotations)
            .send()
            .await
            .map_err(|e| Self::send_error("annotation publish", &url, e))?;

        Self::expect_success(response, "annotation publish").await
    }
}
