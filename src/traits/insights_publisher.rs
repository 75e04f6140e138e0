use async_trait::async_trait;

use crate::errors::BridgeResult;
use crate::structs::annotation::Annotation;
use crate::structs::report::Report;

#[cfg(test)]
use mockall::automock;

/// Write side of the pipeline: the code-insights platform.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait InsightsPublisher: Send + Sync {
    /// Remove any pre-existing report under the configured identifier.
    async fn delete_report(&self) -> BridgeResult<()>;

    /// Create or replace the report.
    async fn put_report(&self, report: &Report) -> BridgeResult<()>;

    /// Attach one batch of annotations to the report.
    async fn post_annotations(&self, annotations: &[Annotation]) -> BridgeResult<()>;
}
