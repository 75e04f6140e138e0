use async_trait::async_trait;

use crate::errors::BridgeResult;
use crate::structs::issue::Issue;
use crate::structs::quality_gate::ProjectStatus;

#[cfg(test)]
use mockall::automock;

/// Read side of the pipeline: the analysis server.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AnalysisServer: Send + Sync {
    async fn quality_gate_status(&self, project_key: &str) -> BridgeResult<ProjectStatus>;

    async fn unresolved_issues(&self, project_key: &str) -> BridgeResult<Vec<Issue>>;
}
