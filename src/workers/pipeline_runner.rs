use crate::errors::BridgeResult;
use crate::services::annotation_builder::AnnotationBuilder;
use crate::services::report_builder::ReportBuilder;
use crate::structs::run_config::RunConfig;
use crate::traits::analysis_server::AnalysisServer;
use crate::traits::insights_publisher::InsightsPublisher;

pub struct PipelineRunner;

impl PipelineRunner {
    /// Single pass: quality gate → report → issues → annotations. Every call
    /// is awaited in order and the first failure aborts the remaining steps.
    pub async fn run(
        config: &RunConfig,
        server: &dyn AnalysisServer,
        publisher: &dyn InsightsPublisher,
    ) -> BridgeResult<()> {
        let project_status = server.quality_gate_status(&config.project_name).await?;
        log::info!(
            "📊 Quality gate for '{}': {}",
            config.project_name,
            project_status.status
        );

        let report = ReportBuilder::build(&project_status);

        publisher.delete_report().await?;
        log::info!("🗑️ Deleted report '{}'", config.report_id);

        publisher.put_report(&report).await?;
        log::info!("✅ Created report '{}'", config.report_id);

        let issues = server.unresolved_issues(&config.project_name).await?;
        let annotations = AnnotationBuilder::build(&issues);
        let batch = AnnotationBuilder::batch(&annotations);

        if batch.is_empty() {
            log::info!("ℹ️ No unresolved issues, skipping annotations");
            return Ok(());
        }

        publisher.post_annotations(batch).await?;
        log::info!(
            "📌 Published {} of {} annotations",
            batch.len(),
            annotations.len()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BridgeError;
    use crate::structs::issue::Issue;
    use crate::structs::quality_gate::ProjectStatus;
    use crate::structs::run_config::ProxySettings;
    use crate::traits::analysis_server::MockAnalysisServer;
    use crate::traits::insights_publisher::MockInsightsPublisher;

    fn config() -> RunConfig {
        RunConfig {
            reposlug: "team/repo".to_string(),
            commit: "abc123".to_string(),
            report_id: "sonar-report".to_string(),
            project_name: "my_project".to_string(),
            host: "http://sonar.local".to_string(),
            token: "secret".to_string(),
            proxy: ProxySettings {
                host: "localhost".to_string(),
                port: 29418,
            },
        }
    }

    fn passed_status() -> ProjectStatus {
        ProjectStatus {
            status: "OK".to_string(),
            conditions: vec![],
        }
    }

    fn issues(count: usize) -> Vec<Issue> {
        (0..count)
            .map(|i| Issue {
                key: format!("AYx-{}", i),
                severity: "MAJOR".to_string(),
                message: "finding".to_string(),
                effort: None,
                component: "my_project:src/foo.js".to_string(),
                line: Some(1),
            })
            .collect()
    }

    #[tokio::test]
    async fn passed_gate_and_zero_issues_skips_annotation_call() {
        let mut server = MockAnalysisServer::new();
        server
            .expect_quality_gate_status()
            .times(1)
            .returning(|_| Ok(passed_status()));
        server
            .expect_unresolved_issues()
            .times(1)
            .returning(|_| Ok(vec![]));

        let mut publisher = MockInsightsPublisher::new();
        publisher.expect_delete_report().times(1).returning(|| Ok(()));
        publisher
            .expect_put_report()
            .times(1)
            .withf(|report| report.result.as_str() == "PASSED")
            .returning(|_| Ok(()));
        publisher.expect_post_annotations().never();

        PipelineRunner::run(&config(), &server, &publisher)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn annotation_batch_is_capped_at_ninety_nine() {
        let mut server = MockAnalysisServer::new();
        server
            .expect_quality_gate_status()
            .returning(|_| Ok(passed_status()));
        server
            .expect_unresolved_issues()
            .returning(|_| Ok(issues(150)));

        let mut publisher = MockInsightsPublisher::new();
        publisher.expect_delete_report().returning(|| Ok(()));
        publisher.expect_put_report().returning(|_| Ok(()));
        publisher
            .expect_post_annotations()
            .times(1)
            .withf(|batch| batch.len() == 99 && batch[0].external_id == "AYx-0")
            .returning(|_| Ok(()));

        PipelineRunner::run(&config(), &server, &publisher)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn small_issue_list_is_submitted_whole() {
        let mut server = MockAnalysisServer::new();
        server
            .expect_quality_gate_status()
            .returning(|_| Ok(passed_status()));
        server.expect_unresolved_issues().returning(|_| Ok(issues(3)));

        let mut publisher = MockInsightsPublisher::new();
        publisher.expect_delete_report().returning(|| Ok(()));
        publisher.expect_put_report().returning(|_| Ok(()));
        publisher
            .expect_post_annotations()
            .times(1)
            .withf(|batch| batch.len() == 3)
            .returning(|_| Ok(()));

        PipelineRunner::run(&config(), &server, &publisher)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn quality_gate_failure_aborts_before_any_publish() {
        let mut server = MockAnalysisServer::new();
        server
            .expect_quality_gate_status()
            .times(1)
            .returning(|_| Err(BridgeError::http_error("quality gate fetch", 401, "")));
        server.expect_unresolved_issues().never();

        let mut publisher = MockInsightsPublisher::new();
        publisher.expect_delete_report().never();
        publisher.expect_put_report().never();
        publisher.expect_post_annotations().never();

        let result = PipelineRunner::run(&config(), &server, &publisher).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn delete_failure_aborts_report_creation() {
        let mut server = MockAnalysisServer::new();
        server
            .expect_quality_gate_status()
            .returning(|_| Ok(passed_status()));
        server.expect_unresolved_issues().never();

        let mut publisher = MockInsightsPublisher::new();
        publisher
            .expect_delete_report()
            .times(1)
            .returning(|| Err(BridgeError::http_error("report delete", 500, "boom")));
        publisher.expect_put_report().never();
        publisher.expect_post_annotations().never();

        let result = PipelineRunner::run(&config(), &server, &publisher).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn failed_gate_still_publishes_annotations() {
        let mut server = MockAnalysisServer::new();
        server.expect_quality_gate_status().returning(|_| {
            Ok(ProjectStatus {
                status: "ERROR".to_string(),
                conditions: vec![],
            })
        });
        server.expect_unresolved_issues().returning(|_| Ok(issues(1)));

        let mut publisher = MockInsightsPublisher::new();
        publisher.expect_delete_report().returning(|| Ok(()));
        publisher
            .expect_put_report()
            .times(1)
            .withf(|report| report.result.as_str() == "FAILED")
            .returning(|_| Ok(()));
        publisher
            .expect_post_annotations()
            .times(1)
            .returning(|_| Ok(()));

        PipelineRunner::run(&config(), &server, &publisher)
            .await
            .unwrap();
    }
}
