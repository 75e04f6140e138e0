use crate::config::constants::{REPORTER_TAG, REPORT_DATA_TYPE_TEXT, REPORT_TITLE, REPORT_TYPE_BUG};
use crate::enums::report_result::ReportResult;
use crate::structs::quality_gate::ProjectStatus;
use crate::structs::report::{Report, ReportData};

pub struct ReportBuilder;

impl ReportBuilder {
    /// Map a quality gate status into the fixed report shape. Result and
    /// details both derive from the same verdict: `"ERROR"` fails, anything
    /// else passes. Data rows mirror the conditions one-to-one, in order.
    pub fn build(project_status: &ProjectStatus) -> Report {
        let result = if project_status.status == "ERROR" {
            ReportResult::Failed
        } else {
            ReportResult::Passed
        };

        Report {
            title: REPORT_TITLE.to_string(),
            details: format!("Code quality {}", result.as_str()),
            report_type: REPORT_TYPE_BUG.to_string(),
            reporter: REPORTER_TAG.to_string(),
            result,
            data: project_status
                .conditions
                .iter()
                .map(|condition| ReportData {
                    title: condition.metric_key.clone(),
                    data_type: REPORT_DATA_TYPE_TEXT.to_string(),
                    value: condition.actual_value.clone(),
                })
                .collect(),
        }
    }
}
