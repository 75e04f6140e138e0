use crate::enums::report_result::ReportResult;
use serde::Serialize;

/// Code Insights report body, PUT once per run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub title: String,
    pub details: String,
    pub report_type: String,
    pub reporter: String,
    pub result: ReportResult,
    pub data: Vec<ReportData>,
}

/// One display row on the report, mirroring a quality gate condition.
#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub title: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub value: String,
}
