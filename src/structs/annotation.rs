use crate::enums::report_result::ReportResult;
use crate::enums::severity::AnnotationSeverity;
use serde::Serialize;

/// One inline finding attached to the report, derived 1:1 from an issue.
#[derive(Debug, Clone, Serialize)]
pub struct Annotation {
    pub external_id: String,
    pub annotation_type: String,
    pub summary: String,
    pub details: String,
    pub result: ReportResult,
    pub severity: AnnotationSeverity,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}
