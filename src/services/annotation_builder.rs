use crate::config::constants::{ANNOTATION_TYPE_BUG, MAX_ANNOTATIONS_PER_REPORT};
use crate::enums::report_result::ReportResult;
use crate::enums::severity::{AnnotationSeverity, IssueSeverity};
use crate::structs::annotation::Annotation;
use crate::structs::issue::Issue;

pub struct AnnotationBuilder;

impl AnnotationBuilder {
    pub fn build(issues: &[Issue]) -> Vec<Annotation> {
        issues.iter().map(Self::annotation).collect()
    }

    /// Annotations represent failing findings only, so `result` is always
    /// FAILED.
    fn annotation(issue: &Issue) -> Annotation {
        Annotation {
            external_id: issue.key.clone(),
            annotation_type: ANNOTATION_TYPE_BUG.to_string(),
            summary: issue.message.clone(),
            details: format!("effort: {}", issue.effort.as_deref().unwrap_or("")),
            result: ReportResult::Failed,
            severity: AnnotationSeverity::from(IssueSeverity::parse(&issue.severity)),
            path: Self::component_path(&issue.component),
            line: issue.line,
        }
    }

    /// Strip the project/module prefix: keep the last colon-delimited segment.
    fn component_path(component: &str) -> String {
        component
            .split(':')
            .next_back()
            .unwrap_or(component)
            .to_string()
    }

    /// Hard truncation to the platform batch limit, original order kept.
    pub fn batch(annotations: &[Annotation]) -> &[Annotation] {
        &annotations[..annotations.len().min(MAX_ANNOTATIONS_PER_REPORT)]
    }
}
