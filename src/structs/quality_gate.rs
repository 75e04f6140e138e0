use serde::Deserialize;

/// Body of `GET /api/qualitygates/project_status`.
#[derive(Debug, Clone, Deserialize)]
pub struct QualityGateResponse {
    #[serde(rename = "projectStatus")]
    pub project_status: ProjectStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectStatus {
    pub status: String,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

/// One metric threshold check contributing to the gate verdict.
#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    #[serde(rename = "metricKey")]
    pub metric_key: String,
    #[serde(rename = "actualValue", default)]
    pub actual_value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_project_status_payload() {
        let body = r#"{
            "projectStatus": {
                "status": "ERROR",
                "conditions": [
                    {"status": "ERROR", "metricKey": "coverage", "actualValue": "42.5"},
                    {"status": "OK", "metricKey": "bugs", "actualValue": "0"}
                ]
            }
        }"#;

        let response: QualityGateResponse = serde_json::from_str(body).unwrap();
        let status = response.project_status;
        assert_eq!(status.status, "ERROR");
        assert_eq!(status.conditions.len(), 2);
        assert_eq!(status.conditions[0].metric_key, "coverage");
        assert_eq!(status.conditions[0].actual_value, "42.5");
    }

    #[test]
    fn missing_conditions_defaults_to_empty() {
        let body = r#"{"projectStatus": {"status": "OK"}}"#;
        let response: QualityGateResponse = serde_json::from_str(body).unwrap();
        assert!(response.project_status.conditions.is_empty());
    }
}
