use serde::Deserialize;

/// Body of `GET /api/issues/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct IssuesResponse {
    pub issues: Vec<Issue>,
}

/// One unresolved finding on the project. `component` is colon-delimited,
/// with the file path in the last segment.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub key: String,
    pub severity: String,
    pub message: String,
    #[serde(default)]
    pub effort: Option<String>,
    pub component: String,
    #[serde(default)]
    pub line: Option<u32>,
}
