use std::time::Duration;

pub const PROPERTIES_FILE: &str = "sonar-project.properties";
pub const PROPERTY_HOST_KEY: &str = "sonar.host.url";
pub const PROPERTY_TOKEN_KEY: &str = "sonar.login";

pub const QUALITY_GATE_PATH: &str = "api/qualitygates/project_status";
pub const ISSUE_SEARCH_PATH: &str = "api/issues/search";
// Single-page fetch, issues past this are not retrieved
pub const ISSUE_PAGE_SIZE: u32 = 500;

pub const BITBUCKET_API_BASE: &str = "https://api.bitbucket.org/2.0";
// Code Insights rejects batches larger than 100 annotations
pub const MAX_ANNOTATIONS_PER_REPORT: usize = 99;

pub const DEFAULT_PROXY_HOST: &str = "localhost";
pub const DEFAULT_PROXY_PORT: u16 = 29418;

pub const REPORT_TITLE: &str = "Code quality report";
pub const REPORT_TYPE_BUG: &str = "BUG";
pub const REPORTER_TAG: &str = "AT";
pub const REPORT_DATA_TYPE_TEXT: &str = "TEXT";
pub const ANNOTATION_TYPE_BUG: &str = "BUG";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

pub fn request_timeout() -> Duration {
    Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
}
