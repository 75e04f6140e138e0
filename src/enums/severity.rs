use serde::Serialize;

/// Severity reported by the analysis server. Anything outside the five
/// known levels parses to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Blocker,
    Critical,
    Major,
    Minor,
    Info,
    Unknown,
}

impl IssueSeverity {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "BLOCKER" => Self::Blocker,
            "CRITICAL" => Self::Critical,
            "MAJOR" => Self::Major,
            "MINOR" => Self::Minor,
            "INFO" => Self::Info,
            _ => Self::Unknown,
        }
    }
}

/// Severity as Code Insights understands it. `Unmapped` serializes to an
/// empty string, matching the wire shape for unrecognized source levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnnotationSeverity {
    #[serde(rename = "CRITICAL")]
    Critical,
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "")]
    Unmapped,
}

impl From<IssueSeverity> for AnnotationSeverity {
    fn from(severity: IssueSeverity) -> Self {
        match severity {
            IssueSeverity::Blocker => Self::Critical,
            IssueSeverity::Critical => Self::Critical,
            IssueSeverity::Major => Self::High,
            IssueSeverity::Minor => Self::Medium,
            IssueSeverity::Info => Self::Low,
            IssueSeverity::Unknown => Self::Unmapped,
        }
    }
}

impl AnnotationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
            Self::Unmapped => "",
        }
    }
}
