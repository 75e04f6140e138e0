use std::error::Error as StdError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum BridgeError {
    // Configuration errors
    MissingConfiguration {
        field: String,
    },
    MissingProperty {
        property: String,
    },

    // Network/API errors
    NetworkError {
        operation: String,
        url: Option<String>,
        reason: String,
    },
    HttpError {
        operation: String,
        status: u16,
        body: String,
    },

    // Parser errors
    ParseError {
        content_type: String,
        reason: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl BridgeError {
    pub fn missing_configuration(field: &str) -> Self {
        Self::MissingConfiguration {
            field: field.to_string(),
        }
    }

    pub fn missing_property(property: &str) -> Self {
        Self::MissingProperty {
            property: property.to_string(),
        }
    }

    pub fn network_error(operation: &str, url: Option<&str>, reason: &str) -> Self {
        Self::NetworkError {
            operation: operation.to_string(),
            url: url.map(|u| u.to_string()),
            reason: reason.to_string(),
        }
    }

    pub fn http_error(operation: &str, status: u16, body: &str) -> Self {
        Self::HttpError {
            operation: operation.to_string(),
            status,
            body: body.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::MissingConfiguration { field } => {
                format!("Missing required configuration: {}", field)
            }
            Self::MissingProperty { property } => {
                format!("Missing {} property", property)
            }
            Self::NetworkError {
                operation,
                url,
                reason,
            } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                msg
            }
            // The diagnostic prefers the response body when one exists
            Self::HttpError {
                operation,
                status,
                body,
            } => {
                if body.trim().is_empty() {
                    format!("{} failed with status {}", operation, status)
                } else {
                    body.clone()
                }
            }
            Self::ParseError {
                content_type,
                reason,
            } => {
                format!("Parse error in {}: {}", content_type, reason)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for BridgeError {}

/// Result type alias for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

impl From<std::io::Error> for BridgeError {
    fn from(error: std::io::Error) -> Self {
        BridgeError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(error: serde_json::Error) -> Self {
        BridgeError::ParseError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for BridgeError {
    fn from(error: reqwest::Error) -> Self {
        BridgeError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            reason: error.to_string(),
        }
    }
}
