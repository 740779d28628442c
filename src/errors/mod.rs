use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum HarvestError {
    // Configuration errors
    #[error("Configuration Error: {message}")]
    Configuration {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },

    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFile {
        path: String,
        reason: String,
    },

    // Network/API errors
    #[error("Network error during {operation}: {reason}")]
    Network {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // Parser errors
    #[error("Parse error in {content_type}: {reason}")]
    Parse {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },

    // File operation errors
    #[error("File operation '{operation}' failed for '{file_path}': {reason}")]
    FileOperation {
        file_path: String,
        operation: String,
        reason: String,
    },

    // Validation errors
    #[error("Validation error for field '{field}': value '{value}' violates constraint '{constraint}'")]
    Validation {
        field: String,
        value: String,
        constraint: String,
    },

    // System errors
    #[error("System error during {operation}: {reason}")]
    System {
        operation: String,
        reason: String,
    },

    // Multiple errors (for batch operations)
    #[error("{} errors occurred during {context}", .errors.len())]
    Multiple {
        errors: Vec<HarvestError>,
        context: String,
    },
}

impl HarvestError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::Configuration {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn network_error(operation: &str, url: Option<&str>, status_code: Option<u16>, reason: &str) -> Self {
        Self::Network {
            operation: operation.to_string(),
            url: url.map(|s| s.to_string()),
            status_code,
            reason: reason.to_string(),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperation {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::System {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, line_number: Option<usize>, reason: &str) -> Self {
        Self::Parse {
            content_type: content_type.to_string(),
            line_number,
            reason: reason.to_string(),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    /// Status code carried by a network error, if the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Network { status_code, .. } => *status_code,
            _ => None,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::Validation { .. } => true,
            Self::Configuration { .. } => true,
            Self::Parse { .. } => true,
            Self::ConfigurationFile { .. } => false,
            Self::FileOperation { .. } => false,
            Self::System { .. } => false,
            Self::Multiple { errors, .. } => errors.iter().any(|e| e.is_recoverable()),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::System { .. } => ErrorSeverity::Critical,
            Self::FileOperation { .. } => ErrorSeverity::High,
            Self::ConfigurationFile { .. } => ErrorSeverity::High,
            Self::Parse { .. } => ErrorSeverity::Medium,
            Self::Network { .. } => ErrorSeverity::Medium,
            Self::Validation { .. } => ErrorSeverity::Low,
            Self::Configuration { .. } => ErrorSeverity::Low,
            Self::Multiple { errors, .. } => errors
                .iter()
                .map(|e| e.severity())
                .max()
                .unwrap_or(ErrorSeverity::Low),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Configuration { field, suggestion, .. } => {
                let mut msg = self.to_string();
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFile { .. } => {
                format!("{}\n💡 Check file permissions and TOML syntax", self)
            }
            Self::Network { url, status_code, .. } => {
                let mut msg = self.to_string();
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg.push_str("\n💡 Check your connection and API credentials");
                msg
            }
            Self::Parse { line_number, .. } => {
                let mut msg = self.to_string();
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {})", line));
                }
                msg
            }
            Self::FileOperation { .. } => format!("{}\n💡 Check file permissions and path", self),
            Self::Validation { .. } | Self::System { .. } => self.to_string(),
            Self::Multiple { errors, context } => {
                let mut msg = format!("Multiple errors occurred during {}:\n", context);
                for (i, error) in errors.iter().enumerate() {
                    msg.push_str(&format!("  {}. {}\n", i + 1, error.user_message().replace('\n', "\n     ")));
                }
                msg
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }

    pub fn with_context(self, context: &str) -> Self {
        match self {
            Self::Multiple { errors, context: existing_context } => Self::Multiple {
                errors,
                context: format!("{} -> {}", existing_context, context),
            },
            _ => Self::Multiple {
                errors: vec![self],
                context: context.to_string(),
            },
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for harvest operations
pub type HarvestResult<T> = Result<T, HarvestError>;

pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message.
    pub fn handle_error(error: &HarvestError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<std::io::Error> for HarvestError {
    fn from(error: std::io::Error) -> Self {
        HarvestError::System {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for HarvestError {
    fn from(error: serde_json::Error) -> Self {
        HarvestError::Parse {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for HarvestError {
    fn from(error: toml::de::Error) -> Self {
        HarvestError::Parse {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
        }
    }
}

impl From<reqwest::Error> for HarvestError {
    fn from(error: reqwest::Error) -> Self {
        HarvestError::Network {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_errors_take_highest_severity() {
        let error = HarvestError::Multiple {
            errors: vec![
                HarvestError::validation_error("port", "0", "must be > 0"),
                HarvestError::file_error("out.json", "write", "denied"),
            ],
            context: "collect".to_string(),
        };

        assert_eq!(error.severity(), ErrorSeverity::High);
        assert!(error.is_recoverable());
    }

    #[test]
    fn test_network_message_includes_status() {
        let error = HarvestError::network_error("search", Some("https://api.github.com"), Some(403), "forbidden");
        let msg = error.user_message();

        assert!(msg.contains("Status: 403"));
        assert!(msg.contains("https://api.github.com"));
        assert_eq!(error.status_code(), Some(403));
    }

    #[test]
    fn test_with_context_chains() {
        let error = HarvestError::system_error("spawn", "boom")
            .with_context("collect")
            .with_context("python");

        match error {
            HarvestError::Multiple { context, errors } => {
                assert_eq!(context, "collect -> python");
                assert_eq!(errors.len(), 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
