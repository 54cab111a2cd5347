use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Usage error: {message}")]
    UsageError { message: String },

    #[error("Failed to read input: {source}")]
    InputReadError {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Failed to write output: {source}")]
    OutputError {
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required value: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Input,
    Output,
}

impl ConvertError {
    pub fn input(source: std::io::Error) -> Self {
        Self::InputReadError { source }
    }

    pub fn output(source: std::io::Error) -> Self {
        Self::OutputError { source }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UsageError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Usage,
            Self::InputReadError { .. } | Self::DecodeError(_) => ErrorCategory::Input,
            Self::OutputError { .. } => ErrorCategory::Output,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::UsageError { message } => message.clone(),
            Self::InputReadError { source } => format!("Failed to read from stdin: {}", source),
            Self::DecodeError(e) => format!("Failed to parse JSON: {}", e),
            Self::OutputError { source } => format!("Failed to write configuration: {}", source),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            Self::MissingConfigError { field } => format!("{} is required", field),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Usage => "Run with DOMAIN, or ZONE_ID DOMAIN to also declare the zone",
            ErrorCategory::Input => {
                "Pipe the output of `aws route53 list-resource-record-sets` into this tool"
            }
            ErrorCategory::Output => "Check that the output location is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
