use thiserror::Error;

#[derive(Error, Debug)]
pub enum MsisdnError {
    #[error("Invalid input '{msisdn}': needs at least {required} characters, found {actual}")]
    InvalidInput {
        msisdn: String,
        required: usize,
        actual: usize,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Output error: {message}")]
    OutputError { message: String },

    #[error("{failed} of {total} numbers could not be formatted")]
    PartialFailure { failed: usize, total: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 依嚴重程度決定 CLI 退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl MsisdnError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MsisdnError::InvalidInput { .. } | MsisdnError::PartialFailure { .. } => {
                ErrorCategory::Input
            }
            MsisdnError::ConfigValidationError { .. }
            | MsisdnError::InvalidConfigValueError { .. }
            | MsisdnError::MissingConfigError { .. } => ErrorCategory::Configuration,
            MsisdnError::IoError(_) => ErrorCategory::Io,
            MsisdnError::SerializationError(_)
            | MsisdnError::CsvError(_)
            | MsisdnError::OutputError { .. } => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MsisdnError::InvalidInput { .. } | MsisdnError::PartialFailure { .. } => {
                ErrorSeverity::Medium
            }
            MsisdnError::ConfigValidationError { .. }
            | MsisdnError::InvalidConfigValueError { .. }
            | MsisdnError::MissingConfigError { .. }
            | MsisdnError::IoError(_) => ErrorSeverity::High,
            MsisdnError::SerializationError(_)
            | MsisdnError::CsvError(_)
            | MsisdnError::OutputError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MsisdnError::InvalidInput { .. } => {
                "Check that the number includes the full country code it claims to start with"
            }
            MsisdnError::PartialFailure { .. } => {
                "Inspect the error column of the output for the numbers that failed"
            }
            MsisdnError::ConfigValidationError { .. }
            | MsisdnError::InvalidConfigValueError { .. } => {
                "Fix the reported value in the TOML file or on the command line"
            }
            MsisdnError::MissingConfigError { .. } => {
                "Pass the value on the command line or set it in the [formatter] section"
            }
            MsisdnError::IoError(_) => "Make sure the file exists and is readable",
            MsisdnError::SerializationError(_)
            | MsisdnError::CsvError(_)
            | MsisdnError::OutputError { .. } => "Try a different --output kind",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MsisdnError::InvalidInput { msisdn, .. } => {
                format!("Number '{}' is too short to strip its country code", msisdn)
            }
            MsisdnError::MissingConfigError { field } => {
                format!("No {} was provided", field.replace('_', " "))
            }
            MsisdnError::IoError(e) => format!("Could not read input: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MsisdnError>;
