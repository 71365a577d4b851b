use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoneEtlError {
    #[error("invalid destination range for origin {origin}: min {min} > max {max}")]
    InvalidRangeError { origin: String, min: u16, max: u16 },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Configuration,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ZoneEtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidRangeError { .. } | Self::CsvError(_) | Self::ProcessingError { .. } => {
                ErrorCategory::Data
            }
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            Self::InvalidRangeError { .. } | Self::CsvError(_) | Self::ProcessingError { .. } => {
                ErrorSeverity::High
            }
            Self::IoError(_) | Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidRangeError { origin, .. } => format!(
                "Fix the zone table row for origin {} so Min_Zip_Int <= Max_Zip_Int",
                origin
            ),
            Self::CsvError(_) => {
                "Check that the zone table is a CSV with columns Set_ID,Min_Zip_Int,Max_Zip_Int,Zone"
                    .to_string()
            }
            Self::IoError(_) => "Check file paths and permissions".to_string(),
            Self::SerializationError(_) => "Check the output directory is writable".to_string(),
            Self::ConfigError { .. } | Self::MissingConfigError { .. } => {
                "Review the configuration file or command-line flags".to_string()
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Correct the '{}' setting and retry", field)
            }
            Self::ProcessingError { .. } => {
                "Inspect the reported zone table row for malformed values".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidRangeError { origin, min, max } => format!(
                "The zone table has an inverted destination range ({} > {}) for origin {}",
                min, max, origin
            ),
            Self::CsvError(e) => format!("Could not read the zone table: {}", e),
            Self::IoError(e) => format!("File operation failed: {}", e),
            Self::SerializationError(e) => format!("Could not write the run summary: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::MissingConfigError { field } => {
                format!("The '{}' setting is required", field)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad value for '{}': {}", field, reason)
            }
            Self::ProcessingError { message } => format!("Zone data problem: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, ZoneEtlError>;
