use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeliveryError {
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

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input closed while waiting for {prompt}")]
    InputClosed { prompt: String },
}

impl DeliveryError {
    /// Short message for the operator console.
    pub fn user_friendly_message(&self) -> String {
        match self {
            DeliveryError::ConfigError { .. }
            | DeliveryError::MissingConfigError { .. }
            | DeliveryError::InvalidConfigValueError { .. }
            | DeliveryError::SerializationError(_) => {
                format!("Configuration could not be loaded: {}", self)
            }
            DeliveryError::InputClosed { prompt } => {
                format!("No more input available, stopped at {}", prompt)
            }
            DeliveryError::IoError(e) => format!("File system error: {}", e),
            DeliveryError::CsvError(e) => format!("CSV error: {}", e),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DeliveryError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, DeliveryError>;
