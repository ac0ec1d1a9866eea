use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Seed file error ({path}): {message}")]
    SeedFileError { path: String, message: String },

    #[error("Missing required field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation failed for {field}: {reason}")]
    ValidationError { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, MenuError>;

impl MenuError {
    /// Message suitable for direct display to the chef; validation failures drop
    /// the internal prefix, everything else keeps the full description.
    pub fn user_friendly_message(&self) -> String {
        match self {
            MenuError::ValidationError { field, reason } => format!("{}: {}", field, reason),
            other => other.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, MenuError::ValidationError { .. })
    }
}
