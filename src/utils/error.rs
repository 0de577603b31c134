use crate::domain::model::ItemId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Item {id} is not in the catalog")]
    ItemNotFound { id: ItemId },

    #[error("Persistence error for key '{key}': {message}")]
    PersistenceError { key: String, message: String },

    #[error("Cannot parse intent '{input}': {reason}")]
    IntentParseError { input: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Catalog,
    Persistence,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ShopError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ShopError::ConfigError { .. }
            | ShopError::ConfigValidationError { .. }
            | ShopError::InvalidConfigValueError { .. }
            | ShopError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ShopError::ItemNotFound { .. } => ErrorCategory::Catalog,
            ShopError::PersistenceError { .. } | ShopError::SerializationError(_) => {
                ErrorCategory::Persistence
            }
            ShopError::IntentParseError { .. } => ErrorCategory::Input,
            ShopError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Catalog => ErrorSeverity::Low,
            ErrorCategory::Persistence => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ShopError::IoError(_) => {
                "Check that the storage directory exists and is writable".to_string()
            }
            ShopError::SerializationError(_) | ShopError::PersistenceError { .. } => {
                "The stored cart was ignored; it will be rewritten on the next cart change"
                    .to_string()
            }
            ShopError::ConfigError { .. }
            | ShopError::ConfigValidationError { .. }
            | ShopError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again".to_string()
            }
            ShopError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            ShopError::ItemNotFound { .. } => {
                "Use an id from the catalog (try the 'show' command)".to_string()
            }
            ShopError::IntentParseError { .. } => {
                "Commands: like, add, remove, select, clear, comment, draft, submit, close, show, quit"
                    .to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ShopError::ItemNotFound { id } => format!("There is no car with id {}", id),
            ShopError::IntentParseError { input, .. } => {
                format!("Unknown command: {}", input)
            }
            ShopError::PersistenceError { .. } | ShopError::SerializationError(_) => {
                "The saved cart could not be read".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShopError>;
