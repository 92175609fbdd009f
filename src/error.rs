//! Error types for the museum collection

use thiserror::Error;

/// Stable numeric error codes, reported alongside error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    NoSuchData = 1,
    BadValue = 2,
    Duplicate = 3,
    DimensionMismatch = 4,
    MissingDimension = 5,
    InvalidDateRange = 6,
    BadDate = 7,
    SeedFailure = 8,
    ConfigFailure = 9,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Missing dimension: {0}")]
    MissingDimension(String),

    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("Cannot parse date '{input}': {source}")]
    DateParse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Seed error: {0}")]
    Seed(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound(_) => ErrorCode::NoSuchData,
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::Conflict(_) => ErrorCode::Duplicate,
            AppError::DimensionMismatch(_) => ErrorCode::DimensionMismatch,
            AppError::MissingDimension(_) => ErrorCode::MissingDimension,
            AppError::InvalidDateRange { .. } => ErrorCode::InvalidDateRange,
            AppError::DateParse { .. } => ErrorCode::BadDate,
            AppError::Seed(_) => ErrorCode::SeedFailure,
            AppError::Config(_) => ErrorCode::ConfigFailure,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Seed(format!("invalid collection document: {}", e))
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Seed(format!("cannot read collection document: {}", e))
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
