// Error handling utilities
// Author: Gabriel Demetrios Lafis

use thiserror::Error;

use crate::data::DataError;
use crate::storage::StorageError;
use super::ConfigError;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Data error: {0}")]
    Data(#[from] DataError),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("input is missing expected columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// Result type alias for AppError
pub type AppResult<T> = Result<T, AppError>;
