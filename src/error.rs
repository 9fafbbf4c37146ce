//! Core error taxonomy shared by every service operation

use thiserror::Error;

/// Errors produced by core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Malformed or missing input, invalid enum value
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced user or record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Actor role is not authorized for the operation
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Bad login or invalid/expired reset token
    #[error("Authentication failed: {0}")]
    Credential(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unexpected fault at an operation boundary
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Detail string safe to hand to a client.
    ///
    /// Validation, not-found, permission, and credential errors carry their
    /// human-readable detail. Anything internal maps to a fixed generic
    /// message instead of echoing the underlying fault.
    pub fn client_message(&self) -> String {
        match self {
            CoreError::Validation(detail)
            | CoreError::NotFound(detail)
            | CoreError::Forbidden(detail)
            | CoreError::Credential(detail) => detail.clone(),
            CoreError::Database(_) | CoreError::Json(_) | CoreError::Internal(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
