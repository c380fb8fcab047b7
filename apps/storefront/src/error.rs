//! # App Error Type
//!
//! Unified error type returned by storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Literary Haven                         │
//! │                                                                         │
//! │  storefront.dispatch(Command::SubmitOrder)                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command handler  ── Result<T, AppError>                         │  │
//! │  │         │                                                        │  │
//! │  │  CoreError::EmptyCart ───────────────┐                           │  │
//! │  │  ValidationError (checkout form) ────┤                           │  │
//! │  │  AuthError::NotAuthenticated ────────┼──► AppError {code, msg} ─►│  │
//! │  │  DbError (startup only) ─────────────┤                           │  │
//! │  │  ConfigError (startup only) ─────────┘                           │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  UI: switch (err.code) { case 'FORBIDDEN': ... }                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage write failures during normal operation never reach this type:
//! the stores log them and keep the in-memory change.

use serde::Serialize;
use ts_rs::TS;

use haven_core::{CoreError, ValidationError};
use haven_db::DbError;

use crate::state::{AuthError, ConfigError};

/// Error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "FORBIDDEN",
///   "message": "Admin access required"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Book or other resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Wrong email/password pair
    InvalidCredentials,

    /// A signed-in user is required
    Unauthorized,

    /// The signed-in user is not an admin
    Forbidden,

    /// Business rule violated (empty cart, wrong checkout step)
    BusinessLogic,

    /// Local storage failed
    DatabaseError,

    /// Configuration could not be loaded
    ConfigError,

    /// Internal error
    Internal,
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        AppError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// The caller is not allowed into the admin panel.
    pub fn forbidden() -> Self {
        AppError::new(ErrorCode::Forbidden, "Admin access required")
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

/// Result type for storefront commands.
pub type AppResult<T> = Result<T, AppError>;

/// Converts database errors to app errors.
impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConnectionFailed(_) => {
                AppError::new(ErrorCode::DatabaseError, "Local storage unavailable")
            }
            DbError::MigrationFailed(_) => {
                AppError::new(ErrorCode::DatabaseError, "Local storage migration failed")
            }
            DbError::PoolExhausted => AppError::new(ErrorCode::DatabaseError, "Local storage busy"),
            DbError::QueryFailed(e) | DbError::Internal(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Local storage operation failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Local storage operation failed")
            }
        }
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::BookNotFound(id) => AppError::not_found("Book", &id),
            CoreError::EmptyCart => AppError::new(ErrorCode::BusinessLogic, err.to_string()),
            CoreError::InvalidCheckoutStep { .. } => {
                AppError::new(ErrorCode::BusinessLogic, err.to_string())
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                AppError::new(ErrorCode::InvalidCredentials, err.to_string())
            }
            AuthError::NotAuthenticated => AppError::new(ErrorCode::Unauthorized, err.to_string()),
            AuthError::Validation(e) => e.into(),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
