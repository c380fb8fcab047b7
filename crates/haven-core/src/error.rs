//! # Error Types
//!
//! Domain-specific error types for haven-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  haven-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  haven-db errors (separate crate)                                      │
//! │  └── DbError          - Local storage failures                         │
//! │                                                                         │
//! │  storefront errors (in app)                                            │
//! │  ├── AuthError        - Login / session failures                       │
//! │  └── AppError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → UI toast / form error  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (book id, field name, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Book cannot be found in the catalog.
    #[error("Book not found: {0}")]
    BookNotFound(String),

    /// Checkout was submitted with nothing in the cart.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// A checkout action was attempted from the wrong wizard step.
    ///
    /// ## When This Occurs
    /// - Submitting before reaching the review step
    /// - Advancing or going back after the order completed
    #[error("Checkout is at step {current}, cannot {action}")]
    InvalidCheckoutStep { current: String, action: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a `Required` error for the given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::BookNotFound("42".to_string());
        assert_eq!(err.to_string(), "Book not found: 42");

        let err = CoreError::InvalidCheckoutStep {
            current: "shipping".to_string(),
            action: "submit".to_string(),
        };
        assert_eq!(err.to_string(), "Checkout is at step shipping, cannot submit");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::required("city");
        assert_eq!(err.to_string(), "city is required");
        assert_eq!(err.field(), "city");

        let err = ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must contain an @ symbol".to_string(),
        };
        assert_eq!(err.to_string(), "email has invalid format: must contain an @ symbol");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::required("cvv").into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
