//! # Validation Module
//!
//! Input validation utilities for Literary Haven.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end                                                    │
//! │  ├── `required` inputs, immediate feedback                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Storefront commands (Rust)                                   │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: checkout fields, profile edits, search queries       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The mock login and signup deliberately skip validation: any signup
//! succeeds and only one credential pair logs in.
//!
//! ## Usage
//! ```rust
//! use haven_core::validation::{validate_email, validate_required};
//!
//! assert!(validate_email("demo@example.com").is_ok());
//! assert!(validate_required("city", "   ").is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of an email address (RFC 5321).
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length of a display name.
pub const MAX_NAME_LENGTH: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a form field is present and not just whitespace.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - At most 254 characters
/// - Exactly one `@` with a non-empty local part and domain
///
/// ## Example
/// ```rust
/// use haven_core::validation::validate_email;
///
/// assert!(validate_email("reader@literaryhaven.test").is_ok());
/// assert!(validate_email("no-at-symbol").is_err());
/// assert!(validate_email("@domain.com").is_err());
/// assert!(validate_email("user@").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::required("email"));
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: MAX_EMAIL_LENGTH,
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("must contain an @ symbol"))?;

    if local.is_empty() {
        return Err(invalid("local part cannot be empty"));
    }

    if domain.is_empty() {
        return Err(invalid("domain cannot be empty"));
    }

    if domain.contains('@') {
        return Err(invalid("must contain exactly one @ symbol"));
    }

    Ok(())
}

/// Validates a display name.
///
/// ## Rules
/// - Must not be blank
/// - At most 100 characters
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::required("name"));
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
