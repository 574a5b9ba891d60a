//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                     │
//! │  ├── CheckoutError    - Local checkout preconditions                   │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  shopfront-client errors (separate crate)                              │
//! │  └── ApiError         - HTTP/remote failures                           │
//! │                                                                         │
//! │  Taxonomy: checkout/validation errors are LOCAL - they are caught      │
//! │  before any network effect and require user correction. ApiError is   │
//! │  REMOTE - retryable by resubmitting unchanged or corrected data.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Checkout Error
// =============================================================================

/// Local checkout failures, caught before any network effect.
///
/// None of these variants mutate the submission state away from
/// `Idle`/`Failed`, and none of them reach the Order Sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// The cart has no lines; there is nothing to order.
    #[error("Your cart is empty.")]
    EmptyCart,

    /// Customer name or phone is missing.
    #[error("Please enter your name and phone number.")]
    MissingContactInfo,

    /// A submission is already in flight.
    ///
    /// ## When This Occurs
    /// The user double-clicks "Place Order" while the first request is
    /// still outstanding. At most one submission per cart session may be
    /// in flight; the repeat call is rejected without touching the sink.
    #[error("An order submission is already in progress.")]
    SubmissionInFlight,

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
/// Used for early validation before any request is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CheckoutError::EmptyCart.to_string(), "Your cart is empty.");
        assert_eq!(
            CheckoutError::MissingContactInfo.to_string(),
            "Please enter your name and phone number."
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "customer_name".to_string(),
        };
        assert_eq!(err.to_string(), "customer_name is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "name must be at most 200 characters");
    }

    #[test]
    fn test_validation_converts_to_checkout_error() {
        let validation_err = ValidationError::Required {
            field: "price".to_string(),
        };
        let err: CheckoutError = validation_err.into();
        assert!(matches!(err, CheckoutError::Validation(_)));
    }
}
