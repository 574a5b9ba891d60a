//! # Validation Module
//!
//! Input validation utilities for Shopfront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: View (session crate)                                         │
//! │  ├── Immediate feedback on form fields                                 │
//! │  └── Uses THIS MODULE before building any request                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Backend API                                                  │
//! │  └── Authoritative validation; its rejections surface as               │
//! │      remote errors with a retry available                              │
//! │                                                                         │
//! │  Defense in depth: the client never sends a request it already         │
//! │  knows the backend will reject.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;

// =============================================================================
// String Validators
// =============================================================================

fn require_non_blank(value: &str, field: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a customer name for checkout.
///
/// ## Rules
/// - Must not be blank
/// - At most 200 characters
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    require_non_blank(name, "customer_name")?;
    if name.trim().len() > 200 {
        return Err(ValidationError::TooLong {
            field: "customer_name".to_string(),
            max: 200,
        });
    }
    Ok(())
}

/// Validates a customer phone number for checkout.
///
/// ## Rules
/// - Must not be blank
/// - At most 20 characters
///
/// Format is deliberately loose: the backend is authoritative, and phone
/// formats vary too much to reject locally.
pub fn validate_customer_phone(phone: &str) -> ValidationResult<()> {
    require_non_blank(phone, "customer_phone")?;
    if phone.trim().len() > 20 {
        return Err(ValidationError::TooLong {
            field: "customer_phone".to_string(),
            max: 20,
        });
    }
    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be blank
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    require_non_blank(name, "name")?;
    if name.trim().len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }
    Ok(())
}

/// Validates a page title.
pub fn validate_page_title(title: &str) -> ValidationResult<()> {
    require_non_blank(title, "title")?;
    if title.trim().len() > 200 {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: 200,
        });
    }
    Ok(())
}

/// Validates a merchant account email.
///
/// A single `@` with non-empty sides is enough locally; the backend does
/// full address validation.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    require_non_blank(email, "email")?;
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must be an email address".to_string(),
        }),
    }
}

/// Validates a merchant account password.
pub fn validate_password(password: &str) -> ValidationResult<()> {
    require_non_blank(password, "password")
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a product price.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Asha").is_ok());
        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_customer_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_customer_phone() {
        assert!(validate_customer_phone("9999999999").is_ok());
        assert!(validate_customer_phone("+91 99999 99999").is_ok());
        assert!(validate_customer_phone("").is_err());
        assert!(validate_customer_phone(&"9".repeat(40)).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Masala Chai").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("owner@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("owner@").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_minor(0)).is_ok());
        assert!(validate_price(Money::from_minor(10_000)).is_ok());
        assert!(validate_price(Money::from_minor(-1)).is_err());
    }
}
