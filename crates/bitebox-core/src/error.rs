//! # Error Types
//!
//! Domain-specific error types for bitebox-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bitebox-core errors (this file)                                       │
//! │  ├── CoreError        - Checkout / availability rule violations        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  bitebox-session errors                                                │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart store itself never returns these. Its operations are total;
//! these errors come from the checks a caller runs *before* touching it.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule errors raised around the cart.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Catalog item is marked out of stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Tap "Add" on a sold-out dish
    ///      │
    ///      ▼
    /// ItemUnavailable { name: "Paneer Tikka" }
    ///      │
    ///      ▼
    /// UI shows: "Paneer Tikka is currently unavailable"
    /// ```
    #[error("{name} is currently unavailable")]
    ItemUnavailable { name: String },

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Checkout attempted without an authenticated session.
    #[error("You must be logged in to checkout")]
    NotAuthenticated,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ItemUnavailable {
            name: "Paneer Tikka".to_string(),
        };
        assert_eq!(err.to_string(), "Paneer Tikka is currently unavailable");
        assert_eq!(
            CoreError::NotAuthenticated.to_string(),
            "You must be logged in to checkout"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: 99,
        };
        assert_eq!(err.to_string(), "quantity must be between 1 and 99");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
