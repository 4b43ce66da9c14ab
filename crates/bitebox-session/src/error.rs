//! # API Error Type
//!
//! Unified error type for session commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Bitebox                                │
//! │                                                                         │
//! │  add_to_cart(item, qty, ...)                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Validation Error? ── ValidationError::OutOfRange ──┐                   │
//! │         │                                           │                   │
//! │         ▼                                           ▼                   │
//! │  Sold out? ────────── CoreError::ItemUnavailable ── ApiError ─► UI      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Cart mutation (never fails) ─► CartResponse ──────────────────► UI     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! The frontend receives a machine-readable `code` and a human-readable
//! `message`:
//! ```json
//! { "code": "EMPTY_CART", "message": "Cart is empty" }
//! ```

use bitebox_core::{CoreError, ValidationError};
use serde::Serialize;

/// API error returned from session commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Catalog item is sold out
    ItemUnavailable,

    /// Checkout with nothing in the cart
    EmptyCart,

    /// Checkout without a logged-in user
    Unauthenticated,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemUnavailable { .. } => {
                ApiError::new(ErrorCode::ItemUnavailable, err.to_string())
            }
            CoreError::EmptyCart => ApiError::new(ErrorCode::EmptyCart, err.to_string()),
            CoreError::NotAuthenticated => {
                ApiError::new(ErrorCode::Unauthenticated, err.to_string())
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_code_and_message() {
        let err: ApiError = CoreError::EmptyCart.into();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "EMPTY_CART");
        assert_eq!(json["message"], "Cart is empty");
    }

    #[test]
    fn test_core_validation_maps_to_validation_code() {
        let err: ApiError = CoreError::Validation(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "quantity must be positive");
    }

    #[test]
    fn test_unavailable_and_unauthenticated_codes() {
        let err: ApiError = CoreError::ItemUnavailable {
            name: "Gulab Jamun".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ItemUnavailable);
        assert_eq!(err.to_string(), "[ItemUnavailable] Gulab Jamun is currently unavailable");

        let err: ApiError = CoreError::NotAuthenticated.into();
        assert_eq!(err.code, ErrorCode::Unauthenticated);
    }
}
