//! # Validation Module
//!
//! Input checks run by the session layer before it touches the cart.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend                                                     │
//! │  ├── Quantity stepper bounds, disabled "Add" on sold-out dishes        │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Session command (Rust)                                       │
//! │  └── THIS MODULE: quantity, instructions, catalog item shape           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart (Rust)                                                  │
//! │  └── Accepts anything; normalizes quantity ≤ 0 into a removal          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bitebox_core::validation::{validate_quantity, validate_special_instructions};
//!
//! assert!(validate_quantity(2).is_ok());
//! assert!(validate_special_instructions("less spicy").is_ok());
//! ```

use crate::error::ValidationError;
use crate::types::CatalogItem;
use crate::{MAX_INSTRUCTIONS_LEN, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity being added to the cart.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (99)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in minor units. Zero is allowed (complimentary items).
///
/// ```rust
/// use bitebox_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points (0% to 100%).
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates the free-text note attached to a line.
///
/// Empty is fine; the cart stores it as no instructions.
pub fn validate_special_instructions(text: &str) -> ValidationResult<()> {
    if text.trim().chars().count() > MAX_INSTRUCTIONS_LEN {
        return Err(ValidationError::TooLong {
            field: "special instructions".to_string(),
            max: MAX_INSTRUCTIONS_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates the shape of a catalog item handed over by the menu.
///
/// Availability is a business rule, not a shape problem, so `in_stock`
/// is not checked here.
pub fn validate_catalog_item(item: &CatalogItem) -> ValidationResult<()> {
    if item.id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if item.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    validate_price_cents(item.price_cents)?;

    if let Some(original) = item.original_price_cents {
        validate_price_cents(original)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
