//! # bitebox-core: Pure Cart Logic for Bitebox
//!
//! This crate is the **heart** of the Bitebox food-delivery cart. It owns the
//! line items a customer has picked and derives every price shown at checkout.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bitebox Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Frontend                                 │   │
//! │  │    Menu UI ──► Cart Drawer ──► Checkout Button                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    bitebox-session                              │   │
//! │  │    add_to_cart, update_cart_item, check_checkout, etc.          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bitebox-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │ Catalog   │  │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │ LineItem  │  │  TaxRate  │  │CartTotals │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogItem, LineItem, OrderType, FeeSchedule)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart store and its derived totals
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation applied before cart operations
//!
//! ## Example Usage
//!
//! ```rust
//! use bitebox_core::{Cart, CatalogItem, UnavailablePolicy};
//!
//! let biryani = CatalogItem::new("m1", "Chicken Biryani", 1000);
//!
//! let mut cart = Cart::new();
//! cart.add_item(&biryani, 2, None, UnavailablePolicy::Remove);
//!
//! assert_eq!(cart.count(), 2);
//! assert_eq!(cart.subtotal().cents(), 2000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartTotals};
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single line.
///
/// ## Business Reason
/// Prevents accidental over-ordering from the quantity stepper
/// (e.g., typing 100 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 99;

/// Maximum length of the free-text special instructions on a line.
pub const MAX_INSTRUCTIONS_LEN: usize = 250;

/// Default delivery fee in minor units (99.00).
pub const DEFAULT_DELIVERY_FEE_CENTS: i64 = 9900;

/// Default platform fee in minor units (12.99).
pub const DEFAULT_PLATFORM_FEE_CENTS: i64 = 1299;

/// Default tax rate in basis points (500 = 5%).
pub const DEFAULT_TAX_RATE_BPS: u32 = 500;
