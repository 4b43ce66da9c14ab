//! # Commands Module
//!
//! Functions the web frontend calls to drive the cart.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! └── cart.rs     ◄─── Cart manipulation, totals, checkout gate
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartState) -> CartResponse
//!
//! // Cart plus an answer from the login collaborator
//! fn check_checkout(cart: &CartState, authenticated: bool) -> Result<CartResponse, ApiError>
//! ```

pub mod cart;
