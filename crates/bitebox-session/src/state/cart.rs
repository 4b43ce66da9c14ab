//! # Cart State
//!
//! The one cart handle for a browsing session.
//!
//! ## Ownership
//! `CartState` is created by whoever starts the session and handed to each
//! consumer by reference or by cloning the handle. Clones share the same
//! cart. Consumers never see the line list mutably; they go through
//! [`CartState::with_cart_mut`], which only exposes the cart's own
//! operations, so the uniqueness and quantity invariants always hold.
//!
//! ## Thread Safety
//! The cart sits behind `Arc<Mutex<T>>` so the handle is `Send + Sync`.
//! In practice there is a single mutator stream (user events), so the lock
//! is never contended.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bitebox_core::{Cart, FeeSchedule};
use tracing::debug;

/// Session-scoped cart handle.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates an empty delivery cart using `fees`.
    pub fn new(fees: FeeSchedule) -> Self {
        debug!(
            delivery_fee = fees.delivery_fee.cents(),
            platform_fee = fees.platform_fee.cents(),
            tax_bps = fees.tax_rate.bps(),
            "cart session started"
        );
        CartState {
            cart: Arc::new(Mutex::new(Cart::with_fees(fees))),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use bitebox_core::CartTotals;
    /// use bitebox_session::CartState;
    ///
    /// let cart_state = CartState::default();
    /// let totals = cart_state.with_cart(|c| CartTotals::from(c));
    /// assert_eq!(totals.count, 0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        f(&self.lock())
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        f(&mut self.lock())
    }

    /// Every cart operation leaves the invariants intact even if a caller's
    /// closure panicked mid-way, so a poisoned lock is still safe to reuse.
    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new(FeeSchedule::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitebox_core::{CatalogItem, OrderType, UnavailablePolicy};

    #[test]
    fn test_clones_share_one_cart() {
        let state = CartState::default();
        let view = state.clone();

        state.with_cart_mut(|c| {
            c.add_item(
                &CatalogItem::new("m1", "Vada Pav", 300),
                2,
                None,
                UnavailablePolicy::Remove,
            )
        });

        assert_eq!(view.with_cart(|c| c.count()), 2);
    }

    #[test]
    fn test_order_type_visible_to_readers() {
        let state = CartState::default();
        state.with_cart_mut(|c| c.set_order_type(OrderType::Pickup));
        assert_eq!(state.with_cart(|c| c.order_type()), OrderType::Pickup);
    }

    #[test]
    fn test_recovers_from_poisoned_lock() {
        let state = CartState::default();
        let poisoner = state.clone();

        let _ = std::thread::spawn(move || {
            poisoner.with_cart_mut(|_| panic!("view crashed"));
        })
        .join();

        assert!(state.with_cart(|c| c.is_empty()));
    }
}
