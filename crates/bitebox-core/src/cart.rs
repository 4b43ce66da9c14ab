//! # Cart
//!
//! The customer's in-progress order: an ordered list of line items, the order
//! type, and the fee schedule every derived price is computed from.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Frontend Action          Operation                 State Change        │
//! │  ───────────────          ─────────                 ────────────        │
//! │                                                                         │
//! │  Tap "Add" ──────────────► add_item() ────────────► lines.push(line)   │
//! │                                                                         │
//! │  Quantity stepper ───────► update_quantity() ─────► line.quantity = n  │
//! │                            (n ≤ 0)  ──────────────► remove line        │
//! │                                                                         │
//! │  Tap trash icon ─────────► remove_item() ─────────► lines.remove(i)    │
//! │                                                                         │
//! │  Order placed ───────────► clear() ───────────────► lines.clear()      │
//! │                                                                         │
//! │  Delivery/Pickup toggle ─► set_order_type() ──────► order_type = t     │
//! │                                                                         │
//! │  Render cart ────────────► subtotal(), total()... ► (read only)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation is total. Unknown line ids are ignored, and a quantity of
//! zero or less removes the line instead of being stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;
use crate::types::{CatalogItem, FeeSchedule, LineItem, OrderType, UnavailablePolicy};

/// The shopping cart.
///
/// ## Invariants
/// - Line ids are unique.
/// - Every line has quantity ≥ 1.
/// - Lines keep insertion order.
/// - Adding the same catalog item twice yields two lines, never a merge.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<LineItem>,

    order_type: OrderType,

    fees: FeeSchedule,

    /// When the cart was created/last cleared
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates an empty delivery cart with the default fee schedule.
    pub fn new() -> Self {
        Cart::with_fees(FeeSchedule::default())
    }

    /// Creates an empty delivery cart with the given fee schedule.
    pub fn with_fees(fees: FeeSchedule) -> Self {
        Cart {
            lines: Vec::new(),
            order_type: OrderType::default(),
            fees,
            created_at: Utc::now(),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Appends a new line snapshotting `item` and returns its line id.
    ///
    /// ## Behavior
    /// - Always creates a new line, even if `item.id` is already in the cart
    /// - Price, name, etc. are frozen at this moment
    /// - `quantity` is taken as given; callers validate it beforehand
    pub fn add_item(
        &mut self,
        item: &CatalogItem,
        quantity: i64,
        special_instructions: Option<String>,
        if_unavailable: UnavailablePolicy,
    ) -> String {
        let line_id = self.next_line_id();
        self.lines.push(LineItem::from_catalog(
            line_id.clone(),
            item,
            quantity,
            special_instructions,
            if_unavailable,
        ));
        line_id
    }

    /// Removes the line with `line_id`. Returns `false` if it was not present.
    pub fn remove_item(&mut self, line_id: &str) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.line_id != line_id);
        self.lines.len() != initial_len
    }

    /// Sets the quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: same as [`Cart::remove_item`]
    /// - unknown `line_id`: nothing happens
    ///
    /// Returns `true` if a line was changed or removed.
    pub fn update_quantity(&mut self, line_id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(line_id);
        }

        match self.lines.iter_mut().find(|l| l.line_id == line_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Removes every line. Order type and fees are kept.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Switches between delivery and pickup.
    pub fn set_order_type(&mut self, order_type: OrderType) {
        self.order_type = order_type;
    }

    /// Generates a UUID v4 not held by any current line.
    fn next_line_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Lines in display order.
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn get(&self, line_id: &str) -> Option<&LineItem> {
        self.lines.iter().find(|l| l.line_id == line_id)
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn fees(&self) -> &FeeSchedule {
        &self.fees
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    // =========================================================================
    // Derived Values
    // =========================================================================
    //
    // Recomputed on every call. Nothing here is cached.

    /// Total quantity across all lines (the badge on the cart icon).
    pub fn count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Sum of frozen unit price × quantity.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(LineItem::line_total).sum()
    }

    /// Waived for pickup orders and empty carts.
    pub fn delivery_fee(&self) -> Money {
        if self.is_empty() || self.order_type == OrderType::Pickup {
            Money::zero()
        } else {
            self.fees.delivery_fee
        }
    }

    /// Waived for empty carts.
    pub fn platform_fee(&self) -> Money {
        if self.is_empty() {
            Money::zero()
        } else {
            self.fees.platform_fee
        }
    }

    /// Fixed percentage of the subtotal; zero for empty carts.
    pub fn tax(&self) -> Money {
        if self.is_empty() {
            Money::zero()
        } else {
            self.subtotal().calculate_tax(self.fees.tax_rate)
        }
    }

    /// Subtotal + delivery fee + platform fee + tax.
    pub fn total(&self) -> Money {
        self.subtotal() + self.delivery_fee() + self.platform_fee() + self.tax()
    }

    /// Total discount against original prices.
    pub fn savings(&self) -> Money {
        self.lines.iter().map(LineItem::savings).sum()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of every derived value, for rendering in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub line_count: usize,
    pub count: i64,
    pub subtotal: Money,
    pub delivery_fee: Money,
    pub platform_fee: Money,
    pub tax: Money,
    pub savings: Money,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            count: cart.count(),
            subtotal: cart.subtotal(),
            delivery_fee: cart.delivery_fee(),
            platform_fee: cart.platform_fee(),
            tax: cart.tax(),
            savings: cart.savings(),
            total: cart.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_item(id: &str, price_cents: i64) -> CatalogItem {
        CatalogItem::new(id, format!("Dish {}", id), price_cents)
    }

    fn add(cart: &mut Cart, item: &CatalogItem, quantity: i64) -> String {
        cart.add_item(item, quantity, None, UnavailablePolicy::Remove)
    }

    #[test]
    fn test_new_cart_is_empty_delivery() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.order_type(), OrderType::Delivery);
        assert_eq!(cart.count(), 0);
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_count_is_sum_of_added_quantities() {
        let mut cart = Cart::new();
        add(&mut cart, &menu_item("m1", 100), 2);
        add(&mut cart, &menu_item("m2", 100), 5);
        add(&mut cart, &menu_item("m3", 100), 1);

        assert_eq!(cart.count(), 8);
        assert_eq!(cart.line_count(), 3);
    }

    #[test]
    fn test_checkout_scenario_totals() {
        let mut cart = Cart::new();
        add(&mut cart, &menu_item("m1", 1000), 2);
        add(&mut cart, &menu_item("m2", 500), 1);

        assert_eq!(cart.subtotal().cents(), 2500);
        assert_eq!(cart.delivery_fee().cents(), 9900);
        assert_eq!(cart.platform_fee().cents(), 1299);
        assert_eq!(cart.tax().cents(), 125);
        assert_eq!(cart.total().cents(), 13824);
    }

    #[test]
    fn test_subtotal_uses_price_at_time_of_adding() {
        let mut cart = Cart::new();
        let mut item = menu_item("m1", 1000);
        add(&mut cart, &item, 2);

        item.price_cents = 5000;

        assert_eq!(cart.subtotal().cents(), 2000);
        add(&mut cart, &item, 1);
        assert_eq!(cart.subtotal().cents(), 7000);
    }

    #[test]
    fn test_same_item_added_twice_gives_two_lines() {
        let mut cart = Cart::new();
        let item = menu_item("m1", 1000);
        let first = add(&mut cart, &item, 1);
        let second = cart.add_item(
            &item,
            1,
            Some("no onions".to_string()),
            UnavailablePolicy::Replace,
        );

        assert_ne!(first, second);
        assert_eq!(cart.line_count(), 2);

        cart.update_quantity(&second, 4);
        assert_eq!(cart.get(&first).map(|l| l.quantity), Some(1));
        assert_eq!(cart.get(&second).map(|l| l.quantity), Some(4));
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        add(&mut cart, &menu_item("m3", 100), 1);
        add(&mut cart, &menu_item("m1", 100), 1);
        add(&mut cart, &menu_item("m2", 100), 1);

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.item_id.as_str()).collect();
        assert_eq!(ids, vec!["m3", "m1", "m2"]);
    }

    #[test]
    fn test_update_to_zero_or_negative_removes() {
        for quantity in [0, -5] {
            let mut updated = Cart::new();
            let keep = add(&mut updated, &menu_item("m1", 1000), 1);
            let drop = add(&mut updated, &menu_item("m2", 500), 3);

            let mut removed = updated.clone();

            assert!(updated.update_quantity(&drop, quantity));
            assert!(removed.remove_item(&drop));

            assert_eq!(updated.lines(), removed.lines());
            assert!(updated.get(&keep).is_some());
            assert!(updated.get(&drop).is_none());
        }
    }

    #[test]
    fn test_update_changes_only_target_line() {
        let mut cart = Cart::new();
        let a = add(&mut cart, &menu_item("m1", 1000), 1);
        let b = add(&mut cart, &menu_item("m2", 500), 1);
        let before_b = cart.get(&b).cloned();

        cart.update_quantity(&a, 3);

        assert_eq!(cart.get(&a).map(|l| l.quantity), Some(3));
        assert_eq!(cart.get(&b).cloned(), before_b);
        assert_eq!(cart.subtotal().cents(), 3500);
    }

    #[test]
    fn test_unknown_line_id_is_noop() {
        let mut cart = Cart::new();
        add(&mut cart, &menu_item("m1", 1000), 2);
        let before = cart.lines().to_vec();

        assert!(!cart.remove_item("missing"));
        assert!(!cart.update_quantity("missing", 7));
        assert!(!cart.update_quantity("missing", 0));

        assert_eq!(cart.lines(), before.as_slice());
    }

    #[test]
    fn test_clear_keeps_order_type() {
        let mut cart = Cart::new();
        cart.set_order_type(OrderType::Pickup);
        add(&mut cart, &menu_item("m1", 1000), 2);

        cart.clear();

        assert_eq!(cart.count(), 0);
        assert!(cart.subtotal().is_zero());
        assert!(cart.total().is_zero());
        assert_eq!(cart.order_type(), OrderType::Pickup);
    }

    #[test]
    fn test_empty_cart_has_no_fees() {
        for order_type in [OrderType::Delivery, OrderType::Pickup] {
            let mut cart = Cart::new();
            cart.set_order_type(order_type);

            assert!(cart.delivery_fee().is_zero());
            assert!(cart.platform_fee().is_zero());
            assert!(cart.tax().is_zero());
        }
    }

    #[test]
    fn test_pickup_waives_delivery_fee_only() {
        let mut cart = Cart::new();
        add(&mut cart, &menu_item("m1", 1000), 2);
        cart.set_order_type(OrderType::Pickup);

        assert!(cart.delivery_fee().is_zero());
        assert!(cart.platform_fee().is_positive());
        assert!(cart.tax().is_positive());
        assert_eq!(cart.total().cents(), 2000 + 1299 + 100);

        cart.set_order_type(OrderType::Delivery);
        assert_eq!(cart.delivery_fee().cents(), 9900);
    }

    #[test]
    fn test_custom_fee_schedule() {
        let fees = FeeSchedule {
            delivery_fee: Money::from_cents(4000),
            platform_fee: Money::from_cents(500),
            tax_rate: crate::types::TaxRate::from_bps(1800),
        };
        let mut cart = Cart::with_fees(fees);
        add(&mut cart, &menu_item("m1", 10000), 1);

        assert_eq!(cart.tax().cents(), 1800);
        assert_eq!(cart.total().cents(), 10000 + 4000 + 500 + 1800);
    }

    #[test]
    fn test_savings_and_totals_snapshot() {
        let mut cart = Cart::new();
        let discounted = menu_item("m1", 800).with_original_price(1000);
        add(&mut cart, &discounted, 2);
        add(&mut cart, &menu_item("m2", 500), 1);

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.count, 3);
        assert_eq!(totals.subtotal.cents(), 2100);
        assert_eq!(totals.savings.cents(), 400);
        assert_eq!(totals.total, cart.total());
    }

    #[test]
    fn test_extreme_quantity_saturates_derived_values() {
        let mut cart = Cart::new();
        let line = add(&mut cart, &menu_item("m1", 1000).with_original_price(1200), 1);
        assert!(cart.update_quantity(&line, i64::MAX / 100));

        assert_eq!(cart.count(), i64::MAX / 100);
        assert_eq!(cart.subtotal().cents(), i64::MAX);
        assert_eq!(cart.savings().cents(), i64::MAX);
        assert_eq!(cart.tax().cents(), i64::MAX / 20);
        assert_eq!(cart.total().cents(), i64::MAX);

        add(&mut cart, &menu_item("m2", 500), i64::MAX);
        let totals = CartTotals::from(&cart);
        assert_eq!(totals.count, i64::MAX);
        assert_eq!(totals.total.cents(), i64::MAX);

        // still usable afterwards
        assert!(cart.update_quantity(&line, 1));
        cart.clear();
        assert!(cart.total().is_zero());
    }
}
