//! # Cart Commands
//!
//! Commands for reading and changing the session cart.
//!
//! Every command returns the full [`CartResponse`] so the view can re-render
//! from a single value. Only `add_to_cart` and `check_checkout` can fail;
//! removing, updating and clearing are total.

use bitebox_core::validation::{
    validate_catalog_item, validate_quantity, validate_special_instructions,
};
use bitebox_core::{
    Cart, CartTotals, CatalogItem, CoreError, LineItem, OrderType, UnavailablePolicy,
    MAX_ITEM_QUANTITY,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::CartState;

/// Cart response including lines, order type and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub order_type: OrderType,
    pub totals: CartTotals,
    /// When the cart was started or last cleared
    pub created_at: DateTime<Utc>,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.lines().to_vec(),
            order_type: cart.order_type(),
            totals: CartTotals::from(cart),
            created_at: cart.created_at(),
        }
    }
}

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart Drawer                                                            │
/// │                                                                         │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  YOUR ORDER                                        3 items     │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Butter Chicken          x2             ₹20.00               │    │
/// │  │  Garlic Naan             x1              ₹5.00               │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Subtotal                               ₹25.00               │    │
/// │  │  Delivery fee                           ₹99.00               │    │
/// │  │  Platform fee                           ₹12.99               │    │
/// │  │  Tax (5%)                                ₹1.25               │    │
/// │  │  ──────────────────────────────────────────────────          │    │
/// │  │  TOTAL                                 ₹138.24               │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds a catalog item to the cart as a new line.
///
/// ## Behavior
/// - Always a new line, even if the dish is already in the cart
/// - Price is frozen at this moment
/// - Rejects sold-out items, quantities outside 1..=99, malformed catalog
///   items and overlong instructions before the cart is touched
///
/// ## Returns
/// The new line id and the updated cart
pub fn add_to_cart(
    cart: &CartState,
    item: &CatalogItem,
    quantity: i64,
    special_instructions: Option<String>,
    if_unavailable: UnavailablePolicy,
) -> Result<(String, CartResponse), ApiError> {
    debug!(item_id = %item.id, quantity, "add_to_cart command");

    validate_catalog_item(item)?;
    validate_quantity(quantity)?;
    if let Some(text) = special_instructions.as_deref() {
        validate_special_instructions(text)?;
    }

    if !item.in_stock {
        return Err(CoreError::ItemUnavailable {
            name: item.name.clone(),
        }
        .into());
    }

    let result = cart.with_cart_mut(|c| {
        let line_id = c.add_item(item, quantity, special_instructions, if_unavailable);
        (line_id, CartResponse::from(&*c))
    });

    info!(line_id = %result.0, item_id = %item.id, quantity, "line added");
    Ok(result)
}

/// Updates the quantity of a line.
///
/// ## Behavior
/// - Quantity ≤ 0: removes the line
/// - Quantity above 99: capped at 99
/// - Unknown line id: nothing changes
pub fn update_cart_item(cart: &CartState, line_id: &str, quantity: i64) -> CartResponse {
    debug!(line_id, quantity, "update_cart_item command");

    let quantity = if quantity > MAX_ITEM_QUANTITY {
        debug!(line_id, requested = quantity, "quantity capped");
        MAX_ITEM_QUANTITY
    } else {
        quantity
    };

    cart.with_cart_mut(|c| {
        if !c.update_quantity(line_id, quantity) {
            debug!(line_id, "no line to update");
        }
        CartResponse::from(&*c)
    })
}

/// Removes a line. Unknown ids are ignored.
pub fn remove_from_cart(cart: &CartState, line_id: &str) -> CartResponse {
    debug!(line_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        if !c.remove_item(line_id) {
            debug!(line_id, "no line to remove");
        }
        CartResponse::from(&*c)
    })
}

/// Clears all lines. The delivery/pickup choice is kept.
///
/// ## When Used
/// - Customer empties the cart
/// - After an order is placed
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}

/// Switches between delivery and pickup. Fees update on the returned totals.
pub fn set_order_type(cart: &CartState, order_type: OrderType) -> CartResponse {
    debug!(?order_type, "set_order_type command");

    cart.with_cart_mut(|c| {
        c.set_order_type(order_type);
        CartResponse::from(&*c)
    })
}

/// Decides whether the checkout button may proceed.
///
/// ## Rules
/// - Cart must have at least one line
/// - The login collaborator must report an authenticated session
///
/// The cart is never asked about authentication; the caller passes the
/// answer in.
pub fn check_checkout(cart: &CartState, authenticated: bool) -> Result<CartResponse, ApiError> {
    debug!(authenticated, "check_checkout command");

    let response = get_cart(cart);

    if response.items.is_empty() {
        return Err(CoreError::EmptyCart.into());
    }

    if !authenticated {
        return Err(CoreError::NotAuthenticated.into());
    }

    Ok(response)
}
