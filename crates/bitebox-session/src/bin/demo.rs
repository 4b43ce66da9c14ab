//! # Cart Session Demo
//!
//! Walks a scripted customer session through the cart commands against a
//! small in-memory menu and logs the totals after each step.
//!
//! ## Usage
//! ```bash
//! cargo run -p bitebox-session --bin bitebox-demo
//!
//! # Pickup order with 18% tax
//! BITEBOX_TAX_RATE=18 cargo run -p bitebox-session --bin bitebox-demo -- --pickup
//! ```

use std::env;

use bitebox_core::{CatalogItem, OrderType, UnavailablePolicy};
use bitebox_session::commands::cart::{self, CartResponse};
use bitebox_session::{init_tracing, ApiError, CartState, ConfigState};
use tracing::{info, warn};

/// Demo menu: (id, name, price, original price, category, in stock)
const MENU: &[(&str, &str, i64, Option<i64>, &str, bool)] = &[
    ("m1", "Butter Chicken", 1000, Some(1200), "Mains", true),
    ("m2", "Garlic Naan", 500, None, "Breads", true),
    ("m3", "Mango Lassi", 350, None, "Drinks", true),
    ("m4", "Gulab Jamun", 250, None, "Desserts", false),
];

fn menu() -> Vec<CatalogItem> {
    MENU.iter()
        .map(|&(id, name, price, original, category, in_stock)| {
            let item = CatalogItem::new(id, name, price)
                .with_category(category)
                .with_image_url(format!("/images/menu/{}.jpg", id))
                .with_in_stock(in_stock);
            match original {
                Some(original) => item.with_original_price(original),
                None => item,
            }
        })
        .collect()
}

fn log_totals(step: &str, config: &ConfigState, response: &CartResponse) {
    let t = &response.totals;
    info!(
        step,
        order_type = ?response.order_type,
        items = t.count,
        subtotal = %config.format_money(t.subtotal),
        delivery_fee = %config.format_money(t.delivery_fee),
        platform_fee = %config.format_money(t.platform_fee),
        tax = %config.format_money(t.tax),
        total = %config.format_money(t.total),
        "cart"
    );
}

fn main() -> Result<(), ApiError> {
    init_tracing();

    let pickup = env::args().any(|a| a == "--pickup");
    let config = ConfigState::from_env();
    let session = CartState::new(config.fees);
    let menu = menu();

    info!(dishes = menu.len(), pickup, "starting demo session");

    let (chicken, response) =
        cart::add_to_cart(&session, &menu[0], 2, None, UnavailablePolicy::Remove)?;
    log_totals("add butter chicken x2", &config, &response);

    let (_, response) = cart::add_to_cart(
        &session,
        &menu[1],
        1,
        Some("extra butter".to_string()),
        UnavailablePolicy::Replace,
    )?;
    log_totals("add garlic naan", &config, &response);

    if let Err(e) = cart::add_to_cart(&session, &menu[3], 1, None, UnavailablePolicy::Contact) {
        warn!(error = %e, "could not add dessert");
    }

    let (lassi, response) =
        cart::add_to_cart(&session, &menu[2], 1, None, UnavailablePolicy::Remove)?;
    log_totals("add mango lassi", &config, &response);

    let response = cart::update_cart_item(&session, &lassi, 0);
    log_totals("drop lassi", &config, &response);

    let response = cart::update_cart_item(&session, &chicken, 3);
    log_totals("bump chicken to 3", &config, &response);

    if pickup {
        let response = cart::set_order_type(&session, OrderType::Pickup);
        log_totals("switch to pickup", &config, &response);
    }

    if let Err(e) = cart::check_checkout(&session, false) {
        warn!(error = %e, "checkout blocked");
    }

    let response = cart::check_checkout(&session, true)?;
    log_totals("checkout", &config, &response);

    let response = cart::clear_cart(&session);
    log_totals("order placed, cart cleared", &config, &response);

    Ok(())
}
