//! # Domain Types
//!
//! Core domain types for the Bitebox cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   snapshot    ┌──────────────────────┐            │
//! │  │  CatalogItem    │ ────────────► │      LineItem        │            │
//! │  │  ─────────────  │  (by value)   │  ──────────────────  │            │
//! │  │  id             │               │  line_id (UUID)      │            │
//! │  │  name           │               │  item_id, name       │            │
//! │  │  price_cents    │               │  price_cents (frozen)│            │
//! │  │  in_stock       │               │  quantity ≥ 1        │            │
//! │  └─────────────────┘               │  if_unavailable      │            │
//! │                                    └──────────────────────┘            │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │   OrderType     │   │  FeeSchedule    │       │
//! │  │  bps (u32)      │   │  Delivery       │   │  delivery_fee   │       │
//! │  │  500 = 5%       │   │  Pickup         │   │  platform_fee   │       │
//! │  └─────────────────┘   └─────────────────┘   │  tax_rate       │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity
//! A line carries two identifiers:
//! - `item_id`: the catalog id it was created from (may repeat across lines)
//! - `line_id`: UUID v4, unique within the cart, used by every mutation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::{DEFAULT_DELIVERY_FEE_CENTS, DEFAULT_PLATFORM_FEE_CENTS, DEFAULT_TAX_RATE_BPS};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 500 bps = 5%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for config input only).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Catalog Item
// =============================================================================

/// A purchasable menu entry, owned by the restaurant/menu catalog.
///
/// The cart never holds a reference to one of these. It copies the fields it
/// needs when a line is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogItem {
    /// Catalog identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Current unit price in minor units.
    pub price_cents: i64,

    /// Pre-discount price, shown struck through.
    pub original_price_cents: Option<i64>,

    /// Image reference for the menu card.
    pub image_url: String,

    /// Availability flag.
    pub in_stock: bool,

    /// Menu section, e.g. "Starters".
    pub category: String,
}

impl CatalogItem {
    /// Creates an in-stock item with no image, category or discount.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price_cents: i64) -> Self {
        CatalogItem {
            id: id.into(),
            name: name.into(),
            price_cents,
            original_price_cents: None,
            image_url: String::new(),
            in_stock: true,
            category: String::new(),
        }
    }

    pub fn with_original_price(mut self, original_price_cents: i64) -> Self {
        self.original_price_cents = Some(original_price_cents);
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }
}

// =============================================================================
// Unavailable Policy
// =============================================================================

/// What the restaurant should do if a line cannot be fulfilled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum UnavailablePolicy {
    /// Drop the line and refund it.
    #[default]
    Remove,
    /// Call the customer before deciding.
    Contact,
    /// Substitute with a similar dish.
    Replace,
}

// =============================================================================
// Order Type
// =============================================================================

/// Delivery or pickup. Affects fee computation only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum OrderType {
    #[default]
    Delivery,
    Pickup,
}

// =============================================================================
// Fee Schedule
// =============================================================================

/// Fixed fees and tax rate applied to a non-empty cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FeeSchedule {
    /// Charged for delivery orders only.
    pub delivery_fee: Money,

    /// Charged on every non-empty order.
    pub platform_fee: Money,

    /// Applied to the subtotal.
    pub tax_rate: TaxRate,
}

impl Default for FeeSchedule {
    /// 99.00 delivery, 12.99 platform, 5% tax.
    fn default() -> Self {
        FeeSchedule {
            delivery_fee: Money::from_cents(DEFAULT_DELIVERY_FEE_CENTS),
            platform_fee: Money::from_cents(DEFAULT_PLATFORM_FEE_CENTS),
            tax_rate: TaxRate::from_bps(DEFAULT_TAX_RATE_BPS),
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One entry in the cart.
///
/// ## Design Notes
/// - Catalog fields are a frozen copy taken at insertion time. If the menu
///   price changes afterwards, this line keeps the price the customer saw.
/// - `quantity` is the only field mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Unique within the cart.
    pub line_id: String,

    /// Catalog id at time of adding (frozen)
    pub item_id: String,

    /// Name at time of adding (frozen)
    pub name: String,

    /// Unit price at time of adding (frozen)
    pub price_cents: i64,

    /// Original price at time of adding (frozen)
    pub original_price_cents: Option<i64>,

    pub image_url: String,

    pub in_stock: bool,

    pub category: String,

    /// Always ≥ 1 while the line is in a cart.
    pub quantity: i64,

    pub special_instructions: Option<String>,

    pub if_unavailable: UnavailablePolicy,

    /// When this line was added
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a line as a snapshot of `item`.
    ///
    /// Blank instructions are stored as `None`.
    pub fn from_catalog(
        line_id: String,
        item: &CatalogItem,
        quantity: i64,
        special_instructions: Option<String>,
        if_unavailable: UnavailablePolicy,
    ) -> Self {
        LineItem {
            line_id,
            item_id: item.id.clone(),
            name: item.name.clone(),
            price_cents: item.price_cents,
            original_price_cents: item.original_price_cents,
            image_url: item.image_url.clone(),
            in_stock: item.in_stock,
            category: item.category.clone(),
            quantity,
            special_instructions: special_instructions
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            if_unavailable,
            added_at: Utc::now(),
        }
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }

    /// Discount against the original price for the whole line.
    ///
    /// Zero when there is no original price or it is below the current one.
    pub fn savings(&self) -> Money {
        match self.original_price_cents {
            Some(original) => (Money::from_cents(original) - self.unit_price())
                .non_negative()
                .multiply_quantity(self.quantity),
            None => Money::zero(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(5.0);
        assert_eq!(rate.bps(), 500);
        assert!((rate.percentage() - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_fee_schedule_default() {
        let fees = FeeSchedule::default();
        assert_eq!(fees.delivery_fee.cents(), 9900);
        assert_eq!(fees.platform_fee.cents(), 1299);
        assert_eq!(fees.tax_rate.bps(), 500);
    }

    #[test]
    fn test_line_item_snapshots_catalog_fields() {
        let item = CatalogItem::new("m1", "Masala Dosa", 1000)
            .with_original_price(1200)
            .with_category("South Indian");

        let line = LineItem::from_catalog(
            "line-1".to_string(),
            &item,
            3,
            Some("  extra chutney ".to_string()),
            UnavailablePolicy::Contact,
        );

        assert_eq!(line.item_id, "m1");
        assert_eq!(line.category, "South Indian");
        assert_eq!(line.line_total().cents(), 3000);
        assert_eq!(line.savings().cents(), 600);
        assert_eq!(line.special_instructions.as_deref(), Some("extra chutney"));
    }

    #[test]
    fn test_blank_instructions_become_none() {
        let item = CatalogItem::new("m1", "Masala Dosa", 1000);
        let line = LineItem::from_catalog(
            "line-1".to_string(),
            &item,
            1,
            Some("   ".to_string()),
            UnavailablePolicy::Remove,
        );
        assert!(line.special_instructions.is_none());
        assert!(line.savings().is_zero());
    }

    #[test]
    fn test_enum_serialization() {
        assert_eq!(
            serde_json::to_string(&UnavailablePolicy::Replace).unwrap(),
            "\"replace\""
        );
        assert_eq!(serde_json::to_string(&OrderType::Pickup).unwrap(), "\"pickup\"");
        assert_eq!(OrderType::default(), OrderType::Delivery);
    }
}
