//! # Configuration State
//!
//! Fee schedule and currency settings loaded at session start.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BITEBOX_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use bitebox_core::validation::{validate_price_cents, validate_tax_rate_bps};
use bitebox_core::{FeeSchedule, Money, TaxRate};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Fees and tax applied to non-empty carts
    pub fees: FeeSchedule,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Fees: 99.00 delivery, 12.99 platform, 5% tax
    /// - Currency: INR (₹), two decimals
    fn default() -> Self {
        ConfigState {
            fees: FeeSchedule::default(),
            currency_code: "INR".to_string(),
            currency_symbol: "₹".to_string(),
            currency_decimals: 2,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BITEBOX_DELIVERY_FEE_CENTS`: delivery fee in minor units (e.g., "4900")
    /// - `BITEBOX_PLATFORM_FEE_CENTS`: platform fee in minor units
    /// - `BITEBOX_TAX_RATE`: tax percentage (e.g., "5" or "18")
    /// - `BITEBOX_CURRENCY_CODE` / `BITEBOX_CURRENCY_SYMBOL`
    ///
    /// Invalid values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(fee) =
            lookup("BITEBOX_DELIVERY_FEE_CENTS").and_then(|v| parse_fee("BITEBOX_DELIVERY_FEE_CENTS", &v))
        {
            config.fees.delivery_fee = fee;
        }

        if let Some(fee) =
            lookup("BITEBOX_PLATFORM_FEE_CENTS").and_then(|v| parse_fee("BITEBOX_PLATFORM_FEE_CENTS", &v))
        {
            config.fees.platform_fee = fee;
        }

        if let Some(rate_str) = lookup("BITEBOX_TAX_RATE") {
            match rate_str.trim().parse::<f64>() {
                Ok(pct) if pct >= 0.0 => {
                    let rate = TaxRate::from_percentage(pct);
                    match validate_tax_rate_bps(rate.bps()) {
                        Ok(()) => config.fees.tax_rate = rate,
                        Err(e) => warn!(value = %rate_str, error = %e, "ignoring BITEBOX_TAX_RATE"),
                    }
                }
                _ => warn!(value = %rate_str, "ignoring unparseable BITEBOX_TAX_RATE"),
            }
        }

        if let Some(code) = lookup("BITEBOX_CURRENCY_CODE") {
            config.currency_code = code;
        }

        if let Some(symbol) = lookup("BITEBOX_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Formats a minor-unit amount as a currency string.
    ///
    /// ```rust
    /// use bitebox_session::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(13824), "₹138.24");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }

    /// [`ConfigState::format_currency`] for a `Money` value.
    pub fn format_money(&self, amount: Money) -> String {
        self.format_currency(amount.cents())
    }
}

fn parse_fee(key: &str, raw: &str) -> Option<Money> {
    let cents = match raw.trim().parse::<i64>() {
        Ok(cents) => cents,
        Err(e) => {
            warn!(key, value = raw, error = %e, "ignoring unparseable fee");
            return None;
        }
    };

    if let Err(e) = validate_price_cents(cents) {
        warn!(key, value = raw, error = %e, "ignoring invalid fee");
        return None;
    }

    Some(Money::from_cents(cents))
}
