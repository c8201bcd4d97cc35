//! # Configuration State
//!
//! Stores storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BISTRO_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use bistro_core::Money;
use serde::{Deserialize, Serialize};

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Restaurant slug the session browses (the `[slug]` route segment).
    pub restaurant_slug: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Separator between reais and centavos
    pub decimal_separator: String,

    /// Separator between groups of three digits
    pub thousands_separator: String,
}

impl Default for ConfigState {
    /// Brazilian Real, pt-BR separators: `R$ 1.234,56`.
    fn default() -> Self {
        ConfigState {
            restaurant_slug: "fsw-donalds".to_string(),
            currency_symbol: "R$".to_string(),
            decimal_separator: ",".to_string(),
            thousands_separator: ".".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BISTRO_RESTAURANT_SLUG`: Override restaurant slug
    /// - `BISTRO_CURRENCY_SYMBOL`: Override currency symbol
    /// - `BISTRO_DECIMAL_SEPARATOR`: Override decimal separator
    /// - `BISTRO_THOUSANDS_SEPARATOR`: Override thousands separator
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(slug) = lookup("BISTRO_RESTAURANT_SLUG").filter(|s| !s.trim().is_empty()) {
            config.restaurant_slug = slug;
        }

        if let Some(symbol) = lookup("BISTRO_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(sep) = lookup("BISTRO_DECIMAL_SEPARATOR").filter(|s| !s.is_empty()) {
            config.decimal_separator = sep;
        }

        // Empty is allowed here: it turns digit grouping off.
        if let Some(sep) = lookup("BISTRO_THOUSANDS_SEPARATOR") {
            config.thousands_separator = sep;
        }

        config
    }

    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::Money;
    /// use storefront::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(123456)), "R$ 1.234,56");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let major = group_digits(amount.major().unsigned_abs(), &self.thousands_separator);

        let symbol = if self.currency_symbol.is_empty() {
            String::new()
        } else {
            format!("{} ", self.currency_symbol)
        };

        format!(
            "{}{}{}{}{:02}",
            sign,
            symbol,
            major,
            self.decimal_separator,
            amount.minor_part()
        )
    }
}

fn group_digits(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    if separator.is_empty() {
        return digits;
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
