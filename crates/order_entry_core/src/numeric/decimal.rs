//! Decimal parsing and display rounding.
//!
//! Quote-denominated figures (total, fee) use `quote_dp` decimals and
//! base-denominated figures (amount) use `base_dp`. Rounding is half away
//! from zero so a value typed and re-displayed never drifts.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Display precision for quote and base figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    /// Decimals for quote-asset figures (default: 2).
    pub quote_dp: u32,
    /// Decimals for base-asset figures (default: 8).
    pub base_dp: u32,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            quote_dp: 2,
            base_dp: 8,
        }
    }
}

/// Parse a coerced field into a non-negative decimal.
///
/// `""` and `"."` are unset. A leading `.` reads as `0.` and a trailing `.`
/// is ignored, so half-typed values like `"12."` still parse.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return None;
    }
    let value = if trimmed.starts_with('.') {
        Decimal::from_str(&format!("0{trimmed}")).ok()?
    } else {
        Decimal::from_str(trimmed).ok()?
    };
    if value.is_zero() {
        return Some(Decimal::ZERO);
    }
    if value.is_sign_negative() {
        return None;
    }
    Some(value)
}

/// Parse a field and keep it only when strictly positive.
pub fn parse_positive(text: &str) -> Option<Decimal> {
    parse_decimal(text).filter(|v| *v > Decimal::ZERO)
}

/// Round to `dp` decimals, midpoints away from zero.
pub fn round_to(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Truncate to `dp` decimals. Used where the result must never exceed the
/// input, such as a share of an available balance.
pub fn round_down(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::ToZero)
}

/// Round and render with exactly `dp` decimals (`500` → `"500.00"`).
pub fn format_fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = round_to(value, dp);
    rounded.rescale(dp);
    rounded.to_string()
}
