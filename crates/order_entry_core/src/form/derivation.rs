//! Bidirectional price / amount / total derivation.
//!
//! - Editing price or amount: `total = round(price * amount, quote_dp)`.
//! - Editing total: `amount = round(total / price, base_dp)`, price held.
//! - Price zero, empty or unparseable on a total edit: amount is left as-is.
//! - Percentage shortcuts size the order from the side's available balance:
//!   BUY spends quote (`total` first), SELL spends base (`amount` first).

use rust_decimal::Decimal;

use super::types::{PercentShortcut, Side};
use crate::numeric::{Precision, format_fixed, parse_decimal, parse_positive, round_down};

/// Amount and total produced by a percentage shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentFill {
    pub amount: String,
    pub total: String,
}

/// Total for a price or amount edit. Empty unless both sides parse.
pub fn derive_total(price: &str, amount: &str, precision: Precision) -> String {
    match (parse_decimal(price), parse_decimal(amount)) {
        (Some(price), Some(amount)) => price
            .checked_mul(amount)
            .map(|total| format_fixed(total, precision.quote_dp))
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Amount for a total edit.
///
/// Returns `current_amount` unchanged when price is not strictly positive,
/// so the derivation never divides by zero.
pub fn derive_amount(total: &str, price: &str, current_amount: &str, precision: Precision) -> String {
    let Some(price) = parse_positive(price) else {
        return current_amount.to_string();
    };
    match parse_decimal(total) {
        Some(total) => total
            .checked_div(price)
            .map(|amount| format_fixed(amount, precision.base_dp))
            .unwrap_or_else(|| current_amount.to_string()),
        None => String::new(),
    }
}

/// Size an order as a share of the available balance.
///
/// `available_balance` is quote for BUY and base for SELL. The share is
/// truncated so 100% never exceeds the balance. A missing price leaves the
/// dependent field empty.
pub fn apply_percentage(
    pct: PercentShortcut,
    side: Side,
    available_balance: Decimal,
    price: &str,
    precision: Precision,
) -> PercentFill {
    let share = available_balance
        .checked_mul(Decimal::from(pct.percent()))
        .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO);

    match side {
        Side::Buy => {
            let total = round_down(share, precision.quote_dp);
            let amount = parse_positive(price)
                .and_then(|p| total.checked_div(p))
                .map(|a| format_fixed(a, precision.base_dp))
                .unwrap_or_default();
            PercentFill {
                amount,
                total: format_fixed(total, precision.quote_dp),
            }
        }
        Side::Sell => {
            let amount = round_down(share, precision.base_dp);
            let total = parse_decimal(price)
                .and_then(|p| amount.checked_mul(p))
                .map(|t| format_fixed(t, precision.quote_dp))
                .unwrap_or_default();
            PercentFill {
                amount: format_fixed(amount, precision.base_dp),
                total,
            }
        }
    }
}
