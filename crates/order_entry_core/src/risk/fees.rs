//! Trading fee and net cost/proceeds summary.
//!
//! - `fee = round(total * fee_rate, quote_dp)`
//! - `net_for_buyer = total + fee` (cost including fee)
//! - `net_for_seller = total - fee` (proceeds after fee)
//!
//! Pure; safe to call on every render.

use rust_decimal::Decimal;

use crate::numeric::{Precision, format_fixed, parse_decimal, round_to};

/// Default taker fee rate (10 bps).
pub const DEFAULT_FEE_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 3);

/// Display summary derived from the current total.
///
/// All fields are empty when the total is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSummary {
    /// The total this summary was computed from, as displayed.
    pub total: String,
    pub fee: String,
    pub net_for_buyer: String,
    pub net_for_seller: String,
}

impl OrderSummary {
    pub fn is_empty(&self) -> bool {
        self.total.is_empty()
    }

    pub fn total_value(&self) -> Option<Decimal> {
        parse_decimal(&self.total)
    }

    pub fn net_for_buyer_value(&self) -> Option<Decimal> {
        parse_decimal(&self.net_for_buyer)
    }
}

/// Summarize fee and net figures for a total.
pub fn summarize(total: &str, fee_rate: Decimal, precision: Precision) -> OrderSummary {
    let Some(total_value) = parse_decimal(total) else {
        return OrderSummary::default();
    };
    let dp = precision.quote_dp;
    let total_value = round_to(total_value, dp);
    let Some(fee) = total_value.checked_mul(fee_rate).map(|f| round_to(f, dp)) else {
        return OrderSummary::default();
    };
    let Some(net_for_buyer) = total_value.checked_add(fee) else {
        return OrderSummary::default();
    };
    let net_for_seller = total_value - fee;

    OrderSummary {
        total: format_fixed(total_value, dp),
        fee: format_fixed(fee, dp),
        net_for_buyer: format_fixed(net_for_buyer, dp),
        net_for_seller: format_fixed(net_for_seller, dp),
    }
}
