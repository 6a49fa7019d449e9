//! Read-only market context injected by the host application.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::Side;

/// Market and wallet figures the form reads but never mutates.
///
/// Refreshed by an external polling or streaming collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketContext {
    pub best_bid: Option<Decimal>,
    pub best_ask: Option<Decimal>,
    pub last_price: Option<Decimal>,
    pub base_asset: String,
    pub quote_asset: String,
    pub available_quote_balance: Decimal,
    pub available_base_balance: Decimal,
}

impl MarketContext {
    /// Pair symbol, e.g. `BTC/USDT`.
    pub fn symbol(&self) -> String {
        format!("{}/{}", self.base_asset, self.quote_asset)
    }

    /// Balance a percentage shortcut draws from: quote for BUY, base for SELL.
    pub fn available_for(&self, side: Side) -> Decimal {
        match side {
            Side::Buy => self.available_quote_balance,
            Side::Sell => self.available_base_balance,
        }
    }

    /// Best bid when quoted above zero.
    pub fn quoted_bid(&self) -> Option<Decimal> {
        positive(self.best_bid)
    }

    /// Best ask when quoted above zero.
    pub fn quoted_ask(&self) -> Option<Decimal> {
        positive(self.best_ask)
    }

    /// Last trade price when above zero.
    pub fn quoted_last(&self) -> Option<Decimal> {
        positive(self.last_price)
    }

    /// Price a market order is estimated at.
    ///
    /// BUY crosses the best ask, SELL hits the best bid; both fall back to
    /// the last trade. A zero quote counts as no quote.
    pub fn reference_price(&self, side: Side) -> Option<Decimal> {
        let touch = match side {
            Side::Buy => self.quoted_ask(),
            Side::Sell => self.quoted_bid(),
        };
        touch.or_else(|| self.quoted_last())
    }

    /// True when switching to `next` means a different trading pair.
    pub fn is_other_pair(&self, next: &MarketContext) -> bool {
        self.base_asset != next.base_asset || self.quote_asset != next.quote_asset
    }
}

fn positive(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|p| *p > Decimal::ZERO)
}
