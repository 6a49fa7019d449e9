//! Order-entry vocabulary: order type, side, percentage shortcut, draft.

use std::fmt;

use serde::{Deserialize, Serialize};

// ─── Order type ─────────────────────────────────────────────────────────

/// Order type selected in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Market,
    Limit,
    Stop,
    StopLimit,
}

impl OrderType {
    pub const ALL: [OrderType; 4] = [
        OrderType::Market,
        OrderType::Limit,
        OrderType::Stop,
        OrderType::StopLimit,
    ];

    /// Wire token (`"stop_limit"` etc.).
    pub fn as_str(self) -> &'static str {
        match self {
            OrderType::Market => "market",
            OrderType::Limit => "limit",
            OrderType::Stop => "stop",
            OrderType::StopLimit => "stop_limit",
        }
    }

    pub fn is_stop(self) -> bool {
        matches!(self, OrderType::Stop | OrderType::StopLimit)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Side ───────────────────────────────────────────────────────────────

/// Order side. Perpetual surfaces label these long/short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Percentage shortcut ────────────────────────────────────────────────

/// Share of the available balance picked with a shortcut button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PercentShortcut {
    P25,
    P50,
    P75,
    P100,
}

impl PercentShortcut {
    pub const ALL: [PercentShortcut; 4] = [
        PercentShortcut::P25,
        PercentShortcut::P50,
        PercentShortcut::P75,
        PercentShortcut::P100,
    ];

    pub fn percent(self) -> u32 {
        match self {
            PercentShortcut::P25 => 25,
            PercentShortcut::P50 => 50,
            PercentShortcut::P75 => 75,
            PercentShortcut::P100 => 100,
        }
    }

    /// Map a raw button value; anything outside {25, 50, 75, 100} is `None`.
    pub fn from_percent(pct: u32) -> Option<Self> {
        PercentShortcut::ALL.into_iter().find(|p| p.percent() == pct)
    }
}

// ─── Draft ──────────────────────────────────────────────────────────────

/// Mutable state of one in-progress order.
///
/// Numeric fields hold coerced text; an empty string means "unset".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub order_type: OrderType,
    pub side: Side,
    pub price: String,
    pub stop_price: String,
    pub amount: String,
    pub total: String,
    pub percentage: Option<PercentShortcut>,
}

impl OrderDraft {
    /// Empty draft for the given type and side.
    pub fn new(order_type: OrderType, side: Side) -> Self {
        Self {
            order_type,
            side,
            price: String::new(),
            stop_price: String::new(),
            amount: String::new(),
            total: String::new(),
            percentage: None,
        }
    }

    /// Clear every numeric field, keeping type and side.
    pub fn clear_values(&mut self) {
        self.price.clear();
        self.stop_price.clear();
        self.amount.clear();
        self.total.clear();
        self.percentage = None;
    }
}
