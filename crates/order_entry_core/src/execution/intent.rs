//! Validated order payload handed to the placement collaborator.

use serde::{Deserialize, Serialize};

use crate::form::{OrderType, Side};

/// Immutable, ready-to-submit order.
///
/// Produced once per successful submission. Wire shape:
///
/// ```text
/// { side, orderType, symbol, price?, stopPrice?, amount,
///   estimatedTotal, estimatedFee }
/// ```
///
/// `price` is absent for market orders; `stopPrice` is present only for
/// stop and stop-limit orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderIntent {
    pub side: Side,
    pub order_type: OrderType,
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<String>,
    pub amount: String,
    pub estimated_total: String,
    pub estimated_fee: String,
}
