//! JSON codec for order intents, placement acknowledgements and market
//! snapshots.
//!
//! Decimal fields travel as strings (`"41270.00"`).

use order_entry_core::execution::{OrderIntent, PlacementAck};
use order_entry_core::form::MarketContext;

pub fn encode_intent(intent: &OrderIntent) -> Result<String, serde_json::Error> {
    serde_json::to_string(intent)
}

pub fn decode_intent(raw: &str) -> Result<OrderIntent, serde_json::Error> {
    serde_json::from_str(raw)
}

pub fn decode_ack(raw: &str) -> Result<PlacementAck, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Decode a market and wallet snapshot pushed by the host.
pub fn decode_market_context(raw: &str) -> Result<MarketContext, serde_json::Error> {
    serde_json::from_str(raw)
}
