//! Tests for the order intent and market snapshot JSON shapes.

use std::str::FromStr;

use order_entry_core::execution::OrderIntent;
use order_entry_core::form::{OrderType, Side};
use order_entry_infra::wire::{decode_intent, decode_market_context, encode_intent};
use rust_decimal::Decimal;
use serde_json::Value;

fn intent(order_type: OrderType, price: Option<&str>, stop: Option<&str>) -> OrderIntent {
    OrderIntent {
        side: Side::Buy,
        order_type,
        symbol: "BTC/USDT".to_string(),
        price: price.map(str::to_string),
        stop_price: stop.map(str::to_string),
        amount: "0.0234".to_string(),
        estimated_total: "965.85".to_string(),
        estimated_fee: "0.97".to_string(),
    }
}

fn as_json(intent: &OrderIntent) -> Value {
    serde_json::from_str(&encode_intent(intent).unwrap()).unwrap()
}

#[test]
fn test_limit_intent_field_names() {
    let v = as_json(&intent(OrderType::Limit, Some("41275.5"), None));
    assert_eq!(v["side"], "buy");
    assert_eq!(v["orderType"], "limit");
    assert_eq!(v["symbol"], "BTC/USDT");
    assert_eq!(v["price"], "41275.5");
    assert_eq!(v["amount"], "0.0234");
    assert_eq!(v["estimatedTotal"], "965.85");
    assert_eq!(v["estimatedFee"], "0.97");
    assert!(v.get("stopPrice").is_none());
}

#[test]
fn test_market_intent_omits_price() {
    let v = as_json(&intent(OrderType::Market, None, None));
    assert_eq!(v["orderType"], "market");
    assert!(v.get("price").is_none());
    assert!(v.get("stopPrice").is_none());
}

#[test]
fn test_stop_limit_intent_carries_stop_price() {
    let v = as_json(&intent(OrderType::StopLimit, Some("40000"), Some("40100")));
    assert_eq!(v["orderType"], "stop_limit");
    assert_eq!(v["stopPrice"], "40100");
}

#[test]
fn test_decode_matches_encoded_intent() {
    let original = intent(OrderType::Stop, Some("40000"), Some("40100"));
    let decoded = decode_intent(&encode_intent(&original).unwrap()).unwrap();
    assert_eq!(decoded, original);
}

// ─── Market snapshots ───────────────────────────────────────────────────

#[test]
fn test_market_context_decodes_camel_case() {
    let raw = r#"{
        "bestBid": "41270.00",
        "bestAsk": null,
        "lastPrice": "41275.50",
        "baseAsset": "BTC",
        "quoteAsset": "USDT",
        "availableQuoteBalance": "10000.00",
        "availableBaseBalance": "0.50000000"
    }"#;
    let market = decode_market_context(raw).unwrap();
    assert_eq!(market.best_bid, Some(Decimal::from_str("41270.00").unwrap()));
    assert_eq!(market.best_ask, None);
    assert_eq!(market.symbol(), "BTC/USDT");
    assert_eq!(
        market.reference_price(Side::Buy),
        Some(Decimal::from_str("41275.50").unwrap())
    );
    assert_eq!(market.available_for(Side::Sell), Decimal::from_str("0.5").unwrap());
}

#[test]
fn test_market_context_rejects_snake_case_keys() {
    let raw = r#"{"base_asset": "BTC", "quote_asset": "USDT",
        "available_quote_balance": "1", "available_base_balance": "1"}"#;
    assert!(decode_market_context(raw).is_err());
}
