#![allow(dead_code)]

use std::str::FromStr;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use order_entry_core::execution::{OrderIntent, OrderPlacer, PlacementAck, PlacementError};
use order_entry_core::form::{FormConfig, MarketContext, OrderForm, OrderType, Side};
use rust_decimal::Decimal;

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// BTC/USDT snapshot used across suites.
pub fn btc_usdt() -> MarketContext {
    MarketContext {
        best_bid: Some(dec("41270.00")),
        best_ask: Some(dec("41280.00")),
        last_price: Some(dec("41275.50")),
        base_asset: "BTC".to_string(),
        quote_asset: "USDT".to_string(),
        available_quote_balance: dec("10000.00"),
        available_base_balance: dec("0.50000000"),
    }
}

/// Same pair with custom balances.
pub fn btc_usdt_with_balances(quote: &str, base: &str) -> MarketContext {
    MarketContext {
        available_quote_balance: dec(quote),
        available_base_balance: dec(base),
        ..btc_usdt()
    }
}

pub fn eth_usdt() -> MarketContext {
    MarketContext {
        best_bid: Some(dec("2500.10")),
        best_ask: Some(dec("2500.40")),
        last_price: Some(dec("2500.25")),
        base_asset: "ETH".to_string(),
        quote_asset: "USDT".to_string(),
        available_quote_balance: dec("5000.00"),
        available_base_balance: dec("2.00000000"),
    }
}

pub fn form(market: MarketContext, order_type: OrderType, side: Side) -> OrderForm {
    OrderForm::new(market, FormConfig::default(), order_type, side)
}

/// Placement collaborator that records every intent it receives.
pub struct RecordingPlacer {
    calls: AtomicUsize,
    received: Mutex<Vec<OrderIntent>>,
    fail_with: Option<PlacementError>,
}

impl RecordingPlacer {
    pub fn accepting() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            received: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    pub fn failing(err: PlacementError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::accepting()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<OrderIntent> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderPlacer for RecordingPlacer {
    async fn place_order(&self, intent: &OrderIntent) -> Result<PlacementAck, PlacementError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.received.lock().unwrap().push(intent.clone());
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(PlacementAck {
                order_id: format!("ord-{n}"),
            }),
        }
    }
}
