//! Tests for the order form state holder: edits, shortcuts, market updates.

mod common;

use common::{btc_usdt, btc_usdt_with_balances, dec, eth_usdt, form};
use order_entry_core::form::{MarketContext, OrderType, PercentShortcut, Side};

// ─── Creation ───────────────────────────────────────────────────────────

#[test]
fn test_limit_form_seeds_last_price() {
    let f = form(btc_usdt(), OrderType::Limit, Side::Buy);
    assert_eq!(f.draft().price, "41275.50");
    assert_eq!(f.draft().amount, "");
    assert_eq!(f.draft().total, "");
    assert!(f.summary().is_empty());
}

#[test]
fn test_zero_last_price_not_seeded() {
    let market = MarketContext {
        last_price: Some(dec("0")),
        ..btc_usdt()
    };
    let f = form(market, OrderType::Limit, Side::Buy);
    assert_eq!(f.draft().price, "");
}

#[test]
fn test_market_form_starts_empty() {
    let f = form(btc_usdt(), OrderType::Market, Side::Sell);
    assert_eq!(f.draft().price, "");
    assert!(f.can_submit());
}

#[test]
fn test_no_last_price_leaves_price_empty() {
    let market = MarketContext {
        last_price: None,
        ..btc_usdt()
    };
    let f = form(market, OrderType::Limit, Side::Buy);
    assert_eq!(f.draft().price, "");
}

// ─── Edits recompute exactly one other field ────────────────────────────

#[test]
fn test_amount_edit_recomputes_total() {
    let mut f = form(btc_usdt(), OrderType::Limit, Side::Buy);
    f.edit_amount("0.0234");
    assert_eq!(f.draft().price, "41275.50");
    assert_eq!(f.draft().total, "965.85");
}

#[test]
fn test_price_edit_recomputes_total_keeps_amount() {
    let mut f = form(btc_usdt(), OrderType::Limit, Side::Buy);
    f.edit_amount("2");
    f.edit_price("100.5");
    assert_eq!(f.draft().amount, "2");
    assert_eq!(f.draft().total, "201.00");
}

#[test]
fn test_total_edit_recomputes_amount_keeps_price() {
    let mut f = form(btc_usdt(), OrderType::Limit, Side::Buy);
    f.edit_price("40000");
    f.edit_total("500");
    assert_eq!(f.draft().price, "40000");
    assert_eq!(f.draft().amount, "0.01250000");
    assert_eq!(f.draft().total, "500");
}

#[test]
fn test_total_edit_with_zero_price_leaves_amount() {
    let mut f = form(btc_usdt(), OrderType::Limit, Side::Buy);
    f.edit_amount("0.3");
    f.edit_price("0");
    f.edit_total("120");
    assert_eq!(f.draft().amount, "0.3");
}

#[test]
fn test_edits_are_coerced() {
    let mut f = form(btc_usdt(), OrderType::Limit, Side::Buy);
    f.edit_price("1a0.0.5");
    f.edit_amount("2x");
    assert_eq!(f.draft().price, "10.05");
    assert_eq!(f.draft().amount, "2");
    assert_eq!(f.draft().total, "20.10");
}

#[test]
fn test_summary_tracks_total() {
    let mut f = form(btc_usdt(), OrderType::Limit, Side::Buy);
    f.edit_price("100.00");
    f.edit_amount("1.00000000");
    assert_eq!(f.summary().total, "100.00");
    assert_eq!(f.summary().fee, "0.10");
    assert_eq!(f.summary().net_for_buyer, "100.10");
    assert_eq!(f.summary().net_for_seller, "99.90");
}

// ─── Percentage shortcut ────────────────────────────────────────────────

#[test]
fn test_percentage_buy_uses_quote_balance() {
    let mut f = form(
        btc_usdt_with_balances("1000", "0"),
        OrderType::Limit,
        Side::Buy,
    );
    f.edit_price("40000");
    f.apply_percentage(PercentShortcut::P50);
    assert_eq!(f.draft().total, "500.00");
    assert_eq!(f.draft().amount, "0.01250000");
    assert_eq!(f.draft().percentage, Some(PercentShortcut::P50));
}

#[test]
fn test_percentage_sell_uses_base_balance() {
    let mut f = form(btc_usdt(), OrderType::Limit, Side::Sell);
    f.edit_price("40000");
    f.apply_percentage(PercentShortcut::P25);
    assert_eq!(f.draft().amount, "0.12500000");
    assert_eq!(f.draft().total, "5000.00");
}

#[test]
fn test_amount_edit_clears_percentage() {
    let mut f = form(btc_usdt(), OrderType::Limit, Side::Buy);
    f.apply_percentage(PercentShortcut::P100);
    f.edit_amount("0.01");
    assert_eq!(f.draft().percentage, None);
}

#[test]
fn test_side_toggle_clears_percentage() {
    let mut f = form(btc_usdt(), OrderType::Limit, Side::Buy);
    f.apply_percentage(PercentShortcut::P75);
    f.set_side(Side::Sell);
    assert_eq!(f.draft().percentage, None);
}

#[test]
fn test_market_percentage_uses_reference_price() {
    let mut f = form(
        btc_usdt_with_balances("4128.00", "0"),
        OrderType::Market,
        Side::Buy,
    );
    f.apply_percentage(PercentShortcut::P100);
    // Best ask 41280.00
    assert_eq!(f.draft().total, "4128.00");
    assert_eq!(f.draft().amount, "0.10000000");
}

// ─── Market updates ─────────────────────────────────────────────────────

#[test]
fn test_tick_does_not_overwrite_user_price() {
    let mut f = form(btc_usdt(), OrderType::Limit, Side::Buy);
    f.edit_price("39000");
    f.edit_amount("0.1");
    let tick = MarketContext {
        last_price: Some(dec("41500.00")),
        ..btc_usdt()
    };
    f.on_market_update(tick);
    assert_eq!(f.draft().price, "39000");
    assert_eq!(f.draft().amount, "0.1");
    assert_eq!(f.draft().total, "3900.00");
    assert_eq!(f.market().last_price, Some(dec("41500.00")));
}

#[test]
fn test_tick_reseeds_empty_price() {
    let mut f = form(btc_usdt(), OrderType::Limit, Side::Buy);
    f.edit_amount("1");
    f.edit_price("");
    assert_eq!(f.draft().total, "");
    let tick = MarketContext {
        last_price: Some(dec("41500.00")),
        ..btc_usdt()
    };
    f.on_market_update(tick);
    assert_eq!(f.draft().price, "41500.00");
    assert_eq!(f.draft().total, "41500.00");
}

#[test]
fn test_tick_rederives_market_total() {
    let mut f = form(btc_usdt(), OrderType::Market, Side::Sell);
    f.edit_amount("0.1");
    // Best bid 41270.00
    assert_eq!(f.draft().total, "4127.00");
    let tick = MarketContext {
        best_bid: Some(dec("41000.00")),
        ..btc_usdt()
    };
    f.on_market_update(tick);
    assert_eq!(f.draft().amount, "0.1");
    assert_eq!(f.draft().total, "4100.00");
}

#[test]
fn test_other_pair_resets_draft() {
    let mut f = form(btc_usdt(), OrderType::Limit, Side::Buy);
    f.edit_price("39000");
    f.edit_amount("0.1");
    let epoch = f.epoch();
    f.on_market_update(eth_usdt());
    assert_eq!(f.epoch(), epoch + 1);
    assert_eq!(f.draft().price, "2500.25");
    assert_eq!(f.draft().amount, "");
    assert_eq!(f.draft().total, "");
    assert_eq!(f.draft().order_type, OrderType::Limit);
    assert_eq!(f.draft().side, Side::Buy);
}

// ─── Best bid / ask shortcuts ───────────────────────────────────────────

#[test]
fn test_use_best_bid_copies_and_rederives() {
    let mut f = form(btc_usdt(), OrderType::Limit, Side::Sell);
    f.edit_amount("0.5");
    assert!(f.use_best_bid());
    assert_eq!(f.draft().price, "41270.00");
    assert_eq!(f.draft().total, "20635.00");
}

#[test]
fn test_use_best_ask_copies_and_rederives() {
    let mut f = form(btc_usdt(), OrderType::StopLimit, Side::Buy);
    f.edit_amount("0.25");
    assert!(f.use_best_ask());
    assert_eq!(f.draft().price, "41280.00");
    assert_eq!(f.draft().total, "10320.00");
}

#[test]
fn test_best_price_shortcut_noop_for_market_or_missing() {
    let mut f = form(btc_usdt(), OrderType::Market, Side::Buy);
    assert!(!f.use_best_ask());
    assert_eq!(f.draft().price, "");

    let market = MarketContext {
        best_bid: None,
        ..btc_usdt()
    };
    let mut f = form(market, OrderType::Limit, Side::Sell);
    assert!(!f.use_best_bid());
    assert_eq!(f.draft().price, "41275.50");
}

#[test]
fn test_zero_best_quotes_not_copied() {
    let market = MarketContext {
        best_bid: Some(dec("0")),
        best_ask: Some(dec("0")),
        ..btc_usdt()
    };
    let mut f = form(market, OrderType::Limit, Side::Buy);
    f.edit_price("41000");
    assert!(!f.use_best_bid());
    assert!(!f.use_best_ask());
    assert_eq!(f.draft().price, "41000");
}
