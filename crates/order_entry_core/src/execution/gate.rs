//! Submission gate: the only place an `OrderIntent` is assembled.
//!
//! **Rule ordering (first failure wins):**
//! 1. amount > 0 → else `EmptyAmount`
//! 2. non-market: price > 0 → else `EmptyPrice`
//! 3. stop / stop_limit: stop price > 0 → else `EmptyStopPrice`
//! 4. no estimate available (market order without a reference price) → `EmptyPrice`
//! 5. SELL: amount <= available base → else `InsufficientBalance`
//! 6. BUY: net cost incl. fee <= available quote → else `InsufficientBalance`
//!
//! `estimated_total` and `estimated_fee` are copied from the summary the
//! user was shown, never recomputed here.

use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

use super::intent::OrderIntent;
use crate::form::{MarketContext, OrderDraft, OrderType, Side};
use crate::numeric::parse_positive;
use crate::risk::OrderSummary;

// ─── Rejection reasons ──────────────────────────────────────────────────

/// Field-level validation failure. Blocks submission; never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("enter an amount greater than zero")]
    EmptyAmount,
    #[error("enter a price greater than zero")]
    EmptyPrice,
    #[error("enter a stop price greater than zero")]
    EmptyStopPrice,
    #[error("insufficient balance")]
    InsufficientBalance,
}

impl ValidationError {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationError::EmptyAmount => "EmptyAmount",
            ValidationError::EmptyPrice => "EmptyPrice",
            ValidationError::EmptyStopPrice => "EmptyStopPrice",
            ValidationError::InsufficientBalance => "InsufficientBalance",
        }
    }
}

// ─── Metrics ────────────────────────────────────────────────────────────

/// Per-form validation counters.
#[derive(Debug)]
pub struct ValidationMetrics {
    empty_amount_total: u64,
    empty_price_total: u64,
    empty_stop_price_total: u64,
    insufficient_balance_total: u64,
    passed_total: u64,
}

impl ValidationMetrics {
    pub fn new() -> Self {
        Self {
            empty_amount_total: 0,
            empty_price_total: 0,
            empty_stop_price_total: 0,
            insufficient_balance_total: 0,
            passed_total: 0,
        }
    }

    /// Record a rejection, incrementing the matching counter.
    pub fn record_reject(&mut self, reason: ValidationError) {
        match reason {
            ValidationError::EmptyAmount => self.empty_amount_total += 1,
            ValidationError::EmptyPrice => self.empty_price_total += 1,
            ValidationError::EmptyStopPrice => self.empty_stop_price_total += 1,
            ValidationError::InsufficientBalance => self.insufficient_balance_total += 1,
        }
    }

    fn record_passed(&mut self) {
        self.passed_total += 1;
    }

    /// Total rejections across all reasons.
    pub fn reject_total(&self) -> u64 {
        self.empty_amount_total
            + self.empty_price_total
            + self.empty_stop_price_total
            + self.insufficient_balance_total
    }

    pub fn empty_amount_total(&self) -> u64 {
        self.empty_amount_total
    }

    pub fn empty_price_total(&self) -> u64 {
        self.empty_price_total
    }

    pub fn empty_stop_price_total(&self) -> u64 {
        self.empty_stop_price_total
    }

    pub fn insufficient_balance_total(&self) -> u64 {
        self.insufficient_balance_total
    }

    pub fn passed_total(&self) -> u64 {
        self.passed_total
    }
}

impl Default for ValidationMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static VALIDATION_EMPTY_AMOUNT_TOTAL: AtomicU64 = AtomicU64::new(0);
static VALIDATION_EMPTY_PRICE_TOTAL: AtomicU64 = AtomicU64::new(0);
static VALIDATION_EMPTY_STOP_PRICE_TOTAL: AtomicU64 = AtomicU64::new(0);
static VALIDATION_INSUFFICIENT_BALANCE_TOTAL: AtomicU64 = AtomicU64::new(0);

/// Process-wide `validation_reject_total{reason}`.
pub fn validation_reject_total(reason: ValidationError) -> u64 {
    counter_for(reason).load(Ordering::Relaxed)
}

fn counter_for(reason: ValidationError) -> &'static AtomicU64 {
    match reason {
        ValidationError::EmptyAmount => &VALIDATION_EMPTY_AMOUNT_TOTAL,
        ValidationError::EmptyPrice => &VALIDATION_EMPTY_PRICE_TOTAL,
        ValidationError::EmptyStopPrice => &VALIDATION_EMPTY_STOP_PRICE_TOTAL,
        ValidationError::InsufficientBalance => &VALIDATION_INSUFFICIENT_BALANCE_TOTAL,
    }
}

fn reject(reason: ValidationError, metrics: &mut ValidationMetrics) -> ValidationError {
    metrics.record_reject(reason);
    counter_for(reason).fetch_add(1, Ordering::Relaxed);
    let tail = format!("reason={}", reason.as_str());
    crate::emit_form_metric_line("validation_reject_total", &tail);
    tracing::debug!("ValidationReject reason={:?}", reason);
    reason
}

// ─── Gate ───────────────────────────────────────────────────────────────

/// Validate the draft and assemble the order intent.
pub fn validate(
    draft: &OrderDraft,
    market: &MarketContext,
    summary: &OrderSummary,
    metrics: &mut ValidationMetrics,
) -> Result<OrderIntent, ValidationError> {
    let Some(amount) = parse_positive(&draft.amount) else {
        return Err(reject(ValidationError::EmptyAmount, metrics));
    };

    let price = if draft.order_type == OrderType::Market {
        None
    } else {
        match parse_positive(&draft.price) {
            Some(p) => Some(p),
            None => return Err(reject(ValidationError::EmptyPrice, metrics)),
        }
    };

    let stop_price = if draft.order_type.is_stop() {
        match parse_positive(&draft.stop_price) {
            Some(p) => Some(p),
            None => return Err(reject(ValidationError::EmptyStopPrice, metrics)),
        }
    } else {
        None
    };

    if summary.is_empty() {
        return Err(reject(ValidationError::EmptyPrice, metrics));
    }

    match draft.side {
        Side::Sell => {
            if amount > market.available_base_balance {
                return Err(reject(ValidationError::InsufficientBalance, metrics));
            }
        }
        Side::Buy => {
            let affordable = summary
                .net_for_buyer_value()
                .is_some_and(|cost| cost <= market.available_quote_balance);
            if !affordable {
                return Err(reject(ValidationError::InsufficientBalance, metrics));
            }
        }
    }

    metrics.record_passed();
    Ok(OrderIntent {
        side: draft.side,
        order_type: draft.order_type,
        symbol: market.symbol(),
        price: price.map(|p| p.to_string()),
        stop_price: stop_price.map(|p| p.to_string()),
        amount: amount.to_string(),
        estimated_total: summary.total.clone(),
        estimated_fee: summary.fee.clone(),
    })
}
