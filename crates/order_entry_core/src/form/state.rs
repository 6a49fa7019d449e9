//! Order form state holder.
//!
//! Thin shim over the pure pipeline `coerce -> derive -> summarize -> validate`.
//! The form exclusively owns its draft; market context is a read-only
//! snapshot replaced by the host on every update.
//!
//! **Draft lifecycle:**
//! - created empty, price seeded from `last_price` for priced order types;
//! - reset after a successful placement and on pair change;
//! - switching to market clears price and stop price, switching back
//!   re-seeds an empty price.

use super::config::FormConfig;
use super::derivation::{self, derive_amount, derive_total};
use super::market::MarketContext;
use super::types::{OrderDraft, OrderType, PercentShortcut, Side};
use super::visibility::{FieldVisibility, fields_for};
use crate::execution::{
    CompletedSubmission, OrderIntent, OrderPlacer, PendingSubmission, SubmissionMetrics,
    SubmissionOutcome, SubmissionTicket, SubmitBlocked, ValidationError, ValidationMetrics,
    validate,
};
use crate::numeric::coerce;
use crate::risk::{OrderSummary, summarize};

/// One order-entry panel: spot buy/sell, perpetual long/short or generic.
#[derive(Debug)]
pub struct OrderForm {
    draft: OrderDraft,
    market: MarketContext,
    config: FormConfig,
    summary: OrderSummary,
    epoch: u64,
    next_seq: u64,
    in_flight: Option<SubmissionTicket>,
    validation_metrics: ValidationMetrics,
    submission_metrics: SubmissionMetrics,
}

impl OrderForm {
    pub fn new(market: MarketContext, config: FormConfig, order_type: OrderType, side: Side) -> Self {
        let mut form = Self {
            draft: OrderDraft::new(order_type, side),
            market,
            config,
            summary: OrderSummary::default(),
            epoch: 0,
            next_seq: 0,
            in_flight: None,
            validation_metrics: ValidationMetrics::new(),
            submission_metrics: SubmissionMetrics::new(),
        };
        form.seed_price();
        form.refresh_total();
        form
    }

    // ─── Accessors ──────────────────────────────────────────────────────

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn market(&self) -> &MarketContext {
        &self.market
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Last computed fee/net summary (what the user currently sees).
    pub fn summary(&self) -> &OrderSummary {
        &self.summary
    }

    pub fn visibility(&self) -> FieldVisibility {
        fields_for(self.draft.order_type)
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.in_flight.is_none()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn validation_metrics(&self) -> &ValidationMetrics {
        &self.validation_metrics
    }

    pub fn submission_metrics(&self) -> &SubmissionMetrics {
        &self.submission_metrics
    }

    // ─── Field edits ────────────────────────────────────────────────────

    /// Price edit: recomputes total. Ignored for market orders.
    pub fn edit_price(&mut self, raw: &str) {
        if !self.visibility().price_editable {
            tracing::debug!(order_type = %self.draft.order_type, "price edit ignored");
            return;
        }
        self.draft.price = coerce(raw);
        self.refresh_total();
    }

    /// Stop price edit. No derivation depends on it.
    pub fn edit_stop_price(&mut self, raw: &str) {
        if !self.visibility().stop_price_visible {
            return;
        }
        self.draft.stop_price = coerce(raw);
    }

    /// Amount edit: recomputes total and clears the percentage shortcut.
    pub fn edit_amount(&mut self, raw: &str) {
        self.draft.amount = coerce(raw);
        self.draft.percentage = None;
        self.refresh_total();
    }

    /// Total edit: recomputes amount with price held fixed.
    pub fn edit_total(&mut self, raw: &str) {
        if !self.visibility().total_editable {
            return;
        }
        self.draft.total = coerce(raw);
        self.draft.amount = derive_amount(
            &self.draft.total,
            &self.draft.price,
            &self.draft.amount,
            self.config.precision,
        );
        self.refresh_summary();
    }

    /// Size the order as a share of the side's available balance.
    pub fn apply_percentage(&mut self, pct: PercentShortcut) {
        let balance = self.market.available_for(self.draft.side);
        let fill = derivation::apply_percentage(
            pct,
            self.draft.side,
            balance,
            &self.effective_price(),
            self.config.precision,
        );
        tracing::debug!(
            pct = pct.percent(),
            side = %self.draft.side,
            amount = %fill.amount,
            total = %fill.total,
            "percentage shortcut"
        );
        self.draft.amount = fill.amount;
        self.draft.total = fill.total;
        self.draft.percentage = Some(pct);
        self.refresh_summary();
    }

    pub fn set_order_type(&mut self, order_type: OrderType) {
        if self.draft.order_type == order_type {
            return;
        }
        self.draft.order_type = order_type;
        if order_type == OrderType::Market {
            self.draft.price.clear();
            self.draft.stop_price.clear();
        } else {
            if !order_type.is_stop() {
                self.draft.stop_price.clear();
            }
            self.seed_price();
        }
        self.refresh_total();
    }

    /// Side toggle. The percentage shortcut refers to the other balance, so
    /// it is cleared.
    pub fn set_side(&mut self, side: Side) {
        if self.draft.side == side {
            return;
        }
        self.draft.side = side;
        self.draft.percentage = None;
        self.refresh_total();
    }

    // ─── Market data ────────────────────────────────────────────────────

    /// Apply a market refresh without discarding user edits.
    ///
    /// A different pair resets the form; otherwise only an empty price is
    /// re-seeded and a non-empty price is left untouched.
    pub fn on_market_update(&mut self, next: MarketContext) {
        if self.market.is_other_pair(&next) {
            self.change_pair(next);
            return;
        }
        self.market = next;
        match self.draft.order_type {
            OrderType::Market => self.refresh_total(),
            _ if self.draft.price.is_empty() => {
                self.seed_price();
                self.refresh_total();
            }
            _ => {}
        }
    }

    /// Switch trading pair: new epoch, fresh draft, in-flight result dropped.
    pub fn change_pair(&mut self, next: MarketContext) {
        tracing::info!(
            from = %self.market.symbol(),
            to = %next.symbol(),
            in_flight = self.in_flight.is_some(),
            "trading pair changed"
        );
        self.market = next;
        self.epoch += 1;
        self.in_flight = None;
        self.draft.clear_values();
        self.seed_price();
        self.refresh_total();
    }

    /// Copy the best bid into price. Returns false when there is no positive
    /// bid or the price is not editable.
    pub fn use_best_bid(&mut self) -> bool {
        self.use_market_price(self.market.quoted_bid())
    }

    /// Copy the best ask into price. Returns false when there is no positive
    /// ask or the price is not editable.
    pub fn use_best_ask(&mut self) -> bool {
        self.use_market_price(self.market.quoted_ask())
    }

    fn use_market_price(&mut self, value: Option<rust_decimal::Decimal>) -> bool {
        let Some(price) = value else {
            return false;
        };
        if !self.visibility().price_editable {
            return false;
        }
        self.draft.price = price.to_string();
        self.refresh_total();
        true
    }

    // ─── Validation & submission ────────────────────────────────────────

    /// Run the submission gate against the current draft and summary.
    pub fn validate(&mut self) -> Result<OrderIntent, ValidationError> {
        validate(
            &self.draft,
            &self.market,
            &self.summary,
            &mut self.validation_metrics,
        )
    }

    /// Start a submission. While one is in flight every further call is a
    /// no-op returning `SubmitBlocked::InFlight`.
    pub fn begin_submission(&mut self) -> Result<PendingSubmission, SubmitBlocked> {
        if self.in_flight.is_some() {
            self.submission_metrics.record_blocked_in_flight();
            tracing::debug!(epoch = self.epoch, "submit ignored: already in flight");
            return Err(SubmitBlocked::InFlight);
        }
        let intent = self.validate()?;
        let ticket = SubmissionTicket {
            epoch: self.epoch,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.in_flight = Some(ticket);
        self.submission_metrics.record_started();
        Ok(PendingSubmission::new(ticket, intent))
    }

    /// Apply a placement result. Stale tickets are discarded untouched.
    pub fn complete_submission(&mut self, done: CompletedSubmission) -> SubmissionOutcome {
        if self.in_flight != Some(done.ticket) {
            tracing::warn!(
                ticket_epoch = done.ticket.epoch,
                ticket_seq = done.ticket.seq,
                epoch = self.epoch,
                "discarding stale submission result"
            );
            let outcome = SubmissionOutcome::Discarded;
            self.submission_metrics.record_outcome(&outcome);
            return outcome;
        }
        self.in_flight = None;

        let outcome = match done.result {
            Ok(ack) => {
                tracing::info!(order_id = %ack.order_id, "order placed");
                self.reset_draft();
                SubmissionOutcome::Placed(ack)
            }
            Err(err) => {
                tracing::warn!(error = %err, "order placement failed");
                SubmissionOutcome::Failed(err)
            }
        };
        self.submission_metrics.record_outcome(&outcome);
        outcome
    }

    /// Validate, place and apply the result in one call.
    pub async fn submit<P: OrderPlacer + ?Sized>(
        &mut self,
        placer: &P,
    ) -> Result<SubmissionOutcome, SubmitBlocked> {
        let pending = self.begin_submission()?;
        let done = pending.send(placer).await;
        Ok(self.complete_submission(done))
    }

    // ─── Internals ──────────────────────────────────────────────────────

    fn reset_draft(&mut self) {
        self.epoch += 1;
        self.draft.clear_values();
        self.seed_price();
        self.refresh_total();
    }

    /// Price used for derivation: the typed price, or the reference price
    /// for market orders.
    fn effective_price(&self) -> String {
        match self.draft.order_type {
            OrderType::Market => self
                .market
                .reference_price(self.draft.side)
                .map(|p| p.to_string())
                .unwrap_or_default(),
            _ => self.draft.price.clone(),
        }
    }

    fn seed_price(&mut self) {
        if !self.visibility().price_editable || !self.draft.price.is_empty() {
            return;
        }
        if let Some(last) = self.market.quoted_last() {
            self.draft.price = last.to_string();
        }
    }

    fn refresh_total(&mut self) {
        self.draft.total = derive_total(
            &self.effective_price(),
            &self.draft.amount,
            self.config.precision,
        );
        self.refresh_summary();
    }

    fn refresh_summary(&mut self) {
        self.summary = summarize(
            &self.draft.total,
            self.config.fee_rate,
            self.config.precision,
        );
    }
}
