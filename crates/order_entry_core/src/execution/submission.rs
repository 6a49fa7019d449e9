//! Single-flight order submission.
//!
//! **Lifecycle:** `Idle -> InFlight -> Idle`
//!
//! - At most one submission per form is outstanding; a second submit while
//!   one is in flight is a no-op (`SubmitBlocked::InFlight`).
//! - Completions carry the ticket they were issued with. A ticket from an
//!   older epoch (pair switched, form reset) is discarded untouched.
//! - A remote failure returns the form to `Idle` so the user can retry.
//! - No retries and no order-status tracking happen here; both belong to the
//!   placement collaborator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::gate::ValidationError;
use super::intent::OrderIntent;
use super::reject_reason::RejectReasonCode;

// ─── Placement port ─────────────────────────────────────────────────────

/// Acknowledgement returned by the order-placement service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementAck {
    pub order_id: String,
}

/// Remote placement failure, reported through the host's error surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("order rejected: {0}")]
    Rejected(String),
    #[error("server error {status}: {body}")]
    Server { status: u16, body: String },
    #[error("transport error: {0}")]
    Transport(String),
}

/// External "place order" collaborator. Transport is up to the implementor.
#[async_trait]
pub trait OrderPlacer: Send + Sync {
    async fn place_order(&self, intent: &OrderIntent) -> Result<PlacementAck, PlacementError>;
}

// ─── Tickets ────────────────────────────────────────────────────────────

/// Identity of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionTicket {
    /// Form epoch at issue time; bumped on pair change and reset.
    pub epoch: u64,
    /// Per-form sequence number.
    pub seq: u64,
}

/// Why a submit trigger did not start a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// A validated intent waiting to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    ticket: SubmissionTicket,
    intent: OrderIntent,
}

impl PendingSubmission {
    pub(crate) fn new(ticket: SubmissionTicket, intent: OrderIntent) -> Self {
        Self { ticket, intent }
    }

    pub fn ticket(&self) -> SubmissionTicket {
        self.ticket
    }

    pub fn intent(&self) -> &OrderIntent {
        &self.intent
    }

    /// Hand the intent to the placer exactly once.
    pub async fn send<P: OrderPlacer + ?Sized>(self, placer: &P) -> CompletedSubmission {
        tracing::info!(
            epoch = self.ticket.epoch,
            seq = self.ticket.seq,
            symbol = %self.intent.symbol,
            side = %self.intent.side,
            order_type = %self.intent.order_type,
            "placing order"
        );
        let result = placer.place_order(&self.intent).await;
        CompletedSubmission {
            ticket: self.ticket,
            result,
        }
    }
}

/// Placement result tagged with the ticket it answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedSubmission {
    pub ticket: SubmissionTicket,
    pub result: Result<PlacementAck, PlacementError>,
}

/// What the form did with a completed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Order accepted; the draft was reset.
    Placed(PlacementAck),
    /// Remote failure; the submit control is enabled again.
    Failed(PlacementError),
    /// Completion belonged to a previous pair or reset; ignored.
    Discarded,
}

impl SubmissionOutcome {
    pub fn reject_reason(&self) -> Option<RejectReasonCode> {
        match self {
            SubmissionOutcome::Failed(_) => Some(RejectReasonCode::PlacementFailed),
            SubmissionOutcome::Placed(_) | SubmissionOutcome::Discarded => None,
        }
    }
}

// ─── Metrics ────────────────────────────────────────────────────────────

/// Per-form submission counters.
#[derive(Debug)]
pub struct SubmissionMetrics {
    started_total: u64,
    blocked_in_flight_total: u64,
    placed_total: u64,
    failed_total: u64,
    discarded_total: u64,
}

impl SubmissionMetrics {
    pub fn new() -> Self {
        Self {
            started_total: 0,
            blocked_in_flight_total: 0,
            placed_total: 0,
            failed_total: 0,
            discarded_total: 0,
        }
    }

    pub(crate) fn record_started(&mut self) {
        self.started_total += 1;
    }

    pub(crate) fn record_blocked_in_flight(&mut self) {
        self.blocked_in_flight_total += 1;
        crate::emit_form_metric_line("submission_blocked_total", "reason=InFlight");
    }

    pub(crate) fn record_outcome(&mut self, outcome: &SubmissionOutcome) {
        let label = match outcome {
            SubmissionOutcome::Placed(_) => {
                self.placed_total += 1;
                "placed"
            }
            SubmissionOutcome::Failed(_) => {
                self.failed_total += 1;
                "failed"
            }
            SubmissionOutcome::Discarded => {
                self.discarded_total += 1;
                "discarded"
            }
        };
        crate::emit_form_metric_line("submission_outcome_total", &format!("outcome={label}"));
    }

    pub fn started_total(&self) -> u64 {
        self.started_total
    }

    pub fn blocked_in_flight_total(&self) -> u64 {
        self.blocked_in_flight_total
    }

    pub fn placed_total(&self) -> u64 {
        self.placed_total
    }

    pub fn failed_total(&self) -> u64 {
        self.failed_total
    }

    pub fn discarded_total(&self) -> u64 {
        self.discarded_total
    }
}

impl Default for SubmissionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
