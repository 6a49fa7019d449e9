//! Order intent assembly, validation and submission.

pub mod gate;
pub mod intent;
pub mod reject_reason;
pub mod submission;

pub use gate::{ValidationError, ValidationMetrics, validate, validation_reject_total};
pub use intent::OrderIntent;
pub use reject_reason::{
    RejectReasonCode, reject_reason_from_blocked, reject_reason_from_validation,
    reject_reason_registry, reject_reason_registry_contains,
};
pub use submission::{
    CompletedSubmission, OrderPlacer, PendingSubmission, PlacementAck, PlacementError,
    SubmissionMetrics, SubmissionOutcome, SubmissionTicket, SubmitBlocked,
};
