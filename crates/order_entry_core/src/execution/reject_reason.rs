//! Reject reason registry for blocked submissions.

use super::gate::ValidationError;
use super::submission::SubmitBlocked;

/// Stable token surfaced to the host for a blocked or failed submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReasonCode {
    EmptyAmount,
    EmptyPrice,
    EmptyStopPrice,
    InsufficientBalance,
    SubmissionInFlight,
    PlacementFailed,
}

impl RejectReasonCode {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReasonCode::EmptyAmount => "EmptyAmount",
            RejectReasonCode::EmptyPrice => "EmptyPrice",
            RejectReasonCode::EmptyStopPrice => "EmptyStopPrice",
            RejectReasonCode::InsufficientBalance => "InsufficientBalance",
            RejectReasonCode::SubmissionInFlight => "SubmissionInFlight",
            RejectReasonCode::PlacementFailed => "PlacementFailed",
        }
    }

    /// Validation failures render inline next to a field; the rest are
    /// reported through the host's toast/banner.
    pub fn is_inline(self) -> bool {
        matches!(
            self,
            RejectReasonCode::EmptyAmount
                | RejectReasonCode::EmptyPrice
                | RejectReasonCode::EmptyStopPrice
                | RejectReasonCode::InsufficientBalance
        )
    }
}

const REGISTRY: &[RejectReasonCode] = &[
    RejectReasonCode::EmptyAmount,
    RejectReasonCode::EmptyPrice,
    RejectReasonCode::EmptyStopPrice,
    RejectReasonCode::InsufficientBalance,
    RejectReasonCode::SubmissionInFlight,
    RejectReasonCode::PlacementFailed,
];

pub fn reject_reason_registry() -> &'static [RejectReasonCode] {
    REGISTRY
}

pub fn reject_reason_registry_contains(code: RejectReasonCode) -> bool {
    REGISTRY.contains(&code)
}

pub fn reject_reason_from_validation(err: ValidationError) -> RejectReasonCode {
    match err {
        ValidationError::EmptyAmount => RejectReasonCode::EmptyAmount,
        ValidationError::EmptyPrice => RejectReasonCode::EmptyPrice,
        ValidationError::EmptyStopPrice => RejectReasonCode::EmptyStopPrice,
        ValidationError::InsufficientBalance => RejectReasonCode::InsufficientBalance,
    }
}

/// Map a blocked submit to its registry token.
pub fn reject_reason_from_blocked(blocked: &SubmitBlocked) -> RejectReasonCode {
    match blocked {
        SubmitBlocked::InFlight => RejectReasonCode::SubmissionInFlight,
        SubmitBlocked::Invalid(err) => reject_reason_from_validation(*err),
    }
}
