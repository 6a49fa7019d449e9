//! Fee and cost figures shown next to the order form.

pub mod fees;

pub use fees::{DEFAULT_FEE_RATE, OrderSummary, summarize};
