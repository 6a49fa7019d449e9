//! Text-to-number plumbing shared by every order-entry field.

pub mod coerce;
pub mod decimal;

pub use coerce::coerce;
pub use decimal::{Precision, format_fixed, parse_decimal, parse_positive, round_down, round_to};
