//! Order-entry form: draft model, derivation, visibility and the state holder
//! shared by every order-entry surface.

pub mod config;
pub mod derivation;
pub mod market;
pub mod state;
pub mod types;
pub mod visibility;

pub use config::FormConfig;
pub use derivation::{PercentFill, apply_percentage, derive_amount, derive_total};
pub use market::MarketContext;
pub use state::OrderForm;
pub use types::{OrderDraft, OrderType, PercentShortcut, Side};
pub use visibility::{FieldVisibility, fields_for};
