use rust_decimal::Decimal;

use crate::numeric::Precision;
use crate::risk::DEFAULT_FEE_RATE;

/// Static settings for one order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormConfig {
    /// Trading fee rate applied to the total (default: 0.001).
    pub fee_rate: Decimal,
    pub precision: Precision,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            fee_rate: DEFAULT_FEE_RATE,
            precision: Precision::default(),
        }
    }
}
