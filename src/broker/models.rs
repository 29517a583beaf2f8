use anyhow::{Context, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;

/// One open position as reported by `GET /v2/positions/{symbol}`.
///
/// Only `symbol` and `qty` are required; the other Alpaca fields are kept
/// for logging when present.
#[derive(Debug, Clone, Deserialize)]
pub struct Position {
    pub symbol: String,
    /// Alpaca reports quantity as a decimal string, e.g. "3.0".
    pub qty: String,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub avg_entry_price: Option<String>,
    #[serde(default)]
    pub market_value: Option<String>,
}

impl Position {
    /// Whole-share quantity, truncated toward zero.
    pub fn whole_qty(&self) -> Result<i64> {
        let qty: Decimal = self
            .qty
            .parse()
            .with_context(|| format!("Invalid position qty {:?}", self.qty))?;

        qty.trunc()
            .to_i64()
            .with_context(|| format!("Position qty {:?} out of range", self.qty))
    }
}
