/// A fully rendered alert, ready for the notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    pub subject: String,
    pub body: String,
}

/// Subjects are fixed literals from the original alert copy; only the body
/// interpolates the configured symbol.
pub fn buy_alert(symbol: &str, qty: i64) -> AlertMessage {
    AlertMessage {
        subject: "BUY SPY — ACTION REQUIRED".to_string(),
        body: format!(
            "BUY {} NOW\nQty: {}\nOrder: Market\nMax Risk: $50 (paper)\n\nOpen Alpaca and BUY within 5 minutes.\n",
            symbol, qty
        ),
    }
}

pub fn sell_alert(symbol: &str, qty: i64, reason: &str) -> AlertMessage {
    AlertMessage {
        subject: "SELL SPY — ACTION REQUIRED".to_string(),
        body: format!(
            "SELL {} NOW\nQty: {}\nReason: {}\n\nOpen Alpaca and SELL immediately.\n",
            symbol, qty, reason
        ),
    }
}
