use crate::config::Mode;

/// Synthetic trigger minutes used to verify the alert pipeline end to end.
pub const DRY_RUN_BUY_MINUTE: u32 = 40;
pub const DRY_RUN_SELL_MINUTE: u32 = 55;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    Buy { qty: i64 },
    Sell { qty: i64, reason: &'static str },
    Hold,
}

/// Pure decision over (mode, open quantity, current minute of hour).
///
/// Dry-run fires a synthetic BUY of one share when flat at :40 and a
/// synthetic SELL of the full position at :55, both by exact minute
/// equality. Live mode holds unconditionally until a real strategy is
/// approved.
pub fn decide(mode: Mode, qty: i64, minute: u32) -> Signal {
    match mode {
        Mode::DryRun => {
            if qty == 0 && minute == DRY_RUN_BUY_MINUTE {
                Signal::Buy { qty: 1 }
            } else if qty > 0 && minute == DRY_RUN_SELL_MINUTE {
                Signal::Sell {
                    qty,
                    reason: "test exit",
                }
            } else {
                Signal::Hold
            }
        }
        Mode::Live => Signal::Hold,
    }
}
