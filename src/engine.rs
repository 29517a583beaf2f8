use anyhow::Result;
use chrono::{DateTime, Timelike, Utc};
use tracing::{debug, info};

use crate::broker::AlpacaClient;
use crate::config::Mode;
use crate::decision::{decide, Signal};
use crate::notify::{buy_alert, sell_alert, Notifier};
use crate::window::TradingWindow;

/// One-shot orchestration: window gate, position fetch, decision, alert.
///
/// There is no loop here; an external minute-granularity scheduler invokes
/// the process, and each run is independent.
pub struct AlertEngine<N: Notifier> {
    broker: AlpacaClient,
    notifier: N,
    window: TradingWindow,
    symbol: String,
    mode: Mode,
}

impl<N: Notifier> AlertEngine<N> {
    pub fn new(
        broker: AlpacaClient,
        notifier: N,
        window: TradingWindow,
        symbol: String,
        mode: Mode,
    ) -> Self {
        Self {
            broker,
            notifier,
            window,
            symbol,
            mode,
        }
    }

    pub async fn run_once(&self) -> Result<()> {
        self.run_at(Utc::now()).await
    }

    /// One complete pass for a given timestamp. The window gate comes first,
    /// so out-of-window runs never touch the network.
    pub async fn run_at(&self, now: DateTime<Utc>) -> Result<()> {
        if !self.window.contains(now) {
            info!("Outside trading window; exiting");
            return Ok(());
        }

        let qty = self.broker.get_open_position_qty(&self.symbol).await?;
        debug!("{}: open position qty = {}", self.symbol, qty);

        self.evaluate(qty, now).await
    }

    /// Decision and notification for an already-fetched quantity.
    pub async fn evaluate(&self, qty: i64, now: DateTime<Utc>) -> Result<()> {
        match decide(self.mode, qty, now.minute()) {
            Signal::Buy { qty } => {
                self.notifier.send(buy_alert(&self.symbol, qty)).await?;
                info!("Sent DRY_RUN BUY alert");
            }
            Signal::Sell { qty, reason } => {
                self.notifier
                    .send(sell_alert(&self.symbol, qty, reason))
                    .await?;
                info!("Sent DRY_RUN SELL alert");
            }
            Signal::Hold => match self.mode {
                Mode::DryRun => info!("DRY_RUN: no alert this minute"),
                Mode::Live => info!("LIVE: strategy not enabled; no alerts"),
            },
        }

        Ok(())
    }
}
