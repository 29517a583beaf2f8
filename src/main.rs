use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use alertbot::{
    broker::AlpacaClient, config::AppConfig, engine::AlertEngine, notify::SmtpNotifier,
    window::TradingWindow,
};

#[derive(Parser, Debug)]
#[command(name = "alertbot")]
#[command(about = "A minute-scheduled trading alert notifier for Alpaca positions")]
struct Args {
    /// Force DRY_RUN mode (overrides the MODE variable)
    #[arg(long)]
    dry_run: bool,

    /// Symbol to watch (overrides the SYMBOL variable)
    #[arg(long)]
    symbol: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alertbot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("Starting alertbot...");

    let mut config = AppConfig::from_env()?;

    if args.dry_run {
        config.mode = "DRY_RUN".to_string();
        info!("DRY_RUN mode forced via CLI flag");
    }

    if let Some(symbol) = args.symbol {
        config.symbol = symbol;
    }

    info!(
        "Mode: {:?}, symbol: {}, window: {} - {} UTC, max trades/day: {}",
        config.mode(),
        config.symbol,
        config.window_start_utc,
        config.window_end_utc,
        config.max_trades_per_day
    );

    let window = TradingWindow::parse(&config.window_start_utc, &config.window_end_utc)?;
    let broker = AlpacaClient::new(config.alpaca())?;
    let notifier = SmtpNotifier::new(config.mail());

    let engine = AlertEngine::new(broker, notifier, window, config.symbol.clone(), config.mode());

    engine.run_once().await
}
