use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use crate::config::AlpacaCredentials;

use super::models::Position;

pub struct AlpacaClient {
    client: Client,
    credentials: AlpacaCredentials,
    base_url: String,
}

impl AlpacaClient {
    pub fn new(credentials: AlpacaCredentials) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(20))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = credentials.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            client,
            credentials,
            base_url,
        })
    }

    /// Open quantity for `symbol`. A 404 means the account is flat.
    #[instrument(skip(self))]
    pub async fn get_open_position_qty(&self, symbol: &str) -> Result<i64> {
        let url = format!("{}/v2/positions/{}", self.base_url, symbol);

        debug!("Fetching open position for {}", symbol);

        let response = self
            .client
            .get(&url)
            .header("APCA-API-KEY-ID", &self.credentials.key_id)
            .header("APCA-API-SECRET-KEY", &self.credentials.secret_key)
            .send()
            .await
            .context("Failed to send position request")?;

        let status = response.status();
        let text = response.text().await?;

        position_qty_from_response(status, &text)
    }
}

/// Interprets one positions response: 404 is a valid "no position" state,
/// every other non-2xx status is fatal to the run.
pub fn position_qty_from_response(status: StatusCode, body: &str) -> Result<i64> {
    if status == StatusCode::NOT_FOUND {
        return Ok(0);
    }

    if !status.is_success() {
        anyhow::bail!("Position request failed: {} - {}", status, body);
    }

    let position: Position =
        serde_json::from_str(body).context("Failed to parse position response")?;

    position.whole_qty()
}
