use anyhow::{Context, Result};
use serde::Deserialize;

/// All tunables for one run, loaded from the process environment.
///
/// Every variable has a default, so a bare environment yields a config that
/// parses but skips mail delivery (empty SMTP credentials).
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub alpaca_key_id: String,
    pub alpaca_secret_key: String,
    pub alpaca_base_url: String,
    pub alert_to_email: String,
    pub alert_from_email: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_pass: String,
    pub symbol: String,
    /// Loaded for operator visibility; no logic enforces it yet.
    pub max_trades_per_day: u32,
    pub window_start_utc: String,
    pub window_end_utc: String,
    pub mode: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    DryRun,
    Live,
}

impl Mode {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dry_run" => Mode::DryRun,
            _ => Mode::Live,
        }
    }
}

/// Header credentials and endpoint for the Alpaca REST API.
#[derive(Debug, Clone)]
pub struct AlpacaCredentials {
    pub key_id: String,
    pub secret_key: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub to: String,
    pub from: String,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
}

impl MailConfig {
    /// The port always has a value, so completeness is about the five strings.
    pub fn is_complete(&self) -> bool {
        !self.to.is_empty()
            && !self.from.is_empty()
            && !self.host.is_empty()
            && !self.user.is_empty()
            && !self.pass.is_empty()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .set_default("alpaca_key_id", "")?
            .set_default("alpaca_secret_key", "")?
            .set_default("alpaca_base_url", "https://paper-api.alpaca.markets")?
            .set_default("alert_to_email", "")?
            .set_default("alert_from_email", "")?
            .set_default("smtp_host", "")?
            .set_default("smtp_port", 587_i64)?
            .set_default("smtp_user", "")?
            .set_default("smtp_pass", "")?
            .set_default("symbol", "SPY")?
            .set_default("max_trades_per_day", 1_i64)?
            .set_default("window_start_utc", "14:35")?
            .set_default("window_end_utc", "16:00")?
            .set_default("mode", "DRY_RUN")?
            .add_source(config::Environment::default().try_parsing(true))
            .build()
            .context("Failed to build configuration")?;

        let config: AppConfig = settings
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        if config.mode() == Mode::Live {
            tracing::warn!("LIVE mode requested - no strategy is enabled, no alerts will fire");
        }

        Ok(config)
    }

    pub fn mode(&self) -> Mode {
        Mode::parse(&self.mode)
    }

    pub fn alpaca(&self) -> AlpacaCredentials {
        AlpacaCredentials {
            key_id: self.alpaca_key_id.clone(),
            secret_key: self.alpaca_secret_key.clone(),
            base_url: self.alpaca_base_url.clone(),
        }
    }

    pub fn mail(&self) -> MailConfig {
        MailConfig {
            to: self.alert_to_email.clone(),
            from: self.alert_from_email.clone(),
            host: self.smtp_host.clone(),
            port: self.smtp_port,
            user: self.smtp_user.clone(),
            pass: self.smtp_pass.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_mail() -> MailConfig {
        MailConfig {
            to: "trader@example.com".to_string(),
            from: "bot@example.com".to_string(),
            host: "smtp.example.com".to_string(),
            port: 587,
            user: "bot".to_string(),
            pass: "hunter2".to_string(),
        }
    }

    #[test]
    fn test_mode_parse_case_insensitive() {
        assert_eq!(Mode::parse("DRY_RUN"), Mode::DryRun);
        assert_eq!(Mode::parse("dry_run"), Mode::DryRun);
        assert_eq!(Mode::parse("Dry_Run"), Mode::DryRun);
    }

    #[test]
    fn test_mode_parse_anything_else_is_live() {
        assert_eq!(Mode::parse("LIVE"), Mode::Live);
        assert_eq!(Mode::parse(""), Mode::Live);
        assert_eq!(Mode::parse("paper"), Mode::Live);
    }

    #[test]
    fn test_mail_config_complete() {
        assert!(complete_mail().is_complete());
    }

    #[test]
    fn test_mail_config_incomplete_when_any_string_empty() {
        for field in 0..5 {
            let mut mail = complete_mail();
            match field {
                0 => mail.to.clear(),
                1 => mail.from.clear(),
                2 => mail.host.clear(),
                3 => mail.user.clear(),
                _ => mail.pass.clear(),
            }
            assert!(!mail.is_complete(), "field {} should break completeness", field);
        }
    }
}
