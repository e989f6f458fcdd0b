use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Comma-separated admin session tokens accepted by the back office.
    pub admin_session_tokens: String,
    pub smtp: Option<SmtpConfig>,
}

/// Outbound mail settings. All five variables must be present for SMTP
/// dispatch to be enabled; otherwise notifications are logged only.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub server: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            admin_session_tokens: std::env::var("ADMIN_SESSION_TOKENS").unwrap_or_default(),
            smtp: SmtpConfig::from_env()?,
        })
    }
}

impl SmtpConfig {
    fn from_env() -> Result<Option<Self>> {
        let Ok(server) = std::env::var("SMTP_SERVER") else {
            return Ok(None);
        };

        Ok(Some(Self {
            server,
            port: std::env::var("SMTP_PORT")
                .context("SMTP_PORT must be set when SMTP_SERVER is")?
                .parse()?,
            username: std::env::var("SMTP_USERNAME")
                .context("SMTP_USERNAME must be set when SMTP_SERVER is")?,
            password: std::env::var("SMTP_PASSWORD")
                .context("SMTP_PASSWORD must be set when SMTP_SERVER is")?,
            from_address: std::env::var("MAIL_FROM")
                .context("MAIL_FROM must be set when SMTP_SERVER is")?,
        }))
    }
}
