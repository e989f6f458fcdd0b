//! Outbound email dispatch.
//!
//! Every caller treats dispatch as best-effort: the send is attempted
//! once after the owning state change has committed, a failure is logged
//! and swallowed, and nothing is queued or retried.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::SmtpConfig;

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<()>;
}

/// SMTP dispatch via lettre. A fresh transport is built per message so a
/// dead pooled connection can never wedge dispatch.
pub struct SmtpMailer {
    server: String,
    port: u16,
    credentials: Credentials,
    from_address: String,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Self {
        Self {
            server: config.server.clone(),
            port: config.port,
            credentials: Credentials::new(config.username.clone(), config.password.clone()),
            from_address: config.from_address.clone(),
        }
    }

    fn build_transport(&self) -> Result<SmtpTransport> {
        Ok(SmtpTransport::relay(&self.server)
            .map_err(|e| anyhow!("SMTP relay error: {e}"))?
            .port(self.port)
            .credentials(self.credentials.clone())
            .build())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<()> {
        let email = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|e| anyhow!("Invalid from address: {e}"))?,
            )
            .to(to.parse().map_err(|e| anyhow!("Invalid to address: {e}"))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| anyhow!("Failed to build email: {e}"))?;

        let mailer = self.build_transport()?;

        tokio::task::spawn_blocking(move || {
            mailer
                .send(&email)
                .map_err(|e| anyhow!("Failed to send email: {e}"))
        })
        .await
        .map_err(|e| anyhow!("Email task failed: {e}"))?
        .map(|_| ())
    }
}

/// Fallback used when no SMTP configuration is present: the message is
/// logged and reported as sent.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, to: &str, subject: &str, _html_body: &str) -> Result<()> {
        tracing::info!(to, subject, "SMTP not configured, logging email instead of sending");
        Ok(())
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mailer that always fails, for exercising the best-effort policy.
    #[derive(Default)]
    pub struct FailingMailer {
        pub attempts: AtomicUsize,
    }

    #[async_trait]
    impl Mailer for FailingMailer {
        async fn send(&self, _to: &str, _subject: &str, _html_body: &str) -> Result<()> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(anyhow!("mail provider unavailable"))
        }
    }

    /// Mailer that records what it was asked to send.
    #[derive(Default)]
    pub struct RecordingMailer {
        pub sent: std::sync::Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, to: &str, subject: &str, _html_body: &str) -> Result<()> {
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), subject.to_string()));
            Ok(())
        }
    }
}
