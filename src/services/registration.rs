use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use crate::models::Registration;

/// RegistrationService receives a validated sign-up before the form navigates away.
///
/// This trait abstracts the backend so that:
/// - The TUI runs without any network access by default
/// - Tests can observe and fail registrations with a mock
/// - A real HTTP endpoint can be plugged in through configuration
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Register a user
    ///
    /// An error keeps the user on the form with the draft intact.
    async fn register(&self, registration: &Registration) -> Result<()>;
}

/// Accepts every registration without doing any I/O
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRegistration;

#[async_trait]
impl RegistrationService for NoopRegistration {
    async fn register(&self, registration: &Registration) -> Result<()> {
        debug!(
            first_name = %registration.first_name,
            "no registration backend configured; skipping"
        );
        Ok(())
    }
}

/// POSTs registrations as JSON to a configured endpoint
pub struct HttpRegistration {
    pub client: Client,
    pub url: String,
}

impl HttpRegistration {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl RegistrationService for HttpRegistration {
    async fn register(&self, registration: &Registration) -> Result<()> {
        let res = self
            .client
            .post(&self.url)
            .json(registration)
            .send()
            .await
            .with_context(|| format!("failed to reach {}", self.url))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            anyhow::bail!("registration endpoint non-success: {} body: {}", status, body);
        }

        info!(status = %status, "registration accepted");
        Ok(())
    }
}
