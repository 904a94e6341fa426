//! Notification dispatcher: thin client for a Resend-compatible email API.
//!
//! Constructed only when an API key is configured; callers treat a `None`
//! mailer as "notification disabled" and skip sending silently. Send
//! failures are returned to the caller, which logs and swallows them —
//! a failed email never fails the request that triggered it.

use anyhow::Context;
use serde::Serialize;

use agentpath_kernel::settings::EmailSettings;

/// Payload for the send endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

pub struct Mailer {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
    admin: Option<String>,
}

impl Mailer {
    /// Build a mailer from settings; returns `None` when no API key is set.
    pub fn from_settings(settings: &EmailSettings) -> Option<Self> {
        let api_key = settings.api_key.clone()?;
        Some(Self {
            http: reqwest::Client::new(),
            api_url: settings.api_url.clone(),
            api_key,
            from: settings.from.clone(),
            admin: settings.admin.clone(),
        })
    }

    /// Administrator inbox, when one is configured.
    pub fn admin(&self) -> Option<&str> {
        self.admin.as_deref()
    }

    /// Send one email. The configured `from` address is applied here.
    pub async fn send(&self, to: &str, subject: &str, html: &str) -> anyhow::Result<()> {
        let email = OutboundEmail {
            from: self.from.clone(),
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&email)
            .send()
            .await
            .context("email API request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("email API returned {status}: {body}");
        }

        tracing::debug!(to, subject, "email dispatched");
        Ok(())
    }

    /// Send to the administrator inbox if one is configured.
    /// Returns whether a send was attempted.
    pub async fn send_admin(&self, subject: &str, html: &str) -> anyhow::Result<bool> {
        match &self.admin {
            Some(admin) => {
                let admin = admin.clone();
                self.send(&admin, subject, html).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
