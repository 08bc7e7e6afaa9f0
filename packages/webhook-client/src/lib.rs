//! Client for the external RSVP webhook.
//!
//! One endpoint, one operation: POST the submission as JSON. Any 2xx
//! counts as delivered; anything else is an error for the caller to
//! surface. No retries and no auth, the webhook is an opaque
//! collaborator.

use reqwest::Client;
use thiserror::Error;
use tracing::{info, warn};

use rsvp_core::RsvpSubmission;

/// Result type for webhook operations.
pub type Result<T> = std::result::Result<T, WebhookError>;

/// Webhook delivery errors.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Connection failed or the request never completed.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The webhook answered with a non-2xx status.
    #[error("webhook returned status {status}")]
    Status { status: u16, body: String },
}

/// Client bound to a fixed webhook endpoint.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
    endpoint: String,
}

impl WebhookClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Deliver one submission. The caller decides what a failure means;
    /// this never retries.
    pub async fn send(&self, submission: &RsvpSubmission) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "webhook rejected the RSVP");
            return Err(WebhookError::Status {
                status: status.as_u16(),
                body,
            });
        }

        info!(guest = %submission.name, "RSVP delivered");
        Ok(())
    }
}
