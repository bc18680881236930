//! Blocking HTTP webhook client.

use super::{Delivery, DeliveryReceipt};
use crate::error::{HeraldError, Result};
use crate::pipeline::Envelope;
use chrono::Utc;
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use std::time::Duration;
use tracing::{debug, info};

pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30; // Total request timeout (includes connection + transfer)

/// Longest response body quoted in a delivery error.
pub const MAX_ERROR_BODY_CHARS: usize = 512;

const EVENT_HEADER: &str = "X-GitHub-Event";
const EVENT_NAME: &str = "push";

/// Posts notifications to a single webhook URL.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
    url: Url,
}

impl WebhookClient {
    /// Create a client for `webhook`.
    ///
    /// The request URL always carries `wait=true` so the endpoint only
    /// answers once the message has been accepted.
    pub fn new(webhook: Url) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("herald/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                HeraldError::DeliveryError(format!(
                    "failed to create HTTP client: {}",
                    e.without_url()
                ))
            })?;

        Ok(Self {
            client,
            url: with_wait(webhook),
        })
    }

    /// The URL requests are sent to.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Delivery for WebhookClient {
    fn deliver(&self, envelope: &Envelope) -> Result<DeliveryReceipt> {
        debug!(
            host = self.url.host_str().unwrap_or_default(),
            embeds = envelope.embeds.len(),
            "posting notification"
        );

        let response = self
            .client
            .post(self.url.clone())
            .header(EVENT_HEADER, EVENT_NAME)
            .json(envelope)
            .send()
            .map_err(|e| {
                HeraldError::DeliveryError(format!("request failed: {}", e.without_url()))
            })?;

        let status = validate_response_status(response)?;
        info!(status, "notification delivered");

        Ok(DeliveryReceipt {
            status,
            delivered_at: Utc::now(),
        })
    }
}

/// Turn a non-2xx response into a descriptive error quoting the body.
fn validate_response_status(response: Response) -> Result<u16> {
    let status = response.status();
    if status.is_success() {
        return Ok(status.as_u16());
    }

    let body = response.text().unwrap_or_default();
    let body = truncate_body(body.trim());
    let reason = status.canonical_reason().unwrap_or("Unknown error");

    Err(HeraldError::DeliveryError(if body.is_empty() {
        format!("webhook responded with HTTP {} {}", status.as_u16(), reason)
    } else {
        format!(
            "webhook responded with HTTP {} {}: {}",
            status.as_u16(),
            reason,
            body
        )
    }))
}

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

/// Set `wait=true`, replacing any existing `wait` parameter.
fn with_wait(mut url: Url) -> Url {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "wait")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair("wait", "true");
    url
}
