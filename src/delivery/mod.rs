//! Webhook delivery.
//!
//! A notification is delivered with exactly one POST. There is no retry: a
//! transport error or a non-2xx response fails the run with exit code 3.

mod client;


use crate::error::Result;
use crate::pipeline::Envelope;
use chrono::{DateTime, Utc};

pub use client::{
    HTTP_CONNECT_TIMEOUT_SECS, HTTP_REQUEST_TIMEOUT_SECS, MAX_ERROR_BODY_CHARS, WebhookClient,
};

/// Proof of a successful delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// HTTP status returned by the endpoint.
    pub status: u16,
    /// When the endpoint acknowledged the notification.
    pub delivered_at: DateTime<Utc>,
}

/// Something that can deliver a rendered notification.
pub trait Delivery {
    /// Deliver `envelope` once.
    ///
    /// # Returns
    ///
    /// * `Ok(DeliveryReceipt)` - The endpoint accepted the notification
    /// * `Err(HeraldError::DeliveryError)` - Transport failure or non-2xx response
    fn deliver(&self, envelope: &Envelope) -> Result<DeliveryReceipt>;
}
