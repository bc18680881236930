//! Implementation of the `herald send` command.
//!
//! Validates the webhook before doing any work, renders the notification,
//! and delivers it once.

use super::payload::{build_payload, load_options};
use crate::cli::SendArgs;
use crate::context::Environment;
use crate::delivery::{Delivery, DeliveryReceipt, WebhookClient};
use crate::error::Result;
use crate::pipeline::Envelope;

/// Execute the `herald send` command.
pub fn cmd_send(args: &SendArgs, env: &Environment) -> Result<()> {
    println!("{}", send_notification(args, env)?);
    Ok(())
}

/// Render and deliver one notification, returning the summary line.
pub(crate) fn send_notification(args: &SendArgs, env: &Environment) -> Result<String> {
    let options = load_options(&args.payload, &args.overrides())?;
    let client = WebhookClient::new(options.webhook_url()?)?;

    let envelope = build_payload(&args.payload, &options, env)?;
    let receipt = deliver(&client, &envelope)?;

    let host = client.url().host_str().unwrap_or("webhook");
    Ok(summary(&envelope, host, &receipt))
}

pub(crate) fn deliver<D: Delivery>(delivery: &D, envelope: &Envelope) -> Result<DeliveryReceipt> {
    delivery.deliver(envelope)
}

fn summary(envelope: &Envelope, host: &str, receipt: &DeliveryReceipt) -> String {
    format!(
        "Delivered {} embed(s) to {} (HTTP {})",
        envelope.embeds.len(),
        host,
        receipt.status
    )
}
