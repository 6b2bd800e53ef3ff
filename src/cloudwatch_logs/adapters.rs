//! Link helpers for Lambda handlers.
//!
//! These pull the log group, stream and request id out of the shapes a
//! Lambda function actually sees and hand them to [`build_link`].

#![warn(clippy::all, rust_2018_idioms)]

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::LinkConfig;

use super::console_links::build_link;
use super::decoder::{decode_envelope, DecodeError};
use super::types::{DecodedLogEnvelope, FilterOptions, InvocationContext, SubscriptionEvent};

// ASCII word characters, as in the console's own request id pattern
static REQUEST_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9_]{8}-[A-Za-z0-9_]{4}-[A-Za-z0-9_]{4}-[A-Za-z0-9_]{4}-[A-Za-z0-9_]{12}")
        .expect("request id pattern is valid")
});

/// Find the first UUID-shaped request id in a log line.
pub fn extract_request_id(message: &str) -> Option<&str> {
    REQUEST_ID_PATTERN.find(message).map(|m| m.as_str())
}

/// Link to the current invocation's log events, filtered by its request id.
pub fn from_invocation_context(config: &LinkConfig, context: &InvocationContext) -> String {
    let options = FilterOptions::new().with_term(context.aws_request_id.as_str());
    build_link(
        &config.region,
        &context.log_group_name,
        Some(context.log_stream_name.as_str()),
        &options,
    )
}

/// Link to the stream an envelope came from.
///
/// The link filters by the request id found in the first event. Lines
/// without one (init errors, control messages) get a plain stream link.
pub fn from_decoded_envelope(config: &LinkConfig, data: &DecodedLogEnvelope) -> String {
    let request_id = match data.first_event() {
        Some(event) => {
            let found = extract_request_id(&event.message);
            if found.is_none() {
                trace_debug!("No request id in first event {} of {}", event.id, data.log_stream);
            }
            found
        }
        None => {
            trace_warn!("Envelope for {}/{} has no log events", data.log_group, data.log_stream);
            None
        }
    };

    let options = match request_id {
        Some(id) => FilterOptions::new().with_term(id),
        None => FilterOptions::default(),
    };
    build_link(&config.region, &data.log_group, Some(data.log_stream.as_str()), &options)
}

/// Decode a subscription filter event and link to its first request.
pub async fn from_subscription_event(
    config: &LinkConfig,
    event: &SubscriptionEvent,
) -> Result<String, DecodeError> {
    let decoded = decode_envelope(&event.awslogs.data).await?;
    Ok(from_decoded_envelope(config, &decoded))
}
