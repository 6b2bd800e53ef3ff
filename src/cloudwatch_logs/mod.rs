//! CloudWatch Logs Link Module
//!
//! Builds console deep links for log groups and streams and decodes the
//! payloads that subscription filters deliver to Lambda.
//!
//! ## Features
//!
//! - Console links with the console's `$`-escaped fragment syntax
//! - Filter by terms, absolute or relative start time, and end time
//! - Async decoding of gzipped, base64 subscription envelopes
//! - Helpers for Lambda invocation contexts and subscription events
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cwllink::cloudwatch_logs::{from_subscription_event, SubscriptionEvent};
//! use cwllink::config::LinkConfig;
//!
//! # async fn example(event: SubscriptionEvent) -> anyhow::Result<()> {
//! let config = LinkConfig::from_env()?;
//!
//! // Link to the log events of the request that produced the error
//! let link = from_subscription_event(&config, &event).await?;
//! println!("{}", link);
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all, rust_2018_idioms)]

pub mod adapters;
pub mod console_links;
pub mod decoder;
pub mod types;

// Re-export commonly used types
pub use adapters::{
    extract_request_id, from_decoded_envelope, from_invocation_context, from_subscription_event,
};
pub use console_links::{build_link, console_escape};
pub use decoder::{decode_envelope, decode_payload, gunzip_async, DecodeError};
pub use types::{
    AwsLogs, DecodedLogEnvelope, FilterOptions, InvocationContext, LogEvent, SubscriptionEvent,
};
