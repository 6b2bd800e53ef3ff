//! cwllink - CloudWatch Logs console links for Lambda functions
//!
//! Turns a log group, log stream and optional search terms or time range
//! into a URL that opens the matching view in the CloudWatch console. It
//! also decodes the gzipped, base64 envelopes that CloudWatch Logs
//! subscription filters deliver, so an error-alert handler can link straight
//! to the request that failed.
//!
//! # Overview
//!
//! - [`cloudwatch_logs::build_link`] builds the URL. It is synchronous and
//!   deterministic.
//! - [`cloudwatch_logs::decode_envelope`] runs base64 → gunzip → cleanup →
//!   JSON and returns a [`cloudwatch_logs::DecodedLogEnvelope`].
//! - [`cloudwatch_logs::adapters`] connects the two for Lambda invocation
//!   contexts and subscription events.
//! - [`config::LinkConfig`] carries the region, which the adapters take as
//!   a parameter instead of reading the environment.
//!
//! Nothing here makes network calls. The crate only computes strings and
//! decodes bytes.
//!
//! ```rust
//! use cwllink::cloudwatch_logs::{build_link, FilterOptions};
//!
//! let options = FilterOptions::new()
//!     .with_term("01234567-89ab-cdef-0123-456789abcdef")
//!     .with_start(-3_600_000);
//! let link = build_link(
//!     "us-east-1",
//!     "/aws/lambda/my-function",
//!     Some("2025/03/01/[$LATEST]abcdef"),
//!     &options,
//! );
//! assert!(link.starts_with("https://us-east-1.console.aws.amazon.com/cloudwatch/home?region=us-east-1#logsV2:"));
//! ```

#![warn(clippy::all, rust_2018_idioms)]

// Include logging macros first
#[macro_use]
mod logging_macros;

pub mod cloudwatch_logs;
pub mod config;
pub mod logging;

pub use cloudwatch_logs::{build_link, decode_envelope, DecodeError, FilterOptions};
pub use config::LinkConfig;
