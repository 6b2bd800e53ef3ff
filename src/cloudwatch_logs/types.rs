//! CloudWatch Logs Data Types
//!
//! Filter options for console links, the subscription envelope delivered to
//! Lambda, and the slice of the Lambda invocation context used for linking.

#![warn(clippy::all, rust_2018_idioms)]

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `messageType` value CloudWatch uses for destination health checks
pub const CONTROL_MESSAGE: &str = "CONTROL_MESSAGE";

/// `messageType` value for regular log batches
pub const DATA_MESSAGE: &str = "DATA_MESSAGE";

/// Filter options for a log events link
///
/// Each field is optional on its own. Presence decides whether a clause is
/// emitted, so `start: Some(0)` still produces `start=0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Terms combined into the filter pattern (empty = no pattern)
    #[serde(default)]
    pub terms: Vec<String>,
    /// Start time in milliseconds.
    /// - a unix timestamp is treated as absolute time
    /// - a negative number is treated as relative time by the console
    #[serde(default)]
    pub start: Option<i64>,
    /// End time (Unix timestamp in milliseconds)
    #[serde(default)]
    pub end: Option<i64>,
}

impl FilterOptions {
    /// Create empty FilterOptions
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the terms
    pub fn with_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.terms = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Append a single term
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.terms.push(term.into());
        self
    }

    /// Set start time
    pub fn with_start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }

    /// Set end time
    pub fn with_end(mut self, end: i64) -> Self {
        self.end = Some(end);
        self
    }

    /// True when no field would contribute a filter clause
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.start.is_none() && self.end.is_none()
    }
}

/// A single log event inside a subscription envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEvent {
    pub id: String,
    /// Event timestamp (Unix milliseconds)
    pub timestamp: i64,
    pub message: String,
    /// Fields extracted by the subscription filter pattern, if it has any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_fields: Option<HashMap<String, String>>,
}

impl LogEvent {
    pub fn new(id: impl Into<String>, timestamp: i64, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            timestamp,
            message: message.into(),
            extracted_fields: None,
        }
    }
}

/// Decoded payload of a subscription filter delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedLogEnvelope {
    /// `DATA_MESSAGE` or `CONTROL_MESSAGE`
    pub message_type: String,
    /// Account id that owns the log group
    pub owner: String,
    pub log_group: String,
    pub log_stream: String,
    pub subscription_filters: Vec<String>,
    pub log_events: Vec<LogEvent>,
}

impl DecodedLogEnvelope {
    pub fn first_event(&self) -> Option<&LogEvent> {
        self.log_events.first()
    }

    /// Control messages only check that the destination is reachable
    pub fn is_control_message(&self) -> bool {
        self.message_type == CONTROL_MESSAGE
    }
}

/// Lambda event delivered by a CloudWatch Logs subscription filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionEvent {
    pub awslogs: AwsLogs,
}

impl SubscriptionEvent {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            awslogs: AwsLogs { data: data.into() },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsLogs {
    /// base64 of the gzipped envelope
    pub data: String,
}

/// The part of a Lambda invocation context needed to link to its logs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationContext {
    pub log_group_name: String,
    pub log_stream_name: String,
    pub aws_request_id: String,
}

impl InvocationContext {
    pub fn new(
        log_group_name: impl Into<String>,
        log_stream_name: impl Into<String>,
        aws_request_id: impl Into<String>,
    ) -> Self {
        Self {
            log_group_name: log_group_name.into(),
            log_stream_name: log_stream_name.into(),
            aws_request_id: aws_request_id.into(),
        }
    }
}
