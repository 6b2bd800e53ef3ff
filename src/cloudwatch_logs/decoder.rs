//! Subscription Envelope Decoder
//!
//! CloudWatch Logs hands subscription batches to Lambda as base64 of a
//! gzipped JSON document. Decoding runs base64 → gunzip → UTF-8 → control
//! character removal → JSON, and stops at the first failing stage.

#![warn(clippy::all, rust_2018_idioms)]

use base64::{engine::general_purpose, Engine as _};
use flate2::read::MultiGzDecoder;
use serde::de::DeserializeOwned;
use std::io::{self, Read};

use super::types::DecodedLogEnvelope;

/// Errors raised while decoding a subscription payload
#[derive(Debug)]
pub enum DecodeError {
    /// Input is not valid base64
    Base64(base64::DecodeError),
    /// Bytes are not a valid gzip stream
    Decompression(io::Error),
    /// Cleaned text is not the expected JSON document
    Parse(serde_json::Error),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::Base64(e) => write!(f, "Invalid base64 payload: {}", e),
            DecodeError::Decompression(e) => write!(f, "Failed to decompress payload: {}", e),
            DecodeError::Parse(e) => write!(f, "Failed to parse payload: {}", e),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Base64(e) => Some(e),
            DecodeError::Decompression(e) => Some(e),
            DecodeError::Parse(e) => Some(e),
        }
    }
}

impl From<base64::DecodeError> for DecodeError {
    fn from(e: base64::DecodeError) -> Self {
        DecodeError::Base64(e)
    }
}

impl From<io::Error> for DecodeError {
    fn from(e: io::Error) -> Self {
        DecodeError::Decompression(e)
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        DecodeError::Parse(e)
    }
}

/// Gunzip `compressed` on the blocking pool.
///
/// Every member of a multi-member stream is decoded and concatenated.
///
/// Decoder errors come back untouched. A blocking task that panics or is
/// cancelled is reported as an `Other` I/O error.
pub async fn gunzip_async(compressed: Vec<u8>) -> io::Result<Vec<u8>> {
    tokio::task::spawn_blocking(move || {
        let mut decoder = MultiGzDecoder::new(compressed.as_slice());
        let mut decompressed = Vec::new();
        decoder.read_to_end(&mut decompressed)?;
        Ok::<_, io::Error>(decompressed)
    })
    .await
    .map_err(|e| io::Error::other(format!("Task join error: {}", e)))?
}

fn strip_control_chars(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\u{0}'..='\u{1f}')).collect()
}

/// Decode a base64 gzipped JSON payload into any deserializable type.
pub async fn decode_payload<T: DeserializeOwned>(data: &str) -> Result<T, DecodeError> {
    let compressed = general_purpose::STANDARD.decode(data)?;
    trace_trace!("Decoded {} compressed bytes", compressed.len());

    let decompressed = gunzip_async(compressed).await?;
    trace_trace!("Decompressed payload to {} bytes", decompressed.len());

    // Payloads may carry stray bytes; they become U+FFFD rather than an error
    let text = String::from_utf8_lossy(&decompressed);
    let cleaned = strip_control_chars(&text);

    Ok(serde_json::from_str(&cleaned)?)
}

/// Decode the `awslogs.data` field of a subscription event.
pub async fn decode_envelope(data: &str) -> Result<DecodedLogEnvelope, DecodeError> {
    let envelope: DecodedLogEnvelope = decode_payload(data).await?;
    trace_debug!(
        "Decoded {} with {} events from {}/{}",
        envelope.message_type,
        envelope.log_events.len(),
        envelope.log_group,
        envelope.log_stream
    );
    Ok(envelope)
}
