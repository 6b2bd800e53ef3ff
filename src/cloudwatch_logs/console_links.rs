//! Deep links into the CloudWatch Logs console.
//!
//! The console keeps its view state in the URL fragment and expects path
//! segments percent-encoded twice with every `%` replaced by `$`, so
//! `/aws/lambda/fn` becomes `$252Faws$252Flambda$252Ffn`.

#![warn(clippy::all, rust_2018_idioms)]

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::form_urlencoded;

use super::types::FilterOptions;

const CONSOLE_DOMAIN: &str = "console.aws.amazon.com";

/// Characters left alone by JavaScript's `encodeURIComponent`, which the
/// console uses to produce and read these fragments.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Percent-encode `value` `passes` times, then swap every `%` for `$`.
///
/// Group and stream names take two passes. The filter query takes one pass
/// over clauses whose terms are already encoded, which gives the same
/// double escaping for the terms.
pub fn console_escape(value: &str, passes: usize) -> String {
    let mut encoded = value.to_string();
    for _ in 0..passes {
        encoded = encode(&encoded);
    }
    encoded.replace('%', "$")
}

fn filter_query(options: &FilterOptions) -> String {
    let mut filters = Vec::with_capacity(3);
    if !options.terms.is_empty() {
        let pattern = options
            .terms
            .iter()
            .map(|term| encode(&format!("\"{}\"", term)))
            .collect::<Vec<_>>()
            .join("+");
        filters.push(format!("filterPattern={}", pattern));
    }
    if let Some(start) = options.start {
        filters.push(format!("start={}", start));
    }
    if let Some(end) = options.end {
        filters.push(format!("end={}", end));
    }
    format!("?{}", filters.join("&"))
}

/// Build a console link for a log group, optionally narrowed to a stream
/// and filtered by `options`.
///
/// Without a stream (or with an empty one) the options are ignored and the
/// link opens the log group.
pub fn build_link(
    region: &str,
    log_group: &str,
    log_stream: Option<&str>,
    options: &FilterOptions,
) -> String {
    let region_param: String = form_urlencoded::byte_serialize(region.as_bytes()).collect();
    let base = format!(
        "https://{}.{}/cloudwatch/home?region={}",
        region, CONSOLE_DOMAIN, region_param
    );
    let group_part = format!("logsV2:log-groups/log-group/{}", console_escape(log_group, 2));

    let stream = match log_stream {
        Some(stream) if !stream.is_empty() => stream,
        _ => return format!("{}#{}", base, group_part),
    };

    let events_part = format!("log-events/{}", console_escape(stream, 2));
    if options.is_empty() {
        return format!("{}#{}/{}", base, group_part, events_part);
    }

    format!(
        "{}#{}/{}{}",
        base,
        group_part,
        events_part,
        console_escape(&filter_query(options), 1)
    )
}
