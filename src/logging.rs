//! Optional subscriber setup for handlers that use this crate.
//!
//! The library itself only emits events. Call [`init_logging`] once at cold
//! start if nothing else installs a subscriber.

#![warn(clippy::all, rust_2018_idioms)]

use anyhow::{Context, Result};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_DIRECTIVES: &str = "cwllink=info";

/// Build the subscriber [`init_logging`] installs, writing to `writer`.
///
/// `RUST_LOG` wins over `default_directives`.
pub fn build_subscriber<W>(
    default_directives: &str,
    writer: W,
) -> Result<impl tracing::Subscriber + Send + Sync + 'static>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::builder()
            .parse(default_directives)
            .with_context(|| format!("Failed to parse log filter: {}", default_directives))?,
    };

    // CloudWatch stores raw bytes, so no ANSI colours
    Ok(tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false),
    ))
}

/// Install a global `tracing` subscriber on stdout and bridge `log` records
/// into it.
///
/// The `log` bridge goes in first. If a `log` logger already exists this
/// fails before anything is installed. If a tracing subscriber already
/// exists, the bridge stays in place and forwards into that subscriber.
pub fn init_logging(default_directives: &str) -> Result<()> {
    let subscriber = build_subscriber(default_directives, std::io::stdout)?;

    tracing_log::LogTracer::init().context("Failed to initialize log-to-tracing bridge")?;

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    tracing::info!("Logging initialized with default filter: {}", default_directives);
    Ok(())
}
