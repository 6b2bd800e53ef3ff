use std::io;
use std::sync::{Arc, Mutex};

use cwllink::cloudwatch_logs::{from_decoded_envelope, DecodedLogEnvelope};
use cwllink::config::LinkConfig;
use cwllink::logging::{build_subscriber, init_logging, DEFAULT_DIRECTIVES};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn empty_envelope() -> DecodedLogEnvelope {
    DecodedLogEnvelope {
        message_type: "DATA_MESSAGE".to_string(),
        owner: "owner-id".to_string(),
        log_group: "g".to_string(),
        log_stream: "s".to_string(),
        subscription_filters: vec![],
        log_events: vec![],
    }
}

// Both tests share this binary's `log` logger, which is the tracing bridge
fn install_log_bridge() {
    let _ = tracing_log::LogTracer::init();
}

#[test]
fn test_messages_emitted_once_with_log_bridge() {
    install_log_bridge();
    let capture = Capture::default();
    let subscriber = build_subscriber("cwllink=debug", capture.clone()).unwrap();

    tracing::subscriber::with_default(subscriber, || {
        from_decoded_envelope(&LinkConfig::new("region"), &empty_envelope());
    });

    let output = capture.contents();
    assert_eq!(
        output.matches("Envelope for g/s has no log events").count(),
        1,
        "{}",
        output
    );
}

#[test]
fn test_existing_logger_leaves_no_subscriber() {
    install_log_bridge();

    let err = init_logging(DEFAULT_DIRECTIVES).unwrap_err();

    assert!(err.to_string().contains("bridge"), "{}", err);
    assert!(!tracing::dispatcher::has_been_set());
}
