//! Tests for logging initialization.

use std::io;
use std::sync::{Arc, Mutex};

use illumify_cli::logging::{LogConfig, LogFormat, init_logging_with_writer};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Buffer {
    type Writer = Buffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

// Installs the global subscriber, so this file holds a single test.
#[test]
fn json_logs_reach_the_writer() {
    let buffer = Buffer::default();
    let mut config = LogConfig::default()
        .with_level_filter(LevelFilter::DEBUG)
        .with_format(LogFormat::Json)
        .with_ansi(false)
        .with_log_file(None);
    config.use_env_filter = false;
    init_logging_with_writer(&config, buffer.clone());

    tracing::debug!(target: "illumify_cli::commands", theme = "dark", "resolved theme");
    tracing::debug!(target: "other_crate", "filtered out");

    let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 1, "{output}");
    assert!(lines[0].starts_with('{'));
    assert!(lines[0].contains("resolved theme"));
    assert!(lines[0].contains("\"theme\":\"dark\""));
}
