#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use expense_report::{sample, ExpenseReport};

pub fn sample_report() -> ExpenseReport {
    sample::sample_report().expect("sample data is valid")
}

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid test date")
}

/// In-memory sink for a scoped tracing subscriber.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().expect("lock log buffer").clone();
        String::from_utf8(bytes).expect("utf8 logs")
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("lock log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with an INFO-level fmt subscriber and returns everything it logged.
pub fn capture_logs<F: FnOnce()>(f: F) -> String {
    let sink = CapturedLogs::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    sink.contents()
}
