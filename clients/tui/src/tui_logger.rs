use log::{Log, Metadata, Record};
use std::sync::{Arc, Mutex};

/// Number of log lines kept for the on-screen pane.
const BACKLOG: usize = 100;

/// `log` sink that collects records into a shared buffer so the UI can
/// render them in a pane instead of writing over the terminal.
pub struct TuiLogger {
    buffer: Arc<Mutex<Vec<String>>>,
}

impl TuiLogger {
    pub fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        (
            TuiLogger {
                buffer: buffer.clone(),
            },
            buffer,
        )
    }
}

impl Log for TuiLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let msg = format!("{} {}", record.level(), record.args());
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(msg);
            if buffer.len() > BACKLOG {
                buffer.remove(0);
            }
        }
    }

    fn flush(&self) {}
}
