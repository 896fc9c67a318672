use crate::domain::ports::RunLog;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("delivery_filter=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("delivery_filter=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Formats one run-log line: `<local time> - <message>`.
pub fn format_log_line(message: &str) -> String {
    format!("{} - {}", Local::now().format(LOG_TIMESTAMP_FORMAT), message)
}

/// Appends run events to a plain text file.
///
/// The file is opened and closed on every call, so anyone tailing it sees
/// each line as soon as `log` returns.
#[derive(Debug, Clone)]
pub struct FileRunLog {
    path: PathBuf,
}

impl FileRunLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)
    }
}

impl RunLog for FileRunLog {
    fn log(&self, message: &str) {
        tracing::debug!("{}", message);
        if let Err(e) = self.append(&format_log_line(message)) {
            tracing::warn!("Could not append to log file {}: {}", self.path.display(), e);
        }
    }
}

/// Keeps run events in memory. Handy for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryRunLog {
    messages: Mutex<Vec<String>>,
}

impl MemoryRunLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    pub fn count_containing(&self, needle: &str) -> usize {
        self.messages()
            .iter()
            .filter(|m| m.contains(needle))
            .count()
    }
}

impl RunLog for MemoryRunLog {
    fn log(&self, message: &str) {
        tracing::debug!("{}", message);
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
