//! Optional append-only event log, one JSON object per line.
//!
//! Enabled by pointing `ORDERS_TO_STRUCT_LOG` at a file. Logging failures are
//! swallowed; they must never change what lands on stdout.

use crate::emitter::TranscodeSummary;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

pub const LOG_ENV_VAR: &str = "ORDERS_TO_STRUCT_LOG";

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogEvent<'a> {
    Started { input: &'a str },
    OrderOpened { order: u8, line: usize },
    OrderClosed { line: usize },
    Warning { message: String },
    Failed { message: String },
    Finished { summary: TranscodeSummary },
}

#[derive(Serialize)]
struct Entry<'a> {
    ts_ms: u128,
    #[serde(flatten)]
    event: &'a LogEvent<'a>,
}

#[derive(Default)]
pub struct EventLog {
    file: Option<File>,
}

impl EventLog {
    /// A log that drops every event.
    pub fn disabled() -> Self {
        Self { file: None }
    }

    pub fn from_env() -> Self {
        match std::env::var_os(LOG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::open(Path::new(&path)),
            _ => Self::disabled(),
        }
    }

    pub fn open(path: &Path) -> Self {
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok();
        Self { file }
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    pub fn record(&mut self, event: &LogEvent<'_>) {
        let Some(ref mut f) = self.file else {
            return;
        };

        let ts_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();

        if let Ok(json) = serde_json::to_string(&Entry { ts_ms, event }) {
            writeln!(f, "{}", json).ok();
            f.flush().ok();
        }
    }
}
