// Per-tick logging module for asynchronous game state logging
//
// This module provides fire-and-forget async logging so file IO never
// blocks the tick loop. Each tick's agent statuses are written as one line
// of a JSONL file.

use log::error;
use serde::Serialize;
use std::sync::Arc;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::engine::TickReport;
use crate::types::AgentStatus;

/// Represents a single tick log entry
#[derive(Debug, Serialize)]
struct TickLogEntry {
    tick: u64,
    statuses: [AgentStatus; 4],
    timestamp: String,
}

/// Shared tick logger state
/// Uses Arc<Mutex<File>> to allow concurrent async writes from multiple tasks
#[derive(Clone)]
pub struct TickLogger {
    file: Arc<Mutex<Option<File>>>,
    enabled: bool,
}

impl TickLogger {
    /// Creates a new tick logger
    /// If enabled is true, initializes the log file (truncating if it exists)
    pub async fn new(enabled: bool, log_file_path: &str) -> Self {
        if !enabled {
            return TickLogger::disabled();
        }

        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_file_path)
            .await
        {
            Ok(file) => {
                log::info!("Tick logging enabled: {}", log_file_path);
                TickLogger {
                    file: Arc::new(Mutex::new(Some(file))),
                    enabled: true,
                }
            }
            Err(e) => {
                error!("Failed to create tick log file '{}': {}", log_file_path, e);
                TickLogger::disabled()
            }
        }
    }

    /// Creates a disabled tick logger (no-op)
    pub fn disabled() -> Self {
        TickLogger {
            file: Arc::new(Mutex::new(None)),
            enabled: false,
        }
    }

    /// Logs one tick's statuses asynchronously (fire-and-forget)
    /// This spawns a tokio task that writes to the file without blocking
    pub fn log_tick(&self, tick: u64, report: &TickReport) {
        if !self.enabled {
            return;
        }

        let file_handle = self.file.clone();
        let statuses = report.statuses;

        // Spawn fire-and-forget task
        tokio::spawn(async move {
            Self::log_tick_internal(file_handle, tick, statuses).await;
        });
    }

    /// Internal async function that performs the actual file write
    async fn log_tick_internal(
        file_handle: Arc<Mutex<Option<File>>>,
        tick: u64,
        statuses: [AgentStatus; 4],
    ) {
        let mut file_guard = file_handle.lock().await;

        if let Some(file) = file_guard.as_mut() {
            let entry = TickLogEntry {
                tick,
                statuses,
                timestamp: chrono::Utc::now().to_rfc3339(),
            };

            match serde_json::to_string(&entry) {
                Ok(json_line) => {
                    let line_with_newline = format!("{}\n", json_line);
                    if let Err(e) = file.write_all(line_with_newline.as_bytes()).await {
                        error!("Failed to write tick log entry: {}", e);
                    } else if let Err(e) = file.flush().await {
                        error!("Failed to flush tick log: {}", e);
                    }
                }
                Err(e) => {
                    error!("Failed to serialize tick log entry: {}", e);
                }
            }
        }
    }
}
