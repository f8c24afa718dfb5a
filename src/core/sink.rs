//! Destinations for saved charter snapshots

use anyhow::{Context, Result};

use super::charter::Charter;

/// Receives a charter snapshot every time the user saves
pub trait CharterSink {
    /// Sink name, used in log messages
    fn name(&self) -> &str;

    /// Hand off a snapshot of the charter
    fn persist(&mut self, charter: &Charter) -> Result<()>;
}

/// Writes each snapshot to the log as JSON
#[derive(Debug, Default)]
pub struct LogSink {
    saved: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of snapshots written so far
    #[allow(dead_code)]
    pub fn saved(&self) -> usize {
        self.saved
    }
}

impl CharterSink for LogSink {
    fn name(&self) -> &str {
        "log"
    }

    fn persist(&mut self, charter: &Charter) -> Result<()> {
        let snapshot =
            serde_json::to_string_pretty(charter).context("Failed to serialize charter")?;
        self.saved += 1;
        tracing::info!("Saving charter:\n{}", snapshot);
        Ok(())
    }
}
