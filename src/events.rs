//! Append-only JSONL record of command outcomes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::commands::CommandId;
use crate::config::workspace_root;

pub const EVENTS_FILE_NAME: &str = "events.jsonl";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommandOutcomeKind {
    Created,
    Cancelled,
    Failed,
}

/// One line of the event log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandEvent {
    pub event_id: Uuid,
    pub command: CommandId,
    pub outcome: CommandOutcomeKind,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub details: serde_json::Value,
}

impl CommandEvent {
    pub fn new(
        command: CommandId,
        outcome: CommandOutcomeKind,
        details: serde_json::Value,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            command,
            outcome,
            timestamp: Utc::now(),
            details,
        }
    }
}

/// Wraps the events file path.
#[derive(Debug, Clone)]
pub struct CommandLog {
    events_path: PathBuf,
}

impl CommandLog {
    pub fn at(events_path: impl Into<PathBuf>) -> Self {
        Self {
            events_path: events_path.into(),
        }
    }

    /// Log inside the workspace (`<workspace>/logs/events.jsonl`).
    pub fn for_workspace() -> Result<Self> {
        Ok(Self::at(workspace_root()?.join("logs").join(EVENTS_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.events_path
    }

    pub fn append_event(&self, event: &CommandEvent) -> Result<()> {
        if let Some(parent) = self.events_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log folder {:?}", parent))?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.events_path)
            .with_context(|| format!("Failed to open event log {:?}", self.events_path))?;
        file.write_all(serde_json::to_string(event)?.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }

    pub fn load_events(&self) -> Result<Vec<CommandEvent>> {
        if !self.events_path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.events_path)?;
        let mut events = Vec::new();
        for line in data.lines().filter(|l| !l.trim().is_empty()) {
            let event: CommandEvent = serde_json::from_str(line)
                .with_context(|| format!("Malformed event in {:?}", self.events_path))?;
            events.push(event);
        }
        Ok(events)
    }

    pub fn load_events_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<CommandEvent>> {
        Ok(self
            .load_events()?
            .into_iter()
            .filter(|event| event.timestamp >= cutoff)
            .collect())
    }
}
