use chrono::{NaiveDate, NaiveDateTime};
use notestamp::events::{CommandLog, EVENTS_FILE_NAME};
use notestamp::naming::FixedClock;
use notestamp::vault::LocalVault;
use notestamp::NoteCommands;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct IntegrationHarness {
    workspace: TempDir,
}

impl IntegrationHarness {
    pub fn new() -> Self {
        let workspace = TempDir::new().expect("failed to create temp workspace");
        Self { workspace }
    }

    pub fn workspace_path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn vault_path(&self) -> PathBuf {
        self.workspace.path().join("vault")
    }

    pub fn vault(&self) -> LocalVault {
        LocalVault::open(self.vault_path()).expect("failed to open vault for tests")
    }

    pub fn log(&self) -> CommandLog {
        CommandLog::at(self.workspace.path().join("logs").join(EVENTS_FILE_NAME))
    }

    /// Commands over this harness's vault, stamped at `now`, logging events.
    pub fn commands(&self, now: NaiveDateTime) -> NoteCommands<LocalVault, FixedClock> {
        NoteCommands::new(self.vault(), FixedClock(now)).with_log(self.log())
    }
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid test timestamp")
}

mod config_roundtrip;
mod new_file_flow;
pub mod support;
