//! The two note commands and their control flow.
//!
//! Each command computes a default name, shows a prompt pre-filled with it and,
//! only if the user confirms, asks the [`FileStore`] to create or duplicate the
//! note. The store call runs inside the prompt's completion callback.

mod registry;

pub use registry::CommandId;

use anyhow::{bail, Result};
use serde_json::json;

use crate::config::AppConfig;
use crate::events::{CommandEvent, CommandLog, CommandOutcomeKind};
use crate::naming::{new_note_name, next_version_name, Clock};
use crate::prompt::{Dialog, PromptDialog};
use crate::vault::{file_name, FileStore, NoteFile, DEFAULT_NOTE_EXTENSION};

/// Result of running a command to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The user confirmed and the note was written.
    Created(NoteFile),
    /// The prompt was dismissed; nothing was written.
    Cancelled,
}

impl CommandOutcome {
    pub fn created(&self) -> Option<&NoteFile> {
        match self {
            CommandOutcome::Created(note) => Some(note),
            CommandOutcome::Cancelled => None,
        }
    }
}

/// Runs note commands against a store with a given clock.
pub struct NoteCommands<S, C> {
    store: S,
    clock: C,
    note_extension: String,
    log: Option<CommandLog>,
}

impl<S: FileStore, C: Clock> NoteCommands<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            note_extension: DEFAULT_NOTE_EXTENSION.to_string(),
            log: None,
        }
    }

    /// Applies the vault section of the app config.
    pub fn with_config(mut self, config: &AppConfig) -> Self {
        self.note_extension = config.vault.note_extension.clone();
        self
    }

    pub fn with_log(mut self, log: CommandLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Dispatches `command`. `current` is the note open in the editor, if any.
    pub fn run<D: Dialog>(
        &mut self,
        command: CommandId,
        dialog: &mut D,
        current: Option<&NoteFile>,
    ) -> Result<CommandOutcome> {
        if command.needs_active_note() && current.is_none() {
            bail!("No active note: '{}' needs an open file", command.name());
        }
        match (command, current) {
            (CommandId::NewVersionOfFile, Some(current)) => {
                self.new_version_of_file(dialog, current)
            }
            _ => self.new_file(dialog),
        }
    }

    /// Prompts for a name starting with a fresh identifier and creates an
    /// empty note under it.
    pub fn new_file<D: Dialog>(&mut self, dialog: &mut D) -> Result<CommandOutcome> {
        let command = CommandId::NewFile;
        let initial = new_note_name(self.clock.now());
        let extension = self.note_extension.clone();
        let store = &mut self.store;
        let prompt = PromptDialog::new(command.prompt_title(), initial, |name: String| {
            store.create(&file_name(&name, &extension), b"")
        });
        let submitted = dialog.present(prompt)?;
        self.finish(command, None, submitted)
    }

    /// Prompts with the successor of `current`'s name and duplicates
    /// `current` under the confirmed name, keeping its extension.
    pub fn new_version_of_file<D: Dialog>(
        &mut self,
        dialog: &mut D,
        current: &NoteFile,
    ) -> Result<CommandOutcome> {
        let command = CommandId::NewVersionOfFile;
        let initial = next_version_name(&current.basename, self.clock.now());
        let store = &mut self.store;
        let prompt = PromptDialog::new(command.prompt_title(), initial, |name: String| {
            store.copy(current, &file_name(&name, &current.extension))
        });
        let submitted = dialog.present(prompt)?;
        self.finish(command, Some(current), submitted)
    }

    fn finish(
        &self,
        command: CommandId,
        source: Option<&NoteFile>,
        submitted: Option<Result<NoteFile>>,
    ) -> Result<CommandOutcome> {
        let source_path = source.map(|note| note.path.display().to_string());
        match submitted {
            None => {
                self.record(
                    command,
                    CommandOutcomeKind::Cancelled,
                    json!({ "source": source_path }),
                );
                Ok(CommandOutcome::Cancelled)
            }
            Some(Ok(note)) => {
                self.record(
                    command,
                    CommandOutcomeKind::Created,
                    json!({ "source": source_path, "target": note.path.display().to_string() }),
                );
                Ok(CommandOutcome::Created(note))
            }
            Some(Err(err)) => {
                self.record(
                    command,
                    CommandOutcomeKind::Failed,
                    json!({ "source": source_path, "error": format!("{err:#}") }),
                );
                Err(err.context(format!("'{}' failed", command.name())))
            }
        }
    }

    fn record(&self, command: CommandId, outcome: CommandOutcomeKind, details: serde_json::Value) {
        if let Some(log) = &self.log {
            let _ = log.append_event(&CommandEvent::new(command, outcome, details));
        }
    }
}
