use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

/// The actions exposed to the host's command palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    NewFile,
    NewVersionOfFile,
}

impl CommandId {
    pub const fn all() -> [CommandId; 2] {
        [CommandId::NewFile, CommandId::NewVersionOfFile]
    }

    /// Stable identifier used for registration and on the command line.
    pub const fn id(self) -> &'static str {
        match self {
            CommandId::NewFile => "new-file",
            CommandId::NewVersionOfFile => "new-version-of-the-file",
        }
    }

    /// Palette label.
    pub const fn name(self) -> &'static str {
        match self {
            CommandId::NewFile => "Create a new file",
            CommandId::NewVersionOfFile => "Create the new version of the file",
        }
    }

    /// Heading shown on the prompt the command opens.
    pub const fn prompt_title(self) -> &'static str {
        match self {
            CommandId::NewFile => "File name:",
            CommandId::NewVersionOfFile => "New version name:",
        }
    }

    pub const fn needs_active_note(self) -> bool {
        matches!(self, CommandId::NewVersionOfFile)
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CommandId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandId::all()
            .into_iter()
            .find(|command| command.id() == s)
            .ok_or_else(|| anyhow!("Unknown command '{s}'"))
    }
}
