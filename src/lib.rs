pub mod commands;
pub mod config;
pub mod events;
pub mod naming;
pub mod prompt;
pub mod vault;

// Re-export commonly used types for convenience.
pub use commands::{CommandId, CommandOutcome, NoteCommands};
pub use config::AppConfig;
pub use naming::{next_version_name, note_id};
pub use prompt::{Dialog, PromptDialog};
pub use vault::{FileStore, LocalVault, NoteFile};
