use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use notestamp::commands::{CommandId, CommandOutcome, NoteCommands};
use notestamp::config::load_or_default;
use notestamp::events::CommandLog;
use notestamp::naming::LocalClock;
use notestamp::prompt::TerminalDialog;
use notestamp::vault::{FileStore, LocalVault};

fn main() -> Result<()> {
    let args = CliArgs::parse()?;
    if args.list {
        for command in CommandId::all() {
            println!("{:<26} {}", command.id(), command.name());
        }
        return Ok(());
    }

    let command = args
        .command
        .as_deref()
        .context("Expected a command id. Run with --help for usage instructions.")?
        .parse::<CommandId>()?;

    let config = load_or_default()?;
    let vault_root = args
        .vault
        .or_else(|| config.vault.root.clone())
        .map_or_else(env::current_dir, Ok)
        .context("Unable to determine vault directory")?;
    let vault = LocalVault::open(&vault_root)?;
    let current = args
        .current
        .as_deref()
        .map(|name| vault.resolve(name))
        .transpose()?;

    let mut commands = NoteCommands::new(vault, LocalClock).with_config(&config);
    if let Ok(log) = CommandLog::for_workspace() {
        commands = commands.with_log(log);
    }

    let mut dialog = TerminalDialog::stdio();
    match commands.run(command, &mut dialog, current.as_ref())? {
        CommandOutcome::Created(note) => {
            println!("Created {}", vault_root.join(&note.path).display());
        }
        CommandOutcome::Cancelled => println!("Cancelled; nothing was written."),
    }
    Ok(())
}

struct CliArgs {
    vault: Option<PathBuf>,
    list: bool,
    command: Option<String>,
    current: Option<String>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut vault = None;
        let mut list = false;
        let mut positional = Vec::new();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--vault" => {
                    let value = args.next().context("Expected a directory after --vault")?;
                    vault = Some(PathBuf::from(value));
                }
                "--list" => list = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other if other.starts_with("--") => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
                other => positional.push(other.to_string()),
            }
        }
        if positional.len() > 2 {
            return Err(anyhow!(
                "Too many arguments. Run with --help for usage instructions."
            ));
        }
        let mut positional = positional.into_iter();
        Ok(Self {
            vault,
            list,
            command: positional.next(),
            current: positional.next(),
        })
    }
}

fn print_usage() {
    println!("notestamp: timestamped note commands");
    println!("Usage: notestamp [options] <command-id> [<current-note>]");
    println!("Options:");
    println!("  --vault <dir>   Vault directory (default: config vault.root, else cwd)");
    println!("  --list          List available commands");
    println!("Commands:");
    for command in CommandId::all() {
        println!("  {:<26} {}", command.id(), command.name());
    }
}
