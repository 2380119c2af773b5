//! Successor-name derivation for versioned notes.
//!
//! Note names look like `2024-05-02 1407 - Topic v2 - Title`, or more precisely
//! `<identifier>[ - <word>][ v<N>] - <rest>`. Deriving the next version means
//! dropping the `+` marker, stamping a fresh identifier and bumping the
//! version tag. Each step is exposed on its own so it can be exercised in
//! isolation.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Leading marker some notes carry to flag them as pinned/primary.
pub const MARKER: char = '+';

/// `chrono` format string for the identifier prefix.
pub const NOTE_ID_FORMAT: &str = "%Y-%m-%d %H%M";

/// Separator between the identifier block and the note title.
pub const SEPARATOR: &str = " - ";

/// Literal inserted before the version digits when a name has no tag yet.
const VERSION_LEAD: &str = " v";

const FIRST_VERSION: u64 = 1;

// Digit and word classes are spelled out so non-ASCII digits never count.
static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{4}").expect("identifier regex"));

static VERSIONED_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<prefix>[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{4}(?: - [A-Za-z0-9_]+)?)(?:(?P<lead> v)(?P<version>[0-9]+))?(?P<sep> - )",
    )
    .expect("versioned prefix regex")
});

/// Renders `now` as a note identifier (`YYYY-MM-DD HHMM`).
pub fn note_id(now: NaiveDateTime) -> String {
    now.format(NOTE_ID_FORMAT).to_string()
}

/// Default name offered when creating a brand new note.
pub fn new_note_name(now: NaiveDateTime) -> String {
    format!("{}{}", note_id(now), SEPARATOR)
}

/// Computes the proposed name for a new version of `previous_name`.
///
/// Never fails: names that do not follow the convention come back unchanged,
/// apart from losing a leading marker.
pub fn next_version_name(previous_name: &str, now: NaiveDateTime) -> String {
    let name = strip_marker(previous_name);
    let name = refresh_identifier(name, now);
    bump_version(&name)
}

/// Drops a single leading [`MARKER`] if present.
pub fn strip_marker(name: &str) -> &str {
    name.strip_prefix(MARKER).unwrap_or(name)
}

/// Replaces a leading identifier with the identifier for `now`.
pub fn refresh_identifier(name: &str, now: NaiveDateTime) -> String {
    match IDENTIFIER.find(name) {
        Some(found) => format!("{}{}", note_id(now), &name[found.end()..]),
        None => name.to_string(),
    }
}

/// Increments the version tag after the identifier, inserting ` v2` when the
/// name has a separator but no tag yet.
pub fn bump_version(name: &str) -> String {
    VERSIONED_PREFIX
        .replace(name, |caps: &Captures<'_>| {
            let lead = caps.name("lead").map_or(VERSION_LEAD, |m| m.as_str());
            let next = next_version(caps.name("version").map(|m| m.as_str()));
            format!("{}{}{}{}", &caps["prefix"], lead, next, &caps["sep"])
        })
        .into_owned()
}

/// Missing digits count as version 1. Digits that overflow `u64`, or whose
/// successor would, are also treated as version 1.
fn next_version(digits: Option<&str>) -> u64 {
    let current = match digits {
        Some(digits) => digits.parse::<u64>().unwrap_or(FIRST_VERSION),
        None => FIRST_VERSION,
    };
    current.checked_add(1).unwrap_or(FIRST_VERSION + 1)
}
