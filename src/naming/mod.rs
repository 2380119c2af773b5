pub mod clock;
pub mod version;

pub use clock::{Clock, FixedClock, LocalClock};
pub use version::{
    bump_version, new_note_name, next_version_name, note_id, refresh_identifier, strip_marker,
    MARKER, NOTE_ID_FORMAT, SEPARATOR,
};
