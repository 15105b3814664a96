//! Error types for the chord pad boundary
//!
//! The transposition, range-fitting and progression engines are total and
//! never fail. These errors only arise where strings from the shell are
//! turned into typed values (key and scale names, notes, saved sessions).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PadError {
    /// Key spelling is not one of the 17 selectable keys
    #[error(
        "Invalid key: '{0}'. Expected one of: C, C#, Db, D, D#, Eb, E, F, F#, Gb, G, G#, Ab, A, A#, Bb, B"
    )]
    InvalidKey(String),

    #[error("Invalid scale: '{0}'. Expected one of: major, minor, dorian, mixolydian, lydian")]
    InvalidScale(String),

    #[error("Invalid note: '{0}'")]
    InvalidNote(String),

    /// Saved session text is not valid JSON
    #[error("Session format error: {0}")]
    SessionFormat(String),
}

impl From<serde_json::Error> for PadError {
    fn from(e: serde_json::Error) -> Self {
        PadError::SessionFormat(e.to_string())
    }
}
