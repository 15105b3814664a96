//! Pitch classes, spelling tables and spelled notes
//!
//! Every pitch class has two surface spellings: one from the sharp table and
//! one from the flat table. Both tables walk the same circular order, so the
//! index of a spelling is the pitch class regardless of which table it came
//! from.
//!
//! Example:
//!   index_of("C#") → Some(1)
//!   index_of("Db") → Some(1)
//!   spelling_for(1, true) → "Db"

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PadError;

/// Sharp-preferred spelling of each pitch class
pub const NOTES_SHARP: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat-preferred spelling of each pitch class
pub const NOTES_FLAT: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Resolve a pitch spelling to its 0-11 index.
///
/// The sharp table is checked first, then the flat table. Natural spellings
/// appear in both and resolve to the same index either way.
pub fn index_of(spelling: &str) -> Option<u8> {
    NOTES_SHARP
        .iter()
        .position(|&s| s == spelling)
        .or_else(|| NOTES_FLAT.iter().position(|&s| s == spelling))
        .map(|i| i as u8)
}

/// Spelling for a pitch class index (taken modulo 12)
pub fn spelling_for(index: u8, prefer_flat: bool) -> &'static str {
    let table = if prefer_flat { &NOTES_FLAT } else { &NOTES_SHARP };
    table[(index % 12) as usize]
}

/// Keys spelled with a flat, plus F, use the flat table
pub fn is_flat_key(key: &str) -> bool {
    key.contains('b') || key == "F"
}

/// Signed distance in semitones from one key spelling to another.
///
/// Falls back to 0 when either spelling is unknown, which leaves any pitch
/// it is applied to unchanged.
pub fn semitone_offset(from: &str, to: &str) -> i32 {
    match (index_of(from), index_of(to)) {
        (Some(f), Some(t)) => t as i32 - f as i32,
        _ => 0,
    }
}

/// Wrap any semitone sum into [0, 12), returning the octave carry.
///
/// `wrap_index(11 + 2)` → `(1, 1)`; `wrap_index(0 - 25)` → `(11, -3)`.
pub fn wrap_index(raw: i32) -> (u8, i32) {
    (raw.rem_euclid(12) as u8, raw.div_euclid(12))
}

/// Move a pitch class by any number of semitones, returning the new index
/// and the octave carry.
///
/// Works in `i64` so that offsets near `i32::MAX` or `i32::MIN` still wrap
/// exactly.
pub fn shift_index(index: u8, semitones: i32) -> (u8, i32) {
    let raw = index as i64 + semitones as i64;
    // |carry| <= (i32::MAX + 11) / 12, which always fits in i32
    (raw.rem_euclid(12) as u8, raw.div_euclid(12) as i32)
}

/// Split a leading pitch spelling off a string.
///
/// The spelling is one letter A-G optionally followed by `#` or `b`.
/// Returns `None` when the string does not start with a letter in A-G.
pub fn split_spelling(s: &str) -> Option<(&str, &str)> {
    let mut chars = s.char_indices();
    match chars.next() {
        Some((_, 'A'..='G')) => {}
        _ => return None,
    }
    let end = match chars.next() {
        Some((i, '#')) | Some((i, 'b')) => i + 1,
        _ => 1,
    };
    Some((&s[..end], &s[end..]))
}

/// Accidental preference carried by a spelled note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Spelling {
    Sharp,
    Flat,
}

impl Spelling {
    pub fn prefer_flat(self) -> bool {
        matches!(self, Spelling::Flat)
    }

    fn of(spelling: &str) -> Self {
        if spelling.ends_with('b') {
            Spelling::Flat
        } else {
            Spelling::Sharp
        }
    }
}

/// Lowest octave a parsed note may carry (MIDI 0 is C-1)
pub const MIN_OCTAVE: i32 = -1;

/// Highest octave a parsed note may carry
pub const MAX_OCTAVE: i32 = 9;

/// A pitch class at a specific octave, e.g. `F#4`
///
/// Absolute numbers follow the MIDI convention (C4 = 60), so octave -1 is the
/// lowest representable octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub pitch_class: u8,
    pub octave: i32,
    pub spelling: Spelling,
}

impl Note {
    pub fn new(pitch_class: u8, octave: i32, spelling: Spelling) -> Self {
        Self {
            pitch_class: pitch_class % 12,
            octave,
            spelling,
        }
    }

    /// Absolute semitone number (C4 = 60)
    ///
    /// Saturates instead of overflowing for octaves far outside
    /// [`MIN_OCTAVE`, `MAX_OCTAVE`].
    pub fn to_midi(&self) -> i32 {
        self.octave
            .saturating_add(1)
            .saturating_mul(12)
            .saturating_add(self.pitch_class as i32)
    }

    /// Build a note from an absolute semitone number
    pub fn from_midi(midi: i32, spelling: Spelling) -> Self {
        let (pitch_class, octave) = wrap_index(midi);
        Self::new(pitch_class, octave - 1, spelling)
    }

    pub fn name(&self) -> &'static str {
        spelling_for(self.pitch_class, self.spelling.prefer_flat())
    }

    /// Shift by semitones, carrying into the octave on each wrap
    pub fn transposed(&self, semitones: i32, spelling: Spelling) -> Self {
        Self::from_midi(self.to_midi().saturating_add(semitones), spelling)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name(), self.octave)
    }
}

impl FromStr for Note {
    type Err = PadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, octave) =
            split_spelling(s).ok_or_else(|| PadError::InvalidNote(s.to_string()))?;
        let pitch_class =
            index_of(name).ok_or_else(|| PadError::InvalidNote(s.to_string()))?;
        let octave: i32 = octave
            .parse()
            .ok()
            .filter(|o| (MIN_OCTAVE..=MAX_OCTAVE).contains(o))
            .ok_or_else(|| PadError::InvalidNote(s.to_string()))?;
        Ok(Note::new(pitch_class, octave, Spelling::of(name)))
    }
}
