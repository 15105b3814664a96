//! Home-key voicing table
//!
//! Each chord symbol used by any home grid maps to a concrete voicing whose
//! first note is the root. Entries are kept in a fixed order so that bulk
//! transposition resolves symbol collisions the same way on every run.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Ordered (chord symbol, voicing) entries
pub type StaticVoicings = &'static [(&'static str, &'static [&'static str])];

pub const HOME_VOICINGS: StaticVoicings = &[
    ("Cmaj7", &["C4", "E4", "G4", "B4"]),
    ("Dm7", &["D4", "F4", "A4", "C5"]),
    ("Em7", &["E4", "G4", "B4", "D5"]),
    ("Fmaj7", &["F4", "A4", "C5", "E5"]),
    ("G7", &["G3", "B3", "D4", "F4"]),
    ("Am7", &["A3", "C4", "E4", "G4"]),
    ("Bm7b5", &["B3", "D4", "F4", "A4"]),
    ("C7", &["C3", "E3", "G3", "Bb3"]),
    ("Em7b5", &["E3", "G3", "Bb3", "D4"]),
    ("Am7b5", &["A3", "C4", "Eb4", "G4"]),
    ("E7", &["E3", "G#3", "B3", "D4"]),
    ("F#m7b5", &["F#3", "A3", "C4", "E4"]),
    ("A7", &["A3", "C#4", "E4", "G4"]),
    ("D7", &["D4", "F#4", "A4", "C5"]),
    ("Gmaj7", &["G3", "B3", "D4", "F#4"]),
    ("Cm7", &["C4", "Eb4", "G4", "Bb4"]),
    ("Dm7b5", &["D4", "F4", "Ab4", "C5"]),
    ("Ebmaj7", &["Eb4", "G4", "Bb4", "D5"]),
    ("Fm7", &["F4", "Ab4", "C5", "Eb5"]),
    ("Gm7", &["G3", "Bb3", "D4", "F4"]),
    ("Abmaj7", &["Ab3", "C4", "Eb4", "G4"]),
    ("Bb7", &["Bb3", "D4", "F4", "Ab4"]),
    ("Eb7", &["Eb4", "G4", "Bb4", "Db5"]),
    ("F7", &["F4", "A4", "C5", "Eb5"]),
    ("Ab7", &["Ab3", "C4", "Eb4", "Gb4"]),
    ("Dbmaj7", &["Db4", "F4", "Ab4", "C5"]),
    ("Bbmaj7", &["Bb3", "D4", "F4", "A4"]),
    ("F#7", &["F#3", "A#3", "C#4", "E4"]),
    ("Gsus4", &["G3", "C4", "D4", "G4"]),
    ("Cadd9", &["C4", "E4", "G4", "D5"]),
    ("Cmaj9", &["C4", "E4", "G4", "B4", "D5"]),
    ("Am9", &["A3", "C4", "E4", "G4", "B4"]),
    ("Cm9", &["C4", "Eb4", "G4", "Bb4", "D5"]),
    ("Gm9", &["G3", "Bb3", "D4", "F4", "A4"]),
    ("Dm9", &["D4", "F4", "A4", "C5", "E5"]),
    ("G13", &["G3", "B3", "D4", "F4", "E5"]),
    ("C9", &["C4", "E4", "G4", "Bb4", "D5"]),
    ("G9", &["G3", "B3", "D4", "F4", "A4"]),
    ("Fmaj9", &["F4", "A4", "C5", "E5", "G5"]),
    ("Emaj7", &["E3", "G#3", "B3", "D#4"]),
    ("Cmaj7#11", &["C4", "E4", "G4", "B4", "F#5"]),
];

lazy_static! {
    static ref HOME_LOOKUP: HashMap<&'static str, &'static [&'static str]> =
        HOME_VOICINGS.iter().copied().collect();
}

/// Home-key voicing for a chord symbol, if the table has one
pub fn home_voicing(chord: &str) -> Option<&'static [&'static str]> {
    HOME_LOOKUP.get(chord).copied()
}
