//! Note and voicing-table transposition
//!
//! Notes follow the grammar spelling + one octave digit ("C4", "F#3",
//! "Bb5"). Each note is shifted on its own and the octave is carried on
//! every wrap past B or below C:
//!
//!   "B4" + 2 → "C#5"
//!   "C4" - 1 → "B3"

use std::collections::HashMap;

use crate::models::pitch::{index_of, shift_index, spelling_for, split_spelling};
use crate::transposition::chord_symbol::transpose_chord_symbol;

/// Chord symbol → voicing
pub type VoicingTable = HashMap<String, Vec<String>>;

/// Transpose a single spelled note, carrying octaves.
///
/// Notes outside the grammar pass through unchanged.
pub fn transpose_note(note: &str, semitones: i32, prefer_flat: bool) -> String {
    let Some((name, octave)) = split_spelling(note) else {
        return note.to_string();
    };
    let (Some(idx), Some(octave)) = (index_of(name), parse_octave_digit(octave)) else {
        log::debug!("transpose_note: '{}' is not a spelled note, left as is", note);
        return note.to_string();
    };

    let (new_idx, carry) = shift_index(idx, semitones);
    format!("{}{}", spelling_for(new_idx, prefer_flat), octave as i64 + carry as i64)
}

fn parse_octave_digit(s: &str) -> Option<i32> {
    match s.as_bytes() {
        [d] if d.is_ascii_digit() => Some((d - b'0') as i32),
        _ => None,
    }
}

/// Transpose a voicing note by note
pub fn transpose_voicing<S: AsRef<str>>(
    notes: &[S],
    semitones: i32,
    prefer_flat: bool,
) -> Vec<String> {
    notes
        .iter()
        .map(|n| transpose_note(n.as_ref(), semitones, prefer_flat))
        .collect()
}

/// Transpose an ordered list of (chord symbol, voicing) entries into a fresh
/// table keyed by the transposed symbols.
///
/// If two entries land on the same symbol, the later entry wins.
pub fn transpose_voicing_table<'a, I, S>(
    entries: I,
    semitones: i32,
    prefer_flat: bool,
) -> VoicingTable
where
    I: IntoIterator<Item = (&'a str, &'a [S])>,
    S: AsRef<str> + 'a,
{
    let mut table = VoicingTable::new();
    for (chord, notes) in entries {
        let new_chord = transpose_chord_symbol(chord, semitones, prefer_flat);
        let new_notes = transpose_voicing(notes, semitones, prefer_flat);
        if table.insert(new_chord.clone(), new_notes).is_some() {
            log::debug!(
                "transpose_voicing_table: '{}' collided, keeping later entry '{}'",
                new_chord,
                chord
            );
        }
    }
    table
}
