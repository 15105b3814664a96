//! Chord-symbol transposition
//!
//! A chord symbol is a root spelling followed by an opaque quality suffix:
//!
//!   "F#m7b5" → root "F#", suffix "m7b5"
//!
//! Only the root moves. The suffix is copied verbatim, so "Cmaj7#11" up two
//! semitones is "Dmaj7#11" even though the suffix contains a sharp.

use crate::models::pitch::{index_of, shift_index, spelling_for, split_spelling};

/// Transpose a chord symbol's root by `semitones`.
///
/// Symbols that don't start with a recognised pitch spelling come back
/// unchanged.
pub fn transpose_chord_symbol(symbol: &str, semitones: i32, prefer_flat: bool) -> String {
    let Some((root, suffix)) = split_spelling(symbol) else {
        log::debug!(
            "transpose_chord_symbol: '{}' has no root spelling, left as is",
            symbol
        );
        return symbol.to_string();
    };
    let Some(idx) = index_of(root) else {
        log::debug!("transpose_chord_symbol: unknown root '{}' in '{}'", root, symbol);
        return symbol.to_string();
    };

    let (new_idx, _) = shift_index(idx, semitones);
    format!("{}{}", spelling_for(new_idx, prefer_flat), suffix)
}

/// Transpose every symbol of a grid, keeping its shape
pub fn transpose_grid<S: AsRef<str>>(
    grid: &[Vec<S>],
    semitones: i32,
    prefer_flat: bool,
) -> Vec<Vec<String>> {
    grid.iter()
        .map(|row| {
            row.iter()
                .map(|chord| transpose_chord_symbol(chord.as_ref(), semitones, prefer_flat))
                .collect()
        })
        .collect()
}
