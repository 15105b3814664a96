//! Home-key (C) chord grids, one per scale mode
//!
//! Rows 0-2 hold four chords each; row 0 is the diatonic row that degree
//! patterns index into. Row 3 holds eight colour chords shared in spirit
//! across all modes.

use crate::models::key::Scale;

/// A chord grid borrowed from static data
pub type StaticGrid = &'static [&'static [&'static str]];

const MAJOR: StaticGrid = &[
    &["Cmaj7", "Dm7", "Em7", "Fmaj7"],
    &["G7", "Am7", "Bm7b5", "E7"],
    &["F#m7b5", "A7", "D7", "Gmaj7"],
    &["A7", "E7", "Bbmaj7", "F#7", "Gsus4", "Cadd9", "Cmaj9", "Am9"],
];

const MINOR: StaticGrid = &[
    &["Cm7", "Dm7b5", "Ebmaj7", "Fm7"],
    &["Gm7", "Abmaj7", "Bb7", "Eb7"],
    &["F7", "Ab7", "Dbmaj7", "G7"],
    &["A7", "E7", "Bbmaj7", "F#7", "Gsus4", "Cadd9", "Cm9", "Gm9"],
];

const DORIAN: StaticGrid = &[
    &["Cm7", "Dm7", "Ebmaj7", "F7"],
    &["Gm7", "Am7b5", "Bbmaj7", "D7"],
    &["F#m7b5", "A7", "D7", "Gm7"],
    &["A7", "E7", "Bbmaj7", "F#7", "Gsus4", "Cadd9", "Dm9", "G13"],
];

const MIXOLYDIAN: StaticGrid = &[
    &["C7", "Dm7", "Em7b5", "Fmaj7"],
    &["Gm7", "Am7", "Bbmaj7", "D7"],
    &["F#m7b5", "A7", "D7", "G7"],
    &["A7", "E7", "Bbmaj7", "F#7", "Gsus4", "Cadd9", "C9", "G9"],
];

const LYDIAN: StaticGrid = &[
    &["Cmaj7#11", "D7", "E7", "F#7"],
    &["G7", "A7", "Bm7b5", "E7"],
    &["F#m7b5", "A7", "D7", "Gmaj7"],
    &["A7", "E7", "Bbmaj7", "F#7", "Gsus4", "Cadd9", "Fmaj9", "Emaj7"],
];

/// Static home-key grid for a scale
pub fn home_grid(scale: Scale) -> StaticGrid {
    match scale {
        Scale::Major => MAJOR,
        Scale::Minor => MINOR,
        Scale::Dorian => DORIAN,
        Scale::Mixolydian => MIXOLYDIAN,
        Scale::Lydian => LYDIAN,
    }
}

/// Owned copy of a static grid
pub fn to_owned_grid(grid: StaticGrid) -> Vec<Vec<String>> {
    grid.iter()
        .map(|row| row.iter().map(|chord| chord.to_string()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_grid_has_expected_shape() {
        for scale in Scale::ALL {
            let grid = home_grid(scale);
            let lengths: Vec<usize> = grid.iter().map(|row| row.len()).collect();
            assert_eq!(lengths, vec![4, 4, 4, 8], "{}", scale);
        }
    }

    #[test]
    fn test_tonic_chord_leads_row_zero() {
        assert_eq!(home_grid(Scale::Major)[0][0], "Cmaj7");
        assert_eq!(home_grid(Scale::Minor)[0][0], "Cm7");
        assert_eq!(home_grid(Scale::Lydian)[0][0], "Cmaj7#11");
    }

    #[test]
    fn test_to_owned_grid() {
        let owned = to_owned_grid(home_grid(Scale::Dorian));
        assert_eq!(owned[3][7], "G13");
        assert_eq!(owned.len(), 4);
    }
}
