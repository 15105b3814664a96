// Key transposition scenarios across the whole chord pad
//
// Drives the engine the way the shell does: pick a key and scale, read the
// transposed grid, and voice chords from it.

use chordpad_wasm::chords::{home_grid, HOME_VOICINGS};
use chordpad_wasm::models::pitch::{index_of, spelling_for, split_spelling, NOTES_FLAT, NOTES_SHARP};
use chordpad_wasm::transposition::{
    transpose_chord_symbol, transpose_grid, transpose_voicing, transpose_voicing_table,
};
use chordpad_wasm::{Key, KeyContext, Scale};

/// Pitch class of a chord symbol's root
fn root_class(symbol: &str) -> Option<u8> {
    split_spelling(symbol).and_then(|(root, _)| index_of(root))
}

#[test]
fn test_spelling_tables_round_trip() {
    for s in NOTES_SHARP.iter().chain(NOTES_FLAT.iter()) {
        let idx = index_of(s).unwrap();
        assert_eq!(index_of(spelling_for(idx, false)), Some(idx));
        assert_eq!(index_of(spelling_for(idx, true)), Some(idx));
    }
}

#[test]
fn test_c_major_to_d() {
    let ctx = KeyContext::new(Key::D, Scale::Major);
    assert_eq!(ctx.semitones(), 2);
    assert!(!ctx.prefer_flat());

    assert_eq!(transpose_chord_symbol("Cmaj7", ctx.semitones(), ctx.prefer_flat()), "Dmaj7");
    assert_eq!(transpose_chord_symbol("Dm7", ctx.semitones(), ctx.prefer_flat()), "Em7");
    assert_eq!(
        transpose_voicing(&["C4", "E4", "G4", "B4"], ctx.semitones(), ctx.prefer_flat()),
        vec!["D4", "F#4", "A4", "C#5"]
    );

    let table = ctx.voicing_table();
    assert_eq!(table["Dmaj7"], vec!["D4", "F#4", "A4", "C#5"]);
}

#[test]
fn test_c_major_to_f_prefers_flats() {
    let ctx = KeyContext::new(Key::F, Scale::Major);
    assert_eq!(ctx.semitones(), 5);
    assert!(ctx.prefer_flat());

    assert_eq!(transpose_chord_symbol("G7", 5, true), "C7");
    assert_eq!(transpose_chord_symbol("F7", 5, true), "Bb7");

    let grid = ctx.chord_grid();
    for chord in grid.iter().flatten() {
        let (root, _) = split_spelling(chord).unwrap();
        assert!(!root.contains('#'), "{} should be flat-spelled in F", chord);
    }
}

#[test]
fn test_octave_periodicity() {
    for row in home_grid(Scale::Lydian) {
        for chord in row.iter() {
            for k in [-3, -1, 1, 2, 5] {
                let moved = transpose_chord_symbol(chord, 12 * k, false);
                assert_eq!(root_class(&moved), root_class(chord), "{} by {} octaves", chord, k);
            }
        }
    }
}

#[test]
fn test_inverse_transposition() {
    for (chord, _) in HOME_VOICINGS {
        for n in -14..=14 {
            let there = transpose_chord_symbol(chord, n, n % 2 == 0);
            let back = transpose_chord_symbol(&there, -n, false);
            assert_eq!(root_class(&back), root_class(chord));
            assert_eq!(split_spelling(&back).unwrap().1, split_spelling(chord).unwrap().1);
        }
    }
}

#[test]
fn test_grid_shape_preserved_for_all_keys() {
    for scale in Scale::ALL {
        let home: Vec<Vec<&str>> = home_grid(scale).iter().map(|row| row.to_vec()).collect();
        for key in Key::ALL {
            let ctx = KeyContext::new(key, scale);
            let grid = transpose_grid(&home, ctx.semitones(), ctx.prefer_flat());
            assert_eq!(grid.len(), home.len());
            for (a, b) in grid.iter().zip(&home) {
                assert_eq!(a.len(), b.len());
            }
            if ctx.semitones() != 0 {
                assert_eq!(grid, ctx.chord_grid());
            }
        }
    }
}

#[test]
fn test_home_data_is_not_mutated() {
    let before: Vec<(String, Vec<String>)> = HOME_VOICINGS
        .iter()
        .map(|(c, v)| (c.to_string(), v.iter().map(|n| n.to_string()).collect()))
        .collect();
    for key in Key::ALL {
        let _ = KeyContext::new(key, Scale::Minor).voicing_table();
        let _ = transpose_voicing_table(HOME_VOICINGS.iter().copied(), 7, true);
    }
    let after: Vec<(String, Vec<String>)> = HOME_VOICINGS
        .iter()
        .map(|(c, v)| (c.to_string(), v.iter().map(|n| n.to_string()).collect()))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_enharmonic_keys_share_pitches() {
    let sharp = KeyContext::new(Key::Cs, Scale::Dorian).chord_grid();
    let flat = KeyContext::new(Key::Db, Scale::Dorian).chord_grid();
    assert_eq!(sharp[0][0], "C#m7");
    assert_eq!(flat[0][0], "Dbm7");
    for (a, b) in sharp.iter().flatten().zip(flat.iter().flatten()) {
        assert_eq!(root_class(a), root_class(b));
    }
}
