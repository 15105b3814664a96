//! Key context: the chord pad's view of the home-key data
//!
//! A `KeyContext` is the selected (key, scale) pair. Everything the shell
//! shows or plays is derived from it on demand: the transposed grid, the
//! transposed voicing table, fitted voicings and generated progressions.
//! Nothing is cached, and the static home-key data is never modified.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::chords::{home_grid, to_owned_grid, HOME_VOICINGS};
use crate::models::key::{Key, Scale};
use crate::models::pitch::semitone_offset;
use crate::progression::{
    degree_patterns, position_patterns, select_progression, PatternSelector, Progression,
};
use crate::transposition::{transpose_grid, transpose_voicing_table, VoicingTable};
use crate::voicing::{fit_voicing, RangeFitConfig};

/// Entry in the pattern picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternPreview {
    pub selector: PatternSelector,
    pub name: String,
    pub chords: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct KeyContext {
    pub key: Key,
    pub scale: Scale,
}

impl KeyContext {
    pub fn new(key: Key, scale: Scale) -> Self {
        Self { key, scale }
    }

    /// Offset from the home key (C) to the selected key
    pub fn semitones(&self) -> i32 {
        semitone_offset(Key::C.as_str(), self.key.as_str())
    }

    pub fn prefer_flat(&self) -> bool {
        self.key.prefer_flat()
    }

    /// Chord grid for the selected key and scale
    pub fn chord_grid(&self) -> Vec<Vec<String>> {
        let home = to_owned_grid(home_grid(self.scale));
        if self.semitones() == 0 {
            return home;
        }
        transpose_grid(&home, self.semitones(), self.prefer_flat())
    }

    /// Voicing table for the selected key
    ///
    /// In the home key the table is copied as written, matching the home
    /// grid's mixed spellings ("Bbmaj7" next to "F#7").
    pub fn voicing_table(&self) -> VoicingTable {
        if self.semitones() == 0 {
            return HOME_VOICINGS
                .iter()
                .map(|(chord, notes)| {
                    let notes: Vec<String> = notes.iter().map(|n| n.to_string()).collect();
                    (chord.to_string(), notes)
                })
                .collect();
        }
        transpose_voicing_table(HOME_VOICINGS.iter().copied(), self.semitones(), self.prefer_flat())
    }

    /// Fitted voicing for a chord of the active grid.
    ///
    /// `None` means the chord has no voicing and should not sound.
    pub fn voice_chord(&self, chord: &str, config: &RangeFitConfig) -> Option<Vec<String>> {
        let table = self.voicing_table();
        let Some(voicing) = table.get(chord) else {
            log::debug!("voice_chord: no voicing for '{}' in {} {}", chord, self.key, self.scale);
            return None;
        };
        Some(fit_voicing(voicing, config))
    }

    /// Distinct chords of the grid in reading order
    pub fn unique_chords(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.chord_grid()
            .into_iter()
            .flatten()
            .filter(|chord| seen.insert(chord.clone()))
            .collect()
    }

    pub fn generate_progression(
        &self,
        selector: PatternSelector,
        rng: &mut fastrand::Rng,
    ) -> Option<Progression> {
        select_progression(&self.chord_grid(), self.scale.family(), selector, rng)
    }

    /// Every pattern available to this scale, resolved against the grid
    pub fn pattern_previews(&self) -> Vec<PatternPreview> {
        let grid = self.chord_grid();
        let family = self.scale.family();
        let mut rng = fastrand::Rng::with_seed(0);
        let degree = (0..degree_patterns(family).len()).map(PatternSelector::Degree);
        let position = (0..position_patterns().len()).map(PatternSelector::Position);

        degree
            .chain(position)
            .filter_map(|selector| {
                let progression = select_progression(&grid, family, selector, &mut rng)?;
                Some(PatternPreview {
                    selector,
                    name: progression.pattern_name,
                    chords: progression.chords,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_key_is_identity() {
        let ctx = KeyContext::new(Key::C, Scale::Major);
        assert_eq!(ctx.semitones(), 0);
        assert_eq!(ctx.chord_grid(), to_owned_grid(home_grid(Scale::Major)));
    }

    #[test]
    fn test_d_major_grid() {
        let ctx = KeyContext::new(Key::D, Scale::Major);
        assert_eq!(ctx.semitones(), 2);
        let grid = ctx.chord_grid();
        assert_eq!(grid[0], vec!["Dmaj7", "Em7", "F#m7", "Gmaj7"]);
        assert_eq!(grid[3][2], "Cmaj7");
    }

    #[test]
    fn test_f_major_uses_flats() {
        let ctx = KeyContext::new(Key::F, Scale::Major);
        let grid = ctx.chord_grid();
        assert_eq!(grid[0], vec!["Fmaj7", "Gm7", "Am7", "Bbmaj7"]);
        assert_eq!(grid[1][0], "C7");
        assert_eq!(grid[3][2], "Ebmaj7");
    }

    #[test]
    fn test_every_grid_chord_is_voiced_in_every_key() {
        let config = RangeFitConfig::default();
        for key in Key::ALL {
            for scale in Scale::ALL {
                let ctx = KeyContext::new(key, scale);
                for chord in ctx.unique_chords() {
                    let voicing = ctx.voice_chord(&chord, &config);
                    assert!(voicing.is_some(), "{} missing in {} {}", chord, key, scale);
                }
            }
        }
    }

    #[test]
    fn test_home_key_keeps_flat_spellings() {
        let ctx = KeyContext::new(Key::C, Scale::Major);
        let table = ctx.voicing_table();
        assert_eq!(table["Bbmaj7"], vec!["Bb3", "D4", "F4", "A4"]);
        assert!(!table.contains_key("A#maj7"));
        assert!(ctx.voice_chord("Bbmaj7", &RangeFitConfig::default()).is_some());
    }

    #[test]
    fn test_missing_voicing_is_none() {
        let ctx = KeyContext::new(Key::G, Scale::Minor);
        assert!(ctx.voice_chord("Gmaj13", &RangeFitConfig::default()).is_none());
    }

    #[test]
    fn test_voice_chord_is_fitted() {
        let ctx = KeyContext::new(Key::A, Scale::Major);
        // Amaj7 is transposed to A4 and above, so the root drops an octave
        let voicing = ctx.voice_chord("Amaj7", &RangeFitConfig::default()).unwrap();
        assert_eq!(voicing, vec!["A3", "C#5", "E5", "G#5"]);
    }

    #[test]
    fn test_unique_chords_dedupes_in_order() {
        let ctx = KeyContext::new(Key::C, Scale::Major);
        let chords = ctx.unique_chords();
        assert_eq!(&chords[..4], &["Cmaj7", "Dm7", "Em7", "Fmaj7"]);
        assert_eq!(chords.iter().filter(|c| *c == "A7").count(), 1);
        assert_eq!(chords.len(), 18);
    }

    #[test]
    fn test_pattern_previews_cover_both_catalogs() {
        let ctx = KeyContext::new(Key::E, Scale::Minor);
        let previews = ctx.pattern_previews();
        let expected = degree_patterns(Scale::Minor.family()).len() + position_patterns().len();
        assert_eq!(previews.len(), expected);
        assert_eq!(previews[0].selector, PatternSelector::Degree(0));
        assert_eq!(previews[0].chords[0], "Em7");
    }

    #[test]
    fn test_dorian_uses_the_major_catalog() {
        let ctx = KeyContext::new(Key::C, Scale::Dorian);
        let mut rng = fastrand::Rng::with_seed(1);
        let prog = ctx.generate_progression(PatternSelector::Degree(11), &mut rng).unwrap();
        assert_eq!(prog.pattern_name, "Rhythm Changes (I-vi-ii-V)");
        assert_eq!(prog.chords, vec!["Cm7", "Dm7", "Dm7", "Cm7"]);
        assert!(ctx.generate_progression(PatternSelector::Degree(12), &mut rng).is_none());
        assert_eq!(ctx.pattern_previews().len(), 12 + position_patterns().len());
    }

    #[test]
    fn test_generate_progression_in_key() {
        let ctx = KeyContext::new(Key::Bb, Scale::Major);
        let mut rng = fastrand::Rng::with_seed(3);
        let prog = ctx.generate_progression(PatternSelector::Degree(5), &mut rng).unwrap();
        assert_eq!(prog.chords, vec!["Bbmaj7", "Ebmaj7", "Bbmaj7"]);
    }
}
