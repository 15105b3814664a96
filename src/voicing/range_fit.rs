//! Range-fitting of chord voicings
//!
//! After transposition a voicing can sit anywhere from very low to very
//! high. Fitting moves every note by whole octaves so that:
//! - the root is not excessively high
//! - upper tones sit at or above the root
//! - everything lands inside a fixed playable window
//! - adjacent upper tones don't collapse into near-unisons
//!
//! Pitch classes are never changed, and the output has exactly as many
//! notes as the input.

use serde::{Deserialize, Serialize};

use crate::models::pitch::{Note, MAX_OCTAVE, MIN_OCTAVE};

const OCTAVE: i32 = 12;

/// Tunable bounds for range-fitting, in absolute semitones (C4 = 60)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RangeFitConfig {
    /// Lowest allowed note (inclusive)
    pub min_note: i32,
    /// Highest allowed note (inclusive)
    pub max_note: i32,
    /// Roots at or above this drop an octave
    pub root_ceiling: i32,
    /// Upper tones this close to the previous tone are declumped
    pub clump_window: i32,
}

impl Default for RangeFitConfig {
    fn default() -> Self {
        Self {
            min_note: 48,     // C3
            max_note: 88,     // E6
            root_ceiling: 68, // Ab4
            clump_window: 2,
        }
    }
}

impl RangeFitConfig {
    /// The window must hold at least two octaves for the declump
    /// correction to stay in range.
    pub fn is_valid(&self) -> bool {
        self.max_note as i64 - self.min_note as i64 >= 2 * OCTAVE as i64
    }

    fn clamp(&self, n: i32) -> i32 {
        if n > self.max_note {
            lower_to_at_most(n, self.max_note)
        } else {
            raise_to_at_least(n, self.min_note)
        }
    }
}

/// Absolute number after pulling the octave into the parseable range.
///
/// Only whole octaves move, so the pitch class is kept.
fn bounded_midi(note: &Note) -> i32 {
    let octave = note.octave.clamp(MIN_OCTAVE, MAX_OCTAVE);
    Note::new(note.pitch_class, octave, note.spelling).to_midi()
}

/// Smallest octave transposition of `n` that is `>= floor`
fn raise_to_at_least(n: i32, floor: i32) -> i32 {
    let gap = floor as i64 - n as i64;
    if gap <= 0 {
        return n;
    }
    let octaves = (gap + OCTAVE as i64 - 1) / OCTAVE as i64;
    (n as i64 + octaves * OCTAVE as i64) as i32
}

/// Largest octave transposition of `n` that is `<= ceiling`
fn lower_to_at_most(n: i32, ceiling: i32) -> i32 {
    let gap = n as i64 - ceiling as i64;
    if gap <= 0 {
        return n;
    }
    let octaves = (gap + OCTAVE as i64 - 1) / OCTAVE as i64;
    (n as i64 - octaves * OCTAVE as i64) as i32
}

/// Fit a voicing into the playable window.
///
/// An invalid config falls back to the default bounds.
pub fn fit_chord_range(notes: &[Note], config: &RangeFitConfig) -> Vec<Note> {
    let config = if config.is_valid() {
        *config
    } else {
        log::warn!(
            "fit_chord_range: window {:?} is narrower than two octaves, using defaults",
            config
        );
        RangeFitConfig::default()
    };

    let Some((root, upper)) = notes.split_first() else {
        return Vec::new();
    };

    let mut root_abs = bounded_midi(root);
    if root_abs >= config.root_ceiling {
        root_abs -= OCTAVE;
    }
    let root_abs = config.clamp(root_abs);

    let mut fitted = Vec::with_capacity(notes.len());
    fitted.push(root_abs);

    for note in upper {
        let n = raise_to_at_least(bounded_midi(note), root_abs);
        fitted.push(config.clamp(n));
    }

    // The root-to-second gap is left alone
    for i in 2..fitted.len() {
        if (fitted[i] - fitted[i - 1]).abs() <= config.clump_window {
            fitted[i] = fitted[i].saturating_add(OCTAVE);
            if fitted[i] > config.max_note {
                fitted[i] -= 2 * OCTAVE;
            }
        }
    }

    fitted
        .into_iter()
        .zip(notes)
        .map(|(abs, source)| Note::from_midi(abs, source.spelling))
        .collect()
}

/// String-level range-fit.
///
/// If any entry is not a parseable note the voicing is returned unchanged.
pub fn fit_voicing<S: AsRef<str>>(notes: &[S], config: &RangeFitConfig) -> Vec<String> {
    let parsed: Result<Vec<Note>, _> = notes.iter().map(|n| n.as_ref().parse::<Note>()).collect();
    match parsed {
        Ok(parsed) => fit_chord_range(&parsed, config)
            .iter()
            .map(|n| n.to_string())
            .collect(),
        Err(e) => {
            log::debug!("fit_voicing: {}, voicing left as is", e);
            notes.iter().map(|n| n.as_ref().to_string()).collect()
        }
    }
}
