//! Progression generation from degree and position patterns
//!
//! Generation is a pure function of the active (already transposed) grid
//! and a pattern. Out-of-range indices never fail: degrees wrap around row
//! 0, and invalid positions are dropped.

use serde::{Deserialize, Serialize};

use crate::models::key::ScaleFamily;
use crate::progression::patterns::{degree_patterns, position_patterns};

/// Chance, out of four, that a random pick uses the degree catalog
const DEGREE_ODDS_OUT_OF_FOUR: u8 = 3;

/// Map degree indices through row 0, wrapping by row length.
///
/// Missing or empty symbols are left out. An empty grid or an empty row 0
/// yields an empty sequence.
pub fn generate_from_degrees<S: AsRef<str>>(grid: &[Vec<S>], degrees: &[usize]) -> Vec<String> {
    let Some(row) = grid.first().filter(|row| !row.is_empty()) else {
        return Vec::new();
    };
    degrees
        .iter()
        .filter_map(|&d| row.get(d % row.len()))
        .map(|chord| chord.as_ref())
        .filter(|chord| !chord.is_empty())
        .map(str::to_string)
        .collect()
}

/// Look up explicit (row, column) positions, keeping valid ones in order
pub fn generate_from_positions<S: AsRef<str>>(
    grid: &[Vec<S>],
    positions: &[(usize, usize)],
) -> Vec<String> {
    positions
        .iter()
        .filter_map(|&(row, col)| grid.get(row).and_then(|r| r.get(col)))
        .map(|chord| chord.as_ref().to_string())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Degree,
    Position,
}

/// How the shell asks for a progression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "lowercase")]
pub enum PatternSelector {
    /// Pattern at this index of the scale family's degree catalog
    Degree(usize),
    /// Pattern at this index of the shared position catalog
    Position(usize),
    Random,
}

/// A generated chord sequence and the pattern it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    pub pattern_name: String,
    pub kind: PatternKind,
    pub chords: Vec<String>,
}

/// Resolve a selector against the active grid.
///
/// Returns `None` for an explicit index past the end of its catalog, or when
/// the chosen pattern produces no chords.
pub fn select_progression<S: AsRef<str>>(
    grid: &[Vec<S>],
    family: ScaleFamily,
    selector: PatternSelector,
    rng: &mut fastrand::Rng,
) -> Option<Progression> {
    let (kind, index) = match selector {
        PatternSelector::Degree(index) => (PatternKind::Degree, index),
        PatternSelector::Position(index) => (PatternKind::Position, index),
        PatternSelector::Random => random_pick(family, rng),
    };

    let (name, chords) = match kind {
        PatternKind::Degree => {
            let pattern = degree_patterns(family).get(index)?;
            (pattern.name, generate_from_degrees(grid, pattern.degrees))
        }
        PatternKind::Position => {
            let pattern = position_patterns().get(index)?;
            (pattern.name, generate_from_positions(grid, pattern.positions))
        }
    };
    let progression = Progression {
        pattern_name: name.to_string(),
        kind,
        chords,
    };

    if progression.chords.is_empty() {
        log::debug!("select_progression: '{}' produced no chords", progression.pattern_name);
        return None;
    }
    Some(progression)
}

fn random_pick(family: ScaleFamily, rng: &mut fastrand::Rng) -> (PatternKind, usize) {
    if rng.u8(0..4) < DEGREE_ODDS_OUT_OF_FOUR {
        (PatternKind::Degree, rng.usize(..degree_patterns(family).len()))
    } else {
        (PatternKind::Position, rng.usize(..position_patterns().len()))
    }
}
