//! Static progression pattern catalogs
//!
//! Degree patterns index row 0 of the active chord grid (the diatonic row).
//! Position patterns address the whole grid by (row, column) and are shared
//! by every scale.

use serde::Serialize;

use crate::models::key::ScaleFamily;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DegreePattern {
    pub name: &'static str,
    pub degrees: &'static [usize],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionPattern {
    pub name: &'static str,
    pub positions: &'static [(usize, usize)],
}

pub const MAJOR_PATTERNS: &[DegreePattern] = &[
    DegreePattern {
        name: "Pop Standard (I–V–vi–IV)",
        degrees: &[0, 4, 5, 3],
    },
    DegreePattern {
        name: "Sensitive Female (vi-IV-I-V)",
        degrees: &[5, 3, 0, 4],
    },
    DegreePattern {
        name: "Umbrella (IV-I-V-vi)",
        degrees: &[3, 0, 4, 5],
    },
    DegreePattern {
        name: "'50s Progression (I-vi-IV-V)",
        degrees: &[0, 5, 3, 4],
    },
    DegreePattern {
        name: "Jazz Standard (ii-V-I)",
        degrees: &[1, 4, 0],
    },
    DegreePattern {
        name: "Three Chord (I-IV-V)",
        degrees: &[0, 3, 4],
    },
    DegreePattern {
        name: "Shuffle Blues (I-IV-V-IV)",
        degrees: &[0, 3, 4, 3],
    },
    DegreePattern {
        name: "Extended Canon (I-V-vi-iii-IV-I-IV-V)",
        degrees: &[0, 4, 5, 2, 3, 0, 3, 4],
    },
    DegreePattern {
        name: "Progressive House (I-V-vi-IV-I-V-IV-V)",
        degrees: &[0, 4, 5, 3, 0, 4, 3, 4],
    },
    DegreePattern {
        name: "Mixolydian (I-♭VII-IV)",
        degrees: &[0, 6, 3],
    },
    DegreePattern {
        name: "Rock Standard (I-V-♭VII-IV)",
        degrees: &[0, 4, 6, 3],
    },
    DegreePattern {
        name: "Rhythm Changes (I-vi-ii-V)",
        degrees: &[0, 5, 1, 4],
    },
];

pub const MINOR_PATTERNS: &[DegreePattern] = &[
    DegreePattern {
        name: "Sensitive Female Minor (i-♭VI-♭III-♭VII)",
        degrees: &[0, 5, 3, 6],
    },
    DegreePattern {
        name: "Andalusian Cadence (i-♭VII-♭VI-V)",
        degrees: &[0, 6, 5, 4],
    },
    DegreePattern {
        name: "Minor Epic (i-♭VII-♭VI-V)",
        degrees: &[0, 6, 5, 4],
    },
    DegreePattern {
        name: "Minor ii°-V-i",
        degrees: &[1, 4, 0],
    },
    DegreePattern {
        name: "Dark Pop (i-iv-VII-III)",
        degrees: &[0, 3, 6, 2],
    },
];

pub const POSITION_PATTERNS: &[PositionPattern] = &[
    PositionPattern {
        name: "Secondary Turnaround",
        positions: &[(0, 0), (2, 1), (0, 1), (1, 0)],
    },
    PositionPattern {
        name: "Circle of Dominants",
        positions: &[(1, 3), (2, 1), (2, 2), (1, 0), (0, 0)],
    },
    PositionPattern {
        name: "Relative Cadence",
        positions: &[(2, 0), (1, 3), (1, 1)],
    },
    PositionPattern {
        name: "Suspended Resolution",
        positions: &[(0, 3), (3, 4), (1, 0), (0, 0)],
    },
    PositionPattern {
        name: "Colour Wash",
        positions: &[(3, 5), (3, 6), (0, 3), (3, 7)],
    },
];

/// Degree catalog for a scale family
pub fn degree_patterns(family: ScaleFamily) -> &'static [DegreePattern] {
    match family {
        ScaleFamily::Major => MAJOR_PATTERNS,
        ScaleFamily::Minor => MINOR_PATTERNS,
    }
}

pub fn position_patterns() -> &'static [PositionPattern] {
    POSITION_PATTERNS
}
