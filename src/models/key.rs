//! Keys and scale modes offered by the chord pad
//!
//! Represents the 17 selectable keys:
//! - 7 natural keys (C, D, E, F, G, A, B)
//! - 5 sharp keys (C#, D#, F#, G#, A#)
//! - 5 flat keys (Db, Eb, Gb, Ab, Bb)
//!
//! Note: Enharmonic equivalents are listed separately (e.g., C# and Db)
//! because they select different spellings for the transposed chords.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PadError;
use crate::models::pitch::{index_of, is_flat_key};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    C,
    #[serde(rename = "C#")]
    Cs,
    Db,
    D,
    #[serde(rename = "D#")]
    Ds,
    Eb,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    Gb,
    G,
    #[serde(rename = "G#")]
    Gs,
    Ab,
    A,
    #[serde(rename = "A#")]
    As,
    Bb,
    B,
}

impl Key {
    /// All keys in the order the key knob cycles through them
    pub const ALL: [Key; 17] = [
        Key::C,
        Key::Cs,
        Key::Db,
        Key::D,
        Key::Ds,
        Key::Eb,
        Key::E,
        Key::F,
        Key::Fs,
        Key::Gb,
        Key::G,
        Key::Gs,
        Key::Ab,
        Key::A,
        Key::As,
        Key::Bb,
        Key::B,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Key::C => "C",
            Key::Cs => "C#",
            Key::Db => "Db",
            Key::D => "D",
            Key::Ds => "D#",
            Key::Eb => "Eb",
            Key::E => "E",
            Key::F => "F",
            Key::Fs => "F#",
            Key::Gb => "Gb",
            Key::G => "G",
            Key::Gs => "G#",
            Key::Ab => "Ab",
            Key::A => "A",
            Key::As => "A#",
            Key::Bb => "Bb",
            Key::B => "B",
        }
    }

    /// Pitch class index (0-11) of the key's tonic
    pub fn pitch_class(&self) -> u8 {
        // Every key spelling is in one of the two tables
        index_of(self.as_str()).unwrap_or(0)
    }

    /// Whether chords in this key are spelled from the flat table
    pub fn prefer_flat(&self) -> bool {
        is_flat_key(self.as_str())
    }
}

impl Default for Key {
    fn default() -> Self {
        Key::C
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Key {
    type Err = PadError;

    /// Exact spelling match; "bb" would be ambiguous with "Bb" here
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| PadError::InvalidKey(s.to_string()))
    }
}

/// Which progression catalog a scale draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleFamily {
    Major,
    Minor,
}

/// Scale modes with a home-key chord grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Major,
    Minor,
    Dorian,
    Mixolydian,
    Lydian,
}

impl Scale {
    pub const ALL: [Scale; 5] = [
        Scale::Major,
        Scale::Minor,
        Scale::Dorian,
        Scale::Mixolydian,
        Scale::Lydian,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scale::Major => "major",
            Scale::Minor => "minor",
            Scale::Dorian => "dorian",
            Scale::Mixolydian => "mixolydian",
            Scale::Lydian => "lydian",
        }
    }

    /// Only the natural minor grid uses the minor progression catalog
    pub fn family(&self) -> ScaleFamily {
        match self {
            Scale::Minor => ScaleFamily::Minor,
            Scale::Major | Scale::Dorian | Scale::Mixolydian | Scale::Lydian => ScaleFamily::Major,
        }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale::Major
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Scale {
    type Err = PadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scale::ALL
            .iter()
            .copied()
            .find(|scale| scale.as_str() == s)
            .ok_or_else(|| PadError::InvalidScale(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_all_keys() {
        for key in Key::ALL {
            assert_eq!(key.as_str().parse::<Key>().unwrap(), key);
        }
    }

    #[test]
    fn test_from_str_invalid_key() {
        assert!("H".parse::<Key>().is_err());
        assert!("C###".parse::<Key>().is_err());
        assert!("Cb".parse::<Key>().is_err());
        assert!("".parse::<Key>().is_err());
    }

    #[test]
    fn test_key_pitch_classes() {
        assert_eq!(Key::C.pitch_class(), 0);
        assert_eq!(Key::Cs.pitch_class(), 1);
        assert_eq!(Key::Db.pitch_class(), 1);
        assert_eq!(Key::F.pitch_class(), 5);
        assert_eq!(Key::Bb.pitch_class(), 10);
        assert_eq!(Key::B.pitch_class(), 11);
    }

    #[test]
    fn test_flat_preference() {
        assert!(Key::F.prefer_flat());
        assert!(Key::Eb.prefer_flat());
        assert!(!Key::D.prefer_flat());
        assert!(!Key::Fs.prefer_flat());
        let flat_keys = Key::ALL.iter().filter(|k| k.prefer_flat()).count();
        assert_eq!(flat_keys, 6);
    }

    #[test]
    fn test_scale_parse_and_family() {
        assert_eq!("minor".parse::<Scale>().unwrap(), Scale::Minor);
        assert_eq!("lydian".parse::<Scale>().unwrap(), Scale::Lydian);
        assert!("Lydian".parse::<Scale>().is_err());
        assert!("MINOR".parse::<Scale>().is_err());
        assert!("phrygian".parse::<Scale>().is_err());
        assert_eq!(Scale::Minor.family(), ScaleFamily::Minor);
        assert_eq!(Scale::Dorian.family(), ScaleFamily::Major);
        assert_eq!(Scale::Mixolydian.family(), ScaleFamily::Major);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Key::Fs).unwrap(), "\"F#\"");
        assert_eq!(serde_json::to_string(&Scale::Mixolydian).unwrap(), "\"mixolydian\"");
        let parsed: Key = serde_json::from_str("\"Bb\"").unwrap();
        assert_eq!(parsed, Key::Bb);
    }
}
