//! Saved sessions and loop cadence
//!
//! A session is what the shell persists to local storage and encodes into a
//! share URL: the key, the scale, the recorded chord sequence and the tempo.
//! Loading is lenient. A field that doesn't validate falls back to its
//! default instead of rejecting the whole session; only text that isn't
//! JSON at all is an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PadError;
use crate::models::key::{Key, Scale};
use crate::pad::KeyContext;

pub const MIN_TEMPO: u32 = 60;
pub const MAX_TEMPO: u32 = 240;
pub const DEFAULT_TEMPO: u32 = 120;

/// Separator used when copying a recording as text
const COPY_ARROW: &str = " → ";

pub fn clamp_tempo(tempo: u32) -> u32 {
    tempo.clamp(MIN_TEMPO, MAX_TEMPO)
}

/// Tempo if it lies in [`MIN_TEMPO`, `MAX_TEMPO`]
fn valid_tempo(tempo: u64) -> Option<u32> {
    (MIN_TEMPO as u64..=MAX_TEMPO as u64)
        .contains(&tempo)
        .then_some(tempo as u32)
}

/// Loop step length in milliseconds; chords advance every half beat
pub fn loop_interval_ms(tempo: u32) -> u32 {
    let tempo = clamp_tempo(tempo) as f64;
    (60_000.0 / tempo / 2.0).round() as u32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub key: Key,
    pub scale: Scale,
    pub recorded: Vec<String>,
    pub tempo: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            key: Key::default(),
            scale: Scale::default(),
            recorded: Vec::new(),
            tempo: DEFAULT_TEMPO,
        }
    }
}

impl Session {
    pub fn context(&self) -> KeyContext {
        KeyContext::new(self.key, self.scale)
    }

    /// Reset fields that would not survive a reload.
    ///
    /// Sessions built directly (or deserialized from the shell) bypass the
    /// lenient loader, so an out-of-range tempo is put back to the default
    /// here.
    pub fn validated(mut self) -> Self {
        if valid_tempo(self.tempo as u64).is_none() {
            log::warn!("Session: tempo {} out of range, using {}", self.tempo, DEFAULT_TEMPO);
            self.tempo = DEFAULT_TEMPO;
        }
        self
    }

    pub fn to_json(&self) -> Result<String, PadError> {
        Ok(serde_json::to_string(&self.clone().validated())?)
    }

    /// Load a saved session, keeping whichever fields validate
    pub fn from_json(json: &str) -> Result<Self, PadError> {
        let value: Value = serde_json::from_str(json)?;
        let mut session = Session::default();

        if let Some(key) = value.get("key").and_then(Value::as_str) {
            match key.parse::<Key>() {
                Ok(key) => session.key = key,
                Err(e) => log::warn!("Session::from_json: {}", e),
            }
        }
        if let Some(scale) = value.get("scale").and_then(Value::as_str) {
            match scale.parse::<Scale>() {
                Ok(scale) => session.scale = scale,
                Err(e) => log::warn!("Session::from_json: {}", e),
            }
        }
        if let Some(recorded) = value.get("recorded").and_then(Value::as_array) {
            session.recorded = recorded
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect();
        }
        if let Some(tempo) = value.get("tempo").and_then(Value::as_u64).and_then(valid_tempo) {
            session.tempo = tempo;
        }

        Ok(session)
    }

    /// Build a session from share-URL parameters.
    ///
    /// `seq` is the comma-joined recording. Missing or invalid parameters
    /// keep their defaults.
    pub fn from_url_params(
        key: Option<&str>,
        scale: Option<&str>,
        seq: Option<&str>,
        tempo: Option<&str>,
    ) -> Self {
        let mut session = Session::default();
        if let Some(key) = key.and_then(|k| k.parse().ok()) {
            session.key = key;
        }
        if let Some(scale) = scale.and_then(|s| s.parse().ok()) {
            session.scale = scale;
        }
        if let Some(seq) = seq {
            session.recorded = seq
                .split(',')
                .map(str::trim)
                .filter(|chord| !chord.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(tempo) = tempo
            .and_then(|t| t.trim().parse::<u64>().ok())
            .and_then(valid_tempo)
        {
            session.tempo = tempo;
        }
        session
    }

    /// Plain-text summary for the clipboard
    pub fn copy_text(&self) -> String {
        format!("Key: {}  Scale: {}\n{}", self.key, self.scale, self.recorded.join(COPY_ARROW))
    }
}

/// Position of loop playback within a recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoopCursor {
    index: usize,
    len: usize,
}

impl LoopCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Index to play now; moves on to the next step, wrapping at the end.
    ///
    /// An empty recording never yields an index.
    pub fn advance(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let current = self.index;
        self.index = (current + 1) % self.len;
        Some(current)
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_interval() {
        assert_eq!(loop_interval_ms(120), 250);
        assert_eq!(loop_interval_ms(60), 500);
        assert_eq!(loop_interval_ms(90), 333);
        assert_eq!(loop_interval_ms(1000), 125);
    }

    #[test]
    fn test_json_round_trip() {
        let session = Session {
            key: Key::Eb,
            scale: Scale::Dorian,
            recorded: vec!["Ebm7".to_string(), "Ab7".to_string()],
            tempo: 96,
        };
        let json = session.to_json().unwrap();
        assert!(json.contains("\"key\":\"Eb\""));
        assert!(json.contains("\"scale\":\"dorian\""));
        assert_eq!(Session::from_json(&json).unwrap(), session);
    }

    #[test]
    fn test_lenient_load() {
        let json = r#"{"key":"H","scale":"phrygian","recorded":"oops","tempo":500}"#;
        let session = Session::from_json(json).unwrap();
        assert_eq!(session, Session::default());

        let partial = Session::from_json(r#"{"key":"F#","recorded":["F#maj7",3,"G#m7"]}"#).unwrap();
        assert_eq!(partial.key, Key::Fs);
        assert_eq!(partial.scale, Scale::Major);
        assert_eq!(partial.recorded, vec!["F#maj7", "G#m7"]);
        assert_eq!(partial.tempo, DEFAULT_TEMPO);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(Session::from_json("{not json"), Err(PadError::SessionFormat(_))));
    }

    #[test]
    fn test_from_url_params() {
        let session =
            Session::from_url_params(Some("D"), Some("minor"), Some("Dm7,Gm7, ,A7"), Some("90"));
        assert_eq!(session.key, Key::D);
        assert_eq!(session.scale, Scale::Minor);
        assert_eq!(session.recorded, vec!["Dm7", "Gm7", "A7"]);
        assert_eq!(session.tempo, 90);

        let empty = Session::from_url_params(None, Some("nope"), None, Some("fast"));
        assert_eq!(empty, Session::default());
    }

    #[test]
    fn test_url_tempo_out_of_range_keeps_default() {
        for tempo in ["300", "59", "241", "0", "99999999999"] {
            let session = Session::from_url_params(None, None, None, Some(tempo));
            let json = Session::from_json(&format!("{{\"tempo\":{}}}", tempo)).unwrap();
            assert_eq!(session.tempo, DEFAULT_TEMPO, "{}", tempo);
            assert_eq!(session.tempo, json.tempo, "{}", tempo);
        }
        let edge = Session::from_url_params(None, None, None, Some(" 240 "));
        assert_eq!(edge.tempo, MAX_TEMPO);
    }

    #[test]
    fn test_unchecked_tempo_is_validated_before_saving() {
        let session = Session {
            tempo: 9999,
            ..Session::default()
        };
        assert_eq!(session.clone().validated().tempo, DEFAULT_TEMPO);
        let reloaded = Session::from_json(&session.to_json().unwrap()).unwrap();
        assert_eq!(reloaded.tempo, DEFAULT_TEMPO);
        assert!(session.to_json().unwrap().contains("\"tempo\":120"));

        let fine = Session {
            tempo: 75,
            ..Session::default()
        };
        assert_eq!(fine.clone().validated(), fine);
    }

    #[test]
    fn test_copy_text() {
        let session = Session {
            recorded: vec!["Cmaj7".to_string(), "G7".to_string(), "Am7".to_string()],
            ..Session::default()
        };
        assert_eq!(session.copy_text(), "Key: C  Scale: major\nCmaj7 → G7 → Am7");
    }

    #[test]
    fn test_loop_cursor_wraps() {
        let mut cursor = LoopCursor::new(3);
        let steps: Vec<_> = (0..7).map(|_| cursor.advance().unwrap()).collect();
        assert_eq!(steps, vec![0, 1, 2, 0, 1, 2, 0]);
        cursor.reset();
        assert_eq!(cursor.advance(), Some(0));
    }

    #[test]
    fn test_loop_cursor_empty() {
        let mut cursor = LoopCursor::new(0);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.advance(), None);
    }
}
