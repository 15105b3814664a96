//! Chord pad WASM API
//!
//! JavaScript-facing entry points for the chord pad shell. Every call is
//! stateless: the shell passes the current key and scale strings, and gets
//! back freshly derived values.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{
    deserialize, deserialize_or_default, parse_context, parse_key, serialize, serialize_option,
    validation_error,
};
use crate::models::key::{Key, Scale};
use crate::pad::KeyContext;
use crate::progression::PatternSelector;
use crate::session::{loop_interval_ms, Session};
use crate::transposition::transpose_chord_symbol;
use crate::voicing::RangeFitConfig;
use crate::{wasm_info, wasm_log, wasm_warn};

fn context(key: &str, scale: &str) -> Result<KeyContext, JsValue> {
    parse_context(key, scale).map_err(validation_error)
}

/// All 17 key spellings, in knob order
#[wasm_bindgen(js_name = listKeys)]
pub fn list_keys() -> js_sys::Array {
    Key::ALL.iter().map(|k| JsValue::from_str(k.as_str())).collect()
}

/// All scale names, in knob order
#[wasm_bindgen(js_name = listScales)]
pub fn list_scales() -> js_sys::Array {
    Scale::ALL.iter().map(|s| JsValue::from_str(s.as_str())).collect()
}

/// Transposed chord grid (array of rows) for a key and scale
#[wasm_bindgen(js_name = getChordGrid)]
pub fn get_chord_grid(key: &str, scale: &str) -> Result<JsValue, JsValue> {
    let ctx = context(key, scale)?;
    wasm_log!("getChordGrid: {} {} ({:+} semitones)", ctx.key, ctx.scale, ctx.semitones());
    serialize(&ctx.chord_grid(), "Grid serialization error")
}

/// Transposed voicing table (chord symbol → notes) for a key
#[wasm_bindgen(js_name = getVoicingTable)]
pub fn get_voicing_table(key: &str) -> Result<JsValue, JsValue> {
    let key = parse_key(key).map_err(validation_error)?;
    let ctx = KeyContext::new(key, Scale::default());
    serialize(&ctx.voicing_table(), "Voicing table serialization error")
}

/// Range-fitted voicing for one chord, or `null` if it has no voicing.
///
/// `config` may be `undefined` to use the default playable window.
#[wasm_bindgen(js_name = voiceChord)]
pub fn voice_chord(
    key: &str,
    scale: &str,
    chord: &str,
    config: JsValue,
) -> Result<JsValue, JsValue> {
    let ctx = context(key, scale)?;
    let config: RangeFitConfig =
        deserialize_or_default(config, "Range config deserialization error")?;

    let voicing = ctx.voice_chord(chord, &config);
    if voicing.is_none() {
        wasm_warn!("voiceChord: no voicing for '{}' in {} {}", chord, ctx.key, ctx.scale);
    }
    serialize_option(voicing.as_ref(), "Voicing serialization error")
}

/// Transpose a single chord symbol; unrecognised symbols come back unchanged
#[wasm_bindgen(js_name = transposeChord)]
pub fn transpose_chord(chord: &str, semitones: i32, prefer_flat: bool) -> String {
    transpose_chord_symbol(chord, semitones, prefer_flat)
}

/// Pattern picker entries for a key and scale
#[wasm_bindgen(js_name = listProgressionPatterns)]
pub fn list_progression_patterns(key: &str, scale: &str) -> Result<JsValue, JsValue> {
    let ctx = context(key, scale)?;
    serialize(&ctx.pattern_previews(), "Pattern serialization error")
}

/// Generate a progression.
///
/// `selector` is `{ kind: "degree" | "position", index }`, or
/// `{ kind: "random" }` / `undefined` for a random pick. Returns `null` when
/// no progression could be produced.
#[wasm_bindgen(js_name = generateProgression)]
pub fn generate_progression(
    key: &str,
    scale: &str,
    selector: JsValue,
) -> Result<JsValue, JsValue> {
    let ctx = context(key, scale)?;
    let selector: PatternSelector = if selector.is_undefined() || selector.is_null() {
        PatternSelector::Random
    } else {
        deserialize(selector, "Selector deserialization error")?
    };

    let mut rng = fastrand::Rng::new();
    let progression = ctx.generate_progression(selector, &mut rng);
    match &progression {
        Some(p) => wasm_info!(
            "generateProgression: {} → {}",
            p.pattern_name,
            p.chords.join(" ")
        ),
        None => wasm_warn!(
            "generateProgression: {:?} produced nothing in {} {}",
            selector,
            ctx.key,
            ctx.scale
        ),
    }
    serialize_option(progression.as_ref(), "Progression serialization error")
}

/// Load a saved session from its JSON text
#[wasm_bindgen(js_name = sessionFromJson)]
pub fn session_from_json(json: &str) -> Result<JsValue, JsValue> {
    let session = Session::from_json(json).map_err(validation_error)?;
    serialize(&session, "Session serialization error")
}

/// Encode a session object as JSON text for storage
#[wasm_bindgen(js_name = sessionToJson)]
pub fn session_to_json(session: JsValue) -> Result<String, JsValue> {
    let session: Session = deserialize(session, "Session deserialization error")?;
    session.validated().to_json().map_err(validation_error)
}

/// Clipboard text for a session ("Key: C  Scale: major\nCmaj7 → G7")
#[wasm_bindgen(js_name = sessionCopyText)]
pub fn session_copy_text(session: JsValue) -> Result<String, JsValue> {
    let session: Session = deserialize(session, "Session deserialization error")?;
    Ok(session.validated().copy_text())
}

/// Session from share-URL parameters already decoded by the shell
#[wasm_bindgen(js_name = sessionFromUrlParams)]
pub fn session_from_url_params(
    key: Option<String>,
    scale: Option<String>,
    seq: Option<String>,
    tempo: Option<String>,
) -> Result<JsValue, JsValue> {
    let session = Session::from_url_params(
        key.as_deref(),
        scale.as_deref(),
        seq.as_deref(),
        tempo.as_deref(),
    );
    serialize(&session, "Session serialization error")
}

/// Loop step in milliseconds for a tempo (half-beat cadence)
#[wasm_bindgen(js_name = loopIntervalMs)]
pub fn loop_interval(tempo: u32) -> u32 {
    loop_interval_ms(tempo)
}
