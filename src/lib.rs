//! Chord Pad WASM Module
//!
//! Music-theory engine for the browser chord pad. The page shell owns
//! rendering, input, audio and storage; it calls into this module with a
//! key, a scale and chord names, and gets back playable note sets.
//!
//! - `transposition`: chord symbols, grids and voicing tables into any key
//! - `voicing`: range-fitting voicings into a playable register
//! - `progression`: degree and position pattern generation
//! - `pad`: the (key, scale) context tying the engines to the home-key data
//! - `session`: saved sessions and loop cadence

pub mod api;
pub mod chords;
pub mod error;
pub mod models;
pub mod pad;
pub mod progression;
pub mod session;
pub mod transposition;
pub mod voicing;

// Re-export commonly used types
pub use error::PadError;
pub use models::{Key, Note, Scale, ScaleFamily, Spelling};
pub use pad::KeyContext;
pub use progression::{PatternSelector, Progression};
pub use session::{LoopCursor, Session};
pub use voicing::RangeFitConfig;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Chord Pad WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        wasm_warn!("console logger already set: {}", e);
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
