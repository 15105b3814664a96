//! Process-wide home-key chord data
//!
//! Everything here is immutable static data in the key of C. Transposed
//! variants are always derived fresh by the transposition engine.

pub mod grid;
pub mod voicings;

pub use grid::{home_grid, to_owned_grid, StaticGrid};
pub use voicings::{home_voicing, StaticVoicings, HOME_VOICINGS};
