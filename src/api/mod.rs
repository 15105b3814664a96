//! Chord pad WASM API
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, validation, error handling, and logging
//! - `pad`: Key/scale, voicing, progression and session entry points

pub mod helpers;
pub mod pad;

pub use pad::*;
