//! Models module for the chord pad
//!
//! Pitch spelling, notes, keys and scales shared by every engine.

pub mod key;
pub mod pitch;

// Re-export commonly used types
pub use key::{Key, Scale, ScaleFamily};
pub use pitch::{Note, Spelling};
