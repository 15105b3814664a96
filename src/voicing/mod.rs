pub mod range_fit;

pub use range_fit::{fit_chord_range, fit_voicing, RangeFitConfig};
