pub mod generator;
pub mod patterns;

pub use generator::{
    generate_from_degrees, generate_from_positions, select_progression, PatternKind,
    PatternSelector, Progression,
};
pub use patterns::{degree_patterns, position_patterns, DegreePattern, PositionPattern};
