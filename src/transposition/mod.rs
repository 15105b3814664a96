pub mod chord_symbol;
pub mod voicing_table;

pub use chord_symbol::{transpose_chord_symbol, transpose_grid};
pub use voicing_table::{transpose_note, transpose_voicing, transpose_voicing_table, VoicingTable};
