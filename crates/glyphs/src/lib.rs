// Digit glyph font and ball layout engine (pure with respect to its inputs;
// no ECS types beyond math, testable without a window).

mod font;
mod layout;

pub use font::{filled_cells, glyph, GLYPH_COLS, GLYPH_ROWS};
pub use layout::{glyph_cell_positions, layout_status_code, scaled_radius, seed_count, BallSeed};
