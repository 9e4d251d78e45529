//! Digit layout engine: maps a status code onto ball seed positions.
//!
//! The code's decimal digits are laid out as a horizontally centered row of
//! 5x7 glyph blocks; every filled cell becomes one seed whose position doubles
//! as the ball's home position. Radius shrinks linearly on narrow fields down
//! to a legibility floor.

use bevy::prelude::*;
use sb_config::LayoutConfig;

use crate::font::{glyph, GLYPH_COLS, GLYPH_ROWS};

/// One ball to be: spawn position == home position, zero initial velocity.
/// `color_index` counts emitted seeds across the whole code, so palette colors
/// band through each digit instead of coloring digits solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallSeed {
    pub pos: Vec2,
    pub radius: f32,
    pub color_index: usize,
}

/// Ball radius for a field width: full size at `full_scale_width` and above,
/// shrinking proportionally below it, never under `min_radius`.
pub fn scaled_radius(field_width: f32, cfg: &LayoutConfig) -> f32 {
    let scale = (field_width / cfg.full_scale_width).min(1.0);
    (cfg.base_radius * scale).max(cfg.min_radius)
}

/// Absolute positions of a digit glyph's filled cells, row-major.
/// Non-digit characters yield no positions.
pub fn glyph_cell_positions(digit: char, offset: Vec2, cell_size: f32) -> Vec<Vec2> {
    let Some(rows) = glyph(digit) else {
        return Vec::new();
    };
    let mut out = Vec::new();
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, b) in row.bytes().enumerate() {
            if b == b'#' {
                out.push(offset + Vec2::new(col_idx as f32, row_idx as f32) * cell_size);
            }
        }
    }
    out
}

/// Lay out `code`'s decimal digits on a `field_width` x `field_height` field.
/// Always succeeds; the seed list is ordered digit by digit, row-major within
/// each glyph.
pub fn layout_status_code(
    code: u32,
    field_width: f32,
    field_height: f32,
    cfg: &LayoutConfig,
    palette_len: usize,
) -> Vec<BallSeed> {
    let digits: Vec<char> = code.to_string().chars().collect();
    let palette_len = palette_len.max(1);

    let digit_width = GLYPH_COLS as f32 * cfg.cell_size;
    let total_width =
        digits.len() as f32 * digit_width + (digits.len().saturating_sub(1)) as f32 * cfg.digit_spacing;

    let start_x = (field_width - total_width) / 2.0;
    let start_y = (field_height - GLYPH_ROWS as f32 * cfg.cell_size) / 2.0;

    let radius = scaled_radius(field_width, cfg);

    let mut seeds = Vec::new();
    for (digit_idx, digit) in digits.iter().enumerate() {
        let offset_x = start_x + digit_idx as f32 * (digit_width + cfg.digit_spacing);
        for pos in glyph_cell_positions(*digit, Vec2::new(offset_x, start_y), cfg.cell_size) {
            seeds.push(BallSeed {
                pos,
                radius,
                color_index: seeds.len() % palette_len,
            });
        }
    }
    seeds
}

/// Total filled cells across the code's digits (the expected seed count).
pub fn seed_count(code: u32) -> usize {
    code.to_string().chars().map(crate::font::filled_cells).sum()
}
