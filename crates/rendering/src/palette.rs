//! Animation color palette.
//!
//! The five colors are injected configuration (hex strings); each slot falls
//! back to its fixed default when the configured entry is missing or
//! unparseable, so a broken config never blanks the animation.

use bevy::prelude::*;
use sb_config::PaletteConfig;

/// Fixed per-slot fallback colors (#3b82f6, #f59e0b, #10b981, #ec4899, #8b5cf6).
pub const FALLBACK_COLORS: [Color; PaletteConfig::SIZE] = [
    Color::srgb(0.231, 0.510, 0.965), // blue
    Color::srgb(0.961, 0.620, 0.043), // yellow
    Color::srgb(0.063, 0.725, 0.506), // green
    Color::srgb(0.925, 0.282, 0.600), // pink
    Color::srgb(0.545, 0.361, 0.965), // purple
];

/// Resolved animation palette resource.
#[derive(Resource, Debug, Clone)]
pub struct AnimPalette(pub [Color; PaletteConfig::SIZE]);

impl Default for AnimPalette {
    fn default() -> Self {
        Self(FALLBACK_COLORS)
    }
}

impl AnimPalette {
    /// Build from configured hex strings, slot by slot; bad or missing entries
    /// keep their fallback color.
    pub fn from_hex(colors: &[String]) -> Self {
        let mut out = FALLBACK_COLORS;
        for (i, slot) in out.iter_mut().enumerate() {
            if let Some(parsed) = colors.get(i).and_then(|s| Srgba::hex(s.trim()).ok()) {
                *slot = parsed.into();
            }
        }
        Self(out)
    }

    /// Returns a color for arbitrary index, wrapping around the palette.
    #[inline]
    pub fn color_for_index(&self, i: usize) -> Color {
        self.0[i % self.0.len()]
    }
}

/// Rendering crate public palette surface for non-ball colors.
pub struct Palette;
impl Palette {
    pub const BG: Color = Color::srgb(0.02, 0.02, 0.05);
}
