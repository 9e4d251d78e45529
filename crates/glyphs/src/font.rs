//! Fixed 5x7 bitmap font for the decimal digits.
//!
//! `#` = filled cell (emits a ball), `.` = empty. Static reference data, not
//! session state; the layout engine samples it per digit.

pub const GLYPH_ROWS: usize = 7;
pub const GLYPH_COLS: usize = 5;

const GLYPHS: [[&str; GLYPH_ROWS]; 10] = [
    [
        ".###.", //
        "#...#", //
        "#...#", //
        "#...#", //
        "#...#", //
        "#...#", //
        ".###.",
    ],
    [
        "..#..", //
        ".##..", //
        "..#..", //
        "..#..", //
        "..#..", //
        "..#..", //
        ".###.",
    ],
    [
        ".###.", //
        "#...#", //
        "....#", //
        "..##.", //
        ".#...", //
        "#....", //
        "#####",
    ],
    [
        ".###.", //
        "#...#", //
        "....#", //
        "..##.", //
        "....#", //
        "#...#", //
        ".###.",
    ],
    [
        "#...#", //
        "#...#", //
        "#...#", //
        "#####", //
        "....#", //
        "....#", //
        "....#",
    ],
    [
        "#####", //
        "#....", //
        "####.", //
        "....#", //
        "....#", //
        "#...#", //
        ".###.",
    ],
    [
        ".###.", //
        "#....", //
        "#....", //
        "####.", //
        "#...#", //
        "#...#", //
        ".###.",
    ],
    [
        "#####", //
        "....#", //
        "...#.", //
        "..#..", //
        "..#..", //
        "..#..", //
        "..#..",
    ],
    [
        ".###.", //
        "#...#", //
        "#...#", //
        ".###.", //
        "#...#", //
        "#...#", //
        ".###.",
    ],
    [
        ".###.", //
        "#...#", //
        "#...#", //
        ".####", //
        "....#", //
        "....#", //
        ".###.",
    ],
];

/// Glyph rows for a digit character. Non-digit characters have no glyph and
/// yield `None` (the layout engine skips them silently).
pub fn glyph(digit: char) -> Option<&'static [&'static str; GLYPH_ROWS]> {
    digit.to_digit(10).map(|d| &GLYPHS[d as usize])
}

/// Number of filled cells in a digit's glyph (0 for non-digit characters).
pub fn filled_cells(digit: char) -> usize {
    glyph(digit)
        .map(|rows| {
            rows.iter()
                .map(|row| row.bytes().filter(|&b| b == b'#').count())
                .sum()
        })
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_are_well_formed() {
        for d in '0'..='9' {
            let rows = glyph(d).expect("digit glyph");
            assert_eq!(rows.len(), GLYPH_ROWS);
            for row in rows.iter() {
                assert_eq!(row.len(), GLYPH_COLS, "glyph {d} row width");
                assert!(
                    row.bytes().all(|b| b == b'#' || b == b'.'),
                    "glyph {d} contains unexpected cell byte"
                );
            }
            assert!(filled_cells(d) > 0, "glyph {d} has no filled cells");
        }
    }

    #[test]
    fn known_cell_counts() {
        assert_eq!(filled_cells('0'), 16);
        assert_eq!(filled_cells('1'), 10);
        assert_eq!(filled_cells('2'), 15);
        assert_eq!(filled_cells('4'), 14);
        assert_eq!(filled_cells('5'), 17);
        assert_eq!(filled_cells('8'), 17);
    }

    #[test]
    fn non_digit_has_no_glyph() {
        assert!(glyph('x').is_none());
        assert!(glyph(' ').is_none());
        assert_eq!(filled_cells('x'), 0);
    }
}
