//! Keyboard / lamp-board grid — nearest-letter hit testing and reverse
//! lookup.
//!
//! The grid is defined by one base rectangle (the leftmost cell of the
//! *bottom* row) and two step vectors: `column_step` to the next cell in a
//! row and `row_step` to the row above. The middle row additionally starts
//! one column step in from the base cell, reproducing the staggered
//! three-row layout of the device.
//!
//! `letter_at` is a true nearest-neighbor search over cell centers, not a
//! containment test: a tap slightly off a key still resolves to that key.
//! Both lookups walk the cells in the same order, so a letter found by one
//! is always found at the same rectangle by the other.

use embedded_graphics::prelude::{Point, Transform};
use embedded_graphics::primitives::Rectangle;

use crate::error::LayoutError;

/// Letter rows of the simulated keyboard, top to bottom.
///
/// These are fixed device data, not derived: together the three rows cover
/// the alphabet exactly once, which [`KeyGrid::new`] asserts.
pub const KEY_ROWS: [&str; 3] = ["QWERTZUIO", "ASDFGHJK", "PYXCVBNML"];

/// Taps this many device pixels above the top row still count as key
/// presses; anything higher is rejected before the nearest-cell search.
const TOP_EDGE_TOLERANCE: i32 = 10;

/// A three-row letter grid in device pixels.
///
/// Used for the keyboard (hit testing) and, with its own geometry, for the
/// lamp board (reverse lookup of the lit letter's rectangle).
#[derive(Debug, Clone, PartialEq)]
pub struct KeyGrid {
    /// Row base rectangles, top to bottom, matching [`KEY_ROWS`].
    rows: [Rectangle; 3],
    column_step: Point,
}

impl KeyGrid {
    /// Derive the three rows from the bottom row's base cell.
    ///
    /// Fails fast on an empty base cell, a non-rightward `column_step`, a
    /// non-upward `row_step`, or rows that do not cover the alphabet.
    pub fn new(base: Rectangle, column_step: Point, row_step: Point) -> Result<Self, LayoutError> {
        if base.size.width == 0 || base.size.height == 0 {
            return Err(LayoutError::EmptyCell);
        }
        if column_step.x <= 0 || row_step.y >= 0 {
            return Err(LayoutError::DegenerateStep);
        }
        validate_rows()?;

        let bottom = base;
        let middle = bottom.translate(column_step).translate(row_step);
        let top = middle.translate(row_step);
        Ok(KeyGrid {
            rows: [top, middle, bottom],
            column_step,
        })
    }

    /// Device-pixel top edge of the top row.
    #[must_use]
    pub fn top_edge(&self) -> i32 {
        self.rows[0].top_left.y
    }

    /// The letter whose cell center is nearest to `point`, or `None` when
    /// the point is above the grid's tolerance band.
    ///
    /// Ties keep the first cell found (rows top to bottom, then left to
    /// right); with distinct centers they do not occur.
    #[must_use]
    pub fn letter_at(&self, point: Point) -> Option<char> {
        if point.y < self.top_edge() - TOP_EDGE_TOLERANCE {
            return None;
        }

        let mut best: Option<(i64, char)> = None;
        for (letter, cell) in self.cells() {
            let center = cell.center();
            let dx = i64::from(center.x - point.x);
            let dy = i64::from(center.y - point.y);
            let d2 = dx * dx + dy * dy;
            match best {
                Some((min, _)) if d2 >= min => {}
                _ => best = Some((d2, letter)),
            }
        }
        best.map(|(_, letter)| letter)
    }

    /// The cell rectangle of `letter`, or `None` when the letter is not on
    /// the board (lowercase and non-letters included).
    #[must_use]
    pub fn rect_for(&self, letter: char) -> Option<Rectangle> {
        self.cells()
            .find(|(ch, _)| *ch == letter)
            .map(|(_, cell)| cell)
    }

    /// Walk every cell in stable order: rows top to bottom, columns left to
    /// right. Shared by both lookups so their geometries always agree.
    fn cells(&self) -> impl Iterator<Item = (char, Rectangle)> + '_ {
        let step = self.column_step;
        self.rows
            .iter()
            .zip(KEY_ROWS)
            .flat_map(move |(row, letters)| {
                letters.chars().enumerate().map(move |(i, letter)| {
                    let offset = Point::new(step.x * i as i32, step.y * i as i32);
                    (letter, row.translate(offset))
                })
            })
    }
}

/// The fixed rows and the machine alphabet are separate compile-time data;
/// assert at grid construction that they actually agree (each of `A..=Z`
/// appearing exactly once across the rows).
fn validate_rows() -> Result<(), LayoutError> {
    let mut seen = [false; 26];
    let mut total = 0_usize;
    for row in KEY_ROWS {
        for letter in row.chars() {
            if !letter.is_ascii_uppercase() {
                return Err(LayoutError::AlphabetMismatch);
            }
            let idx = (letter as u8 - b'A') as usize;
            if seen[idx] {
                return Err(LayoutError::AlphabetMismatch);
            }
            seen[idx] = true;
            total += 1;
        }
    }
    if total == 26 {
        Ok(())
    } else {
        Err(LayoutError::AlphabetMismatch)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::Size;

    fn test_grid() -> KeyGrid {
        // Design-sheet keyboard geometry at scale 1.0.
        let base = Rectangle::new(Point::new(66, 1020), Size::new(72, 72));
        match KeyGrid::new(base, Point::new(100, 0), Point::new(-50, -112)) {
            Ok(grid) => grid,
            Err(e) => panic!("grid must build: {e}"),
        }
    }

    #[test]
    fn rows_are_derived_bottom_up_with_stagger() {
        let grid = test_grid();
        // Bottom row at the base; middle one column step in and one row up;
        // top flush with the bottom row again.
        assert_eq!(grid.rect_for('P').map(|r| r.top_left), Some(Point::new(66, 1020)));
        assert_eq!(grid.rect_for('A').map(|r| r.top_left), Some(Point::new(116, 908)));
        assert_eq!(grid.rect_for('Q').map(|r| r.top_left), Some(Point::new(66, 796)));
    }

    #[test]
    fn round_trip_law_holds_for_every_letter() {
        let grid = test_grid();
        for row in KEY_ROWS {
            for letter in row.chars() {
                let center = grid.rect_for(letter).map(|r| r.center());
                assert!(center.is_some(), "{letter} has no cell");
                if let Some(c) = center {
                    assert_eq!(grid.letter_at(c), Some(letter), "at {c:?}");
                }
            }
        }
    }

    #[test]
    fn fifth_letter_of_the_top_row_is_t() {
        let grid = test_grid();
        // Top row starts at (66, 796); the 5th cell is 4 column steps in.
        let expected = Rectangle::new(Point::new(466, 796), Size::new(72, 72));
        assert_eq!(grid.rect_for('T'), Some(expected));
        assert_eq!(grid.letter_at(expected.center()), Some('T'));
    }

    #[test]
    fn taps_above_the_tolerance_band_miss() {
        let grid = test_grid();
        let top = grid.top_edge();
        for x in [-500, 0, 466, 2000] {
            assert_eq!(grid.letter_at(Point::new(x, top - 11)), None);
        }
        // Exactly at the tolerance edge the nearest-cell search still runs.
        assert_eq!(grid.letter_at(Point::new(466, top - 10)), Some('T'));
    }

    #[test]
    fn near_miss_resolves_to_the_nearest_key() {
        let grid = test_grid();
        // A tap in the gutter right of 'T' but nearer to it than to 'Z'.
        let t = match grid.rect_for('T') {
            Some(r) => r,
            None => panic!("T has no cell"),
        };
        let just_right = Point::new(t.top_left.x + t.size.width as i32 + 5, t.center().y);
        assert_eq!(grid.letter_at(just_right), Some('T'));
        // Far below the bottom row still resolves (no lower tolerance band).
        assert_eq!(grid.letter_at(Point::new(102, 1500)), Some('P'));
    }

    #[test]
    fn letters_off_the_board_have_no_cell() {
        let grid = test_grid();
        assert_eq!(grid.rect_for('q'), None);
        assert_eq!(grid.rect_for('*'), None);
        assert_eq!(grid.rect_for(' '), None);
    }

    #[test]
    fn degenerate_geometry_is_rejected() {
        let base = Rectangle::new(Point::new(0, 500), Size::new(10, 10));
        let empty = Rectangle::new(Point::new(0, 500), Size::new(0, 10));
        assert_eq!(
            KeyGrid::new(empty, Point::new(10, 0), Point::new(0, -10)),
            Err(LayoutError::EmptyCell)
        );
        assert_eq!(
            KeyGrid::new(base, Point::new(0, 0), Point::new(0, -10)),
            Err(LayoutError::DegenerateStep)
        );
        assert_eq!(
            KeyGrid::new(base, Point::new(10, 0), Point::new(0, 10)),
            Err(LayoutError::DegenerateStep)
        );
    }
}
