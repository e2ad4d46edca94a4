//! Glyph palette and the row-major glyph grid.
//!
//! [`GlyphGrid`] holds exactly one glyph per cell. It is built once as a diagonal
//! checkerboard, mutated in place by cluster stamping, and rendered as newline-joined rows.
use std::fmt;
use std::io::Write;

use crate::error::{Error, Result};

/// The three glyphs a pattern is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyphs {
    /// Base glyph for cells where `(x + y)` is even.
    pub even: char,
    /// Base glyph for cells where `(x + y)` is odd.
    pub odd: char,
    /// Glyph written by cluster stamps.
    pub overlay: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            even: '/',
            odd: '\\',
            overlay: '%',
        }
    }
}

impl Glyphs {
    /// Base glyph chosen by the parity of `x + y`.
    #[inline]
    pub fn base(&self, x: usize, y: usize) -> char {
        if (x + y) % 2 == 0 {
            self.even
        } else {
            self.odd
        }
    }
}

/// A 2D grid of single-character glyphs stored row by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphGrid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl GlyphGrid {
    /// Build the deterministic base grid for the given dimensions.
    pub fn checkerboard(width: usize, height: usize, glyphs: &Glyphs) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(glyphs.base(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Glyph at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Overwrite the glyph at `(x, y)`. Returns `false` outside the grid.
    pub fn set(&mut self, x: usize, y: usize, glyph: char) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = glyph;
                true
            }
            None => false,
        }
    }

    /// Overwrite the `size x size` block whose top-left corner is `(x, y)`.
    ///
    /// The whole block must lie inside the grid; nothing is written otherwise.
    pub fn stamp_block(&mut self, x: usize, y: usize, size: usize, glyph: char) -> Result<()> {
        if size > self.width || size > self.height {
            return Err(Error::GridTooSmall {
                width: self.width,
                height: self.height,
                cluster_size: size,
            });
        }
        if x > self.width - size || y > self.height - size {
            return Err(Error::InvalidConfig(format!(
                "block at ({x}, {y}) of size {size} exceeds {}x{} grid",
                self.width, self.height
            )));
        }

        for row in y..y + size {
            let start = row * self.width + x;
            self.cells[start..start + size].fill(glyph);
        }
        Ok(())
    }

    /// Number of cells currently holding `glyph`.
    pub fn count(&self, glyph: char) -> usize {
        self.cells.iter().filter(|c| **c == glyph).count()
    }

    /// Iterate over rows as glyph slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks_exact panics on a zero chunk size.
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Rows joined by single newlines, without a trailing newline.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height);
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter());
        }
        out
    }

    /// Write the rendered block followed by one newline.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", self.render())?;
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Display for GlyphGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(width: usize, height: usize) -> GlyphGrid {
        GlyphGrid::checkerboard(width, height, &Glyphs::default())
    }

    #[test]
    fn checkerboard_six_by_four() {
        let grid = base(6, 4);
        let expected = "/\\/\\/\\\n\\/\\/\\/\n/\\/\\/\\\n\\/\\/\\/";
        assert_eq!(grid.render(), expected);
    }

    #[test]
    fn checkerboard_follows_parity_rule() {
        let grid = base(7, 5);
        for y in 0..5 {
            for x in 0..7 {
                let want = if (x + y) % 2 == 0 { '/' } else { '\\' };
                assert_eq!(grid.get(x, y), Some(want), "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn checkerboard_is_deterministic() {
        assert_eq!(base(120, 66), base(120, 66));
        assert_eq!(base(120, 66).render(), base(120, 66).render());
    }

    #[test]
    fn get_and_set_are_bounds_checked() {
        let mut grid = base(3, 3);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert!(!grid.set(5, 5, '#'));
        assert!(grid.set(2, 2, '#'));
        assert_eq!(grid.get(2, 2), Some('#'));
    }

    #[test]
    fn stamp_block_writes_exactly_nine_cells() {
        let mut grid = base(8, 6);
        grid.stamp_block(2, 1, 3, '%').unwrap();
        assert_eq!(grid.count('%'), 9);
        for y in 0..6 {
            for x in 0..8 {
                let inside = (2..5).contains(&x) && (1..4).contains(&y);
                assert_eq!(grid.get(x, y) == Some('%'), inside, "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn stamp_block_accepts_bottom_right_corner() {
        let mut grid = base(5, 4);
        grid.stamp_block(2, 1, 3, '%').unwrap();
        assert_eq!(grid.get(4, 3), Some('%'));
    }

    #[test]
    fn stamp_block_rejects_overflow_without_writing() {
        let mut grid = base(5, 4);
        let before = grid.clone();
        assert!(matches!(
            grid.stamp_block(3, 0, 3, '%'),
            Err(Error::InvalidConfig(_))
        ));
        assert_eq!(grid, before);
    }

    #[test]
    fn stamp_block_rejects_grid_smaller_than_block() {
        let mut grid = base(2, 5);
        assert!(matches!(
            grid.stamp_block(0, 0, 3, '%'),
            Err(Error::GridTooSmall { width: 2, .. })
        ));
    }

    #[test]
    fn render_has_no_trailing_newline() {
        let out = base(120, 66).render();
        assert_eq!(out.matches('\n').count(), 65);
        assert!(!out.ends_with('\n'));
        assert!(out.split('\n').all(|line| line.chars().count() == 120));
    }

    #[test]
    fn write_to_appends_single_newline() {
        let mut buf = Vec::new();
        base(4, 2).write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "/\\/\\\n\\/\\/\n");
    }

    #[test]
    fn display_matches_render() {
        let grid = base(4, 3);
        assert_eq!(grid.to_string(), grid.render());
    }

    #[test]
    fn empty_grid_renders_empty() {
        let grid = base(0, 0);
        assert_eq!(grid.render(), "");
        assert_eq!(grid.rows().count(), 0);
    }
}
