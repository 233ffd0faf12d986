//! The immutable cost matrix.

use crate::error::GridError;
use crate::geom::Coord;

/// A rectangular matrix of non-negative per-cell traversal costs.
///
/// Cells are stored flat in row-major order. Once constructed the grid is
/// read-only, so it can be shared freely across concurrent searches.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostGrid {
    width: i32,
    height: i32,
    cells: Vec<i32>,
}

impl CostGrid {
    /// Create a grid from row-major cell data.
    ///
    /// Fails if the dimensions do not match the data or if any cost is
    /// negative.
    pub fn new(width: i32, height: i32, cells: Vec<i32>) -> Result<Self, GridError> {
        if width < 1 || height < 1 {
            return Err(GridError::Empty);
        }
        let expected = (width as usize) * (height as usize);
        if cells.len() != expected {
            return Err(GridError::Dimensions {
                width,
                height,
                expected,
                got: cells.len(),
            });
        }
        if let Some(&value) = cells.iter().find(|&&c| c < 0) {
            return Err(GridError::NegativeCost { value });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse a grid of single-digit costs, one row per line.
    ///
    /// Leading/trailing whitespace on each line is ignored; blank lines are
    /// skipped. Rows must all have the same length.
    pub fn parse(input: &str) -> Result<Self, GridError> {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0i32;
        let lines = input.lines().map(str::trim).filter(|l| !l.is_empty());
        for (row, line) in lines.enumerate() {
            let start = cells.len();
            for found in line.chars() {
                let digit = found
                    .to_digit(10)
                    .ok_or(GridError::InvalidDigit { found, row })?;
                cells.push(digit as i32);
            }
            let got = cells.len() - start;
            match width {
                None => width = Some(got),
                Some(expected) if expected != got => {
                    return Err(GridError::RaggedRow { row, expected, got });
                }
                Some(_) => {}
            }
            height += 1;
        }
        match width {
            Some(w) if w > 0 => Ok(Self {
                width: w as i32,
                height,
                cells,
            }),
            _ => Err(GridError::Empty),
        }
    }

    /// Width of the grid (number of columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid (number of rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the grid contains the given coordinate.
    #[inline]
    pub fn contains(&self, p: Coord) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// The bottom-right corner cell.
    #[inline]
    pub fn bottom_right(&self) -> Coord {
        Coord::new(self.width - 1, self.height - 1)
    }

    /// Cost at a coordinate, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Coord) -> Option<i32> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[(p.y * self.width + p.x) as usize])
    }

    /// Cost at a coordinate, failing with [`GridError::OutOfBounds`] if the
    /// coordinate is invalid.
    pub fn cost_at(&self, p: Coord) -> Result<i32, GridError> {
        self.get(p).ok_or(GridError::OutOfBounds {
            coord: p,
            width: self.width,
            height: self.height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_digits() {
        let grid = CostGrid::parse("241\n321\n325\n344\n").unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.get(Coord::new(0, 0)), Some(2));
        assert_eq!(grid.get(Coord::new(2, 3)), Some(4));
        assert_eq!(grid.bottom_right(), Coord::new(2, 3));
    }

    #[test]
    fn parse_rejects_non_digit() {
        assert_eq!(
            CostGrid::parse("12\n3x"),
            Err(GridError::InvalidDigit { found: 'x', row: 1 })
        );
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        assert_eq!(
            CostGrid::parse("123\n12"),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!(CostGrid::parse(""), Err(GridError::Empty));
        assert_eq!(CostGrid::parse("  \n\n"), Err(GridError::Empty));
    }

    #[test]
    fn new_validates_cells() {
        assert!(CostGrid::new(2, 2, vec![1, 2, 3, 4]).is_ok());
        assert_eq!(
            CostGrid::new(2, 2, vec![1, 2, 3]),
            Err(GridError::Dimensions {
                width: 2,
                height: 2,
                expected: 4,
                got: 3
            })
        );
        assert_eq!(
            CostGrid::new(2, 2, vec![1, -2, 3, 4]),
            Err(GridError::NegativeCost { value: -2 })
        );
        assert_eq!(CostGrid::new(0, 2, vec![]), Err(GridError::Empty));
    }

    #[test]
    fn cost_at_out_of_bounds() {
        let grid = CostGrid::parse("12\n34").unwrap();
        assert_eq!(grid.cost_at(Coord::new(1, 1)), Ok(4));
        assert_eq!(
            grid.cost_at(Coord::new(2, 0)),
            Err(GridError::OutOfBounds {
                coord: Coord::new(2, 0),
                width: 2,
                height: 2
            })
        );
        assert_eq!(grid.get(Coord::new(-1, 0)), None);
    }
}
