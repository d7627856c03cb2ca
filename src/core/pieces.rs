//! Pieces module - tetromino occupancy matrices and rotation
//!
//! Each variant is a small boolean matrix inside a fixed 4x4 grid.
//! Rotation builds a new matrix (clockwise: transpose of the reversed row
//! order); the variant table itself is never mutated.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Maximum matrix side length (the I piece spans 4 columns).
pub const MAX_SHAPE_DIM: usize = 4;

/// Rectangular boolean occupancy matrix for one piece orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    grid: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from row slices (1 = filled, 0 = empty).
    ///
    /// All rows must have equal length; dimensions must fit the 4x4 grid.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        debug_assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_DIM);
        debug_assert!(rows.iter().all(|r| r.len() == rows[0].len()));

        let mut grid = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                grid[r][c] = v != 0;
            }
        }
        Self {
            rows: rows.len() as u8,
            cols: rows[0].len() as u8,
            grid,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the matrix cell at (row, col) is occupied.
    pub fn filled(&self, row: u8, col: u8) -> bool {
        row < self.rows && col < self.cols && self.grid[row as usize][col as usize]
    }

    /// Occupied cells as (dx, dy) offsets from the piece anchor.
    pub fn cells(&self) -> ArrayVec<(i8, i8), 4> {
        let mut out = ArrayVec::new();
        for r in 0..self.rows {
            for c in 0..self.cols {
                if self.grid[r as usize][c as usize] {
                    let _ = out.try_push((c as i8, r as i8));
                }
            }
        }
        out
    }

    /// New matrix rotated 90 degrees clockwise.
    ///
    /// Equivalent to transposing the reversed row order: the cell at
    /// (r, c) of the result comes from (rows - 1 - c, r) of the source.
    pub fn rotated_cw(&self) -> Shape {
        let mut grid = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for r in 0..self.cols as usize {
            for c in 0..self.rows as usize {
                grid[r][c] = self.grid[self.rows as usize - 1 - c][r];
            }
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            grid,
        }
    }
}

/// Spawn-orientation matrix for a piece kind.
pub fn spawn_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]),
        PieceKind::L => Shape::from_rows(&[&[1, 1, 1], &[1, 0, 0]]),
        PieceKind::J => Shape::from_rows(&[&[1, 1, 1], &[0, 0, 1]]),
        PieceKind::S => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::Z => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
    }
}

/// How `rotate` searches for a legal placement of the rotated matrix.
///
/// `Naive` keeps the anchor fixed, so rotation can fail flush against a wall.
/// That is the default, observable behavior; `NudgeKick` additionally tries
/// small horizontal offsets for callers that opt in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationPolicy {
    #[default]
    Naive,
    NudgeKick,
}

impl RotationPolicy {
    /// Horizontal anchor offsets to try, in order.
    pub fn offsets(&self) -> &'static [i8] {
        match self {
            RotationPolicy::Naive => &[0],
            RotationPolicy::NudgeKick => &[0, -1, 1, -2, 2],
        }
    }
}
