//! Fixed-size tile maps reporting per-cell passability
//!
//! The [`TileMap`] trait is the only signal the visibility engine consumes.
//! Every query is total: coordinates outside the map are out of bounds and
//! blocked, and edits outside the map are ignored.

use std::fmt;

use bitvec::prelude::*;
use ndarray::Array2;

use crate::io::configuration::MAX_MAP_DIMENSION;
use crate::io::error::{FovError, Result};

/// Grid of blocked/unblocked cells with fixed dimensions
pub trait TileMap {
    /// Width of the map in cells
    fn width(&self) -> i32;

    /// Height of the map in cells
    fn height(&self) -> i32;

    /// Check whether a cell lies inside `[0, width) x [0, height)`
    fn is_in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width() && y >= 0 && y < self.height()
    }

    /// Check whether a cell blocks movement and sight
    ///
    /// Out-of-bounds cells always report blocked.
    fn is_blocked(&self, x: i32, y: i32) -> bool;

    /// Set the blocking flag of an in-bounds cell
    ///
    /// Out-of-bounds coordinates are silently ignored.
    fn set_blocked(&mut self, x: i32, y: i32, blocked: bool);
}

/// Flat bit-packed tile map indexed by `y * width + x`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    width: i32,
    height: i32,
    blocked: BitVec,
}

impl GridMap {
    /// Create a map of the given size with every cell open
    ///
    /// # Errors
    ///
    /// Returns [`FovError::InvalidDimensions`] if either side is not positive
    /// or exceeds [`MAX_MAP_DIMENSION`].
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let cell_count = checked_cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            blocked: bitvec![0; cell_count],
        })
    }

    /// Create a map from a boolean array where `true` marks a blocked cell
    ///
    /// The array is indexed `[row, col]`, so rows become `y` and columns `x`.
    ///
    /// # Errors
    ///
    /// Returns [`FovError::InvalidDimensions`] for empty or oversized arrays.
    pub fn from_array(cells: &Array2<bool>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        let width = i32::try_from(cols).unwrap_or(i32::MAX);
        let height = i32::try_from(rows).unwrap_or(i32::MAX);
        let mut map = Self::new(width, height)?;
        for ((row, col), &blocked) in cells.indexed_iter() {
            map.set_blocked(col as i32, row as i32, blocked);
        }
        Ok(map)
    }

    /// Export the blocking flags as a `[row, col]` boolean array
    pub fn to_array(&self) -> Array2<bool> {
        Array2::from_shape_fn((self.height as usize, self.width as usize), |(row, col)| {
            self.is_blocked(col as i32, row as i32)
        })
    }

    /// Set every cell to the same blocking state
    pub fn fill(&mut self, blocked: bool) {
        self.blocked.fill(blocked);
    }

    /// Count blocked cells inside the map
    pub fn blocked_count(&self) -> usize {
        self.blocked.count_ones()
    }

    /// Iterate over every in-bounds cell as `(x, y)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.is_in_bounds(x, y)
            .then(|| y as usize * self.width as usize + x as usize)
    }
}

impl TileMap for GridMap {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn is_blocked(&self, x: i32, y: i32) -> bool {
        self.index(x, y)
            .and_then(|index| self.blocked.get(index).as_deref().copied())
            .unwrap_or(true)
    }

    fn set_blocked(&mut self, x: i32, y: i32, blocked: bool) {
        if let Some(mut bit) = self
            .index(x, y)
            .and_then(|index| self.blocked.get_mut(index))
        {
            *bit = blocked;
        }
    }
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let glyph = if self.is_blocked(x, y) { '#' } else { '.' };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Validate map dimensions and return the number of cells they cover
///
/// # Errors
///
/// Returns [`FovError::InvalidDimensions`] if either side is not positive or
/// exceeds [`MAX_MAP_DIMENSION`].
pub fn checked_cell_count(width: i32, height: i32) -> Result<usize> {
    let valid = |side: i32| side > 0 && side <= MAX_MAP_DIMENSION;
    if valid(width) && valid(height) {
        Ok(width as usize * height as usize)
    } else {
        Err(FovError::InvalidDimensions { width, height })
    }
}
