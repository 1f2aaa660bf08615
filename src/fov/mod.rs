//! Field of view computation over a [`TileMap`]
//!
//! [`FieldOfView`] owns one visibility flag per map cell. Computing only ever
//! sets flags; callers that want a fresh view clear first.

/// Symmetric eight-octant shadowcasting
pub mod shadowcast;
/// Legacy mirrored octant sweep
pub mod sweep;

use bitvec::prelude::*;
use ndarray::Array2;

use crate::spatial::map::TileMap;

/// Sweep used to decide which cells are visible
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum FovAlgorithm {
    /// Exact symmetric shadowcasting with a square depth cutoff
    #[default]
    Symmetric,
    /// Behavior-compatible mirrored sweep from the older engine
    Mirrored,
}

/// Visibility grid bound to the dimensions of one map
#[derive(Clone, Debug)]
pub struct FieldOfView {
    width: i32,
    height: i32,
    visible: BitVec,
    algorithm: FovAlgorithm,
}

impl FieldOfView {
    /// Allocate an all-dark grid sized to `map` using the default algorithm
    pub fn new<M: TileMap + ?Sized>(map: &M) -> Self {
        Self::with_algorithm(map, FovAlgorithm::default())
    }

    /// Allocate an all-dark grid sized to `map` using `algorithm`
    pub fn with_algorithm<M: TileMap + ?Sized>(map: &M, algorithm: FovAlgorithm) -> Self {
        let width = map.width().max(0);
        let height = map.height().max(0);
        Self {
            width,
            height,
            visible: bitvec![0; width as usize * height as usize],
            algorithm,
        }
    }

    /// Width of the visibility grid in cells
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Height of the visibility grid in cells
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Sweep used by [`FieldOfView::compute`]
    pub const fn algorithm(&self) -> FovAlgorithm {
        self.algorithm
    }

    /// Mark every cell as not visible
    pub fn clear(&mut self) {
        self.visible.fill(false);
    }

    /// Mark the cells visible from `(origin_x, origin_y)` within `radius`
    ///
    /// The origin is always marked, even when `map` reports it blocked. An
    /// out-of-bounds origin lights nothing. Depth is cut off at `radius` along each octant's main axis, so the
    /// lit region is square rather than round. A radius of zero or less
    /// lights only the origin. Flags set by earlier calls are kept.
    pub fn compute<M: TileMap + ?Sized>(
        &mut self,
        map: &M,
        origin_x: i32,
        origin_y: i32,
        radius: i32,
    ) {
        let origin = (origin_x, origin_y);
        let algorithm = self.algorithm;
        if !map.is_in_bounds(origin_x, origin_y) {
            log::trace!("origin ({origin_x}, {origin_y}) is outside the map, nothing visible");
            return;
        }
        self.mark(origin_x, origin_y);

        let mut mark = |x: i32, y: i32| self.mark(x, y);
        match algorithm {
            FovAlgorithm::Symmetric => shadowcast::cast(map, origin, radius, &mut mark),
            FovAlgorithm::Mirrored => sweep::cast(map, origin, radius, &mut mark),
        }

        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "computed {:?} field of view from ({origin_x}, {origin_y}) radius {radius}: {} cells visible",
                self.algorithm,
                self.visible_count()
            );
        }
    }

    /// Check whether a cell was marked by the last computations
    ///
    /// Out-of-bounds cells are never visible.
    pub fn is_in_fov(&self, x: i32, y: i32) -> bool {
        self.index(x, y)
            .and_then(|index| self.visible.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Count visible cells
    pub fn visible_count(&self) -> usize {
        self.visible.count_ones()
    }

    /// Iterate over visible cells as `(x, y)` in row-major order
    pub fn iter_visible(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = self.width.max(1) as usize;
        self.visible
            .iter_ones()
            .map(move |index| ((index % width) as i32, (index / width) as i32))
    }

    /// Export the visibility flags as a `[row, col]` boolean array
    pub fn to_array(&self) -> Array2<bool> {
        Array2::from_shape_fn((self.height as usize, self.width as usize), |(row, col)| {
            self.is_in_fov(col as i32, row as i32)
        })
    }

    fn mark(&mut self, x: i32, y: i32) {
        if let Some(index) = self.index(x, y) {
            self.visible.set(index, true);
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        (x >= 0 && x < self.width && y >= 0 && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }
}
