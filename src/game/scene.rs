//! Explicit owner of one map and the visibility engine bound to it

use crate::fov::{FieldOfView, FovAlgorithm};
use crate::spatial::map::{GridMap, TileMap};

/// A map paired with the field of view sized for it
///
/// The scene is the only place the pair lives, so hosts pass it by
/// reference instead of reaching for shared globals. Map edits go through
/// [`Scene::map_mut`]; dimensions never change, so the engine stays valid.
#[derive(Clone, Debug)]
pub struct Scene<M: TileMap = GridMap> {
    map: M,
    fov: FieldOfView,
}

impl<M: TileMap> Scene<M> {
    /// Bind a new field of view to `map` using the default algorithm
    pub fn new(map: M) -> Self {
        Self::with_algorithm(map, FovAlgorithm::default())
    }

    /// Bind a new field of view to `map` using `algorithm`
    pub fn with_algorithm(map: M, algorithm: FovAlgorithm) -> Self {
        let fov = FieldOfView::with_algorithm(&map, algorithm);
        Self { map, fov }
    }

    /// The scene's map
    pub const fn map(&self) -> &M {
        &self.map
    }

    /// Mutable access to the map for terrain edits
    pub const fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    /// The scene's field of view
    pub const fn fov(&self) -> &FieldOfView {
        &self.fov
    }

    /// Mark the cells visible from `(x, y)` within `radius`
    pub fn compute_fov(&mut self, x: i32, y: i32, radius: i32) {
        self.fov.compute(&self.map, x, y, radius);
    }

    /// Reset every cell to not visible
    pub fn clear_fov(&mut self) {
        self.fov.clear();
    }

    /// Check whether a cell is currently visible
    pub fn is_in_fov(&self, x: i32, y: i32) -> bool {
        self.fov.is_in_fov(x, y)
    }

    /// Release the map, dropping the field of view
    pub fn into_map(self) -> M {
        self.map
    }
}
