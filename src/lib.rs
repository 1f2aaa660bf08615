//! Tile maps and shadow-casting field of view for grid-based games
//!
//! A [`GridMap`] reports which cells block sight. A [`FieldOfView`] bound to
//! that map marks every cell observable from an origin within a radius, and
//! answers per-cell visibility queries for the redraw pass.

#![forbid(unsafe_code)]

/// Visibility engine and its sweep algorithms
pub mod fov;
/// Scene ownership and the synchronous host loop
pub mod game;
/// Input/output operations and error handling
pub mod io;
/// Tile maps and layout builders
pub mod spatial;

pub use fov::{FieldOfView, FovAlgorithm};
pub use game::Scene;
pub use io::error::{FovError, Result};
pub use spatial::{GridMap, TileMap};
