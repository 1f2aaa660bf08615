//! Tile maps and the builders that lay them out
//!
//! This module contains map-related functionality including:
//! - The [`TileMap`] contract consumed by the visibility engine
//! - A bit-packed [`GridMap`] implementation
//! - Layout builders and an ASCII map parser

/// Level layouts and ASCII map parsing
pub mod layout;
/// Tile map contract and grid storage
pub mod map;

pub use layout::Layout;
pub use map::{GridMap, TileMap};
