//! Input/output around the core: errors, configuration, logging, rendering and the CLI

/// Command-line interface for the walking demo
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types shared by every module
pub mod error;
/// PNG export of rendered frames
pub mod image;
/// Logger installation for binaries
pub mod logging;
/// Glyph classification and ASCII rendering
pub mod render;
/// Walk capture and GIF export
pub mod visualization;
