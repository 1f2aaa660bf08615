//! Host-side wiring: the map/engine pair and the loop that drives it

/// Player-driven tick handler
pub mod explorer;
/// Host loop, commands and the per-tick hook
pub mod host;
/// Owned pairing of a map and its field of view
pub mod scene;

pub use explorer::Explorer;
pub use host::{Command, Direction, Flow, HostLoop, TickHandler};
pub use scene::Scene;
