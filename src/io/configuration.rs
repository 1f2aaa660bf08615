//! Toolkit constants and demo runtime defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed map dimension on either axis
pub const MAX_MAP_DIMENSION: i32 = 10_000;

// Default values for the demo scene
/// Default map width in cells
pub const DEFAULT_MAP_WIDTH: i32 = 80;
/// Default map height in cells
pub const DEFAULT_MAP_HEIGHT: i32 = 45;
/// Default viewer sight radius
pub const DEFAULT_SIGHT_RADIUS: i32 = 8;
/// Default starting cell of the viewer
pub const DEFAULT_START: (i32, i32) = (5, 5);
/// Fixed seed for reproducible random layouts
pub const DEFAULT_SEED: u64 = 42;
/// Fraction of cells blocked by the random layout
pub const DEFAULT_DENSITY: f64 = 0.2;

// Output settings
/// Pixel size of one cell in exported images
pub const DEFAULT_CELL_SCALE: u32 = 8;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 120;
/// The last GIF frame is held this many times longer than the others
pub const FINAL_FRAME_HOLD: u32 = 10;

// Redraw palette
/// Color of the viewer's own cell
pub const PLAYER_COLOR: [u8; 4] = [127, 255, 212, 255];
/// Color of a visible occluder
pub const LIT_WALL_COLOR: [u8; 4] = [138, 43, 226, 255];
/// Color of a visible open cell
pub const LIT_FLOOR_COLOR: [u8; 4] = [255, 165, 0, 255];
/// Color of any cell outside the field of view
pub const UNSEEN_COLOR: [u8; 4] = [0, 0, 0, 255];
