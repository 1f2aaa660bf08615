//! Redraw pass classifying every cell of a scene into a glyph

use crate::game::scene::Scene;
use crate::io::configuration::{LIT_FLOOR_COLOR, LIT_WALL_COLOR, PLAYER_COLOR, UNSEEN_COLOR};
use crate::spatial::map::TileMap;

/// What a single cell looks like on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// The viewer's own cell
    Player,
    /// A visible occluder
    LitWall,
    /// A visible open cell
    LitFloor,
    /// Anything outside the field of view
    Unseen,
}

impl Glyph {
    /// Character used by [`render_ascii`]
    pub const fn symbol(self) -> char {
        match self {
            Self::Player => '@',
            Self::LitWall => '#',
            Self::LitFloor => '.',
            Self::Unseen => ' ',
        }
    }

    /// RGBA color used by the image renderers
    pub const fn color(self) -> [u8; 4] {
        match self {
            Self::Player => PLAYER_COLOR,
            Self::LitWall => LIT_WALL_COLOR,
            Self::LitFloor => LIT_FLOOR_COLOR,
            Self::Unseen => UNSEEN_COLOR,
        }
    }
}

/// Pick the glyph for `(x, y)` given the viewer at `player`
pub fn classify<M: TileMap>(scene: &Scene<M>, player: (i32, i32), x: i32, y: i32) -> Glyph {
    if (x, y) == player {
        Glyph::Player
    } else if !scene.is_in_fov(x, y) {
        Glyph::Unseen
    } else if scene.map().is_blocked(x, y) {
        Glyph::LitWall
    } else {
        Glyph::LitFloor
    }
}

/// Render the whole scene as text, one line per row
///
/// Trailing spaces are kept so every line has the map's width.
pub fn render_ascii<M: TileMap>(scene: &Scene<M>, player: (i32, i32)) -> String {
    let map = scene.map();
    let mut out = String::with_capacity(((map.width() + 1) * map.height()).max(0) as usize);
    for y in 0..map.height() {
        for x in 0..map.width() {
            out.push(classify(scene, player, x, y).symbol());
        }
        out.push('\n');
    }
    out
}

/// Summarise the visible part of the scene for log output
pub fn describe<M: TileMap>(scene: &Scene<M>, player: (i32, i32)) -> String {
    let mut walls = 0_usize;
    let mut floors = 0_usize;
    for (x, y) in scene.fov().iter_visible() {
        match classify(scene, player, x, y) {
            Glyph::LitWall => walls += 1,
            Glyph::LitFloor => floors += 1,
            Glyph::Player | Glyph::Unseen => {}
        }
    }

    format!(
        "viewer at ({}, {}) sees {floors} floor and {walls} wall cells",
        player.0, player.1
    )
}
