//! Map builders for common level shapes
//!
//! Layouts only decide which cells start blocked. They never touch a
//! visibility engine, so any of them can be edited afterwards through
//! [`TileMap::set_blocked`].

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{FovError, Result, invalid_parameter};
use crate::spatial::map::{GridMap, TileMap};

/// Built-in level shapes selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Layout {
    /// Every cell open
    Open,
    /// A pillar on every cell where both coordinates are even
    Pillars,
    /// Seeded random scatter of blocked cells
    Random,
    /// Open floor enclosed by a one-cell wall
    Room,
}

impl Layout {
    /// Build a map of the given size in this layout
    ///
    /// `seed` and `density` are only consulted by [`Layout::Random`].
    ///
    /// # Errors
    ///
    /// Returns an error for invalid dimensions, or for a density outside
    /// `[0, 1]` when building a random layout.
    pub fn build(self, width: i32, height: i32, seed: u64, density: f64) -> Result<GridMap> {
        match self {
            Self::Open => GridMap::new(width, height),
            Self::Pillars => pillars(width, height),
            Self::Random => random_scatter(width, height, seed, density),
            Self::Room => room(width, height),
        }
    }
}

/// Pillar grid: a blocked cell wherever `x` and `y` are both even
///
/// # Errors
///
/// Returns [`FovError::InvalidDimensions`] for non-positive sizes.
pub fn pillars(width: i32, height: i32) -> Result<GridMap> {
    let mut map = GridMap::new(width, height)?;
    for (x, y) in map.cells() {
        map.set_blocked(x, y, x % 2 == 0 && y % 2 == 0);
    }
    Ok(map)
}

/// Open floor surrounded by a wall along the map edge
///
/// # Errors
///
/// Returns [`FovError::InvalidDimensions`] for non-positive sizes.
pub fn room(width: i32, height: i32) -> Result<GridMap> {
    let mut map = GridMap::new(width, height)?;
    for (x, y) in map.cells() {
        let edge = x == 0 || y == 0 || x == width - 1 || y == height - 1;
        map.set_blocked(x, y, edge);
    }
    Ok(map)
}

/// Block each cell independently with probability `density`
///
/// The same seed always yields the same map.
///
/// # Errors
///
/// Returns an error for non-positive sizes or a density outside `[0, 1]`.
pub fn random_scatter(width: i32, height: i32, seed: u64, density: f64) -> Result<GridMap> {
    if !(0.0..=1.0).contains(&density) {
        return Err(invalid_parameter(
            "density",
            &density,
            &"must be between 0 and 1",
        ));
    }

    let mut map = GridMap::new(width, height)?;
    let mut rng = StdRng::seed_from_u64(seed);
    for (x, y) in map.cells() {
        map.set_blocked(x, y, rng.random_bool(density));
    }
    Ok(map)
}

/// A map parsed from ASCII art along with its marked starting cell
#[derive(Clone, Debug)]
pub struct AsciiMap {
    /// Parsed blocking flags
    pub map: GridMap,
    /// Position of the `@` marker, if the text contained one
    pub start: Option<(i32, i32)>,
}

/// Parse a map drawn with `#` for walls and `.` for floor
///
/// An `@` marks an open starting cell. Blank lines at either end are
/// ignored; every other row must have the same length.
///
/// # Errors
///
/// Returns [`FovError::MapParse`] for ragged rows, unknown characters, or
/// more than one `@`, and [`FovError::InvalidDimensions`] for empty input.
pub fn parse_ascii(text: &str) -> Result<AsciiMap> {
    let rows: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim_end()))
        .skip_while(|(_, line)| line.is_empty())
        .collect();
    let rows = match rows.iter().rposition(|(_, line)| !line.is_empty()) {
        Some(last) => rows.get(..=last).unwrap_or_default(),
        None => &[],
    };

    let width = rows.first().map_or(0, |(_, line)| line.chars().count());
    let mut map = GridMap::new(
        i32::try_from(width).unwrap_or(i32::MAX),
        i32::try_from(rows.len()).unwrap_or(i32::MAX),
    )?;
    let mut start = None;

    for (y, &(line_number, line)) in rows.iter().enumerate() {
        if line.chars().count() != width {
            return Err(FovError::MapParse {
                line: line_number,
                reason: format!("expected {width} cells, found {}", line.chars().count()),
            });
        }

        for (x, glyph) in line.chars().enumerate() {
            let (x, y) = (x as i32, y as i32);
            match glyph {
                '#' => map.set_blocked(x, y, true),
                '.' => {}
                '@' => {
                    if start.replace((x, y)).is_some() {
                        return Err(FovError::MapParse {
                            line: line_number,
                            reason: "more than one '@' start marker".to_string(),
                        });
                    }
                }
                other => {
                    return Err(FovError::MapParse {
                        line: line_number,
                        reason: format!("unexpected character '{other}'"),
                    });
                }
            }
        }
    }

    Ok(AsciiMap { map, start })
}
