//! Symmetric shadowcasting over eight octants
//!
//! Each octant is scanned row by row moving away from the origin. A row
//! covers the columns whose centres fall between its start and end slopes;
//! a wall narrows the slopes of every row behind it. Slopes are kept as
//! exact integer fractions so results never depend on float rounding.
//!
//! A floor cell is visible when its centre lies inside the row's slopes,
//! which makes visibility symmetric between any two floor cells. Walls are
//! revealed whenever any part of them is reached, so occluders are always
//! shown while the cells behind them stay dark.

use crate::spatial::map::TileMap;

/// Maps octant-local `(col, depth)` to world offsets as
/// `dx = col * xx + depth * xy` and `dy = col * yx + depth * yy`
#[derive(Clone, Copy, Debug)]
struct Octant {
    xx: i32,
    xy: i32,
    yx: i32,
    yy: i32,
}

impl Octant {
    const fn new(xx: i32, xy: i32, yx: i32, yy: i32) -> Self {
        Self { xx, xy, yx, yy }
    }

    // Saturates so coordinates past i32 stay out of bounds
    const fn to_world(self, origin: (i32, i32), col: i32, depth: i32) -> (i32, i32) {
        (
            origin
                .0
                .saturating_add(col * self.xx)
                .saturating_add(depth * self.xy),
            origin
                .1
                .saturating_add(col * self.yx)
                .saturating_add(depth * self.yy),
        )
    }
}

const OCTANTS: [Octant; 8] = [
    Octant::new(0, 1, 1, 0),
    Octant::new(1, 0, 0, 1),
    Octant::new(-1, 0, 0, 1),
    Octant::new(0, -1, 1, 0),
    Octant::new(0, -1, -1, 0),
    Octant::new(-1, 0, 0, -1),
    Octant::new(1, 0, 0, -1),
    Octant::new(0, 1, -1, 0),
];

/// Column-over-depth ratio with a positive denominator
///
/// Held as `i64` so products with depths up to `i32::MAX` cannot overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Slope {
    num: i64,
    den: i64,
}

impl Slope {
    const fn new(num: i64, den: i64) -> Self {
        Self { num, den }
    }

    /// Slope through the near corner of the cell at `col`
    const fn of_cell_edge(col: i32, depth: i32) -> Self {
        Self::new(2 * col as i64 - 1, 2 * depth as i64)
    }
}

#[derive(Clone, Copy, Debug)]
struct Row {
    depth: i32,
    start: Slope,
    end: Slope,
}

impl Row {
    // depth * start rounded half up, never above depth
    const fn min_col(&self) -> i32 {
        let depth = self.depth as i64;
        (2 * depth * self.start.num + self.start.den).div_euclid(2 * self.start.den) as i32
    }

    // depth * end rounded half down, never above depth
    const fn max_col(&self) -> i32 {
        let depth = self.depth as i64;
        -(-(2 * depth * self.end.num - self.end.den)).div_euclid(2 * self.end.den) as i32
    }

    const fn is_symmetric(&self, col: i32) -> bool {
        let (col, depth) = (col as i64, self.depth as i64);
        col * self.start.den >= depth * self.start.num && col * self.end.den <= depth * self.end.num
    }

    const fn next(&self) -> Self {
        Self {
            depth: self.depth + 1,
            start: self.start,
            end: self.end,
        }
    }
}

/// Reveal every cell visible from `origin` within `radius` rows
///
/// `mark` is called for each revealed cell, possibly more than once for
/// cells on an octant boundary. The origin itself is not reported.
/// Nothing is revealed from an out-of-bounds origin, and depth never runs
/// past the larger map side since every cell beyond it is out of bounds.
pub fn cast<M, F>(map: &M, origin: (i32, i32), radius: i32, mark: &mut F)
where
    M: TileMap + ?Sized,
    F: FnMut(i32, i32),
{
    let radius = radius.min(map.width().max(map.height()));
    if radius < 1 || !map.is_in_bounds(origin.0, origin.1) {
        return;
    }

    let mut pending = Vec::new();
    for octant in OCTANTS {
        pending.push(Row {
            depth: 1,
            start: Slope::new(0, 1),
            end: Slope::new(1, 1),
        });

        while let Some(row) = pending.pop() {
            scan_row(map, origin, octant, radius, row, &mut pending, mark);
        }
    }
}

fn scan_row<M, F>(
    map: &M,
    origin: (i32, i32),
    octant: Octant,
    radius: i32,
    mut row: Row,
    pending: &mut Vec<Row>,
    mark: &mut F,
) where
    M: TileMap + ?Sized,
    F: FnMut(i32, i32),
{
    let mut previous_blocked = None;

    for col in row.min_col()..=row.max_col() {
        let (x, y) = octant.to_world(origin, col, row.depth);
        let blocked = map.is_blocked(x, y);

        if blocked || row.is_symmetric(col) {
            mark(x, y);
        }

        match (previous_blocked, blocked) {
            (Some(true), false) => row.start = Slope::of_cell_edge(col, row.depth),
            (Some(false), true) if row.depth < radius => {
                let mut next = row.next();
                next.end = Slope::of_cell_edge(col, row.depth);
                pending.push(next);
            }
            _ => {}
        }

        previous_blocked = Some(blocked);
    }

    if previous_blocked == Some(false) && row.depth < radius {
        pending.push(row.next());
    }
}
