//! Legacy mirrored octant sweep
//!
//! Reproduces the shape of the older engine's sweep with one deliberate
//! difference: the older engine abandoned the remaining column offsets of a
//! depth at the first blocked cell and kept going deeper, while here a
//! blocked cell closes only its own mirrored branch.
//!
//! Each octant owns the slope interval `[octant / 8, (octant + 1) / 8)`
//! and walks depth `dx` outward, marking the two mirrored cells
//! `(ox + dx, oy + i)` and `(ox - dx, oy + i)` for every column offset `i`
//! in `[-dy, dy]`. The column span `dy` widens while
//! `(dx - 0.5) / (dy + 0.5)` stays below the octant's end slope.
//!
//! Occlusion is tracked per mirrored branch and only for the running
//! octant: once the `+dx` or `-dx` side marks a blocked cell, that side
//! stops extending outward. Nothing is remembered between octants.

use crate::spatial::map::TileMap;

const OCTANT_COUNT: u8 = 8;

/// Run all eight mirrored sweeps from `origin` out to depth `radius`
///
/// `mark` is called for every in-bounds cell the sweep reaches. The origin
/// itself is not reported. An out-of-bounds origin reveals nothing, and
/// depth stops at the larger map side since no branch reaches a cell past it.
pub fn cast<M, F>(map: &M, origin: (i32, i32), radius: i32, mark: &mut F)
where
    M: TileMap + ?Sized,
    F: FnMut(i32, i32),
{
    if !map.is_in_bounds(origin.0, origin.1) {
        return;
    }
    let radius = radius.min(map.width().max(map.height()));
    for octant in 0..OCTANT_COUNT {
        let start_slope = f64::from(octant) / f64::from(OCTANT_COUNT);
        let end_slope = f64::from(octant + 1) / f64::from(OCTANT_COUNT);
        sweep_octant(map, origin, radius, (start_slope, end_slope), mark);
    }
}

fn sweep_octant<M, F>(
    map: &M,
    origin: (i32, i32),
    radius: i32,
    (start_slope, end_slope): (f64, f64),
    mark: &mut F,
) where
    M: TileMap + ?Sized,
    F: FnMut(i32, i32),
{
    // [+dx branch, -dx branch]
    let mut extending = [true, true];
    let mut dy = 0;

    for dx in 1..=radius {
        let slope = (f64::from(dx) - 0.5) / (f64::from(dy) + 0.5);
        if slope < end_slope {
            dy += 1;
        }
        if slope < start_slope {
            continue;
        }

        for i in -dy..=dy {
            let y = origin.1.saturating_add(i);
            let branches = [origin.0.saturating_add(dx), origin.0.saturating_sub(dx)];
            for (branch, x) in branches.into_iter().enumerate() {
                let Some(open) = extending.get_mut(branch) else {
                    continue;
                };
                if !*open || !map.is_in_bounds(x, y) {
                    continue;
                }

                mark(x, y);
                if map.is_blocked(x, y) {
                    *open = false;
                }
            }
        }

        if extending == [false, false] {
            break;
        }
    }
}
