//! Builds the closed-loop path the vehicle is scored against.

use crate::{config::Mode, geometry::Point, waypoints::SHORTCUT_WAYPOINTS};

/// Picks the base loop for `mode` and orders it in the driving direction.
///
/// In shortcut mode `reference` is ignored. Reversed driving walks the loop
/// clockwise, so the order is flipped.
pub fn select_base_path(is_reversed: bool, reference: &[Point], mode: Mode) -> Vec<Point> {
    let base: &[Point] = match mode {
        Mode::Shortcut => &SHORTCUT_WAYPOINTS,
        Mode::Center => reference,
    };

    if is_reversed {
        base.iter().rev().copied().collect()
    } else {
        base.to_vec()
    }
}

/// Inserts `factor` evenly spaced points per segment, wrapping from the last
/// waypoint back to the first. Each run starts at its waypoint and stops short
/// of the next one.
pub fn densify(path: &[Point], factor: usize) -> Vec<Point> {
    let n = path.len();

    path.iter()
        .enumerate()
        .flat_map(|(j, &start)| {
            let end = path[(j + 1) % n];
            (0..factor).map(move |i| start.lerp(end, i as f64 / factor as f64))
        })
        .collect()
}
