//! Look-ahead target selection on a densified closed loop.
//!
//! The target is the first path point, walking forward from the point
//! closest to the car, that lies at least one look-ahead radius away. Aiming
//! there instead of at the closest point keeps the target from sliding
//! backwards through tight corners.

use noisy_float::types::r64;

use crate::geometry::Point;

/// How the target point was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookAheadKind {
    /// A point outside the radius was found ahead of the closest point.
    Ahead { offset: usize },
    /// The whole loop lies within the radius; the closest point is used.
    Closest,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LookAhead {
    pub closest_index: usize,
    pub target: Point,
    pub kind: LookAheadKind,
}

/// Index of the path point nearest to `car`. Ties go to the lowest index.
pub fn closest_index(path: &[Point], car: Point) -> Option<usize> {
    path.iter()
        .enumerate()
        .min_by_key(|(_, point)| r64(point.distance(car)))
        .map(|(index, _)| index)
}

/// Returns `None` only for an empty path.
pub fn select_target(path: &[Point], car: Point, radius: f64) -> Option<LookAhead> {
    let closest_index = closest_index(path, car)?;
    let len = path.len();

    let first_outside = (0..len)
        .map(|offset| (offset, path[(closest_index + offset) % len]))
        .find(|(_, point)| point.distance(car) >= radius);

    let look_ahead = match first_outside {
        Some((offset, target)) => LookAhead {
            closest_index,
            target,
            kind: LookAheadKind::Ahead { offset },
        },
        None => {
            tracing::warn!(
                radius,
                closest_index,
                "whole path lies inside the look-ahead radius, aiming at the closest point"
            );
            LookAhead {
                closest_index,
                target: path[closest_index],
                kind: LookAheadKind::Closest,
            }
        }
    };

    tracing::debug!(
        closest_index,
        target_x = look_ahead.target.x,
        target_y = look_ahead.target.y,
        radius,
        "selected look-ahead target"
    );

    Some(look_ahead)
}
