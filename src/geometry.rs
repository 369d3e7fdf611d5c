//! Planar helpers. Angles crossing this API are in degrees.

use serde::Deserialize;

/// A position in track coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        distance(*self, other)
    }

    /// Point at parameter `t` on the segment from `self` to `other`.
    pub fn lerp(&self, other: Point, t: f64) -> Point {
        Point {
            x: t * other.x + (1.0 - t) * self.x,
            y: t * other.y + (1.0 - t) * self.y,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Returns `(radius, angle_degrees)` with the angle in (-180, 180].
pub fn to_polar(x: f64, y: f64) -> (f64, f64) {
    let r = (x.powi(2) + y.powi(2)).sqrt();
    let theta = y.atan2(x).to_degrees();
    (r, theta)
}

pub fn to_rect(r: f64, theta_degrees: f64) -> (f64, f64) {
    let theta = theta_degrees.to_radians();
    (r * theta.cos(), r * theta.sin())
}

/// Maps any angle onto its equivalent in (-180, 180].
pub fn normalize_angle(angle: f64) -> f64 {
    let n = (angle / 360.0).floor();
    let reduced = angle - n * 360.0;

    if reduced <= 180.0 {
        reduced
    } else {
        reduced - 360.0
    }
}
