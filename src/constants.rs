/// Base look-ahead radius, as a fraction of the track width.
pub const DEFAULT_MAX_SIGHT: f64 = 1.0;

/// The racing line cuts corners, so it looks less far ahead.
pub const SHORTCUT_SIGHT_FRACTION: f64 = 0.8;

pub const DEFAULT_DENSIFY_FACTOR: usize = 20;

/// Steering error at which the score bottoms out.
pub const STEERING_ERROR_SCALE_DEGREES: f64 = 60.0;

/// Lowest reward ever handed back. The optimizer misbehaves near zero.
pub const MIN_REWARD: f64 = 0.01;

pub const MIN_WAYPOINTS: usize = 3;

/// Largest coordinate magnitude accepted, in track units. Distances between
/// accepted points always stay finite.
pub const MAX_COORDINATE: f64 = 1.0e12;
