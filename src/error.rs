use std::fmt;

use crate::constants::MAX_COORDINATE;

/// Rejections raised before any geometry is computed.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamsError {
    Malformed(String),
    NonFinite { field: &'static str },
    CoordinateOutOfRange { field: &'static str, value: f64 },
    NonPositiveTrackWidth { track_width: f64 },
    MissingWaypoints,
    TooFewWaypoints { count: usize, min: usize },
    NonFiniteWaypoint { index: usize },
    WaypointOutOfRange { index: usize },
    UnknownMode(String),
    InvalidMaxSight { max_sight: f64 },
    InvalidDensifyFactor,
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(reason) => write!(f, "malformed params: {reason}"),
            Self::NonFinite { field } => write!(f, "field `{field}` is not a finite number"),
            Self::CoordinateOutOfRange { field, value } => write!(
                f,
                "field `{field}` is out of range: {value:e} (allowed magnitude {MAX_COORDINATE:e})"
            ),
            Self::NonPositiveTrackWidth { track_width } => {
                write!(f, "track width must be positive, got {track_width}")
            }
            Self::MissingWaypoints => write!(f, "`waypoints` is required in center mode"),
            Self::TooFewWaypoints { count, min } => write!(
                f,
                "waypoint loop too short: got {count} points, need at least {min}"
            ),
            Self::NonFiniteWaypoint { index } => {
                write!(f, "waypoint {index} has a non-finite coordinate")
            }
            Self::WaypointOutOfRange { index } => write!(
                f,
                "waypoint {index} lies beyond the allowed magnitude {MAX_COORDINATE:e}"
            ),
            Self::UnknownMode(mode) => {
                write!(f, "unknown mode `{mode}` (expected `center` or `shortcut`)")
            }
            Self::InvalidMaxSight { max_sight } => {
                write!(f, "max sight must be a positive finite number, got {max_sight}")
            }
            Self::InvalidDensifyFactor => write!(f, "densify factor must be at least 1"),
        }
    }
}

impl std::error::Error for ParamsError {}
