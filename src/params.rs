use serde::Deserialize;

use crate::{
    config::{Mode, RewardConfig},
    constants::{MAX_COORDINATE, MIN_WAYPOINTS},
    error::ParamsError,
    geometry::Point,
};

/// Vehicle state handed over by the simulator on every step.
///
/// Angles are in degrees. Keys the reward does not use are ignored when
/// deserializing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Params {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub steering_angle: f64,
    pub track_width: f64,
    pub is_reversed: bool,
    #[serde(default)]
    pub waypoints: Option<Vec<Point>>,
}

impl Params {
    pub fn from_json(json: &str) -> Result<Self, ParamsError> {
        serde_json::from_str(json).map_err(|err| ParamsError::Malformed(err.to_string()))
    }

    pub fn car(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn validate(&self, config: &RewardConfig) -> Result<(), ParamsError> {
        let Self {
            x,
            y,
            heading,
            steering_angle,
            track_width,
            ref waypoints,
            ..
        } = *self;

        let scalars = [
            ("x", x),
            ("y", y),
            ("heading", heading),
            ("steering_angle", steering_angle),
            ("track_width", track_width),
        ];
        if let Some(&(field, _)) = scalars.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ParamsError::NonFinite { field });
        }
        if let Some(&(field, value)) = [("x", x), ("y", y)]
            .iter()
            .find(|(_, value)| value.abs() > MAX_COORDINATE)
        {
            return Err(ParamsError::CoordinateOutOfRange { field, value });
        }
        if track_width <= 0.0 {
            return Err(ParamsError::NonPositiveTrackWidth { track_width });
        }

        if config.mode == Mode::Center {
            let waypoints = waypoints.as_deref().ok_or(ParamsError::MissingWaypoints)?;
            validate_waypoints(waypoints)?;
        }

        Ok(())
    }
}

fn validate_waypoints(waypoints: &[Point]) -> Result<(), ParamsError> {
    if waypoints.len() < MIN_WAYPOINTS {
        return Err(ParamsError::TooFewWaypoints {
            count: waypoints.len(),
            min: MIN_WAYPOINTS,
        });
    }
    if let Some(index) = waypoints.iter().position(|point| !point.is_finite()) {
        return Err(ParamsError::NonFiniteWaypoint { index });
    }
    if let Some(index) = waypoints
        .iter()
        .position(|point| point.x.abs() > MAX_COORDINATE || point.y.abs() > MAX_COORDINATE)
    {
        return Err(ParamsError::WaypointOutOfRange { index });
    }
    Ok(())
}
