use std::{env, str::FromStr};

use crate::{
    constants::{DEFAULT_DENSIFY_FACTOR, DEFAULT_MAX_SIGHT, SHORTCUT_SIGHT_FRACTION},
    error::ParamsError,
    steer_score::SteerScorer,
};

pub const MODE_ENV: &str = "TRACK_REWARD_MODE";
pub const MAX_SIGHT_ENV: &str = "TRACK_REWARD_MAX_SIGHT";
pub const DENSIFY_FACTOR_ENV: &str = "TRACK_REWARD_DENSIFY_FACTOR";

/// Which path the vehicle is steered along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The track-provided centerline waypoints.
    Center,
    /// The embedded racing line.
    Shortcut,
}

impl FromStr for Mode {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "center" => Ok(Self::Center),
            "shortcut" => Ok(Self::Shortcut),
            _ => Err(ParamsError::UnknownMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RewardConfig {
    pub mode: Mode,
    pub max_sight: f64,
    pub densify_factor: usize,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Shortcut,
            max_sight: DEFAULT_MAX_SIGHT,
            densify_factor: DEFAULT_DENSIFY_FACTOR,
        }
    }
}

impl RewardConfig {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Reads overrides from the environment. Unparsable values are logged
    /// and replaced by the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RewardConfig::from_env`] with `lookup` standing in for the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();

        Self {
            mode: read_value(&lookup, MODE_ENV, default.mode),
            max_sight: read_value(&lookup, MAX_SIGHT_ENV, default.max_sight),
            densify_factor: read_value(&lookup, DENSIFY_FACTOR_ENV, default.densify_factor),
        }
    }

    /// Look-ahead radius as a fraction of the track width.
    pub fn sight(&self) -> f64 {
        match self.mode {
            Mode::Shortcut => self.max_sight * SHORTCUT_SIGHT_FRACTION,
            Mode::Center => self.max_sight,
        }
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        let Self {
            max_sight,
            densify_factor,
            ..
        } = *self;

        if !max_sight.is_finite() || max_sight <= 0.0 {
            return Err(ParamsError::InvalidMaxSight { max_sight });
        }
        if densify_factor == 0 {
            return Err(ParamsError::InvalidDensifyFactor);
        }
        Ok(())
    }

    pub fn build(&self) -> Result<SteerScorer, ParamsError> {
        self.validate()?;
        Ok(SteerScorer::new(self.clone()))
    }
}

fn read_value<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Debug,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(value = %raw, "invalid {key}, using {default:?}");
            default
        }),
        None => default,
    }
}
