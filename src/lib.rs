pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod params;
pub mod path;
pub mod steer_score;
pub mod target;
pub mod waypoints;

pub use config::{Mode, RewardConfig};
pub use error::ParamsError;
pub use geometry::Point;
pub use params::Params;
pub use steer_score::{reward_from_json, reward_function, Evaluation, SteerScorer};
pub use target::{LookAhead, LookAheadKind};
