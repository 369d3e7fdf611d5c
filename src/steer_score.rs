use crate::{
    config::RewardConfig,
    constants::{MIN_REWARD, MIN_WAYPOINTS, STEERING_ERROR_SCALE_DEGREES},
    error::ParamsError,
    geometry::{normalize_angle, to_polar, Point},
    params::Params,
    path::{densify, select_base_path},
    target::{select_target, LookAhead},
};

/// Breakdown of a single reward computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub look_ahead: LookAhead,
    /// Steering correction that would point the car at the target, in (-180, 180].
    pub target_steering_degree: f64,
    /// Commanded minus ideal steering, in units of the 60 degree scale.
    pub steering_error: f64,
    pub score: f64,
}

/// Scores a commanded steering angle against the look-ahead target.
#[derive(Debug, Clone)]
pub struct SteerScorer {
    config: RewardConfig,
}

impl Default for SteerScorer {
    fn default() -> Self {
        Self::new(RewardConfig::default())
    }
}

impl SteerScorer {
    pub fn new(config: RewardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RewardConfig {
        &self.config
    }

    /// Densified loop ordered in the driving direction.
    pub fn path(&self, params: &Params) -> Vec<Point> {
        let reference = params.waypoints.as_deref().unwrap_or(&[]);
        let base = select_base_path(params.is_reversed, reference, self.config.mode);
        densify(&base, self.config.densify_factor)
    }

    pub fn look_ahead_radius(&self, params: &Params) -> f64 {
        params.track_width * self.config.sight()
    }

    pub fn target_point(&self, params: &Params) -> Result<LookAhead, ParamsError> {
        self.validate(params)?;
        self.look_ahead(params)
    }

    pub fn target_steering_degree(&self, params: &Params) -> Result<f64, ParamsError> {
        self.evaluate(params)
            .map(|evaluation| evaluation.target_steering_degree)
    }

    pub fn score(&self, params: &Params) -> Result<f64, ParamsError> {
        self.evaluate(params).map(|evaluation| evaluation.score)
    }

    pub fn evaluate(&self, params: &Params) -> Result<Evaluation, ParamsError> {
        self.validate(params)?;

        let look_ahead = self.look_ahead(params)?;
        let target_steering_degree =
            steering_towards(params.car(), params.heading, look_ahead.target);
        let steering_error =
            (params.steering_angle - target_steering_degree) / STEERING_ERROR_SCALE_DEGREES;
        let score = score_steering_error(steering_error);

        Ok(Evaluation {
            look_ahead,
            target_steering_degree,
            steering_error,
            score,
        })
    }

    fn validate(&self, params: &Params) -> Result<(), ParamsError> {
        self.config.validate()?;
        params.validate(&self.config)
    }

    fn look_ahead(&self, params: &Params) -> Result<LookAhead, ParamsError> {
        let path = self.path(params);
        let radius = self.look_ahead_radius(params);

        select_target(&path, params.car(), radius).ok_or(ParamsError::TooFewWaypoints {
            count: 0,
            min: MIN_WAYPOINTS,
        })
    }
}

/// Steering correction, relative to `heading`, that points from `car` at `target`.
pub fn steering_towards(car: Point, heading: f64, target: Point) -> f64 {
    let (_, bearing) = to_polar(target.x - car.x, target.y - car.y);
    normalize_angle(bearing - heading)
}

/// `1 - |error|`, floored at [`MIN_REWARD`].
pub fn score_steering_error(error: f64) -> f64 {
    (1.0 - error.abs()).max(MIN_REWARD)
}

/// Reward for one simulator step.
pub fn reward_function(params: &Params, config: &RewardConfig) -> Result<f64, ParamsError> {
    SteerScorer::new(config.clone()).score(params)
}

/// Same as [`reward_function`], straight from the simulator's JSON dictionary.
pub fn reward_from_json(json: &str, config: &RewardConfig) -> Result<f64, ParamsError> {
    let params = Params::from_json(json)?;
    reward_function(&params, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Mode;

    fn straight_params(steering_angle: f64) -> Params {
        Params {
            x: 1.0,
            y: 0.0,
            heading: 0.0,
            steering_angle,
            track_width: 0.5,
            is_reversed: false,
            waypoints: Some(vec![
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 2.0),
                Point::new(0.0, 2.0),
            ]),
        }
    }

    #[test]
    fn test_score_steering_error() {
        let cases = [
            (0.0, 1.0),
            (0.5, 0.5),
            (-0.5, 0.5),
            (1.0, MIN_REWARD),
            (-3.0, MIN_REWARD),
            (0.995, MIN_REWARD),
        ];
        for &(error, expected) in &cases {
            let result = score_steering_error(error);
            assert!(
                (result - expected).abs() <= 1e-9,
                "{} {} {}",
                error,
                expected,
                result,
            );
        }
    }

    #[test]
    fn steering_towards_is_relative_to_heading() {
        let car = Point::new(0.0, 0.0);
        let target = Point::new(0.0, 1.0);
        assert!((steering_towards(car, 0.0, target) - 90.0).abs() <= 1e-9);
        assert!((steering_towards(car, 90.0, target)).abs() <= 1e-9);
        assert!((steering_towards(car, -170.0, target) - -100.0).abs() <= 1e-9);
    }

    #[test]
    fn perfect_steering_scores_one() {
        let scorer = SteerScorer::new(RewardConfig::new(Mode::Center));
        let evaluation = scorer.evaluate(&straight_params(0.0)).unwrap();

        assert_eq!(evaluation.look_ahead.target, Point::new(1.5, 0.0));
        assert_eq!(evaluation.target_steering_degree, 0.0);
        assert_eq!(evaluation.score, 1.0);
    }

    #[test]
    fn steering_off_by_thirty_scores_half() {
        let scorer = SteerScorer::new(RewardConfig::new(Mode::Center));
        let score = scorer.score(&straight_params(30.0)).unwrap();
        assert!((score - 0.5).abs() <= 1e-9);

        let score = scorer.score(&straight_params(-75.0)).unwrap();
        assert_eq!(score, MIN_REWARD);
    }

    #[test]
    fn invalid_params_are_rejected() {
        let mut params = straight_params(0.0);
        params.waypoints = None;
        assert_eq!(
            reward_function(&params, &RewardConfig::new(Mode::Center)),
            Err(ParamsError::MissingWaypoints)
        );

        let config = RewardConfig {
            densify_factor: 0,
            ..RewardConfig::new(Mode::Center)
        };
        assert_eq!(
            reward_function(&straight_params(0.0), &config),
            Err(ParamsError::InvalidDensifyFactor)
        );
    }

    #[test]
    fn huge_coordinates_are_rejected_not_scored() {
        let params = Params {
            x: 1e200,
            y: 0.0,
            heading: 0.0,
            steering_angle: 0.0,
            track_width: 0.5,
            is_reversed: false,
            waypoints: None,
        };
        assert_eq!(
            SteerScorer::default().score(&params),
            Err(ParamsError::CoordinateOutOfRange {
                field: "x",
                value: 1e200
            })
        );
    }

    #[test]
    fn reward_from_simulator_json() {
        let json = r#"{
            "x": 1.0, "y": 0.0, "heading": 0.0, "steering_angle": 0.0,
            "track_width": 0.5, "is_reversed": false, "speed": 1.0,
            "waypoints": [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]
        }"#;
        let reward = reward_from_json(json, &RewardConfig::new(Mode::Center)).unwrap();
        assert_eq!(reward, 1.0);

        let err = reward_from_json("{}", &RewardConfig::default()).unwrap_err();
        assert!(matches!(err, ParamsError::Malformed(_)));
    }
}
