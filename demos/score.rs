use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::prelude::*;
use track_reward::{Mode, Params, Point, RewardConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Opts {
    #[clap(allow_hyphen_values = true)]
    pub x: f64,
    #[clap(allow_hyphen_values = true)]
    pub y: f64,
    #[clap(long, default_value = "0", allow_hyphen_values = true)]
    pub heading: f64,
    #[clap(long, default_value = "0", allow_hyphen_values = true)]
    pub steering_angle: f64,
    #[clap(long, default_value = "0.6")]
    pub track_width: f64,
    #[clap(long)]
    pub reversed: bool,
    #[clap(long, default_value = "shortcut")]
    pub mode: Mode,
    #[clap(long, default_value = "1.0")]
    pub max_sight: f64,
    /// JSON file holding the centerline as a list of [x, y] pairs.
    #[clap(long)]
    pub waypoints: Option<PathBuf>,
    /// Score this many random steering angles instead of the given one.
    #[clap(long)]
    pub sweep: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Opts {
        x,
        y,
        heading,
        steering_angle,
        track_width,
        reversed,
        mode,
        max_sight,
        waypoints,
        sweep,
    } = Opts::parse();

    let waypoints: Option<Vec<Point>> = match waypoints {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("failed reading {}", path.display()))?;
            Some(serde_json::from_str(&text).context("waypoints must be [[x, y], ...]")?)
        }
        None => None,
    };

    let config = RewardConfig {
        mode,
        max_sight,
        ..RewardConfig::default()
    };
    let scorer = config.build()?;

    let mut params = Params {
        x,
        y,
        heading,
        steering_angle,
        track_width,
        is_reversed: reversed,
        waypoints,
    };

    let evaluation = scorer.evaluate(&params)?;
    let target = evaluation.look_ahead.target;
    println!(
        "target ({:.4}, {:.4}) ideal steering {:.2} deg",
        target.x, target.y, evaluation.target_steering_degree
    );

    match sweep {
        None => println!("score {:.4}", evaluation.score),
        Some(count) => {
            // Rewards for random steering commands within the usual servo range
            let mut rng = rand::thread_rng();
            let mut angles: Vec<f64> = (0..count).map(|_| rng.gen_range(-30.0..=30.0)).collect();
            angles.sort_by(f64::total_cmp);

            for angle in angles {
                params.steering_angle = angle;
                println!("{:>8.2} {:.4}", angle, scorer.score(&params)?);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Opts;
    use clap::Parser;

    #[test]
    fn accepts_negative_coordinates() {
        let opts = Opts::try_parse_from(["score", "-2.5", "-1.0", "--heading", "-90"]).unwrap();
        assert_eq!(opts.x, -2.5);
        assert_eq!(opts.y, -1.0);
        assert_eq!(opts.heading, -90.0);
        assert!(!opts.reversed);
    }
}
