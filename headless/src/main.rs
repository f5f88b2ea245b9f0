mod autopilot;
mod clock;
mod driver;
mod options;

use std::time::Duration;

use clap::Parser;
use game_core::{Config, GameRng, GameState, Params};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use autopilot::Autopilot;
use clock::FrameClock;
use driver::{run_match, score_line, MatchOutcome};
use options::Options;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = Options::parse();

    // One generator for the whole process, seeded once
    let rng = match options.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let mut game = match GameState::new(Config::default(), rng) {
        Ok(game) => game,
        Err(e) => {
            error!("invalid game configuration: {e}");
            std::process::exit(1);
        }
    };

    let frame_budget = Duration::from_secs_f64(Params::FRAME_DT);
    let mut clock = FrameClock::new(frame_budget, !options.fast);
    let mut pilot = Autopilot::default();

    info!(seed = ?options.seed, matches = options.matches, fast = options.fast, "starting");

    for round in 1..=options.matches {
        match run_match(&mut game, &mut pilot, &mut clock, options.max_frames) {
            MatchOutcome::Won { winner, score } => {
                info!(
                    round,
                    "match won by player {}: {}",
                    winner.number(),
                    score_line(score)
                );
            }
            MatchOutcome::Abandoned { score } => {
                info!(round, "match abandoned: {}", score_line(score));
            }
        }
        game.new_match();
    }
}
