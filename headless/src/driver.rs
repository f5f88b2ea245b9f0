//! Frame loop: input, update, pacing, and the text a window would show

use std::time::Duration;

use game_core::{GameState, Params, Player, Score};
use tracing::{info, warn};

use crate::autopilot::Autopilot;
use crate::clock::FrameClock;

/// Text shown before the first serve of a match
pub fn instructions(win_score: u8) -> [String; 2] {
    [
        "To play use the up and down arrow keys".to_string(),
        format!("First player to {win_score} point wins"),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Won { winner: Player, score: Score },
    /// Frame limit reached before anyone won
    Abandoned { score: Score },
}

pub fn score_line(score: Score) -> String {
    format!("P1 {}  P2 {}", score.p1, score.p2)
}

/// Play one match to completion (or the frame limit)
pub fn run_match(
    game: &mut GameState,
    pilot: &mut Autopilot,
    clock: &mut FrameClock,
    max_frames: u64,
) -> MatchOutcome {
    let goal_pause = Duration::from_millis(Params::GOAL_PAUSE_MS);
    let winner_hold = Duration::from_millis(Params::WINNER_HOLD_MS);
    let mut shown_instructions = false;

    for _frame in 0..max_frames {
        clock.begin();

        let Some(snap) = game.snapshot() else {
            warn!("game has no ball or paddles, abandoning match");
            return MatchOutcome::Abandoned {
                score: game.score(),
            };
        };
        if snap.paused && snap.score.is_nil_nil() && !shown_instructions {
            for line in instructions(game.config().win_score) {
                info!("{line}");
            }
            shown_instructions = true;
        }

        for edge in pilot.edges(&snap) {
            edge.apply(game);
        }

        if let Some(goal) = game.update() {
            info!(scorer = goal.scorer.number(), "{}", score_line(game.score()));

            if let Some(winner) = game.winner() {
                info!("Player {} wins", winner.number());
                clock.pause(winner_hold);
                return MatchOutcome::Won {
                    winner,
                    score: game.score(),
                };
            }
            clock.pause(goal_pause);
        }

        clock.finish();
    }

    warn!(max_frames, "match abandoned at frame limit");
    MatchOutcome::Abandoned {
        score: game.score(),
    }
}
