//! Match state owned by the frame loop
//!
//! The presentation layer forwards key edges, calls [`GameState::update`] once
//! per frame and renders a [`Snapshot`]. Pacing and any pause after a goal are
//! left to the caller.

use hecs::World;
use tracing::info;

use crate::systems::{reset_round, set_accel, Accel};
use crate::{
    step, Ball, Config, ConfigError, Events, GameMap, GameRng, GoalScored, Paddle, Phase, Player,
    Score,
};

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub p1_paddle: Paddle,
    pub p2_paddle: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub paused: bool,
    pub winner: Option<Player>,
}

pub struct GameState {
    world: World,
    map: GameMap,
    config: Config,
    score: Score,
    events: Events,
    rng: GameRng,
    phase: Phase,
}

impl GameState {
    /// Build a match with a validated configuration, ready to serve
    pub fn new(config: Config, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    /// Standard rules with a seeded generator
    pub fn standard(seed: u64) -> Self {
        Self::build(Config::default(), GameRng::new(seed))
    }

    fn build(config: Config, rng: GameRng) -> Self {
        let mut game = Self {
            world: World::new(),
            map: GameMap::new(&config),
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            phase: Phase::Serving,
        };
        game.reset();
        game
    }

    /// Start a new rally: paddles back at their spawns, a fresh serve, paused.
    ///
    /// Scores are kept. A finished match stays finished; use
    /// [`GameState::new_match`] to play again.
    pub fn reset(&mut self) {
        reset_round(&mut self.world, &self.map, &self.config, &mut self.rng);
        if !matches!(self.phase, Phase::MatchOver { .. }) {
            self.phase = Phase::Serving;
        }
    }

    /// Zero the scores and serve the first rally of a new match
    pub fn new_match(&mut self) {
        self.score = Score::new();
        self.events.clear();
        self.phase = Phase::Serving;
        self.reset();
        info!("new match");
    }

    pub fn human_accel_up(&mut self, pressed: bool) {
        self.key_edge(Accel::Up, pressed);
    }

    pub fn human_accel_down(&mut self, pressed: bool) {
        self.key_edge(Accel::Down, pressed);
    }

    fn key_edge(&mut self, accel: Accel, pressed: bool) {
        set_accel(&mut self.world, Player::One, accel, pressed);
        if pressed && self.phase == Phase::Serving {
            self.phase = Phase::Rallying;
        }
    }

    /// Advance one frame. Does nothing while serving or after the match ends.
    pub fn update(&mut self) -> Option<GoalScored> {
        if self.phase != Phase::Rallying {
            self.events.clear();
            return None;
        }

        let goal = step(
            &mut self.world,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        )?;

        self.phase = match self.score.has_winner(self.config.win_score) {
            Some(winner) => {
                self.events.match_won = Some(winner);
                info!(
                    winner = winner.number(),
                    p1 = self.score.p1,
                    p2 = self.score.p2,
                    "match over"
                );
                Phase::MatchOver { winner }
            }
            None => Phase::Serving,
        };
        Some(goal)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Serving
    }

    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::MatchOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events from the most recent `update()`
    pub fn events(&self) -> Events {
        self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn paddle(&self, player: Player) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.player == player)
            .map(|(_e, p)| *p)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        Some(Snapshot {
            p1_paddle: self.paddle(Player::One)?,
            p2_paddle: self.paddle(Player::Two)?,
            ball: self.ball()?,
            score: self.score,
            paused: self.paused(),
            winner: self.winner(),
        })
    }

    /// Replace the ball, e.g. to stage a shot
    pub fn set_ball(&mut self, ball: Ball) {
        for (_entity, b) in self.world.query_mut::<&mut Ball>() {
            *b = ball;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_new_game_is_serving() {
        let game = GameState::standard(1);

        assert!(game.paused());
        assert_eq!(game.score(), Score::new());
        assert_eq!(game.winner(), None);

        let snap = game.snapshot().unwrap();
        assert_eq!(snap.ball.pos, DVec2::new(210.0, 300.0));
        assert_eq!((snap.p1_paddle.x, snap.p1_paddle.y), (20.0, 260.0));
        assert_eq!((snap.p2_paddle.x, snap.p2_paddle.y), (390.0, 260.0));
        assert_eq!((snap.p1_paddle.width, snap.p1_paddle.height), (10, 80));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = Config {
            paddle_height: 0,
            ..Config::new()
        };
        assert!(GameState::new(config, GameRng::default()).is_err());
    }

    #[test]
    fn test_unbounded_serve_speed_is_rejected_before_serving() {
        let config = Config {
            serve_speed_max: f64::INFINITY,
            ..Config::new()
        };
        let result = GameState::new(config, GameRng::new(1));
        assert!(matches!(result, Err(ConfigError::NonFinite { .. })));
    }

    #[test]
    fn test_update_is_frozen_while_serving() {
        let mut game = GameState::standard(2);
        let before = game.snapshot().unwrap();

        for _ in 0..10 {
            assert_eq!(game.update(), None);
        }

        assert_eq!(game.snapshot().unwrap(), before);
    }

    #[test]
    fn test_key_press_starts_rally() {
        let mut game = GameState::standard(3);

        game.human_accel_down(true);
        assert!(!game.paused());
        assert_eq!(game.phase(), Phase::Rallying);

        let start = game.ball().unwrap().pos;
        game.update();
        assert_ne!(game.ball().unwrap().pos, start);
        assert!(game.paddle(Player::One).unwrap().y < 260.0);
    }

    #[test]
    fn test_key_release_does_not_start_rally() {
        let mut game = GameState::standard(4);

        game.human_accel_up(false);

        assert!(game.paused());
    }

    #[test]
    fn test_reset_keeps_score_and_pauses() {
        let mut game = GameState::standard(5);
        game.human_accel_up(true);
        game.set_ball(Ball::new(
            DVec2::new(-19.0, 300.0),
            DVec2::new(-5.0, 0.0),
            5.0,
        ));
        game.update();
        assert_eq!(game.score().p2, 1);

        game.human_accel_up(true);
        game.reset();

        assert!(game.paused());
        assert_eq!(game.score().p2, 1);
        let p1 = game.paddle(Player::One).unwrap();
        assert_eq!((p1.y, p1.y_vel), (260.0, 0.0));
    }
}
