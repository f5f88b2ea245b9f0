use glam::DVec2;

use crate::{Config, Player};

/// Play-field geometry derived from a [`Config`]
///
/// Origin is the bottom-left corner and y grows upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameMap {
    pub width: f64,
    pub height: f64,
    ball_spawn: DVec2,
    paddle_spawn: [DVec2; 2],
    goal_lines: (f64, f64),
}

impl GameMap {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.field_width,
            height: config.field_height,
            ball_spawn: DVec2::new(config.ball_spawn_x, config.ball_spawn_y),
            paddle_spawn: [
                DVec2::new(config.paddle_x(Player::One), config.paddle_start_y),
                DVec2::new(config.paddle_x(Player::Two), config.paddle_start_y),
            ],
            goal_lines: (config.left_goal_x, config.right_goal_x),
        }
    }

    pub fn ball_spawn(&self) -> DVec2 {
        self.ball_spawn
    }

    /// Bottom-left corner a paddle starts each round at
    pub fn paddle_spawn(&self, player: Player) -> DVec2 {
        match player {
            Player::One => self.paddle_spawn[0],
            Player::Two => self.paddle_spawn[1],
        }
    }

    /// Clamp a paddle's bottom edge so at least half of it stays on the field
    pub fn clamp_paddle_y(&self, y: f64, paddle_height: u32) -> f64 {
        let half_height = f64::from(paddle_height) / 2.0;
        y.clamp(-half_height, self.height - half_height)
    }

    /// Whether a ball centred at `y` touches the top or bottom wall
    pub fn touches_wall(&self, y: f64, radius: f64) -> bool {
        y <= radius || y >= self.height - radius
    }

    /// Player credited with a goal when the ball is at `x`, if any
    pub fn goal_scorer(&self, x: f64) -> Option<Player> {
        let (left, right) = self.goal_lines;
        if x < left {
            Some(Player::Two)
        } else if x > right {
            Some(Player::One)
        } else {
            None
        }
    }
}
