use crate::{Params, Player};
use thiserror::Error;

/// Game configuration
///
/// Immutable once handed to [`crate::GameState`]. `Config::default()` carries
/// the standard rules; tests override individual fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub field_width: f64,
    pub field_height: f64,
    pub paddle_width: u32,
    pub paddle_height: u32,
    pub paddle_accel: f64,
    pub friction: f64,
    pub human_max_velocity: f64,
    pub ai_max_velocity: f64,
    pub left_paddle_x: f64,
    pub right_paddle_x: f64,
    pub paddle_start_y: f64,
    pub ai_deadband: f64,
    pub ai_gain: f64,
    pub ball_radius: f64,
    pub ball_spawn_x: f64,
    pub ball_spawn_y: f64,
    pub max_bounce_angle: f64,
    pub serve_speed_min: f64,
    pub serve_speed_max: f64,
    pub serve_x_scale: f64,
    pub serve_y_scale: f64,
    pub left_goal_x: f64,
    pub right_goal_x: f64,
    pub win_score: u8,
}

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("field must have positive size, got {width}x{height}")]
    FieldSize { width: f64, height: f64 },
    #[error("paddle must have non-zero size, got {width}x{height}")]
    PaddleSize { width: u32, height: u32 },
    #[error("ball radius must be positive, got {0}")]
    BallRadius(f64),
    #[error("serve speed range [{min}, {max}) is empty or negative")]
    ServeRange { min: f64, max: f64 },
    #[error("friction must lie in [0, 1], got {0}")]
    Friction(f64),
    #[error("max velocity for player {player} must not be negative, got {value}")]
    MaxVelocity { player: u8, value: f64 },
    #[error("win score must be at least 1")]
    WinScore,
    #[error("goal lines ({left}, {right}) must lie outside the field")]
    GoalLines { left: f64, right: f64 },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_accel: Params::PADDLE_ACCEL,
            friction: Params::FRICTION,
            human_max_velocity: Params::HUMAN_MAX_VELOCITY,
            ai_max_velocity: Params::AI_MAX_VELOCITY,
            left_paddle_x: Params::LEFT_PADDLE_X,
            right_paddle_x: Params::RIGHT_PADDLE_X,
            paddle_start_y: Params::PADDLE_START_Y,
            ai_deadband: Params::AI_DEADBAND,
            ai_gain: Params::AI_GAIN,
            ball_radius: Params::BALL_RADIUS,
            ball_spawn_x: Params::BALL_SPAWN_X,
            ball_spawn_y: Params::BALL_SPAWN_Y,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            serve_speed_min: Params::SERVE_SPEED_MIN,
            serve_speed_max: Params::SERVE_SPEED_MAX,
            serve_x_scale: Params::SERVE_X_SCALE,
            serve_y_scale: Params::SERVE_Y_SCALE,
            left_goal_x: Params::LEFT_GOAL_X,
            right_goal_x: Params::RIGHT_GOAL_X,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the values the simulation divides by or samples from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in self.float_fields() {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return Err(ConfigError::FieldSize {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if self.paddle_width == 0 || self.paddle_height == 0 {
            return Err(ConfigError::PaddleSize {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if !(self.ball_radius > 0.0) {
            return Err(ConfigError::BallRadius(self.ball_radius));
        }
        if !(self.serve_speed_min >= 0.0 && self.serve_speed_min < self.serve_speed_max) {
            return Err(ConfigError::ServeRange {
                min: self.serve_speed_min,
                max: self.serve_speed_max,
            });
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(ConfigError::Friction(self.friction));
        }
        for player in [Player::One, Player::Two] {
            let value = self.max_velocity(player);
            if !(value >= 0.0) {
                return Err(ConfigError::MaxVelocity {
                    player: player.number(),
                    value,
                });
            }
        }
        if self.win_score == 0 {
            return Err(ConfigError::WinScore);
        }
        if !(self.left_goal_x < 0.0 && self.right_goal_x > self.field_width) {
            return Err(ConfigError::GoalLines {
                left: self.left_goal_x,
                right: self.right_goal_x,
            });
        }
        Ok(())
    }

    fn float_fields(&self) -> [(&'static str, f64); 21] {
        [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_accel", self.paddle_accel),
            ("friction", self.friction),
            ("human_max_velocity", self.human_max_velocity),
            ("ai_max_velocity", self.ai_max_velocity),
            ("left_paddle_x", self.left_paddle_x),
            ("right_paddle_x", self.right_paddle_x),
            ("paddle_start_y", self.paddle_start_y),
            ("ai_deadband", self.ai_deadband),
            ("ai_gain", self.ai_gain),
            ("ball_radius", self.ball_radius),
            ("ball_spawn_x", self.ball_spawn_x),
            ("ball_spawn_y", self.ball_spawn_y),
            ("max_bounce_angle", self.max_bounce_angle),
            ("serve_speed_min", self.serve_speed_min),
            ("serve_speed_max", self.serve_speed_max),
            ("serve_x_scale", self.serve_x_scale),
            ("serve_y_scale", self.serve_y_scale),
            ("left_goal_x", self.left_goal_x),
            ("right_goal_x", self.right_goal_x),
        ]
    }

    /// Get X position for paddle based on player
    pub fn paddle_x(&self, player: Player) -> f64 {
        match player {
            Player::One => self.left_paddle_x,
            Player::Two => self.right_paddle_x,
        }
    }

    pub fn max_velocity(&self, player: Player) -> f64 {
        match player {
            Player::One => self.human_max_velocity,
            Player::Two => self.ai_max_velocity,
        }
    }
}
