/// Game tuning parameters for Pong
///
/// Velocities and accelerations are in units per frame at a nominal 60 Hz.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f64 = 420.0;
    pub const FIELD_HEIGHT: f64 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: u32 = 10;
    pub const PADDLE_HEIGHT: u32 = 80;
    pub const PADDLE_ACCEL: f64 = 0.7;
    pub const FRICTION: f64 = 0.65;
    pub const HUMAN_MAX_VELOCITY: f64 = 10.0;
    pub const AI_MAX_VELOCITY: f64 = 4.0;
    pub const LEFT_PADDLE_X: f64 = 20.0;
    pub const RIGHT_PADDLE_X: f64 = 390.0;
    pub const PADDLE_START_Y: f64 = 260.0;

    // AI tracking
    pub const AI_DEADBAND: f64 = 15.0;
    pub const AI_GAIN: f64 = 4.0; // nudge for a half-paddle offset inside the deadband

    // Ball
    pub const BALL_RADIUS: f64 = 5.0;
    pub const BALL_SPAWN_X: f64 = 210.0;
    pub const BALL_SPAWN_Y: f64 = 300.0;
    pub const MAX_BOUNCE_ANGLE: f64 = std::f64::consts::PI * 5.0 / 12.0; // 75°

    // Serve
    pub const SERVE_SPEED_MIN: f64 = 3.5;
    pub const SERVE_SPEED_MAX: f64 = 5.0;
    pub const SERVE_X_SCALE: f64 = 2.0;
    pub const SERVE_Y_SCALE: f64 = 0.5;

    // Goals
    pub const LEFT_GOAL_X: f64 = -20.0;
    pub const RIGHT_GOAL_X: f64 = 450.0;

    // Score
    pub const WIN_SCORE: u8 = 10; // First to 10 wins

    // Timing (presentation only; the simulation is frame-stepped)
    pub const FRAME_DT: f64 = 1.0 / 60.0;
    pub const GOAL_PAUSE_MS: u64 = 500;
    pub const WINNER_HOLD_MS: u64 = 2000;
}
