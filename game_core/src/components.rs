use glam::DVec2;

/// Which side a paddle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Human player, left paddle
    One,
    /// Scripted opponent, right paddle
    Two,
}

impl Player {
    /// 1-based number used in score and winner text
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// Paddle component. `x`/`y` is the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub player: Player,
    pub x: f64,
    pub y: f64,
    pub y_vel: f64,
    pub max_vel: f64,
    pub width: u32,
    pub height: u32,
}

impl Paddle {
    pub fn new(player: Player, x: f64, y: f64, max_vel: f64, width: u32, height: u32) -> Self {
        Self {
            player,
            x,
            y,
            y_vel: 0.0,
            max_vel,
            width,
            height,
        }
    }

    pub fn half_height(&self) -> f64 {
        f64::from(self.height) / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.half_height()
    }

    pub fn top(&self) -> f64 {
        self.y + f64::from(self.height)
    }

    /// Whether `y` lies on the paddle's vertical span, edges included
    pub fn spans(&self, y: f64) -> bool {
        y >= self.y && y <= self.top()
    }
}

/// Acceleration flags driven by key presses (human paddle only)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub accel_up: bool,
    pub accel_down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Marks a paddle steered by the ball-tracking AI
#[derive(Debug, Clone, Copy, Default)]
pub struct AiTracker;

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
}

impl Ball {
    pub fn new(pos: DVec2, vel: DVec2, radius: f64) -> Self {
        Self { pos, vel, radius }
    }

    pub fn speed(&self) -> f64 {
        self.vel.length()
    }
}
