use crate::Player;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub p1: u8, // Human (left) player score
    pub p2: u8, // AI (right) player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, player: Player) {
        match player {
            Player::One => self.p1 += 1,
            Player::Two => self.p2 += 1,
        }
    }

    pub fn get(&self, player: Player) -> u8 {
        match player {
            Player::One => self.p1,
            Player::Two => self.p2,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Player> {
        if self.p1 >= win_score {
            Some(Player::One)
        } else if self.p2 >= win_score {
            Some(Player::Two)
        } else {
            None
        }
    }

    pub fn is_nil_nil(&self) -> bool {
        self.p1 == 0 && self.p2 == 0
    }
}

/// Random number generator, seeded once and threaded through every serve
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy (once per process)
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Where the match is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ball centred, waiting for the first human input
    Serving,
    Rallying,
    /// Terminal until a new match is started
    MatchOver { winner: Player },
}

/// Emitted by `update()` when a ball crosses a goal line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalScored {
    pub scorer: Player,
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub goal: Option<GoalScored>,
    pub paddle_hit: Option<Player>,
    pub wall_hit: bool,
    pub match_won: Option<Player>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
