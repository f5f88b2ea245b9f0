//! Scripted stand-in for the keyboard
//!
//! Produces press/release edges the way a player holding the arrow keys would.

use game_core::{GameState, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEdge {
    Pressed(Key),
    Released(Key),
}

impl KeyEdge {
    pub fn apply(self, game: &mut GameState) {
        match self {
            KeyEdge::Pressed(Key::Up) => game.human_accel_up(true),
            KeyEdge::Released(Key::Up) => game.human_accel_up(false),
            KeyEdge::Pressed(Key::Down) => game.human_accel_down(true),
            KeyEdge::Released(Key::Down) => game.human_accel_down(false),
        }
    }
}

/// Holds at most one key, steering the paddle centre toward the ball
pub struct Autopilot {
    held: Option<Key>,
    deadzone: f64,
}

impl Autopilot {
    pub fn new(deadzone: f64) -> Self {
        Self {
            held: None,
            deadzone,
        }
    }

    fn wanted(&self, snap: &Snapshot) -> Option<Key> {
        if snap.winner.is_some() {
            return None;
        }
        if snap.paused {
            // a held key has to come up before a fresh press can serve
            return match self.held {
                Some(_) => None,
                None => Some(Key::Up),
            };
        }
        let offset = snap.ball.pos.y - snap.p1_paddle.center_y();
        if offset > self.deadzone {
            Some(Key::Up)
        } else if offset < -self.deadzone {
            Some(Key::Down)
        } else {
            None
        }
    }

    /// Key edges to send before this frame's update
    pub fn edges(&mut self, snap: &Snapshot) -> Vec<KeyEdge> {
        let wanted = self.wanted(snap);
        if wanted == self.held {
            return Vec::new();
        }

        let mut edges = Vec::with_capacity(2);
        if let Some(key) = self.held {
            edges.push(KeyEdge::Released(key));
        }
        if let Some(key) = wanted {
            edges.push(KeyEdge::Pressed(key));
        }
        self.held = wanted;
        edges
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(20.0)
    }
}
