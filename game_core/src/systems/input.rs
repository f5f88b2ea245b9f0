use hecs::World;

use crate::components::*;

/// Direction key a paddle responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accel {
    Up,
    Down,
}

/// Apply a key edge to the intent of `player`'s paddle.
///
/// Returns false when that paddle takes no key input (e.g. the AI paddle).
pub fn set_accel(world: &mut World, player: Player, accel: Accel, pressed: bool) -> bool {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.player != player {
            continue;
        }
        match accel {
            Accel::Up => intent.accel_up = pressed,
            Accel::Down => intent.accel_down = pressed,
        }
        return true;
    }
    false
}
