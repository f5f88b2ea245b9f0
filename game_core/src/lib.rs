pub mod components;
pub mod config;
pub mod game;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use resources::*;

pub use glam::DVec2;

use hecs::World;
use systems::*;

/// Advance the Pong simulation by one fixed frame
///
/// Velocities are in units per frame, so there is no `dt`. On a goal the
/// round is reset before returning.
pub fn step(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<GoalScored> {
    // Clear events at start of frame
    events.clear();

    // 1. Move paddles (human from key intents, AI toward the ball)
    move_human_paddles(world, map, config);
    move_ai_paddles(world, config);

    // 2. Check collisions against the paddles' new positions
    check_paddle_collisions(world, config, events);
    check_wall_collisions(world, map, events);

    // 3. Move ball
    move_ball(world);

    // 4. Check scoring (ball crossed a goal line)
    let goal = check_scoring(world, map, score, events)?;
    reset_round(world, map, config, rng);
    Some(goal)
}

/// Helper to create a paddle entity at its spawn point
///
/// Player one gets key-driven intents, player two the tracking AI.
pub fn create_paddle(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    player: Player,
) -> hecs::Entity {
    let spawn = map.paddle_spawn(player);
    let paddle = Paddle::new(
        player,
        spawn.x,
        spawn.y,
        config.max_velocity(player),
        config.paddle_width,
        config.paddle_height,
    );
    match player {
        Player::One => world.spawn((paddle, PaddleIntent::new())),
        Player::Two => world.spawn((paddle, AiTracker)),
    }
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: DVec2, vel: DVec2, radius: f64) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius),))
}
