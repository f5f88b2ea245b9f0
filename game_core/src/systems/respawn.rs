use glam::DVec2;
use hecs::World;
use rand::Rng;
use tracing::debug;

use crate::{create_ball, create_paddle, Config, GameMap, GameRng, Player};

/// Serve speed component: magnitude uniform in the configured range, sign
/// chosen by a fair coin
pub fn rand_velocity(rng: &mut GameRng, config: &Config) -> f64 {
    let magnitude = rng
        .0
        .gen_range(config.serve_speed_min..config.serve_speed_max);
    if rng.0.gen_bool(0.5) {
        -magnitude
    } else {
        magnitude
    }
}

/// Serve velocity for a fresh ball. Always heads right, toward the AI paddle.
pub fn serve_velocity(rng: &mut GameRng, config: &Config) -> DVec2 {
    let x = (rand_velocity(rng, config) * config.serve_x_scale).abs();
    let y = rand_velocity(rng, config) * config.serve_y_scale;
    DVec2::new(x, y)
}

/// Start a new rally: fresh paddles at their spawns and a newly served ball
pub fn reset_round(world: &mut World, map: &GameMap, config: &Config, rng: &mut GameRng) {
    world.clear();

    create_paddle(world, map, config, Player::One);
    create_paddle(world, map, config, Player::Two);

    let vel = serve_velocity(rng, config);
    create_ball(world, map.ball_spawn(), vel, config.ball_radius);

    debug!(vx = vel.x, vy = vel.y, "round reset");
}
