use crate::{AiTracker, Ball, Config, GameMap, Paddle, PaddleIntent};
use hecs::World;

/// Accelerate key-driven paddles, then clamp and move them.
///
/// The position is clamped *before* the velocity is applied, so a paddle can
/// overshoot a wall by one frame's travel until the next clamp catches it.
pub fn move_human_paddles(world: &mut World, map: &GameMap, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.accel_up {
            paddle.y_vel += config.paddle_accel;
        } else if intent.accel_down {
            paddle.y_vel -= config.paddle_accel;
        } else {
            paddle.y_vel *= config.friction;
        }

        paddle.y_vel = paddle.y_vel.clamp(-paddle.max_vel, paddle.max_vel);

        paddle.y = map.clamp_paddle_y(paddle.y, paddle.height);
        paddle.y += paddle.y_vel;
    }
}

/// Vertical step the tracking AI takes toward `ball_y` this frame
///
/// Inside the deadband the step is proportional to the offset; outside it the
/// paddle moves at full speed. AI paddles are not clamped to the field.
pub fn ai_step(paddle: &Paddle, ball_y: f64, config: &Config) -> f64 {
    let offset = ball_y - paddle.center_y();
    if offset.abs() < config.ai_deadband {
        offset / paddle.half_height() * config.ai_gain
    } else if offset > 0.0 {
        paddle.max_vel
    } else {
        -paddle.max_vel
    }
}

/// Steer AI paddles toward the ball's current height
pub fn move_ai_paddles(world: &mut World, config: &Config) {
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.y);
    let Some(ball_y) = ball_y else {
        return;
    };

    for (_entity, (paddle, _ai)) in world.query_mut::<(&mut Paddle, &AiTracker)>() {
        let step = ai_step(paddle, ball_y, config);
        paddle.y_vel = step;
        paddle.y += step;
    }
}

/// Move ball by one frame of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Player};
    use approx::assert_relative_eq;
    use glam::DVec2;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn setup_world() -> (World, Config, GameMap) {
        let config = Config::new();
        let map = GameMap::new(&config);
        (World::new(), config, map)
    }

    fn spawn_human(world: &mut World, y: f64, intent: PaddleIntent) -> hecs::Entity {
        world.spawn((Paddle::new(Player::One, 20.0, y, 10.0, 10, 80), intent))
    }

    fn spawn_ai(world: &mut World, y: f64) -> hecs::Entity {
        world.spawn((Paddle::new(Player::Two, 390.0, y, 4.0, 10, 80), AiTracker))
    }

    fn paddle(world: &World, entity: hecs::Entity) -> Paddle {
        *world.get::<&Paddle>(entity).unwrap()
    }

    #[test]
    fn test_accel_up_increases_velocity() {
        let (mut world, config, map) = setup_world();
        let intent = PaddleIntent {
            accel_up: true,
            accel_down: false,
        };
        let entity = spawn_human(&mut world, 260.0, intent);

        move_human_paddles(&mut world, &map, &config);

        let p = paddle(&world, entity);
        assert_relative_eq!(p.y_vel, 0.7);
        assert_relative_eq!(p.y, 260.7);
    }

    #[test]
    fn test_up_wins_when_both_pressed() {
        let (mut world, config, map) = setup_world();
        let intent = PaddleIntent {
            accel_up: true,
            accel_down: true,
        };
        let entity = spawn_human(&mut world, 260.0, intent);

        move_human_paddles(&mut world, &map, &config);

        assert!(paddle(&world, entity).y_vel > 0.0);
    }

    #[test]
    fn test_velocity_caps_at_max() {
        let (mut world, config, map) = setup_world();
        let intent = PaddleIntent {
            accel_up: false,
            accel_down: true,
        };
        let entity = spawn_human(&mut world, 300.0, intent);

        for _ in 0..30 {
            move_human_paddles(&mut world, &map, &config);
        }

        assert_eq!(paddle(&world, entity).y_vel, -10.0);
    }

    #[test]
    fn test_velocity_decays_geometrically_without_input() {
        let (mut world, config, map) = setup_world();
        let entity = spawn_human(&mut world, 300.0, PaddleIntent::new());
        world.get::<&mut Paddle>(entity).unwrap().y_vel = 8.0;

        let mut previous = 8.0;
        for _ in 0..60 {
            move_human_paddles(&mut world, &map, &config);
            let current = paddle(&world, entity).y_vel;
            assert_relative_eq!(current, previous * 0.65, max_relative = 1e-12);
            assert!(current.abs() < previous.abs() || current == 0.0);
            previous = current;
        }
        assert!(previous.abs() < 1e-9, "Velocity should come to rest");
    }

    #[test]
    fn test_clamp_then_move_overshoots_for_one_frame() {
        let (mut world, config, map) = setup_world();
        let intent = PaddleIntent {
            accel_up: true,
            accel_down: false,
        };
        let entity = spawn_human(&mut world, 559.0, intent);
        world.get::<&mut Paddle>(entity).unwrap().y_vel = 10.0;

        move_human_paddles(&mut world, &map, &config);
        // 559 is inside bounds, so it moves the full 10
        assert_relative_eq!(paddle(&world, entity).y, 569.0);

        move_human_paddles(&mut world, &map, &config);
        // clamped back to 560 first, then moved again
        assert_relative_eq!(paddle(&world, entity).y, 570.0);
    }

    #[test]
    fn test_paddle_stays_in_bounds_for_random_traces() {
        let (_world, config, map) = setup_world();
        let low = -40.0;
        let high = map.height - 40.0;

        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut world = World::new();
            let entity = spawn_human(&mut world, 260.0, PaddleIntent::new());

            for _ in 0..600 {
                let intent = PaddleIntent {
                    accel_up: rng.gen_bool(0.4),
                    accel_down: rng.gen_bool(0.4),
                };
                *world.get::<&mut PaddleIntent>(entity).unwrap() = intent;

                move_human_paddles(&mut world, &map, &config);

                let p = paddle(&world, entity);
                assert!(
                    p.y >= low - p.max_vel && p.y <= high + p.max_vel,
                    "seed {seed}: y {} left the field by more than one frame",
                    p.y
                );
            }

            // with keys released the paddle settles back inside the bounds
            *world.get::<&mut PaddleIntent>(entity).unwrap() = PaddleIntent::new();
            for _ in 0..120 {
                move_human_paddles(&mut world, &map, &config);
            }
            let p = paddle(&world, entity);
            assert!(
                p.y >= low - 1e-6 && p.y <= high + 1e-6,
                "seed {seed}: resting y {} outside the field",
                p.y
            );
        }
    }

    #[test]
    fn test_ai_moves_full_speed_toward_distant_ball() {
        let (mut world, config, _map) = setup_world();
        let entity = spawn_ai(&mut world, 260.0);
        create_ball(&mut world, DVec2::new(210.0, 500.0), DVec2::ZERO, 5.0);

        move_ai_paddles(&mut world, &config);
        assert_eq!(paddle(&world, entity).y, 264.0, "Ball above: move up");

        world.clear();
        let entity = spawn_ai(&mut world, 260.0);
        create_ball(&mut world, DVec2::new(210.0, 100.0), DVec2::ZERO, 5.0);

        move_ai_paddles(&mut world, &config);
        assert_eq!(paddle(&world, entity).y, 256.0, "Ball below: move down");
    }

    #[test]
    fn test_ai_proportional_inside_deadband() {
        let config = Config::new();
        let p = Paddle::new(Player::Two, 390.0, 260.0, 4.0, 10, 80);

        assert_relative_eq!(ai_step(&p, 310.0, &config), 10.0 / 40.0 * 4.0);
        assert_relative_eq!(ai_step(&p, 290.0, &config), -1.0);
        assert_eq!(ai_step(&p, 300.0, &config), 0.0);
        // deadband edge is exclusive
        assert_eq!(ai_step(&p, 315.0, &config), 4.0);
    }

    #[test]
    fn test_ai_is_not_clamped() {
        let (mut world, config, _map) = setup_world();
        let entity = spawn_ai(&mut world, 700.0);
        create_ball(&mut world, DVec2::new(210.0, 900.0), DVec2::ZERO, 5.0);

        move_ai_paddles(&mut world, &config);

        assert_eq!(paddle(&world, entity).y, 704.0);
    }

    #[test]
    fn test_ai_without_ball_stays_put() {
        let (mut world, config, _map) = setup_world();
        let entity = spawn_ai(&mut world, 260.0);

        move_ai_paddles(&mut world, &config);

        assert_eq!(paddle(&world, entity).y, 260.0);
    }

    #[test]
    fn test_move_ball() {
        let (mut world, _config, _map) = setup_world();
        let entity = create_ball(&mut world, DVec2::new(210.0, 300.0), DVec2::new(7.0, -2.0), 5.0);

        move_ball(&mut world);

        assert_eq!(
            world.get::<&Ball>(entity).unwrap().pos,
            DVec2::new(217.0, 298.0)
        );
    }
}
