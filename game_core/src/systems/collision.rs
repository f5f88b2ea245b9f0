use crate::{Ball, Config, Events, GameMap, Paddle, Player};
use glam::DVec2;
use hecs::World;
use tracing::trace;

/// Where the ball struck the paddle: -1 at the bottom edge, 0 at the centre,
/// 1 at the top edge
pub fn normalized_intersect(ball_y: f64, paddle: &Paddle) -> f64 {
    (ball_y - paddle.center_y()) / paddle.half_height()
}

pub fn bounce_angle(normalized: f64, max_bounce_angle: f64) -> f64 {
    normalized * max_bounce_angle
}

/// Outgoing velocity after bouncing off `struck`'s paddle at `angle`.
///
/// The speed is taken from the incoming velocity, so the magnitude is unchanged.
pub fn deflect(vel: DVec2, angle: f64, struck: Player) -> DVec2 {
    let speed = vel.length();
    let dir = match struck {
        Player::One => 1.0,
        Player::Two => -1.0,
    };
    DVec2::new(dir * angle.cos() * speed, angle.sin() * speed)
}

/// Contact x for a ball hitting `paddle`, if the ball is inside the paddle's
/// collision window this frame.
///
/// The window is one frame of horizontal travel deep, measured from the
/// contact line back toward the ball.
pub fn collision_window(ball: &Ball, paddle: &Paddle) -> Option<f64> {
    if !paddle.spans(ball.pos.y) {
        return None;
    }
    let x = ball.pos.x;
    match paddle.player {
        Player::One => {
            let contact = paddle.x + f64::from(paddle.width) + ball.radius;
            (x <= contact && x >= contact - ball.vel.x.abs()).then_some(contact)
        }
        Player::Two => {
            let contact = paddle.x - ball.radius;
            (x >= contact && x <= contact + ball.vel.x).then_some(contact)
        }
    }
}

/// Bounce the ball off whichever paddle it reached, left paddle first
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    let left = paddles.iter().find(|p| p.player == Player::One);
    let right = paddles.iter().find(|p| p.player == Player::Two);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let incoming = *ball;
        let window = |paddle: Option<&Paddle>| {
            paddle.and_then(|p| collision_window(&incoming, p).map(|contact| (*p, contact)))
        };

        let Some((paddle, contact)) = window(left).or_else(|| window(right)) else {
            continue;
        };

        ball.pos.x = contact;
        let angle = bounce_angle(
            normalized_intersect(ball.pos.y, &paddle),
            config.max_bounce_angle,
        );
        ball.vel = deflect(ball.vel, angle, paddle.player);
        events.paddle_hit = Some(paddle.player);

        trace!(player = paddle.player.number(), angle, "ball hit paddle");
    }
}

/// Reflect the ball's vertical velocity at the top and bottom walls.
///
/// The position is not corrected, so the ball may sit past the wall for a frame.
pub fn check_wall_collisions(world: &mut World, map: &GameMap, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if map.touches_wall(ball.pos.y, ball.radius) {
            ball.vel.y = -ball.vel.y;
            events.wall_hit = true;
        }
    }
}
