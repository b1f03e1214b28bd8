use log::trace;
use rand::Rng;

use crate::{Ball, Config, Paddle, Side};

/// Outgoing direction after a paddle hit
///
/// A hit at the paddle's top edge (`relative_location` = 1) sends the ball
/// steeply upward, a center hit sends it nearly straight across and a bottom
/// edge hit sends it steeply downward. Left paddle hits travel rightward
/// (positive degrees), right paddle hits leftward.
pub fn deflection_degrees(relative_location: f32, side: Side, config: &Config) -> f32 {
    let magnitude = 90.0 + (-relative_location) * config.deflection_half_range();
    match side {
        Side::Left => magnitude,
        Side::Right => -magnitude,
    }
}

/// Check the ball against the left paddle, then the right one
///
/// At most one paddle hit is registered per ball per tick. A ball already
/// travelling away from a paddle is ignored by it, so a ball still overlapping
/// the paddle on the tick after a return is not returned twice.
pub fn check_paddle_collisions<R: Rng + ?Sized>(
    ball: &mut Ball,
    paddles: &[Paddle; 2],
    config: &Config,
    rng: &mut R,
) -> Option<Side> {
    for paddle in paddles {
        let approaching = match paddle.side() {
            Side::Left => ball.direction() < 0.0,
            Side::Right => ball.direction() > 0.0,
        };
        if !approaching {
            continue;
        }

        if let Some(location) = paddle.relative_collision_location(ball, rng) {
            let degrees = deflection_degrees(location, paddle.side(), config);
            trace!(
                "Ball hit {:?} paddle at {location:.2}, deflecting to {degrees:.1}°",
                paddle.side()
            );
            ball.set_direction(degrees);
            ball.change_speed(config.ball_speed_increase, config.ball_speed_min);
            return Some(paddle.side());
        }
    }
    None
}
