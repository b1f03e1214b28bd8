use crate::{Ball, Board, Config, Events, Paddle, PaddleMove};

/// Move a ball for one tick, recording any top/bottom wall bounce
pub fn move_ball(ball: &mut Ball, dt_millis: f32, board: &Board, events: &mut Events) {
    if ball.advance(dt_millis, board.height) {
        events.ball_hit_wall = true;
    }
}

/// Apply one host paddle move
///
/// A move that arrives before any frame has been measured is scaled against
/// the nominal frame time instead of zero, so it is not swallowed entirely.
pub fn move_paddle(paddle: &mut Paddle, mv: &PaddleMove, board: &Board, config: &Config) {
    let dt_millis = if mv.dt_millis > 0.0 {
        mv.dt_millis
    } else {
        config.nominal_frame_millis
    };
    paddle.move_by(mv.delta_y, board.height, dt_millis);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Controller, Direction, Side};
    use glam::Vec2;

    #[test]
    fn test_move_ball_flags_wall_hit() {
        let board = Board::new(200.0, 200.0, 0.0);
        let mut events = Events::new();
        let mut ball = Ball::new(
            Vec2::new(100.0, 10.5),
            10.0,
            0.1,
            Direction::new(-30.0),
            Color::WHITE,
        );

        move_ball(&mut ball, 10.0, &board, &mut events);
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");

        events.clear();
        move_ball(&mut ball, 10.0, &board, &mut events);
        assert!(!events.ball_hit_wall, "Ball is now heading away from the wall");
    }

    #[test]
    fn test_move_paddle_uses_nominal_frame_without_measurement() {
        let board = Board::new(200.0, 200.0, 0.0);
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Left, Controller::Human, &board, &config);
        let start = paddle.top();

        let mv = PaddleMove {
            side: Side::Left,
            delta_y: 5.0,
            dt_millis: 0.0,
        };
        move_paddle(&mut paddle, &mv, &board, &config);
        assert_eq!(paddle.top(), start + 5.0);
    }
}
