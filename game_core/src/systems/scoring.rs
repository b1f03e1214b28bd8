use crate::{Ball, Board, Color, Side};

/// Check whether the ball reached a side wall, marking it with `scored_color` if so
///
/// Returns the wall that was hit. The player on the opposite side earns the point.
pub fn check_point_scored(ball: &mut Ball, board: &Board, scored_color: Color) -> Option<Side> {
    let wall = ball.check_if_point_scored(board)?;
    ball.set_color(scored_color);
    Some(wall)
}
