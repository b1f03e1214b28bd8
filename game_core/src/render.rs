//! Render-ready snapshots of scene objects
//!
//! These are plain copies taken at one instant, so they can be handed to
//! another thread while the scene keeps moving.

use crate::{Ball, Color, Paddle, PlayerScore};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleToRender {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
    pub color: Color,
}

impl From<&Ball> for CircleToRender {
    fn from(ball: &Ball) -> Self {
        Self {
            center_x: ball.center.x,
            center_y: ball.center.y,
            radius: ball.radius,
            color: ball.color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleToRender {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub color: Color,
}

impl From<&Paddle> for RectangleToRender {
    fn from(paddle: &Paddle) -> Self {
        Self {
            left: paddle.left(),
            top: paddle.top(),
            right: paddle.right(),
            bottom: paddle.bottom(),
            color: paddle.color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalLineToRender {
    pub x: f32,
    pub top_y: f32,
    pub bottom_y: f32,
    pub color: Color,
    pub dashed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreToRender {
    pub text: String,
    pub x: f32,
    pub top_y: f32,
    pub text_size: f32,
    pub color: Color,
    pub right_aligned: bool,
}

impl From<&PlayerScore> for ScoreToRender {
    fn from(score: &PlayerScore) -> Self {
        Self {
            text: score.score().to_string(),
            x: score.x,
            top_y: score.top_y,
            text_size: score.text_size,
            color: score.color,
            right_aligned: score.right_aligned,
        }
    }
}

/// A vertical line on the board (margin boundaries and the center line)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalLine {
    pub x: f32,
    pub top_y: f32,
    pub bottom_y: f32,
    pub color: Color,
    pub dashed: bool,
}

impl VerticalLine {
    pub fn new(x: f32, top_y: f32, bottom_y: f32, color: Color, dashed: bool) -> Self {
        Self {
            x,
            top_y,
            bottom_y,
            color,
            dashed,
        }
    }

    pub fn to_render(&self) -> VerticalLineToRender {
        VerticalLineToRender {
            x: self.x,
            top_y: self.top_y,
            bottom_y: self.bottom_y,
            color: self.color,
            dashed: self.dashed,
        }
    }
}

/// Everything needed to draw one frame, captured at a single instant
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSnapshot {
    pub background_color: Color,
    pub vertical_lines: Vec<VerticalLineToRender>,
    pub circles: Vec<CircleToRender>,
    pub rectangles: Vec<RectangleToRender>,
    pub scores: Vec<ScoreToRender>,
}

impl Default for SceneSnapshot {
    fn default() -> Self {
        Self {
            background_color: Color::BLACK,
            vertical_lines: Vec::new(),
            circles: Vec::new(),
            rectangles: Vec::new(),
            scores: Vec::new(),
        }
    }
}
