use glam::Vec2;
use rand::Rng;

use crate::{Aabb, Board, Config, Direction, SceneError};

/// Which side of the board a paddle (or wall) is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn id(self) -> u8 {
        match self {
            Side::Left => proto::SIDE_LEFT,
            Side::Right => proto::SIDE_RIGHT,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl TryFrom<u8> for Side {
    type Error = SceneError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            proto::SIDE_LEFT => Ok(Side::Left),
            proto::SIDE_RIGHT => Ok(Side::Right),
            other => Err(SceneError::InvalidSide(other)),
        }
    }
}

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Controller {
    #[default]
    Human,
    Computer,
}

/// ARGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const GRAY: Color = Color(0xFF88_8888);
    pub const RED: Color = Color(0xFFFF_0000);
    pub const GREEN: Color = Color(0xFF00_FF00);
    pub const TRANSLUCENT_BLACK: Color = Color(0xAA00_0000);
}

/// Marks a ball entity as the always-present normal ball or an extra bonus ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallKind {
    Normal,
    Bonus,
}

/// Ball component - travels in a straight line, only turning when told to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub center: Vec2,
    pub radius: f32,
    speed: f32, // px per ms
    direction: Direction,
    pub color: Color,
}

impl Ball {
    pub fn new(center: Vec2, radius: f32, speed: f32, direction: Direction, color: Color) -> Self {
        Self {
            center,
            radius,
            speed,
            direction,
            color,
        }
    }

    /// Move along the current direction and bounce off the top and bottom walls
    ///
    /// Returns true if the ball bounced.
    pub fn advance(&mut self, dt_millis: f32, board_height: f32) -> bool {
        let distance = self.speed * dt_millis;
        let angle = self.direction.radians();
        self.center += Vec2::new(angle.cos(), angle.sin()) * distance;

        if self.center.y - self.radius < 0.0 {
            self.reflect_vertically();
            self.center.y = self.radius;
            true
        } else if self.center.y + self.radius > board_height {
            self.reflect_vertically();
            self.center.y = board_height - self.radius;
            true
        } else {
            false
        }
    }

    fn reflect_vertically(&mut self) {
        self.direction.set_degrees(180.0 - self.direction.degrees());
    }

    /// Which side wall the ball's leading edge has reached, if any
    pub fn check_if_point_scored(&self, board: &Board) -> Option<Side> {
        if self.left_edge() <= board.left_wall() {
            Some(Side::Left)
        } else if self.right_edge() >= board.right_wall() {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Scale speed by `1 + percent`, never dropping below `min_speed`
    pub fn change_speed(&mut self, percent: f32, min_speed: f32) {
        self.speed = (self.speed * (1.0 + percent)).max(min_speed);
    }

    pub fn set_direction(&mut self, degrees: f32) {
        self.direction.set_degrees(degrees);
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn direction(&self) -> f32 {
        self.direction.degrees()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn left_edge(&self) -> f32 {
        self.center.x - self.radius
    }

    pub fn right_edge(&self) -> f32 {
        self.center.x + self.radius
    }
}

/// Paddle component - slides vertically at a fixed x position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    side: Side,
    controller: Controller,
    bounds: Aabb,
    pub color: Color,
    max_speed: f32, // px per ms
    imprecision: f32,
}

impl Paddle {
    /// Place a paddle vertically centered just inside the margin on its side
    pub fn new(side: Side, controller: Controller, board: &Board, config: &Config) -> Self {
        let width = config.paddle_width;
        let height = board.height * config.paddle_height_fraction;
        let (left, right) = match side {
            Side::Left => {
                let left = board.left_wall() + config.paddle_outside_margin;
                (left, left + width)
            }
            Side::Right => {
                let right = board.right_wall() - config.paddle_outside_margin;
                (right - width, right)
            }
        };
        let top = (board.height - height) / 2.0;

        Self {
            side,
            controller,
            bounds: Aabb::new(Vec2::new(left, top), Vec2::new(right, top + height)),
            color: config.paddle_color,
            max_speed: config.paddle_max_speed(controller),
            imprecision: match controller {
                Controller::Human => 0.0,
                Controller::Computer => config.computer_imprecision,
            },
        }
    }

    /// Rebuild a paddle from raw persisted parts, rejecting unknown sides
    pub fn from_parts(
        side_id: u8,
        controller: Controller,
        bounds: Aabb,
        color: Color,
        max_speed: f32,
        imprecision: f32,
    ) -> Result<Self, SceneError> {
        let side = Side::try_from(side_id)?;
        Ok(Self {
            side,
            controller,
            bounds,
            color,
            max_speed,
            imprecision,
        })
    }

    /// Slide by `delta_y`, limited by max speed and kept on the board
    pub fn move_by(&mut self, delta_y: f32, board_height: f32, dt_millis: f32) {
        let max_delta = self.max_speed * dt_millis.max(0.0);
        let delta_y = delta_y.clamp(-max_delta, max_delta);
        self.translate_y(delta_y);

        // Keep the whole rectangle on the board, preserving its height
        if self.bounds.min.y < 0.0 {
            self.translate_y(-self.bounds.min.y);
        } else if self.bounds.max.y > board_height {
            self.translate_y(board_height - self.bounds.max.y);
        }
    }

    fn translate_y(&mut self, dy: f32) {
        self.bounds.min.y += dy;
        self.bounds.max.y += dy;
    }

    /// Where on the paddle the ball hit: 1.0 = top edge, 0.0 = center, -1.0 = bottom edge
    ///
    /// Returns `None` when the ball is not touching the paddle. Computer paddles
    /// add a random offset so their returns are less than perfect.
    pub fn relative_collision_location<R: Rng + ?Sized>(
        &self,
        ball: &Ball,
        rng: &mut R,
    ) -> Option<f32> {
        // The center must be level with the paddle; with that, overlap reduces to
        // the facing edge having reached the paddle without passing fully behind it
        if !self.bounds.spans_y(ball.center.y)
            || !self.bounds.overlaps_circle(ball.center, ball.radius)
        {
            return None;
        }

        let half_height = self.height() / 2.0;
        let mut location = -(ball.center.y - self.center_y()) / half_height;

        if self.controller == Controller::Computer && self.imprecision > 0.0 {
            location += rng.gen_range(-self.imprecision..=self.imprecision);
            location = location.clamp(-1.0, 1.0);
        }
        Some(location)
    }

    pub fn center_y(&self) -> f32 {
        (self.bounds.min.y + self.bounds.max.y) / 2.0
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn controller(&self) -> Controller {
        self.controller
    }

    pub fn is_computer_controlled(&self) -> bool {
        self.controller == Controller::Computer
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    pub fn imprecision(&self) -> f32 {
        self.imprecision
    }

    pub fn left(&self) -> f32 {
        self.bounds.min.x
    }

    pub fn top(&self) -> f32 {
        self.bounds.min.y
    }

    pub fn right(&self) -> f32 {
        self.bounds.max.x
    }

    pub fn bottom(&self) -> f32 {
        self.bounds.max.y
    }

    pub fn height(&self) -> f32 {
        self.bounds.height()
    }
}
