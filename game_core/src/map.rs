use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Whether `y` lies within the box's vertical extent, edges included
    pub fn spans_y(&self, y: f32) -> bool {
        (self.min.y..=self.max.y).contains(&y)
    }

    /// Whether a circle touches or overlaps the box
    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        let nearest = center.clamp(self.min, self.max);
        center.distance_squared(nearest) <= radius * radius
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// Game board geometry
///
/// The play area is `width` wide and sits between two horizontal margins that
/// are reserved for the players' thumbs, so the drawing surface is
/// `width + 2 * horizontal_margin` wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    pub width: f32,
    pub height: f32,
    pub horizontal_margin: f32,
}

impl Board {
    pub fn new(width: f32, height: f32, horizontal_margin: f32) -> Self {
        Self {
            width,
            height,
            horizontal_margin,
        }
    }

    /// Board for a drawing surface, carving the margins out of its width
    pub fn from_surface(surface_width: f32, surface_height: f32, config: &crate::Config) -> Self {
        let margin = config.horizontal_margin(surface_width);
        Self::new(surface_width - 2.0 * margin, surface_height, margin)
    }

    pub fn left_wall(&self) -> f32 {
        self.horizontal_margin
    }

    pub fn right_wall(&self) -> f32 {
        self.horizontal_margin + self.width
    }

    pub fn center_x(&self) -> f32 {
        self.horizontal_margin + self.width / 2.0
    }

    /// Where a fresh ball appears
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.height / 2.0)
    }

    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.horizontal_margin >= 0.0
    }
}
