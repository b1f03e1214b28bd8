use crate::{Color, Params};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub horizontal_margin_fraction: f32,
    pub paddle_width: f32,
    pub paddle_height_fraction: f32,
    pub paddle_outside_margin: f32,
    pub human_paddle_max_speed: f32,
    pub computer_paddle_max_speed: f32,
    pub computer_imprecision: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_min: f32,
    pub ball_speed_increase: f32,
    pub min_deflection_degrees: f32,
    pub spawn_degrees_min: f32,
    pub spawn_degrees_max: f32,
    pub score_text_size: f32,
    pub score_offset_x: f32,
    pub score_top_y: f32,
    pub nominal_frame_millis: f32,
    pub background_color: Color,
    pub paddle_color: Color,
    pub ball_color: Color,
    pub scored_ball_color: Color,
    pub line_color: Color,
    pub score_color: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            horizontal_margin_fraction: Params::HORIZONTAL_MARGIN_FRACTION,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height_fraction: Params::PADDLE_HEIGHT_FRACTION,
            paddle_outside_margin: Params::PADDLE_OUTSIDE_MARGIN,
            human_paddle_max_speed: Params::HUMAN_PADDLE_MAX_SPEED,
            computer_paddle_max_speed: Params::COMPUTER_PADDLE_MAX_SPEED,
            computer_imprecision: Params::COMPUTER_IMPRECISION,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_min: Params::BALL_SPEED_MIN,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            min_deflection_degrees: Params::MIN_DEFLECTION_DEGREES,
            spawn_degrees_min: Params::SPAWN_DEGREES_MIN,
            spawn_degrees_max: Params::SPAWN_DEGREES_MAX,
            score_text_size: Params::SCORE_TEXT_SIZE,
            score_offset_x: Params::SCORE_OFFSET_X,
            score_top_y: Params::SCORE_TOP_Y,
            nominal_frame_millis: Params::NOMINAL_FRAME_MILLIS,
            background_color: Color::BLACK,
            paddle_color: Color::WHITE,
            ball_color: Color::WHITE,
            scored_ball_color: Color::RED,
            line_color: Color::GRAY,
            score_color: Color::WHITE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum paddle speed for the given controller
    pub fn paddle_max_speed(&self, controller: crate::Controller) -> f32 {
        match controller {
            crate::Controller::Human => self.human_paddle_max_speed,
            crate::Controller::Computer => self.computer_paddle_max_speed,
        }
    }

    /// Angle range either side of horizontal that a paddle hit can produce
    pub fn deflection_half_range(&self) -> f32 {
        (180.0 - 2.0 * self.min_deflection_degrees) / 2.0
    }

    /// Horizontal margin for a surface of the given width
    pub fn horizontal_margin(&self, surface_width: f32) -> f32 {
        surface_width * self.horizontal_margin_fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Controller;

    #[test]
    fn test_config_paddle_max_speed() {
        let config = Config::new();
        assert_eq!(
            config.paddle_max_speed(Controller::Human),
            Params::HUMAN_PADDLE_MAX_SPEED
        );
        assert_eq!(
            config.paddle_max_speed(Controller::Computer),
            Params::COMPUTER_PADDLE_MAX_SPEED
        );
    }

    #[test]
    fn test_config_deflection_half_range() {
        let mut config = Config::new();
        config.min_deflection_degrees = 10.0;
        assert_eq!(config.deflection_half_range(), 80.0);
        config.min_deflection_degrees = 5.0;
        assert_eq!(config.deflection_half_range(), 85.0);
    }

    #[test]
    fn test_config_horizontal_margin() {
        let config = Config::new();
        assert_eq!(config.horizontal_margin(1000.0), 100.0);
    }
}
