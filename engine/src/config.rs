use std::time::Duration;

use game_core::{Color, GameRng};

/// Loop timing and on-screen text settings
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Digits shown before play starts and after every point
    pub countdown_seconds: u32,
    /// How long each countdown digit stays up
    pub countdown_step: Duration,
    pub countdown_text_size: f32,
    pub countdown_text_color: Color,
    pub countdown_background_color: Color,
    pub fps_x: f32,
    pub fps_y: f32,
    pub fps_text_size: f32,
    pub fps_color: Color,
    pub fps_label: String,
    /// Fixed seed for new games; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            countdown_seconds: 3,
            countdown_step: Duration::from_secs(1),
            countdown_text_size: 200.0,
            countdown_text_color: Color::WHITE,
            countdown_background_color: Color::TRANSLUCENT_BLACK,
            fps_x: 10.0,
            fps_y: 30.0,
            fps_text_size: 24.0,
            fps_color: Color::GREEN,
            fps_label: "FPS".to_string(),
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Random source for a new game
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }

    pub fn fps_text(&self, fps: u32) -> String {
        format!("{}: {fps}", self.fps_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::new();
        assert_eq!(config.countdown_seconds, 3);
        assert_eq!(config.countdown_step, Duration::from_secs(1));
        assert_eq!(config.fps_text(60), "FPS: 60");
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let config = EngineConfig {
            seed: Some(99),
            ..EngineConfig::default()
        };
        let a: u32 = config.rng().0.gen();
        let b: u32 = config.rng().0.gen();
        assert_eq!(a, b, "Same seed, same sequence");
    }
}
