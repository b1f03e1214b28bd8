use crate::{Color, SceneError, Side};

/// One player's score and where it is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerScore {
    score: u32,
    pub x: f32,
    pub top_y: f32,
    pub text_size: f32,
    pub color: Color,
    pub right_aligned: bool,
}

impl PlayerScore {
    pub fn new(x: f32, top_y: f32, text_size: f32, color: Color, right_aligned: bool) -> Self {
        Self {
            score: 0,
            x,
            top_y,
            text_size,
            color,
            right_aligned,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn increment_score_by_one(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    /// Set the score, rejecting negative values
    pub fn set_score(&mut self, score: i64) -> Result<(), SceneError> {
        if score < 0 {
            return Err(SceneError::NegativeScore(score));
        }
        self.score = u32::try_from(score).unwrap_or(u32::MAX);
        Ok(())
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub left: PlayerScore,
    pub right: PlayerScore,
}

impl Score {
    pub fn new(left: PlayerScore, right: PlayerScore) -> Self {
        Self { left, right }
    }

    pub fn get(&self, side: Side) -> &PlayerScore {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut PlayerScore {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Award a point to the player on the given side
    pub fn award(&mut self, side: Side) {
        self.get_mut(side).increment_score_by_one();
    }
}

/// Random number generator
#[derive(Debug, Clone)]
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seeded from the operating system, for real games
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during the last tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn point_scored(&self) -> bool {
        self.left_scored || self.right_scored
    }
}

/// A paddle move requested by the host, with the frame time it was scaled against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleMove {
    pub side: Side,
    pub delta_y: f32,
    pub dt_millis: f32,
}
