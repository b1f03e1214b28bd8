//! Persisted game state layout for Pong
//!
//! Uses postcard for compact binary serialization. The host stores these
//! bytes when the game is suspended and hands them back on resume.

use postcard::{from_bytes, to_allocvec};

/// Side id of the left paddle
pub const SIDE_LEFT: u8 = 0;
/// Side id of the right paddle
pub const SIDE_RIGHT: u8 = 1;

// ============================================================================
// Scene state
// ============================================================================

/// Everything needed to rebuild a scene verbatim
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneState {
    pub board_width: f32,
    pub board_height: f32,
    pub horizontal_margin: f32,
    pub background_color: u32,
    pub left_paddle: PaddleState,
    pub right_paddle: PaddleState,
    pub normal_ball: BallState,
    pub bonus_balls: Vec<BallState>,
    pub left_score: ScoreState,
    pub right_score: ScoreState,
    /// Side id of the computer-controlled paddle, if any
    pub computer_side: Option<u8>,
    pub consecutive_hits: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PaddleState {
    pub side: u8,
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub color: u32,
    pub max_speed: f32,
    pub computer_controlled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BallState {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
    /// Pixels per millisecond
    pub speed: f32,
    pub direction_degrees: f32,
    pub color: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScoreState {
    pub score: u32,
    pub x: f32,
    pub top_y: f32,
    pub text_size: f32,
    pub color: u32,
    pub right_aligned: bool,
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl SceneState {
    /// Serialize scene state to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize scene state from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ball(x: f32) -> BallState {
        BallState {
            center_x: x,
            center_y: 100.0,
            radius: 10.0,
            speed: 0.3,
            direction_degrees: 135.0,
            color: 0xFFFF_FFFF,
        }
    }

    fn sample_paddle(side: u8, left: f32) -> PaddleState {
        PaddleState {
            side,
            left,
            top: 80.0,
            right: left + 20.0,
            bottom: 120.0,
            color: 0xFFFF_FFFF,
            max_speed: 2.0,
            computer_controlled: side == SIDE_RIGHT,
        }
    }

    fn sample_score(score: u32, right_aligned: bool) -> ScoreState {
        ScoreState {
            score,
            x: 120.0,
            top_y: 20.0,
            text_size: 80.0,
            color: 0xFFFF_FFFF,
            right_aligned,
        }
    }

    fn sample_state() -> SceneState {
        SceneState {
            board_width: 200.0,
            board_height: 200.0,
            horizontal_margin: 25.0,
            background_color: 0xFF00_0000,
            left_paddle: sample_paddle(SIDE_LEFT, 45.0),
            right_paddle: sample_paddle(SIDE_RIGHT, 185.0),
            normal_ball: sample_ball(125.0),
            bonus_balls: vec![sample_ball(60.0), sample_ball(70.0)],
            left_score: sample_score(3, true),
            right_score: sample_score(7, false),
            computer_side: Some(SIDE_RIGHT),
            consecutive_hits: 4,
        }
    }

    #[test]
    fn test_scene_state_serialization() {
        let state = sample_state();
        let bytes = state.to_bytes().expect("Serialization should succeed");
        let decoded = SceneState::from_bytes(&bytes).expect("Deserialization should succeed");
        assert_eq!(decoded, state, "Decoded state should match the original");
    }

    #[test]
    fn test_truncated_bytes_fail_to_decode() {
        let bytes = sample_state().to_bytes().expect("Serialization should succeed");
        let truncated = &bytes[..bytes.len() / 2];
        assert!(
            SceneState::from_bytes(truncated).is_err(),
            "Truncated input should be rejected"
        );
    }

    #[test]
    fn test_empty_bytes_fail_to_decode() {
        assert!(SceneState::from_bytes(&[]).is_err());
    }
}
