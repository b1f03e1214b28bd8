//! Conversion between a live scene and the persisted `proto::SceneState` layout

use glam::Vec2;
use hecs::World;
use proto::{BallState, PaddleState, SceneState, ScoreState};

use crate::scene::board_lines;
use crate::{
    Aabb, Ball, BallKind, Board, Color, Config, Controller, Direction, Events, GameRng, Paddle,
    PlayerScore, Scene, SceneError, Score, Side,
};

impl From<&Ball> for BallState {
    fn from(ball: &Ball) -> Self {
        Self {
            center_x: ball.center.x,
            center_y: ball.center.y,
            radius: ball.radius,
            speed: ball.speed(),
            direction_degrees: ball.direction(),
            color: ball.color.0,
        }
    }
}

impl From<&Paddle> for PaddleState {
    fn from(paddle: &Paddle) -> Self {
        Self {
            side: paddle.side().id(),
            left: paddle.left(),
            top: paddle.top(),
            right: paddle.right(),
            bottom: paddle.bottom(),
            color: paddle.color.0,
            max_speed: paddle.max_speed(),
            computer_controlled: paddle.is_computer_controlled(),
        }
    }
}

impl From<&PlayerScore> for ScoreState {
    fn from(score: &PlayerScore) -> Self {
        Self {
            score: score.score(),
            x: score.x,
            top_y: score.top_y,
            text_size: score.text_size,
            color: score.color.0,
            right_aligned: score.right_aligned,
        }
    }
}

fn ball_from_state(state: &BallState, config: &Config) -> Result<Ball, SceneError> {
    let fields = [
        state.center_x,
        state.center_y,
        state.radius,
        state.speed,
        state.direction_degrees,
    ];
    if fields.iter().any(|v| !v.is_finite()) || state.radius <= 0.0 {
        return Err(SceneError::InvalidState(format!("bad ball: {state:?}")));
    }
    Ok(Ball::new(
        Vec2::new(state.center_x, state.center_y),
        state.radius,
        state.speed.max(config.ball_speed_min),
        Direction::new(state.direction_degrees),
        Color(state.color),
    ))
}

fn paddle_from_state(
    state: &PaddleState,
    expected: Side,
    config: &Config,
) -> Result<Paddle, SceneError> {
    let controller = if state.computer_controlled {
        Controller::Computer
    } else {
        Controller::Human
    };
    let bounds = Aabb::new(
        Vec2::new(state.left, state.top),
        Vec2::new(state.right, state.bottom),
    );
    let paddle = Paddle::from_parts(
        state.side,
        controller,
        bounds,
        Color(state.color),
        state.max_speed,
        match controller {
            Controller::Human => 0.0,
            Controller::Computer => config.computer_imprecision,
        },
    )?;

    if paddle.side() != expected {
        return Err(SceneError::InvalidState(format!(
            "{expected:?} paddle saved with side {:?}",
            paddle.side()
        )));
    }
    let edges = [state.left, state.top, state.right, state.bottom];
    if edges.iter().any(|v| !v.is_finite())
        || !state.max_speed.is_finite()
        || state.max_speed < 0.0
        || paddle.height() <= 0.0
    {
        return Err(SceneError::InvalidState(format!("bad paddle: {state:?}")));
    }
    Ok(paddle)
}

fn score_from_state(state: &ScoreState) -> Result<PlayerScore, SceneError> {
    let mut score = PlayerScore::new(
        state.x,
        state.top_y,
        state.text_size,
        Color(state.color),
        state.right_aligned,
    );
    score.set_score(i64::from(state.score))?;
    Ok(score)
}

impl Scene {
    /// Capture everything needed to restore this scene later
    pub fn to_state(&self) -> Result<SceneState, SceneError> {
        let normal_ball = self
            .normal_ball()
            .ok_or_else(|| SceneError::InvalidState("scene has no normal ball".to_string()))?;

        Ok(SceneState {
            board_width: self.board.width,
            board_height: self.board.height,
            horizontal_margin: self.board.horizontal_margin,
            background_color: self.background_color.0,
            left_paddle: PaddleState::from(self.paddle(Side::Left)),
            right_paddle: PaddleState::from(self.paddle(Side::Right)),
            normal_ball: BallState::from(&normal_ball),
            bonus_balls: self.bonus_balls().iter().map(BallState::from).collect(),
            left_score: ScoreState::from(&self.score.left),
            right_score: ScoreState::from(&self.score.right),
            computer_side: self.computer_side.map(Side::id),
            consecutive_hits: self.consecutive_hits,
        })
    }

    /// Rebuild a scene from saved state
    ///
    /// Tuning values that are not part of the saved layout come from `config`.
    pub fn from_state(
        state: &SceneState,
        config: Config,
        rng: GameRng,
    ) -> Result<Self, SceneError> {
        let board = Board::new(state.board_width, state.board_height, state.horizontal_margin);
        if !board.is_valid() {
            return Err(SceneError::InvalidState(format!(
                "board dimensions must be positive: {board:?}"
            )));
        }

        let paddles = [
            paddle_from_state(&state.left_paddle, Side::Left, &config)?,
            paddle_from_state(&state.right_paddle, Side::Right, &config)?,
        ];
        let computer_side = state.computer_side.map(Side::try_from).transpose()?;

        let mut world = World::new();
        let normal_ball = world.spawn((
            ball_from_state(&state.normal_ball, &config)?,
            BallKind::Normal,
        ));
        for bonus in &state.bonus_balls {
            world.spawn((ball_from_state(bonus, &config)?, BallKind::Bonus));
        }

        let score = Score::new(
            score_from_state(&state.left_score)?,
            score_from_state(&state.right_score)?,
        );

        Ok(Self {
            background_color: Color(state.background_color),
            lines: board_lines(&board, &config),
            config,
            board,
            paddles,
            world,
            normal_ball,
            score,
            computer_side,
            consecutive_hits: state.consecutive_hits,
            countdown_in_progress: false,
            events: Events::new(),
            rng,
        })
    }

    /// Serialize this scene to the persisted byte layout
    pub fn to_bytes(&self) -> Result<Vec<u8>, SceneError> {
        self.to_state()?
            .to_bytes()
            .map_err(|e| SceneError::InvalidState(format!("encode failed: {e}")))
    }
}
