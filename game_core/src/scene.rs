use hecs::{Entity, World};
use log::{debug, trace};

use crate::systems::*;
use crate::{
    Ball, BallKind, Board, CircleToRender, Color, Config, Controller, Direction, Events, GameRng,
    Paddle, PaddleMove, PlayerScore, RectangleToRender, SceneError, SceneSnapshot, Score,
    ScoreToRender, Side, VerticalLine, VerticalLineToRender,
};

/// Container for the game objects
///
/// Owns both paddles, every ball in play, the board geometry and the scores,
/// and runs the per-tick collision and scoring logic. Balls live in a `hecs`
/// world so bonus balls can come and go; the normal ball is always present.
pub struct Scene {
    pub(crate) config: Config,
    pub(crate) board: Board,
    pub(crate) background_color: Color,
    pub(crate) paddles: [Paddle; 2],
    pub(crate) world: World,
    pub(crate) normal_ball: Entity,
    pub(crate) lines: Vec<VerticalLine>,
    pub(crate) score: Score,
    pub(crate) computer_side: Option<Side>,
    pub(crate) consecutive_hits: u32,
    pub(crate) countdown_in_progress: bool,
    pub(crate) events: Events,
    pub(crate) rng: GameRng,
}

impl Scene {
    /// Start a new game on the given board
    pub fn new(
        board: Board,
        computer_side: Option<Side>,
        config: Config,
        mut rng: GameRng,
    ) -> Result<Self, SceneError> {
        if !board.is_valid() {
            return Err(SceneError::InvalidState(format!(
                "board dimensions must be positive: {board:?}"
            )));
        }

        let controller = |side: Side| {
            if computer_side == Some(side) {
                Controller::Computer
            } else {
                Controller::Human
            }
        };
        let paddles = [
            Paddle::new(Side::Left, controller(Side::Left), &board, &config),
            Paddle::new(Side::Right, controller(Side::Right), &board, &config),
        ];

        let mut world = World::new();
        let ball = new_serve(&board, &config, &mut rng);
        let normal_ball = world.spawn((ball, BallKind::Normal));

        Ok(Self {
            background_color: config.background_color,
            lines: board_lines(&board, &config),
            score: initial_score(&board, &config),
            config,
            board,
            paddles,
            world,
            normal_ball,
            computer_side,
            consecutive_hits: 0,
            countdown_in_progress: false,
            events: Events::new(),
            rng,
        })
    }

    /// Move the named paddle in response to host input
    ///
    /// Computer-controlled paddles ignore host input, and no paddle moves
    /// while a countdown is showing.
    pub fn move_paddle(&mut self, side: Side, delta_y: f32, dt_millis: f32) {
        self.apply_paddle_move(&PaddleMove {
            side,
            delta_y,
            dt_millis,
        });
    }

    pub fn apply_paddle_move(&mut self, mv: &PaddleMove) {
        if self.countdown_in_progress {
            trace!("Ignoring {:?} paddle move during countdown", mv.side);
            return;
        }
        if self.computer_side == Some(mv.side) {
            trace!("Ignoring host move for computer-controlled {:?} paddle", mv.side);
            return;
        }
        let paddle = &mut self.paddles[side_index(mv.side)];
        move_paddle(paddle, mv, &self.board, &self.config);
    }

    /// Advance every ball by `dt_millis`, resolving paddle hits and side walls
    ///
    /// Returns true if any ball reached a side wall this tick.
    pub fn update_game_object_positions(&mut self, dt_millis: f32) -> bool {
        self.events.clear();
        let paddles = self.paddles;
        let mut point_scored = false;

        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            move_ball(ball, dt_millis, &self.board, &mut self.events);

            if check_paddle_collisions(ball, &paddles, &self.config, &mut self.rng.0).is_some() {
                self.consecutive_hits += 1;
                self.events.ball_hit_paddle = true;
                continue;
            }

            if let Some(wall) = check_point_scored(ball, &self.board, self.config.scored_ball_color)
            {
                let scorer = wall.opposite();
                self.consecutive_hits = 0;
                self.score.award(scorer);
                match scorer {
                    Side::Left => self.events.left_scored = true,
                    Side::Right => self.events.right_scored = true,
                }
                debug!("Ball reached {wall:?} wall, point to {scorer:?}");
                point_scored = true;
            }
        }

        point_scored
    }

    /// Serve a fresh normal ball from the center and drop any bonus balls
    ///
    /// Paddles and scores stay where they are.
    pub fn reset_after_point_scored(&mut self) {
        self.world.clear();
        let ball = new_serve(&self.board, &self.config, &mut self.rng);
        debug!("Serving new ball at {:.1}°", ball.direction());
        self.normal_ball = self.world.spawn((ball, BallKind::Normal));
        self.consecutive_hits = 0;
    }

    /// Add an extra ball alongside the normal one
    pub fn add_bonus_ball(&mut self, ball: Ball) -> Entity {
        self.world.spawn((ball, BallKind::Bonus))
    }

    pub fn set_countdown_in_progress(&mut self, in_progress: bool) {
        self.countdown_in_progress = in_progress;
    }

    pub fn is_countdown_in_progress(&self) -> bool {
        self.countdown_in_progress
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Normal ball first, then bonus balls
    pub fn circles_to_render(&self) -> Vec<CircleToRender> {
        let mut circles = Vec::with_capacity(self.ball_count());
        if let Some(ball) = self.normal_ball() {
            circles.push(CircleToRender::from(&ball));
        }
        circles.extend(self.bonus_balls().iter().map(CircleToRender::from));
        circles
    }

    pub fn rectangles_to_render(&self) -> Vec<RectangleToRender> {
        self.paddles.iter().map(RectangleToRender::from).collect()
    }

    pub fn vertical_lines_to_render(&self) -> Vec<VerticalLineToRender> {
        self.lines.iter().map(VerticalLine::to_render).collect()
    }

    pub fn scores_to_render(&self) -> Vec<ScoreToRender> {
        vec![
            ScoreToRender::from(&self.score.left),
            ScoreToRender::from(&self.score.right),
        ]
    }

    /// Everything needed to draw the current instant
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            background_color: self.background_color,
            vertical_lines: self.vertical_lines_to_render(),
            circles: self.circles_to_render(),
            rectangles: self.rectangles_to_render(),
            scores: self.scores_to_render(),
        }
    }

    pub fn normal_ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.normal_ball).ok().map(|ball| *ball)
    }

    /// Overwrite the normal ball's state
    pub fn replace_normal_ball(&mut self, ball: Ball) {
        if let Ok(mut current) = self.world.get::<&mut Ball>(self.normal_ball) {
            *current = ball;
        }
    }

    pub fn bonus_balls(&self) -> Vec<Ball> {
        self.world
            .query::<(&Ball, &BallKind)>()
            .iter()
            .filter(|(_e, (_ball, kind))| **kind == BallKind::Bonus)
            .map(|(_e, (ball, _kind))| *ball)
            .collect()
    }

    pub fn ball_count(&self) -> usize {
        self.world.query::<&Ball>().iter().count()
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side_index(side)]
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }

    pub fn computer_side(&self) -> Option<Side> {
        self.computer_side
    }

    pub fn consecutive_hits(&self) -> u32 {
        self.consecutive_hits
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }
}

fn side_index(side: Side) -> usize {
    match side {
        Side::Left => 0,
        Side::Right => 1,
    }
}

fn new_serve(board: &Board, config: &Config, rng: &mut GameRng) -> Ball {
    let direction = Direction::random(&mut rng.0, config.spawn_degrees_min, config.spawn_degrees_max);
    Ball::new(
        board.ball_spawn(),
        config.ball_radius,
        config.ball_speed_initial,
        direction,
        config.ball_color,
    )
}

pub(crate) fn board_lines(board: &Board, config: &Config) -> Vec<VerticalLine> {
    let color = config.line_color;
    vec![
        VerticalLine::new(board.left_wall(), 0.0, board.height, color, false),
        VerticalLine::new(board.center_x(), 0.0, board.height, color, true),
        VerticalLine::new(board.right_wall(), 0.0, board.height, color, false),
    ]
}

fn initial_score(board: &Board, config: &Config) -> Score {
    let center = board.center_x();
    let top = config.score_top_y;
    let size = config.score_text_size;
    let color = config.score_color;
    Score::new(
        PlayerScore::new(center - config.score_offset_x, top, size, color, true),
        PlayerScore::new(center + config.score_offset_x, top, size, color, false),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn scene(computer_side: Option<Side>) -> Scene {
        Scene::new(
            Board::new(200.0, 200.0, 20.0),
            computer_side,
            Config::new(),
            GameRng::new(12345),
        )
        .expect("valid board")
    }

    fn ball(x: f32, y: f32, degrees: f32) -> Ball {
        Ball::new(Vec2::new(x, y), 10.0, 0.1, Direction::new(degrees), Color::WHITE)
    }

    #[test]
    fn test_new_scene_layout() {
        let scene = scene(None);
        assert_eq!(scene.ball_count(), 1, "Exactly one ball at the start");
        assert!(scene.bonus_balls().is_empty());
        assert_eq!(scene.normal_ball().unwrap().center, Vec2::new(120.0, 100.0));
        assert_eq!(scene.paddle(Side::Left).side(), Side::Left);
        assert_eq!(scene.paddle(Side::Right).side(), Side::Right);
        assert_eq!(scene.vertical_lines_to_render().len(), 3);
        assert_eq!(scene.rectangles_to_render().len(), 2);
    }

    #[test]
    fn test_invalid_board_rejected() {
        let result = Scene::new(
            Board::new(0.0, 200.0, 0.0),
            None,
            Config::new(),
            GameRng::default(),
        );
        assert!(matches!(result, Err(SceneError::InvalidState(_))));
    }

    #[test]
    fn test_move_paddle_human() {
        let mut scene = scene(None);
        let start = scene.paddle(Side::Left).top();
        scene.move_paddle(Side::Left, 10.0, 16.0);
        assert_eq!(scene.paddle(Side::Left).top(), start + 10.0);
        assert_eq!(
            scene.paddle(Side::Right).top(),
            start,
            "Other paddle untouched"
        );
    }

    #[test]
    fn test_move_paddle_ignored_for_computer_side() {
        let mut scene = scene(Some(Side::Right));
        let start = scene.paddle(Side::Right).top();
        scene.move_paddle(Side::Right, 10.0, 16.0);
        assert_eq!(scene.paddle(Side::Right).top(), start);
        assert!(scene.paddle(Side::Right).is_computer_controlled());
    }

    #[test]
    fn test_move_paddle_ignored_during_countdown() {
        let mut scene = scene(None);
        let start = scene.paddle(Side::Left).top();
        scene.set_countdown_in_progress(true);
        scene.move_paddle(Side::Left, 10.0, 16.0);
        assert_eq!(scene.paddle(Side::Left).top(), start);

        scene.set_countdown_in_progress(false);
        scene.move_paddle(Side::Left, 10.0, 16.0);
        assert_eq!(scene.paddle(Side::Left).top(), start + 10.0);
    }

    #[test]
    fn test_paddle_hit_counts_and_speeds_up() {
        let mut scene = scene(None);
        let left = *scene.paddle(Side::Left);
        scene.replace_normal_ball(ball(left.right() + 5.0, left.center_y(), -90.0));

        let scored = scene.update_game_object_positions(1.0);

        assert!(!scored);
        assert_eq!(scene.consecutive_hits(), 1);
        assert!(scene.events().ball_hit_paddle);
        let after = scene.normal_ball().unwrap();
        assert!(after.direction() > 0.0, "Returned to the right");
        assert!(after.speed() > 0.1, "Faster after the hit");
    }

    #[test]
    fn test_point_scored_on_side_wall() {
        let mut scene = scene(None);
        scene.replace_normal_ball(ball(31.0, 20.0, -90.0)); // Above the left paddle

        let scored = scene.update_game_object_positions(20.0);

        assert!(scored, "Ball crossed the left wall");
        assert!(scene.events().right_scored);
        assert_eq!(scene.score().right.score(), 1);
        assert_eq!(scene.score().left.score(), 0);
        assert_eq!(
            scene.normal_ball().unwrap().color,
            scene.config().scored_ball_color
        );
    }

    #[test]
    fn test_point_resets_consecutive_hits() {
        let mut scene = scene(None);
        let left = *scene.paddle(Side::Left);
        scene.replace_normal_ball(ball(left.right() + 5.0, left.center_y(), -90.0));
        scene.update_game_object_positions(1.0);
        assert_eq!(scene.consecutive_hits(), 1);

        scene.replace_normal_ball(ball(210.0, 20.0, 90.0));
        assert!(scene.update_game_object_positions(20.0));
        assert_eq!(scene.consecutive_hits(), 0);
        assert!(scene.events().left_scored);
    }

    #[test]
    fn test_every_scoring_ball_is_flagged() {
        let mut scene = scene(None);
        scene.replace_normal_ball(ball(31.0, 20.0, -90.0));
        scene.add_bonus_ball(ball(209.0, 20.0, 90.0));

        assert!(scene.update_game_object_positions(20.0));
        assert_eq!(scene.score().left.score(), 1);
        assert_eq!(scene.score().right.score(), 1);
        for circle in scene.circles_to_render() {
            assert_eq!(circle.color, scene.config().scored_ball_color);
        }
    }

    #[test]
    fn test_bonus_ball_alone_reports_point() {
        let mut scene = scene(None);
        scene.replace_normal_ball(ball(120.0, 100.0, 45.0));
        scene.add_bonus_ball(ball(31.0, 20.0, -90.0));

        assert!(
            scene.update_game_object_positions(20.0),
            "A bonus ball scoring counts for the tick"
        );
    }

    #[test]
    fn test_reset_after_point_scored() {
        let mut scene = scene(None);
        scene.add_bonus_ball(ball(50.0, 50.0, 45.0));
        scene.add_bonus_ball(ball(60.0, 50.0, 45.0));
        scene.move_paddle(Side::Left, 30.0, 100.0);
        scene.score_mut().award(Side::Left);
        let paddle_before = *scene.paddle(Side::Left);

        scene.reset_after_point_scored();

        assert_eq!(scene.ball_count(), 1);
        assert!(scene.bonus_balls().is_empty());
        let ball = scene.normal_ball().unwrap();
        assert_eq!(ball.center, scene.board().ball_spawn());
        assert_eq!(ball.color, scene.config().ball_color);
        assert_eq!(ball.speed(), scene.config().ball_speed_initial);
        assert_eq!(*scene.paddle(Side::Left), paddle_before, "Paddles stay put");
        assert_eq!(scene.score().left.score(), 1, "Scores survive");
    }

    #[test]
    fn test_snapshot_is_detached_copy() {
        let mut scene = scene(None);
        scene.add_bonus_ball(ball(60.0, 50.0, 45.0));
        let snapshot = scene.snapshot();

        scene.update_game_object_positions(50.0);

        assert_eq!(snapshot.circles.len(), 2);
        assert_ne!(
            snapshot.circles,
            scene.circles_to_render(),
            "Snapshot keeps the old instant"
        );
        assert_eq!(snapshot.background_color, Color::BLACK);
        assert_eq!(snapshot.scores[0].text, "0");
        assert!(snapshot.scores[0].right_aligned);
        assert!(!snapshot.scores[1].right_aligned);
    }
}
