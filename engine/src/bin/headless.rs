//! Run a game with no window: frames are logged instead of drawn
//!
//! `RUST_LOG=debug cargo run --bin headless` shows countdowns, points and
//! lifecycle transitions.

use std::thread;
use std::time::Duration;

use engine::{EngineConfig, GameView, Presenter, Renderer};
use game_core::{Color, Config, Side};
use log::{error, info, trace};

const SURFACE_WIDTH: f32 = 1280.0;
const SURFACE_HEIGHT: f32 = 720.0;
const FRAME: Duration = Duration::from_millis(16);

/// Counts frames and logs what would have been drawn
#[derive(Default)]
struct LogRenderer {
    frames: u64,
}

impl Renderer for LogRenderer {
    fn begin_drawing(&mut self) -> bool {
        true
    }

    fn commit_drawing(&mut self) {
        self.frames += 1;
        if self.frames % 60 == 0 {
            info!("{} frames drawn", self.frames);
        }
        // Pretend to wait for vsync
        thread::sleep(FRAME);
    }

    fn draw_background(&mut self, _color: Color) {}

    fn draw_vertical_line(
        &mut self,
        _x: f32,
        _top_y: f32,
        _bottom_y: f32,
        _color: Color,
        _dashed: bool,
    ) {
    }

    fn draw_circle(&mut self, center_x: f32, center_y: f32, _radius: f32, _color: Color) {
        trace!("ball at ({center_x:.1}, {center_y:.1})");
    }

    fn draw_rect(&mut self, _left: f32, _top: f32, _right: f32, _bottom: f32, _color: Color) {}

    fn draw_score(
        &mut self,
        _text: &str,
        _x: f32,
        _top_y: f32,
        _text_size: f32,
        _color: Color,
        _right_aligned: bool,
    ) {
    }

    fn draw_count_down(&mut self, text: &str, _size: f32, _color: Color, _background: Color) {
        info!("{text}...");
    }

    fn draw_frames_per_second(&mut self, text: &str, _x: f32, _y: f32, _size: f32, _color: Color) {
        trace!("{text}");
    }
}

struct LogView;

impl GameView for LogView {
    fn show_play_icon(&mut self) {
        info!("[paused]");
    }

    fn show_pause_icon(&mut self) {
        info!("[playing]");
    }

    fn clear_saved_game_state(&mut self) {
        info!("saved game cleared");
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let engine_config = EngineConfig {
        countdown_step: Duration::from_millis(500),
        ..EngineConfig::default()
    };
    let mut presenter = Presenter::new(Config::new(), engine_config, Some(Side::Right));
    presenter.bind_view(Box::new(LogView));
    presenter.bind_renderer(Box::new(LogRenderer::default()));
    presenter.set_game_board_dimensions(SURFACE_WIDTH, SURFACE_HEIGHT);

    if let Err(e) = presenter.on_game_view_ready(None) {
        error!("Could not start game: {e}");
        return;
    }

    // Wiggle the human paddle for a while
    for i in 0..200 {
        let delta = if (i / 25) % 2 == 0 { 6.0 } else { -6.0 };
        presenter.on_left_side_pointer_move(delta);
        thread::sleep(FRAME);
    }

    presenter.on_activity_pause();
    let saved = match presenter.save_game_state() {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Could not save game: {e}");
            return;
        }
    };
    info!("Saved game state: {} bytes", saved.len());

    // A fresh presenter stands in for the app being relaunched
    let mut relaunched = Presenter::new(Config::new(), EngineConfig::default(), None);
    relaunched.bind_view(Box::new(LogView));
    relaunched.bind_renderer(Box::new(LogRenderer::default()));
    relaunched.set_game_board_dimensions(SURFACE_WIDTH, SURFACE_HEIGHT);
    match relaunched.on_game_view_ready(Some(&saved)) {
        Ok(()) => {
            let scores = relaunched.engine().with_scene(|scene| {
                (scene.score().left.score(), scene.score().right.score())
            });
            info!("Restored game, scores {scores:?}");
        }
        Err(e) => error!("Could not restore game: {e}"),
    }
    relaunched.unbind_renderer();
}
