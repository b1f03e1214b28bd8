use game_core::{Board, Config, Scene, Side};
use log::{debug, warn};

use crate::{Engine, EngineConfig, EngineError, Renderer};

/// Host-side UI the presenter drives
pub trait GameView {
    fn show_play_icon(&mut self);
    fn show_pause_icon(&mut self);
    /// Forget any saved game so the next launch starts fresh
    fn clear_saved_game_state(&mut self);
}

/// Glue between the host's lifecycle and input events and the [`Engine`]
pub struct Presenter {
    engine: Engine,
    view: Option<Box<dyn GameView>>,
    board: Option<Board>,
    config: Config,
    computer_side: Option<Side>,
}

impl Presenter {
    pub fn new(config: Config, engine_config: EngineConfig, computer_side: Option<Side>) -> Self {
        Self {
            engine: Engine::new(engine_config),
            view: None,
            board: None,
            config,
            computer_side,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn bind_view(&mut self, view: Box<dyn GameView>) {
        self.view = Some(view);
        self.update_icon();
    }

    pub fn unbind_view(&mut self) {
        self.view = None;
    }

    pub fn bind_renderer(&mut self, renderer: Box<dyn Renderer + Send>) {
        self.engine.set_renderer(Some(renderer));
    }

    /// Stop the game before the surface goes away
    pub fn unbind_renderer(&mut self) {
        self.engine.stop();
        self.engine.set_renderer(None);
        self.update_icon();
    }

    /// Size of the drawing surface; the board is carved out of it
    pub fn set_game_board_dimensions(&mut self, width: f32, height: f32) {
        let board = Board::from_surface(width, height, &self.config);
        debug!("Game board set to {board:?}");
        self.board = Some(board);
    }

    /// The surface is ready: resume what we had, restore a save, or start fresh
    ///
    /// A game already in memory or restored from `saved` is shown paused.
    /// Unreadable saved bytes are discarded in favour of a new game.
    pub fn on_game_view_ready(&mut self, saved: Option<&[u8]>) -> Result<(), EngineError> {
        self.engine.stop();
        if self.engine.has_scene() {
            debug!("Showing paused game from memory");
            self.engine.draw_frame();
            self.update_icon();
            return Ok(());
        }

        if let Some(bytes) = saved {
            match self
                .engine
                .restore_state(bytes, self.config.clone(), self.engine.config().rng())
            {
                Ok(()) => {
                    debug!("Restored saved game");
                    self.engine.draw_frame();
                    self.update_icon();
                    return Ok(());
                }
                Err(e) => warn!("Could not restore saved game, starting a new one: {e}"),
            }
        }

        self.new_game()?;
        self.start()
    }

    pub fn on_activity_pause(&mut self) {
        self.pause();
    }

    pub fn on_play_button_click(&mut self) -> Result<(), EngineError> {
        self.start()
    }

    pub fn on_pause_button_click(&mut self) {
        self.pause();
    }

    /// Throw the current game away and start over
    pub fn on_restart_button_click(&mut self) -> Result<(), EngineError> {
        self.engine.stop();
        if let Some(view) = self.view.as_mut() {
            view.clear_saved_game_state();
        }
        self.new_game()?;
        self.start()
    }

    pub fn on_left_side_pointer_move(&self, delta_y: f32) {
        self.pointer_move(Side::Left, delta_y);
    }

    pub fn on_right_side_pointer_move(&self, delta_y: f32) {
        self.pointer_move(Side::Right, delta_y);
    }

    pub fn save_game_state(&self) -> Result<Vec<u8>, EngineError> {
        self.engine.save_state()
    }

    fn pointer_move(&self, side: Side, delta_y: f32) {
        // Scaled against the same frame time the loop will use
        let dt = self.engine.last_frame_render_time_millis();
        self.engine.move_paddle(side, delta_y, dt);
    }

    fn new_game(&mut self) -> Result<(), EngineError> {
        let board = self.board.ok_or(EngineError::NoBoard)?;
        let scene = Scene::new(
            board,
            self.computer_side,
            self.config.clone(),
            self.engine.config().rng(),
        )?;
        debug!("New game on {board:?}");
        self.engine.set_scene(scene);
        Ok(())
    }

    fn start(&mut self) -> Result<(), EngineError> {
        let result = match self.engine.start() {
            Err(EngineError::AlreadyRunning) => Ok(()),
            other => other,
        };
        self.update_icon();
        result
    }

    fn pause(&mut self) {
        self.engine.stop();
        self.update_icon();
    }

    fn update_icon(&mut self) {
        let running = self.engine.is_running();
        if let Some(view) = self.view.as_mut() {
            if running {
                view.show_pause_icon();
            } else {
                view.show_play_icon();
            }
        }
    }
}
