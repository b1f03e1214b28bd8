//! Threaded game loop for the Pong simulation
//!
//! [`Engine`] owns a [`Scene`] and drives it from a dedicated background
//! thread: count down, then tick and draw until stopped, counting down again
//! after every point. Hosts talk to it through a [`Presenter`], feed it a
//! [`Renderer`] to paint on, and read [`SceneSnapshot`]s without waiting on
//! the loop.

pub mod config;
pub mod error;
pub mod presenter;
pub mod renderer;


pub use config::EngineConfig;
pub use error::EngineError;
pub use presenter::{GameView, Presenter};
pub use renderer::Renderer;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use game_core::{Config, GameRng, PaddleMove, Scene, SceneSnapshot, Side};
use log::{debug, error, trace, warn};
use proto::SceneState;

/// A panicking holder must not take the whole loop down with it
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Run flag the loop polls, with a condvar so sleeps wake on stop
#[derive(Default)]
struct StopSignal {
    running: Mutex<bool>,
    wake: Condvar,
}

impl StopSignal {
    fn set_running(&self, running: bool) {
        *lock(&self.running) = running;
        self.wake.notify_all();
    }

    fn is_running(&self) -> bool {
        *lock(&self.running)
    }

    /// Sleep for `duration` or until stopped; returns whether still running
    fn sleep(&self, duration: Duration) -> bool {
        let guard = lock(&self.running);
        let (guard, _timeout) = self
            .wake
            .wait_timeout_while(guard, duration, |running| *running)
            .unwrap_or_else(PoisonError::into_inner);
        *guard
    }
}

/// State shared between the host and the loop thread
struct Shared {
    config: EngineConfig,
    scene: Mutex<Option<Scene>>,
    renderer: Mutex<Option<Box<dyn Renderer + Send>>>,
    snapshot: Mutex<Arc<SceneSnapshot>>,
    input: Receiver<PaddleMove>,
    signal: StopSignal,
    last_frame_micros: AtomicU64,
}

impl Shared {
    fn with_scene<R>(&self, f: impl FnOnce(&mut Scene) -> R) -> Option<R> {
        let mut guard = lock(&self.scene);
        let scene = guard.as_mut()?;
        let result = f(scene);
        self.publish(scene);
        Some(result)
    }

    fn publish(&self, scene: &Scene) {
        *lock(&self.snapshot) = Arc::new(scene.snapshot());
    }

    fn snapshot(&self) -> Arc<SceneSnapshot> {
        Arc::clone(&lock(&self.snapshot))
    }

    fn last_frame_millis(&self) -> f32 {
        self.last_frame_micros.load(Ordering::Relaxed) as f32 / 1000.0
    }

    fn frames_per_second(&self) -> u32 {
        let millis = self.last_frame_millis();
        if millis > 0.0 {
            (1000.0 / millis).round() as u32
        } else {
            0
        }
    }

    /// Paint the latest snapshot, with a countdown digit on top if given
    fn draw_frame(&self, countdown: Option<u32>) {
        let mut guard = lock(&self.renderer);
        let Some(renderer) = guard.as_mut() else {
            debug!("No renderer bound, skipping frame");
            return;
        };
        if !renderer.begin_drawing() {
            debug!("Surface not ready, skipping frame");
            return;
        }

        let snapshot = self.snapshot();
        renderer.draw_background(snapshot.background_color);
        for line in &snapshot.vertical_lines {
            renderer.draw_vertical_line(line.x, line.top_y, line.bottom_y, line.color, line.dashed);
        }
        for circle in &snapshot.circles {
            renderer.draw_circle(circle.center_x, circle.center_y, circle.radius, circle.color);
        }
        for rect in &snapshot.rectangles {
            renderer.draw_rect(rect.left, rect.top, rect.right, rect.bottom, rect.color);
        }
        for score in &snapshot.scores {
            renderer.draw_score(
                &score.text,
                score.x,
                score.top_y,
                score.text_size,
                score.color,
                score.right_aligned,
            );
        }

        let config = &self.config;
        renderer.draw_frames_per_second(
            &config.fps_text(self.frames_per_second()),
            config.fps_x,
            config.fps_y,
            config.fps_text_size,
            config.fps_color,
        );
        if let Some(remaining) = countdown {
            renderer.draw_count_down(
                &remaining.to_string(),
                config.countdown_text_size,
                config.countdown_text_color,
                config.countdown_background_color,
            );
        }
        renderer.commit_drawing();
    }

    /// Show the countdown digits with paddles frozen
    ///
    /// Returns false if a stop arrived mid-countdown.
    fn count_down(&self) -> bool {
        self.with_scene(|scene| scene.set_countdown_in_progress(true));
        self.discard_input();

        let mut completed = true;
        for remaining in (1..=self.config.countdown_seconds).rev() {
            debug!("Countdown {remaining}");
            self.draw_frame(Some(remaining));
            if !self.signal.sleep(self.config.countdown_step) {
                debug!("Countdown interrupted by stop");
                completed = false;
                break;
            }
        }

        self.discard_input();
        self.with_scene(|scene| scene.set_countdown_in_progress(false));
        completed
    }

    fn discard_input(&self) {
        let dropped = self.input.try_iter().count();
        if dropped > 0 {
            trace!("Discarded {dropped} paddle moves during countdown");
        }
    }

    /// Apply every move the host has sent so far
    fn apply_pending_input(&self, scene: &mut Scene) {
        for mv in self.input.try_iter() {
            scene.apply_paddle_move(&mv);
        }
    }

    /// Apply queued input, move everything, publish; returns whether a point was scored
    fn tick(&self, dt_millis: f32) -> Option<bool> {
        self.with_scene(|scene| {
            self.apply_pending_input(scene);
            scene.update_game_object_positions(dt_millis)
        })
    }

    fn run(&self) {
        self.draw_frame(None);
        if !self.count_down() {
            return;
        }

        while self.signal.is_running() {
            let started = Instant::now();
            let Some(scored) = self.tick(self.last_frame_millis()) else {
                warn!("Scene removed while running, stopping loop");
                break;
            };
            self.draw_frame(None);
            let elapsed = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
            self.last_frame_micros.store(elapsed, Ordering::Relaxed);

            if scored {
                // The ball is served again even if a stop cut the countdown short,
                // so a missed ball is never scored twice
                let completed = self.count_down();
                self.with_scene(Scene::reset_after_point_scored);
                if !completed {
                    return;
                }
            }
        }
    }
}

/// Runs a [`Scene`] on a background thread and draws it to a [`Renderer`]
pub struct Engine {
    shared: Arc<Shared>,
    input: Sender<PaddleMove>,
    worker: Option<JoinHandle<()>>,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let (input, input_rx) = crossbeam_channel::unbounded();
        Self {
            shared: Arc::new(Shared {
                config,
                scene: Mutex::new(None),
                renderer: Mutex::new(None),
                snapshot: Mutex::new(Arc::new(SceneSnapshot::default())),
                input: input_rx,
                signal: StopSignal::default(),
                last_frame_micros: AtomicU64::new(0),
            }),
            input,
            worker: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.shared.config
    }

    /// Spawn the loop thread
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.is_running() {
            return Err(EngineError::AlreadyRunning);
        }
        if !self.has_scene() {
            return Err(EngineError::NoScene);
        }
        // Reap a loop that exited on its own
        self.join_worker();

        self.shared.signal.set_running(true);
        let shared = Arc::clone(&self.shared);
        let spawned = thread::Builder::new()
            .name("game-loop".to_string())
            .spawn(move || {
                debug!("Game loop started");
                shared.run();
                debug!("Game loop exited");
            });
        match spawned {
            Ok(handle) => {
                self.worker = Some(handle);
                Ok(())
            }
            Err(e) => {
                self.shared.signal.set_running(false);
                Err(EngineError::Spawn(e))
            }
        }
    }

    /// Stop the loop and wait for its thread to exit
    ///
    /// No renderer calls happen after this returns. Moves sent after the
    /// last tick are applied to the scene here.
    pub fn stop(&mut self) {
        self.shared.signal.set_running(false);
        self.join_worker();
        self.shared
            .with_scene(|scene| self.shared.apply_pending_input(scene));
    }

    fn join_worker(&mut self) {
        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                error!("Game loop thread panicked");
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Replace the scene; the next frame shows it
    pub fn set_scene(&self, scene: Scene) {
        self.shared.publish(&scene);
        *lock(&self.shared.scene) = Some(scene);
    }

    pub fn has_scene(&self) -> bool {
        lock(&self.shared.scene).is_some()
    }

    /// Run `f` against the scene, if one is loaded
    pub fn with_scene<R>(&self, f: impl FnOnce(&mut Scene) -> R) -> Option<R> {
        self.shared.with_scene(f)
    }

    pub fn set_renderer(&self, renderer: Option<Box<dyn Renderer + Send>>) {
        *lock(&self.shared.renderer) = renderer;
    }

    /// Move a paddle in response to host input
    ///
    /// While the loop runs the move is queued for the next tick, so this never
    /// waits on a frame. While idle it is applied straight away.
    pub fn move_paddle(&self, side: Side, delta_y: f32, dt_millis: f32) {
        if self.is_running() {
            trace!("Queueing {side:?} paddle move of {delta_y:.1}");
            let mv = PaddleMove {
                side,
                delta_y,
                dt_millis,
            };
            // Receiver is owned by `shared`, so the channel stays open
            if self.input.send(mv).is_err() {
                warn!("Input channel closed, dropping {side:?} paddle move");
            }
        } else {
            self.shared
                .with_scene(|scene| scene.move_paddle(side, delta_y, dt_millis));
        }
    }

    /// Draw one frame from the current state, as when showing a paused game
    pub fn draw_frame(&self) {
        self.shared.draw_frame(None);
    }

    /// The most recently published scene snapshot
    pub fn snapshot(&self) -> Arc<SceneSnapshot> {
        self.shared.snapshot()
    }

    /// Duration of the last measured frame, or 0 before the first one
    pub fn last_frame_render_time_millis(&self) -> f32 {
        self.shared.last_frame_millis()
    }

    /// Serialize the scene to the persisted layout
    pub fn save_state(&self) -> Result<Vec<u8>, EngineError> {
        let guard = lock(&self.shared.scene);
        let scene = guard.as_ref().ok_or(EngineError::NoScene)?;
        Ok(scene.to_bytes()?)
    }

    /// Replace the scene with one decoded from saved bytes
    pub fn restore_state(
        &self,
        bytes: &[u8],
        config: Config,
        rng: GameRng,
    ) -> Result<(), EngineError> {
        let state = SceneState::from_bytes(bytes)?;
        let scene = Scene::from_state(&state, config, rng)?;
        self.set_scene(scene);
        Ok(())
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.stop();
    }
}
