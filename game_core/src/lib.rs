//! Pong simulation core
//!
//! Board geometry, paddles, balls, scores and the per-tick update logic. Nothing
//! here knows about threads or drawing surfaces; the `engine` crate drives a
//! [`Scene`] from its game loop and hands [`SceneSnapshot`]s to a renderer.

pub mod components;
pub mod config;
pub mod direction;
pub mod error;
pub mod map;
pub mod params;
pub mod persistence;
pub mod render;
pub mod resources;
pub mod scene;
pub mod systems;

pub use components::*;
pub use config::*;
pub use direction::*;
pub use error::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use scene::*;
