//! Anatomy placement demo
//!
//! Place animated heart and brain models in a 3D viewport, then undo, reset,
//! save and load the layout.
//!
//! ## Key Components
//!
//! - [`config::AppConfig`] - Layered configuration (TOML files + env)
//! - [`input::InputMapper`] - Keyboard and click mapping to [`input::SceneAction`]
//! - [`app_state::AppState`] - Selected kind and UI toggles
//! - [`systems::SceneController`] - Applies actions and builds frames
//! - [`systems::WindowSystem`] / [`systems::RenderSystem`] - winit window and wgpu output

pub mod app_state;
pub mod config;
pub mod input;
pub mod systems;
