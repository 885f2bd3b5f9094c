//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

pub mod layout;
mod audio;
mod frame_timer;
mod render;
mod scene_controller;
mod window;

pub use audio::{RodioCue, TapSound};
pub use frame_timer::FrameTimer;
pub use layout::{ControlId, ControlLayout, Rect};
pub use render::{RenderError, RenderSystem};
pub use scene_controller::SceneController;
pub use window::{format_title, WindowError, WindowSystem};
