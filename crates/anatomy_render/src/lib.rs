//! Rendering for the anatomy placement demo
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::OrbitCamera`] - Camera orbiting the scene origin
//! - [`frame::Frame`] - Headless description of one frame: models, markers,
//!   grid, lights and overlay

pub mod camera;
pub mod context;
pub mod frame;

pub use camera::OrbitCamera;
pub use context::{ContextError, RenderContext};
pub use frame::{
    instruction_lines, ButtonView, Frame, Grid, GridLine, Light, LightRig, MarkerDraw, ModelDraw, Overlay,
    OverlayFlags, Stats, KEY_HINTS,
};
