//! Input handling module
//!
//! Provides input mapping from raw events to scene actions.

mod input_mapper;

pub use input_mapper::{InputMapper, SceneAction};
