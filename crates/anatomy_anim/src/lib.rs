//! Per-frame animation for the anatomy placement demo
//!
//! This crate provides:
//! - `AnimationEngine`: float, spin, wobble and pulse for placed organs
//! - `SpawnEffectEngine`: the fading ring of markers shown after placement
//!
//! Both engines are stateless apart from their parameters. Callers pass the
//! frame index or object age explicitly.

mod animation;
mod spawn_effect;

pub use animation::{AnimatedPose, AnimationEngine, AnimationParams};
pub use spawn_effect::{SpawnEffectEngine, SpawnEffectParams, SpawnMarker, SpawnRing};
