//! A single organ placed in the scene
//!
//! A placed object has:
//! - A kind (heart or brain), fixed at creation
//! - A base position, fixed at creation (animation offsets are never written back)
//! - An accumulated spin angle, the only state that changes frame to frame
//! - A uniform scale
//! - A random phase offset that desynchronizes float/wobble across objects
//! - A birth time used to age the spawn effect

use std::time::Duration;
use anatomy_math::Vec3;

use crate::kind::OrganKind;

/// Default uniform scale for freshly placed organs
pub const DEFAULT_SCALE: f32 = 1.5;

/// An organ instance in the scene
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedObject {
    kind: OrganKind,
    position: Vec3,
    rotation: f64,
    scale: f32,
    phase_offset: f32,
    created_at: Duration,
}

impl PlacedObject {
    /// Create an object at `position` with zero rotation and the default scale
    pub fn new(kind: OrganKind, position: Vec3, phase_offset: f32, created_at: Duration) -> Self {
        Self {
            kind,
            position,
            rotation: 0.0,
            scale: DEFAULT_SCALE,
            phase_offset,
            created_at,
        }
    }

    /// Builder: set the accumulated rotation (used when restoring a snapshot)
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder: set the uniform scale
    ///
    /// Non-positive scales are ignored and the current scale is kept.
    pub fn with_scale(mut self, scale: f32) -> Self {
        if scale > 0.0 {
            self.scale = scale;
        }
        self
    }

    pub fn kind(&self) -> OrganKind {
        self.kind
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Accumulated spin about the vertical axis (radians)
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn phase_offset(&self) -> f32 {
        self.phase_offset
    }

    pub fn created_at(&self) -> Duration {
        self.created_at
    }

    /// Time since creation, zero if `now` precedes the birth time
    pub fn age(&self, now: Duration) -> Duration {
        now.saturating_sub(self.created_at)
    }

    /// Advance the accumulated spin by `delta` radians
    ///
    /// Negative deltas are ignored: rotation only ever grows.
    pub fn spin(&mut self, delta: f64) {
        if delta > 0.0 {
            self.rotation += delta;
        }
    }
}
