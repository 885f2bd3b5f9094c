//! Spawn effect: a short-lived ring of markers around a new object
//!
//! The ring is recomputed every frame from the object's age. Past the effect
//! duration nothing is produced, so the effect never repeats unless the object
//! itself is recreated.

use std::f32::consts::TAU;
use std::time::Duration;

use anatomy_math::{map_range, Vec3};

/// Spawn effect settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnEffectParams {
    /// How long the ring is visible after creation
    pub duration: Duration,
    /// Markers per ring, evenly spaced around the circle
    pub marker_count: usize,
    /// Ring radius at age zero
    pub start_radius: f32,
    /// Ring radius as the effect ends
    pub end_radius: f32,
    /// Marker diameter in world units
    pub marker_size: f32,
}

impl Default for SpawnEffectParams {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(1000),
            marker_count: 5,
            start_radius: 10.0,
            end_radius: 50.0,
            marker_size: 5.0,
        }
    }
}

/// One decorative marker, positioned relative to the object's local origin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnMarker {
    pub offset: Vec3,
    pub size: f32,
    /// 1.0 = opaque, 0.0 = invisible
    pub opacity: f32,
}

/// Markers of one ring for one frame
#[derive(Clone, Debug)]
pub struct SpawnRing {
    radius: f32,
    opacity: f32,
    size: f32,
    count: usize,
    next: usize,
}

impl SpawnRing {
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

impl Iterator for SpawnRing {
    type Item = SpawnMarker;

    fn next(&mut self) -> Option<SpawnMarker> {
        if self.next >= self.count {
            return None;
        }
        let angle = TAU / self.count as f32 * self.next as f32;
        self.next += 1;
        Some(SpawnMarker {
            offset: Vec3::new(angle.cos() * self.radius, angle.sin() * self.radius, 0.0),
            size: self.size,
            opacity: self.opacity,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for SpawnRing {}

/// Computes spawn rings from object age
#[derive(Clone, Copy, Debug, Default)]
pub struct SpawnEffectEngine {
    pub params: SpawnEffectParams,
}

impl SpawnEffectEngine {
    pub fn new(params: SpawnEffectParams) -> Self {
        Self { params }
    }

    /// Ring for an object of the given age, `None` once the effect has ended
    pub fn ring(&self, age: Duration) -> Option<SpawnRing> {
        if age >= self.params.duration {
            return None;
        }
        let t = age.as_secs_f32() * 1000.0;
        let end = self.params.duration.as_secs_f32() * 1000.0;

        Some(SpawnRing {
            radius: map_range(t, 0.0, end, self.params.start_radius, self.params.end_radius),
            opacity: map_range(t, 0.0, end, 1.0, 0.0),
            size: self.params.marker_size,
            count: self.params.marker_count,
            next: 0,
        })
    }

    /// Markers for an object of the given age (empty once the effect has ended)
    pub fn markers(&self, age: Duration) -> impl Iterator<Item = SpawnMarker> {
        self.ring(age).into_iter().flatten()
    }
}
