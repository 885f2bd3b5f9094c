//! Ordered store of placed organs
//!
//! The SceneStore owns every [`PlacedObject`] in the scene:
//! - Insertion order is draw order and undo order (LIFO)
//! - Placement is unconditional apart from requiring a finite position
//! - Restoring a snapshot is all-or-nothing
//!
//! # Example
//! ```ignore
//! let mut store = SceneStore::new();
//! store.place(OrganKind::Heart, Vec3::new(100.0, 50.0, 0.0), clock.now())?;
//! let json = store.serialize().to_json()?;
//! store.reset();
//! store.restore_json(&json, clock.now())?;
//! ```

use std::f32::consts::TAU;
use std::fmt;
use std::time::Duration;

use anatomy_math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::kind::OrganKind;
use crate::placed_object::{PlacedObject, DEFAULT_SCALE};
use crate::snapshot::{PersistenceError, Snapshot, SnapshotRecord};

/// Rejected placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementError {
    /// One of the coordinates is NaN or infinite
    NonFinitePosition(Vec3),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::NonFinitePosition(p) => {
                write!(f, "Placement position is not finite: ({}, {}, {})", p.x, p.y, p.z)
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Owns the ordered sequence of placed objects
pub struct SceneStore {
    objects: Vec<PlacedObject>,
    /// Scale given to newly placed objects
    default_scale: f32,
    /// Source of per-object phase offsets
    rng: StdRng,
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneStore {
    /// Create an empty store seeded from the OS
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            default_scale: DEFAULT_SCALE,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create an empty store with a deterministic phase-offset sequence
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new()
        }
    }

    /// Builder: scale for newly placed objects (ignored unless positive)
    pub fn with_default_scale(mut self, scale: f32) -> Self {
        if scale > 0.0 {
            self.default_scale = scale;
        }
        self
    }

    fn next_phase(&mut self) -> f32 {
        self.rng.random_range(0.0..TAU)
    }

    // --- Mutation ---

    /// Append a new object of `kind` at `position`, born at `now`
    pub fn place(
        &mut self,
        kind: OrganKind,
        position: Vec3,
        now: Duration,
    ) -> Result<&PlacedObject, PlacementError> {
        if !position.is_finite() {
            return Err(PlacementError::NonFinitePosition(position));
        }
        let phase = self.next_phase();
        let object = PlacedObject::new(kind, position, phase, now).with_scale(self.default_scale);
        self.objects.push(object);
        Ok(&self.objects[self.objects.len() - 1])
    }

    /// Remove the most recently placed object
    ///
    /// Returns `None` (and does nothing) on an empty scene.
    pub fn undo(&mut self) -> Option<PlacedObject> {
        self.objects.pop()
    }

    /// Remove every object
    pub fn reset(&mut self) {
        self.objects.clear();
    }

    // --- Persistence ---

    /// Capture the pose of every object, in scene order
    pub fn serialize(&self) -> Snapshot {
        Snapshot::new(self.objects.iter().map(SnapshotRecord::from_object).collect())
    }

    /// Replace the whole scene with the objects in `snapshot`
    ///
    /// Restored objects get fresh phase offsets and are born at `now`, so their
    /// spawn effect replays. On error the current scene is left untouched.
    pub fn restore(&mut self, snapshot: &Snapshot, now: Duration) -> Result<(), PersistenceError> {
        snapshot.validate()?;

        let mut restored = Vec::with_capacity(snapshot.len());
        for record in &snapshot.records {
            let phase = self.next_phase();
            restored.push(
                PlacedObject::new(record.kind, Vec3::new(record.x, record.y, record.z), phase, now)
                    .with_rotation(record.rotation)
                    .with_scale(record.scale),
            );
        }

        self.objects = restored;
        Ok(())
    }

    /// Decode a JSON snapshot and restore it
    pub fn restore_json(&mut self, json: &str, now: Duration) -> Result<(), PersistenceError> {
        let snapshot = Snapshot::from_json(json)?;
        self.restore(&snapshot, now)
    }

    // --- Access ---

    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedObject> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PlacedObject> {
        self.objects.iter_mut()
    }

    pub fn last(&self) -> Option<&PlacedObject> {
        self.objects.last()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
