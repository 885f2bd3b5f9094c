//! Core types for the anatomy placement demo
//!
//! This crate owns the scene data and the narrow interfaces to the outside world:
//!
//! - [`OrganKind`] / [`KindProfile`] - The two organ kinds and their per-kind table
//! - [`PlacedObject`] - One placed organ (pose, spin, phase, birth time)
//! - [`SceneStore`] - Ordered scene with place/undo/reset and snapshot save/restore
//! - [`Snapshot`] - JSON pose records for persistence
//! - [`MeshProvider`] / [`MeshLibrary`] - Organ meshes, fatal on load failure
//! - [`AudioCue`] - Fire-and-forget placement sound
//! - [`KeyValueStore`] - Persistent storage for snapshots
//! - [`Clock`] - Injected time source

mod kind;
mod placed_object;
mod snapshot;
mod scene_store;
mod clock;
mod assets;
mod audio;
mod storage;

pub use kind::{normalize_rgb, OrganKind, KindProfile, SurfaceMaterial};
pub use placed_object::{PlacedObject, DEFAULT_SCALE};
pub use snapshot::{Snapshot, SnapshotRecord, PersistenceError};
pub use scene_store::{SceneStore, PlacementError};
pub use clock::{Clock, SystemClock, ManualClock};
pub use assets::{AssetLoadError, MeshHandle, MeshId, MeshLibrary, MeshProvider};
pub use audio::{AudioCue, AudioUnavailable, SilentCue};
pub use storage::{KeyValueStore, MemoryStore, FileStore};

// Re-export math types used in the public API
pub use anatomy_math::Vec3;
