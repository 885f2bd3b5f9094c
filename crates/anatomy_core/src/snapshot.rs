//! Scene snapshots
//!
//! A snapshot is the ordered list of pose records written on save and read on
//! load. The wire format is a JSON array, one object per placed organ:
//!
//! ```json
//! [{"type":"heart","x":100.0,"y":50.0,"z":0.0,"rotation":0.4,"scale":1.5}]
//! ```
//!
//! Phase offsets and birth times are deliberately absent.

use serde::{Serialize, Deserialize};
use std::fmt;
use std::io;

use crate::kind::OrganKind;
use crate::placed_object::PlacedObject;

/// Pose record for one placed organ
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    #[serde(rename = "type")]
    pub kind: OrganKind,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub rotation: f64,
    pub scale: f32,
}

impl SnapshotRecord {
    /// Capture the persisted fields of an object
    pub fn from_object(object: &PlacedObject) -> Self {
        let p = object.position();
        Self {
            kind: object.kind(),
            x: p.x,
            y: p.y,
            z: p.z,
            rotation: object.rotation(),
            scale: object.scale(),
        }
    }

    /// Check the record can become a valid object
    fn validate(&self, index: usize) -> Result<(), PersistenceError> {
        let fields = [
            ("x", f64::from(self.x)),
            ("y", f64::from(self.y)),
            ("z", f64::from(self.z)),
            ("rotation", self.rotation),
            ("scale", f64::from(self.scale)),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(PersistenceError::InvalidRecord {
                    index,
                    reason: format!("{} is not a finite number", name),
                });
            }
        }
        if self.scale <= 0.0 {
            return Err(PersistenceError::InvalidRecord {
                index,
                reason: format!("scale must be positive, got {}", self.scale),
            });
        }
        Ok(())
    }
}

/// Ordered list of pose records (scene order)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    pub records: Vec<SnapshotRecord>,
}

impl Snapshot {
    pub fn new(records: Vec<SnapshotRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Encode as a compact JSON array
    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode and validate a JSON array of records
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Validate every record, reporting the first bad one
    pub fn validate(&self) -> Result<(), PersistenceError> {
        for (index, record) in self.records.iter().enumerate() {
            record.validate(index)?;
        }
        Ok(())
    }
}

/// Error saving or restoring a snapshot
#[derive(Debug)]
pub enum PersistenceError {
    /// Not a JSON array of well-formed records
    Malformed(serde_json::Error),
    /// Well-formed JSON with an out-of-range field
    InvalidRecord { index: usize, reason: String },
    /// Backing store failure
    Storage(io::Error),
}

impl From<serde_json::Error> for PersistenceError {
    fn from(e: serde_json::Error) -> Self {
        PersistenceError::Malformed(e)
    }
}

impl From<io::Error> for PersistenceError {
    fn from(e: io::Error) -> Self {
        PersistenceError::Storage(e)
    }
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Malformed(e) => write!(f, "Malformed snapshot: {}", e),
            PersistenceError::InvalidRecord { index, reason } => {
                write!(f, "Invalid snapshot record {}: {}", index, reason)
            }
            PersistenceError::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistenceError::Malformed(e) => Some(e),
            PersistenceError::InvalidRecord { .. } => None,
            PersistenceError::Storage(e) => Some(e),
        }
    }
}
