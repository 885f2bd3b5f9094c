//! Organ mesh assets
//!
//! Mesh rasterization is not done here: the library reads each kind's OBJ file
//! once at startup, checks that it contains geometry, and hands out an opaque
//! [`MeshHandle`] the renderer can key its GPU buffers on. Any failure is
//! fatal for the session and is reported through [`MeshProvider::load_error`].

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::kind::OrganKind;

/// Unique identifier for a loaded mesh. IDs start at 1.
pub type MeshId = u64;

/// Error loading an organ mesh
#[derive(Debug)]
pub enum AssetLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io { path: PathBuf, source: io::Error },
    /// The file is not a usable OBJ mesh
    Parse { path: PathBuf, message: String },
    /// The file parsed but holds no vertices or faces
    Empty(PathBuf),
}

impl AssetLoadError {
    /// Path of the asset that failed
    pub fn path(&self) -> &Path {
        match self {
            AssetLoadError::Io { path, .. } => path,
            AssetLoadError::Parse { path, .. } => path,
            AssetLoadError::Empty(path) => path,
        }
    }
}

impl fmt::Display for AssetLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetLoadError::Io { path, source } => {
                write!(f, "Failed to load {}: {}", path.display(), source)
            }
            AssetLoadError::Parse { path, message } => {
                write!(f, "Failed to parse {}: {}", path.display(), message)
            }
            AssetLoadError::Empty(path) => write!(f, "Mesh {} has no geometry", path.display()),
        }
    }
}

impl std::error::Error for AssetLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetLoadError::Io { source, .. } => Some(source),
            AssetLoadError::Parse { .. } => None,
            AssetLoadError::Empty(_) => None,
        }
    }
}

/// Opaque drawable handle for one organ mesh
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MeshHandle {
    id: MeshId,
    kind: OrganKind,
    path: PathBuf,
    vertex_count: usize,
    face_count: usize,
}

impl MeshHandle {
    pub fn id(&self) -> MeshId {
        self.id
    }

    pub fn kind(&self) -> OrganKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn face_count(&self) -> usize {
        self.face_count
    }
}

/// Supplies a drawable mesh per kind
pub trait MeshProvider {
    /// Handle for `kind`, if it finished loading
    fn mesh(&self, kind: OrganKind) -> Option<&MeshHandle>;

    /// Fatal load error, if any mesh failed
    fn load_error(&self) -> Option<&AssetLoadError>;

    /// Whether every kind has a mesh
    fn is_ready(&self) -> bool {
        self.load_error().is_none() && OrganKind::ALL.iter().all(|k| self.mesh(*k).is_some())
    }
}

/// Geometry counts across every model in an OBJ document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ObjStats {
    vertices: usize,
    faces: usize,
}

/// Parse OBJ text with tobj; material libraries are not needed and never opened
fn parse_obj(source: &str) -> Result<ObjStats, tobj::LoadError> {
    let (models, _materials) = tobj::load_obj_buf(
        &mut source.as_bytes(),
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
        |_| Err(tobj::LoadError::OpenFileFailed),
    )?;

    Ok(models.iter().fold(ObjStats { vertices: 0, faces: 0 }, |stats, model| ObjStats {
        vertices: stats.vertices + model.mesh.positions.len() / 3,
        faces: stats.faces + model.mesh.indices.len() / 3,
    }))
}

/// File-backed mesh library, one OBJ per organ kind
pub struct MeshLibrary {
    meshes: HashMap<OrganKind, MeshHandle>,
    error: Option<AssetLoadError>,
    next_id: MeshId,
}

impl Default for MeshLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshLibrary {
    /// Create an empty library (not ready until every kind is loaded)
    pub fn new() -> Self {
        Self {
            meshes: HashMap::new(),
            error: None,
            next_id: 1,
        }
    }

    /// Load every kind's mesh; the first failure is kept and loading stops
    pub fn load_all<P: AsRef<Path>>(paths: &[(OrganKind, P)]) -> Self {
        let mut library = Self::new();
        for (kind, path) in paths {
            if let Err(e) = library.load(*kind, path).map(|_| ()) {
                log::error!("{}", e);
                library.error = Some(e);
                break;
            }
        }
        library
    }

    /// Load a single mesh from disk, replacing any previous mesh for `kind`
    pub fn load(&mut self, kind: OrganKind, path: impl AsRef<Path>) -> Result<&MeshHandle, AssetLoadError> {
        let path = path.as_ref().to_path_buf();
        let source = fs::read_to_string(&path).map_err(|e| AssetLoadError::Io {
            path: path.clone(),
            source: e,
        })?;
        self.insert_source(kind, path, &source)
    }

    /// Register a mesh from in-memory OBJ text
    pub fn insert_source(
        &mut self,
        kind: OrganKind,
        path: PathBuf,
        source: &str,
    ) -> Result<&MeshHandle, AssetLoadError> {
        let stats = parse_obj(source).map_err(|e| AssetLoadError::Parse {
            path: path.clone(),
            message: e.to_string(),
        })?;
        if stats.vertices == 0 || stats.faces == 0 {
            return Err(AssetLoadError::Empty(path));
        }

        let id = self.next_id;
        self.next_id += 1;
        log::info!(
            "Loaded {} mesh from {} ({} vertices, {} faces)",
            kind,
            path.display(),
            stats.vertices,
            stats.faces
        );

        let handle = MeshHandle {
            id,
            kind,
            path,
            vertex_count: stats.vertices,
            face_count: stats.faces,
        };
        self.meshes.insert(kind, handle);
        Ok(&self.meshes[&kind])
    }

    /// Record a fatal error from an external loader
    pub fn fail(&mut self, error: AssetLoadError) {
        self.error = Some(error);
    }
}

impl MeshProvider for MeshLibrary {
    fn mesh(&self, kind: OrganKind) -> Option<&MeshHandle> {
        self.meshes.get(&kind)
    }

    fn load_error(&self) -> Option<&AssetLoadError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = "# tri\nv 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1 2 3\n";

    #[test]
    fn test_parse_obj_counts() {
        let stats = parse_obj(TRIANGLE).unwrap();
        assert_eq!(stats, ObjStats { vertices: 3, faces: 1 });
    }

    #[test]
    fn test_parse_obj_triangulates_quads() {
        let quad = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        let stats = parse_obj(quad).unwrap();
        assert_eq!(stats, ObjStats { vertices: 4, faces: 2 });
    }

    #[test]
    fn test_short_vertex_is_parse_error() {
        let mut library = MeshLibrary::new();
        let err = library
            .insert_source(OrganKind::Heart, "heart.obj".into(), "v 1 2\nf 1 1 1\n")
            .unwrap_err();
        assert!(matches!(err, AssetLoadError::Parse { .. }));
        assert!(format!("{}", err).contains("heart.obj"));
    }

    #[test]
    fn test_mtllib_reference_does_not_fail() {
        let with_mtl = format!("mtllib heart.mtl\n{}", TRIANGLE);
        let stats = parse_obj(&with_mtl).unwrap();
        assert_eq!(stats.faces, 1);
    }

    #[test]
    fn test_insert_source_assigns_ids() {
        let mut library = MeshLibrary::new();
        let heart = library.insert_source(OrganKind::Heart, "heart.obj".into(), TRIANGLE).unwrap().id();
        let brain = library.insert_source(OrganKind::Brain, "brain.obj".into(), TRIANGLE).unwrap().id();
        assert_eq!(heart, 1);
        assert_eq!(brain, 2);
        assert!(library.is_ready());
        assert_eq!(library.mesh(OrganKind::Brain).unwrap().vertex_count(), 3);
    }

    #[test]
    fn test_partial_library_not_ready() {
        let mut library = MeshLibrary::new();
        library.insert_source(OrganKind::Heart, "heart.obj".into(), TRIANGLE).unwrap();
        assert!(!library.is_ready());
        assert!(library.load_error().is_none());
    }

    #[test]
    fn test_empty_mesh_rejected() {
        let mut library = MeshLibrary::new();
        let err = library.insert_source(OrganKind::Heart, "heart.obj".into(), "# nothing\n").unwrap_err();
        assert!(matches!(err, AssetLoadError::Empty(_)));
    }

    #[test]
    fn test_load_all_missing_file_is_fatal() {
        let library = MeshLibrary::load_all(&[
            (OrganKind::Heart, "definitely/missing/heart.obj"),
            (OrganKind::Brain, "definitely/missing/brain.obj"),
        ]);
        let err = library.load_error().expect("missing file should fail");
        assert!(matches!(err, AssetLoadError::Io { .. }));
        assert!(format!("{}", err).contains("heart.obj"));
        assert!(!library.is_ready());
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;

        let io_err = AssetLoadError::Io {
            path: "a.obj".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(io_err.source().is_some());
        assert_eq!(io_err.path(), Path::new("a.obj"));
        assert!(AssetLoadError::Empty("b.obj".into()).source().is_none());
    }
}
