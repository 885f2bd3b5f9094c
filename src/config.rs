//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`ANATOMY_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anatomy_anim::{AnimationParams, SpawnEffectParams};
use anatomy_core::OrganKind;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub spawn_effect: SpawnEffectConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub persistence: PersistenceConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub rendering: RenderingConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`ANATOMY_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // ANATOMY_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("ANATOMY_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Anatomy Placement".to_string(),
            width: 1280,
            height: 720,
            vsync: true,
        }
    }
}

/// Animation constants (radians, per frame)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub float_amplitude: f32,
    pub float_speed: f32,
    pub rotation_speed: f64,
    pub wobble_speed: f32,
    pub wobble_amplitude: f32,
    pub pulse_speed: f32,
    pub pulse_amplitude: f32,
    /// Scale given to newly placed objects
    pub default_scale: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        let params = AnimationParams::default();
        Self {
            float_amplitude: params.float_amplitude,
            float_speed: params.float_speed,
            rotation_speed: params.rotation_speed,
            wobble_speed: params.wobble_speed,
            wobble_amplitude: params.wobble_amplitude,
            pulse_speed: params.pulse_speed,
            pulse_amplitude: params.pulse_amplitude,
            default_scale: anatomy_core::DEFAULT_SCALE,
        }
    }
}

impl AnimationConfig {
    pub fn params(&self) -> AnimationParams {
        AnimationParams {
            float_amplitude: self.float_amplitude,
            float_speed: self.float_speed,
            rotation_speed: self.rotation_speed,
            wobble_speed: self.wobble_speed,
            wobble_amplitude: self.wobble_amplitude,
            pulse_speed: self.pulse_speed,
            pulse_amplitude: self.pulse_amplitude,
        }
    }
}

/// Spawn ring settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnEffectConfig {
    pub duration_ms: u64,
    pub marker_count: usize,
    pub start_radius: f32,
    pub end_radius: f32,
    pub marker_size: f32,
}

impl Default for SpawnEffectConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            marker_count: 5,
            start_radius: 10.0,
            end_radius: 50.0,
            marker_size: 5.0,
        }
    }
}

impl SpawnEffectConfig {
    pub fn params(&self) -> SpawnEffectParams {
        SpawnEffectParams {
            duration: Duration::from_millis(self.duration_ms),
            marker_count: self.marker_count,
            start_radius: self.start_radius,
            end_radius: self.end_radius,
            marker_size: self.marker_size,
        }
    }
}

/// Control bar layout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewports narrower than this use the two-row mobile layout
    pub mobile_breakpoint: f32,
    pub desktop_band_height: f32,
    pub mobile_band_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
            desktop_band_height: 80.0,
            mobile_band_height: 110.0,
        }
    }
}

/// Save/load settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    /// Directory holding saved scenes
    pub storage_dir: PathBuf,
    /// Key the scene is saved under
    pub scene_key: String,
    /// How long "Saved!"/"Loaded!"/"Error!" stay on the buttons
    pub indicator_ms: u64,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("storage"),
            scene_key: "anatomyScene".to_string(),
            indicator_ms: 2000,
        }
    }
}

impl PersistenceConfig {
    pub fn indicator_duration(&self) -> Duration {
        Duration::from_millis(self.indicator_ms)
    }
}

/// Asset locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub heart_mesh: PathBuf,
    pub brain_mesh: PathBuf,
    pub tap_sound: PathBuf,
    /// Placement cue volume (0.0 to 1.0)
    pub volume: f32,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            heart_mesh: PathBuf::from("assets/heart.obj"),
            brain_mesh: PathBuf::from("assets/brain.obj"),
            tap_sound: PathBuf::from("assets/tap-sound.mp3"),
            volume: 0.6,
        }
    }
}

impl AssetsConfig {
    /// Mesh path per kind, in selector order
    pub fn mesh_paths(&self) -> Vec<(OrganKind, PathBuf)> {
        vec![
            (OrganKind::Heart, self.heart_mesh.clone()),
            (OrganKind::Brain, self.brain_mesh.clone()),
        ]
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting distance from the origin
    pub distance: f32,
    /// Field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Orbit radians per dragged pixel
    pub orbit_sensitivity: f32,
    pub zoom_sensitivity: f32,
    /// Pixels a press may travel before it becomes a drag
    pub drag_threshold: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 800.0,
            fov: 60.0,
            near: 1.0,
            far: 5000.0,
            orbit_sensitivity: 0.005,
            zoom_sensitivity: 0.001,
            drag_threshold: 4.0,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b]
    pub background_color: [f32; 3],
    pub grid_half_extent: f32,
    pub grid_step: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [30.0 / 255.0, 30.0 / 255.0, 40.0 / 255.0],
            grid_half_extent: 400.0,
            grid_step: 50.0,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
