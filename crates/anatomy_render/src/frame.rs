//! Per-frame render description
//!
//! A [`Frame`] is everything the renderer needs for one display refresh:
//! background, camera matrices, lights, grid, model draws in scene order,
//! spawn markers and the 2D overlay. Building a frame never touches the GPU,
//! so the scene side can be tested headless.

use anatomy_core::{normalize_rgb as rgb, MeshId, OrganKind, SurfaceMaterial};
use anatomy_math::{Mat4, Vec3};
use bitflags::bitflags;

/// One organ mesh to draw
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelDraw {
    pub mesh: MeshId,
    pub kind: OrganKind,
    /// Model-to-world transform
    pub model: Mat4,
    pub material: SurfaceMaterial,
}

/// One spawn-effect marker in world space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerDraw {
    pub position: Vec3,
    pub size: f32,
    /// RGBA, alpha carries the fade
    pub color: [f32; 4],
}

impl MarkerDraw {
    /// White marker with the given opacity
    pub fn white(position: Vec3, size: f32, opacity: f32) -> Self {
        Self {
            position,
            size,
            color: [1.0, 1.0, 1.0, opacity.clamp(0.0, 1.0)],
        }
    }
}

/// A single grid line segment
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub from: Vec3,
    pub to: Vec3,
    pub color: [f32; 4],
    pub width: f32,
}

/// Square reference grid on the ground plane (y = 0)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    pub half_extent: f32,
    pub step: f32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            half_extent: 400.0,
            step: 50.0,
        }
    }
}

impl Grid {
    const LINE_COLOR: [f32; 4] = [60.0 / 255.0, 60.0 / 255.0, 80.0 / 255.0, 150.0 / 255.0];
    const AXIS_COLOR: [f32; 4] = [100.0 / 255.0, 100.0 / 255.0, 150.0 / 255.0, 200.0 / 255.0];

    /// Grid lines in both directions followed by the two emphasised axes
    pub fn lines(&self) -> Vec<GridLine> {
        let e = self.half_extent;
        let mut lines = Vec::new();
        if self.step <= 0.0 || e <= 0.0 {
            return lines;
        }

        let count = (2.0 * e / self.step).round() as i32;
        for i in 0..=count {
            let t = -e + i as f32 * self.step;
            lines.push(GridLine {
                from: Vec3::new(t, 0.0, -e),
                to: Vec3::new(t, 0.0, e),
                color: Self::LINE_COLOR,
                width: 1.0,
            });
            lines.push(GridLine {
                from: Vec3::new(-e, 0.0, t),
                to: Vec3::new(e, 0.0, t),
                color: Self::LINE_COLOR,
                width: 1.0,
            });
        }

        lines.push(GridLine {
            from: Vec3::new(-e, 0.0, 0.0),
            to: Vec3::new(e, 0.0, 0.0),
            color: Self::AXIS_COLOR,
            width: 2.0,
        });
        lines.push(GridLine {
            from: Vec3::new(0.0, 0.0, -e),
            to: Vec3::new(0.0, 0.0, e),
            color: Self::AXIS_COLOR,
            width: 2.0,
        });
        lines
    }
}

/// Light source
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Ambient { color: [f32; 3] },
    Directional { color: [f32; 3], direction: Vec3 },
    Point { color: [f32; 3], position: Vec3 },
    Spot {
        color: [f32; 3],
        position: Vec3,
        direction: Vec3,
        /// Cone half-angle in radians
        angle: f32,
        concentration: f32,
    },
}

/// The scene's lights for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct LightRig {
    pub lights: Vec<Light>,
}

impl LightRig {
    /// Fixed studio lighting plus a spotlight tracking the pointer
    pub fn studio(pointer: Vec3) -> Self {
        Self {
            lights: vec![
                Light::Ambient { color: rgb([60, 60, 80]) },
                Light::Directional {
                    color: rgb([255, 255, 240]),
                    direction: Vec3::new(0.5, 0.5, -1.0).normalized(),
                },
                Light::Point {
                    color: rgb([255, 200, 200]),
                    position: Vec3::new(300.0, -200.0, 200.0),
                },
                Light::Point {
                    color: rgb([200, 200, 255]),
                    position: Vec3::new(-300.0, -200.0, 200.0),
                },
                Light::Point {
                    color: rgb([200, 200, 200]),
                    position: Vec3::new(0.0, 300.0, 100.0),
                },
                Light::Spot {
                    color: [1.0, 1.0, 1.0],
                    position: Vec3::new(pointer.x, pointer.y, 400.0),
                    direction: Vec3::new(0.0, 0.0, -1.0),
                    angle: std::f32::consts::FRAC_PI_4,
                    concentration: 10.0,
                },
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }
}

bitflags! {
    /// Which overlay layers are visible this frame
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct OverlayFlags: u8 {
        const CONTROLS     = 0b0000_0001;
        const STATS        = 0b0000_0010;
        const INSTRUCTIONS = 0b0000_0100;
        const KEY_HINTS    = 0b0000_1000;
        const ERROR        = 0b0001_0000;
    }
}

/// A control button as it should appear
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonView {
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub highlighted: bool,
}

/// Frame statistics shown in the corner
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stats {
    pub fps: u32,
    pub models: usize,
    pub selected: OrganKind,
}

impl Stats {
    pub fn lines(&self) -> [String; 3] {
        [
            format!("FPS: {}", self.fps),
            format!("Models: {}", self.models),
            format!("Selected: {}", self.selected.as_str().to_uppercase()),
        ]
    }
}

/// Instruction text for an empty scene
pub fn instruction_lines(mobile: bool) -> Vec<&'static str> {
    if mobile {
        vec!["Tap to place organ", "Select model from buttons above", "Drag to rotate"]
    } else {
        vec![
            "Click screen to place organ",
            "Select model from buttons above",
            "Drag to rotate • Scroll to zoom",
            "Keyboard: H=Heart, B=Brain, U=Undo, R=Reset",
        ]
    }
}

/// Keyboard shortcut reference toggled with `?`
pub const KEY_HINTS: [&str; 7] = [
    "H: Heart",
    "B: Brain",
    "U: Undo",
    "R: Reset",
    "G: Toggle grid",
    "S: Toggle sound",
    "?: Toggle this help",
];

/// 2D overlay drawn over the scene
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    pub flags: OverlayFlags,
    pub buttons: Vec<ButtonView>,
    pub stats: Option<Stats>,
    pub instructions: Vec<&'static str>,
    pub error: Option<String>,
}

impl Overlay {
    /// Error-only overlay for a fatal asset failure
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            flags: OverlayFlags::ERROR,
            buttons: Vec::new(),
            stats: None,
            instructions: Vec::new(),
            error: Some(message.into()),
        }
    }

    /// Text lines in draw order, for renderers without a font pipeline
    pub fn text_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(message) = &self.error {
            lines.push("Error Loading Assets".to_string());
            lines.push(message.clone());
            lines.push("Please check if all files are in the same directory".to_string());
            return lines;
        }
        if self.flags.contains(OverlayFlags::INSTRUCTIONS) {
            lines.extend(self.instructions.iter().map(|s| s.to_string()));
        }
        if self.flags.contains(OverlayFlags::KEY_HINTS) {
            lines.extend(KEY_HINTS.iter().map(|s| s.to_string()));
        }
        if let Some(stats) = &self.stats {
            if self.flags.contains(OverlayFlags::STATS) {
                lines.extend(stats.lines());
            }
        }
        lines
    }
}

/// Everything needed to draw one frame
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub background: [f32; 3],
    pub view: Mat4,
    pub projection: Mat4,
    pub lights: LightRig,
    pub grid: Option<Grid>,
    pub models: Vec<ModelDraw>,
    pub markers: Vec<MarkerDraw>,
    pub overlay: Overlay,
}

impl Frame {
    /// Frame showing only the asset error message
    pub fn error(background: [f32; 3], message: impl Into<String>) -> Self {
        Self {
            background,
            view: anatomy_math::mat4::IDENTITY,
            projection: anatomy_math::mat4::IDENTITY,
            lights: LightRig { lights: Vec::new() },
            grid: None,
            models: Vec::new(),
            markers: Vec::new(),
            overlay: Overlay::error(message),
        }
    }

    pub fn is_error(&self) -> bool {
        self.overlay.flags.contains(OverlayFlags::ERROR)
    }
}
