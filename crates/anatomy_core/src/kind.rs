//! Organ kinds and their per-kind presentation profile
//!
//! Everything that differs between a heart and a brain lives in one
//! [`KindProfile`] table so the animation and render code never branch on the
//! kind directly.

use serde::{Serialize, Deserialize};
use std::f32::consts::FRAC_PI_2;
use std::fmt;

/// The organ type of a placed object, fixed at creation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganKind {
    Heart,
    Brain,
}

impl Default for OrganKind {
    fn default() -> Self {
        OrganKind::Heart
    }
}

impl OrganKind {
    /// Every kind, in selector-button order
    pub const ALL: [OrganKind; 2] = [OrganKind::Heart, OrganKind::Brain];

    /// Lowercase identifier used in snapshots and asset names
    pub fn as_str(self) -> &'static str {
        match self {
            OrganKind::Heart => "heart",
            OrganKind::Brain => "brain",
        }
    }

    /// Button caption ("Heart", "Brain")
    pub fn label(self) -> &'static str {
        match self {
            OrganKind::Heart => "Heart",
            OrganKind::Brain => "Brain",
        }
    }

    /// Look up the presentation profile for this kind
    pub fn profile(self) -> &'static KindProfile {
        match self {
            OrganKind::Heart => &HEART_PROFILE,
            OrganKind::Brain => &BRAIN_PROFILE,
        }
    }
}

impl fmt::Display for OrganKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed surface material for a kind (specular tint, shininess, glow)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMaterial {
    /// Specular color, 8-bit RGB
    pub specular: [u8; 3],
    /// Specular exponent
    pub shininess: f32,
    /// Emissive color, 8-bit RGB
    pub emissive: [u8; 3],
}

impl SurfaceMaterial {
    /// Deep crimson with a faint red glow
    pub const HEART: Self = Self {
        specular: [220, 20, 60],
        shininess: 25.0,
        emissive: [50, 5, 15],
    };

    /// Soft pink with a dim glow
    pub const BRAIN: Self = Self {
        specular: [255, 182, 193],
        shininess: 20.0,
        emissive: [30, 20, 25],
    };

    /// Specular color as normalized floats
    pub fn specular_rgb(&self) -> [f32; 3] {
        normalize_rgb(self.specular)
    }

    /// Emissive color as normalized floats
    pub fn emissive_rgb(&self) -> [f32; 3] {
        normalize_rgb(self.emissive)
    }
}

/// Normalize an 8-bit RGB triple to [0, 1] floats
pub fn normalize_rgb(c: [u8; 3]) -> [f32; 3] {
    [c[0] as f32 / 255.0, c[1] as f32 / 255.0, c[2] as f32 / 255.0]
}

/// Per-kind animation and material settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KindProfile {
    /// Surface material applied before drawing the mesh
    pub material: SurfaceMaterial,
    /// Fixed rotation about X correcting the mesh's authored orientation (radians)
    pub orientation_correction: f32,
    /// Whether the object rocks about Z on top of its spin
    pub has_wobble: bool,
    /// Whether the object's scale beats with a sine pulse
    pub has_pulse: bool,
}

static HEART_PROFILE: KindProfile = KindProfile {
    material: SurfaceMaterial::HEART,
    orientation_correction: 0.0,
    has_wobble: false,
    has_pulse: true,
};

static BRAIN_PROFILE: KindProfile = KindProfile {
    material: SurfaceMaterial::BRAIN,
    orientation_correction: -FRAC_PI_2,
    has_wobble: true,
    has_pulse: false,
};
