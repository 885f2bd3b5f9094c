//! Control bar layout
//!
//! Buttons sit in a reserved band at the top of the viewport. Narrow viewports
//! get a two-row arrangement and a taller band. The layout is recomputed on
//! every resize and never touches scene data.

use crate::config::LayoutConfig;

/// One control in the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Heart,
    Brain,
    Undo,
    Reset,
    Sound,
    Grid,
    Save,
    Load,
}

/// Axis-aligned rectangle in window pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

const DESKTOP_POSITIONS: [(ControlId, f32, f32); 8] = [
    (ControlId::Heart, 20.0, 20.0),
    (ControlId::Brain, 120.0, 20.0),
    (ControlId::Undo, 220.0, 20.0),
    (ControlId::Reset, 320.0, 20.0),
    (ControlId::Sound, 420.0, 20.0),
    (ControlId::Grid, 520.0, 20.0),
    (ControlId::Save, 620.0, 20.0),
    (ControlId::Load, 720.0, 20.0),
];

const MOBILE_POSITIONS: [(ControlId, f32, f32); 8] = [
    (ControlId::Heart, 10.0, 10.0),
    (ControlId::Brain, 90.0, 10.0),
    (ControlId::Undo, 170.0, 10.0),
    (ControlId::Save, 250.0, 10.0),
    (ControlId::Reset, 10.0, 55.0),
    (ControlId::Sound, 90.0, 55.0),
    (ControlId::Grid, 170.0, 55.0),
    (ControlId::Load, 250.0, 55.0),
];

const DESKTOP_BUTTON: (f32, f32) = (90.0, 40.0);
const MOBILE_BUTTON: (f32, f32) = (72.0, 36.0);

/// Button placement for the current viewport
#[derive(Debug, Clone, PartialEq)]
pub struct ControlLayout {
    width: f32,
    height: f32,
    mobile: bool,
    band_height: f32,
    buttons: Vec<(ControlId, Rect)>,
}

impl ControlLayout {
    /// Lay out the bar for a viewport of `width` x `height` pixels
    pub fn compute(width: f32, height: f32, config: &LayoutConfig) -> Self {
        let mobile = width < config.mobile_breakpoint;
        let (positions, (bw, bh)) = if mobile {
            (&MOBILE_POSITIONS, MOBILE_BUTTON)
        } else {
            (&DESKTOP_POSITIONS, DESKTOP_BUTTON)
        };
        let band_height = if mobile {
            config.mobile_band_height
        } else {
            config.desktop_band_height
        };

        let buttons = positions
            .iter()
            .map(|&(id, x, y)| (id, Rect { x, y, width: bw, height: bh }))
            .collect();

        Self {
            width,
            height,
            mobile,
            band_height,
            buttons,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    /// Height of the reserved band at the top of the viewport
    pub fn band_height(&self) -> f32 {
        self.band_height
    }

    /// Whether a pointer at window y falls inside the reserved band
    pub fn in_control_band(&self, y: f32) -> bool {
        y < self.band_height
    }

    /// Button under the pointer, if any
    pub fn control_at(&self, x: f32, y: f32) -> Option<ControlId> {
        self.buttons
            .iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(id, _)| *id)
    }

    pub fn rect(&self, id: ControlId) -> Option<Rect> {
        self.buttons.iter().find(|(b, _)| *b == id).map(|(_, r)| *r)
    }

    pub fn buttons(&self) -> &[(ControlId, Rect)] {
        &self.buttons
    }
}
