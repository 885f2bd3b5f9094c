//! UI state shared by input handling and the frame pass
//!
//! - `AppState`: selected kind plus the sound/grid/hints toggles
//! - `TransientLabel`: a button caption that temporarily shows a status word

use std::time::Duration;

use anatomy_core::OrganKind;

/// Process-wide UI toggles, created once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppState {
    /// Kind placed by the next click
    pub selected: OrganKind,
    /// Whether placement plays the cue
    pub sound_enabled: bool,
    pub grid_visible: bool,
    /// Keyboard shortcut reference overlay
    pub hints_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            selected: OrganKind::Heart,
            sound_enabled: true,
            grid_visible: true,
            hints_visible: false,
        }
    }

    /// Select a kind; selecting the current kind again changes nothing
    pub fn select(&mut self, kind: OrganKind) {
        self.selected = kind;
    }

    /// Flip sound, returning the new value
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    /// Flip grid visibility, returning the new value
    pub fn toggle_grid(&mut self) -> bool {
        self.grid_visible = !self.grid_visible;
        self.grid_visible
    }

    /// Flip the hints overlay, returning the new value
    pub fn toggle_hints(&mut self) -> bool {
        self.hints_visible = !self.hints_visible;
        self.hints_visible
    }

    pub fn sound_label(&self) -> &'static str {
        if self.sound_enabled { "Sound" } else { "Mute" }
    }

    pub fn grid_label(&self) -> &'static str {
        if self.grid_visible { "Grid" } else { "No Grid" }
    }
}

/// Button caption that shows a status word for a while, then reverts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientLabel {
    base: &'static str,
    flash: Option<(&'static str, Duration)>,
}

impl TransientLabel {
    pub fn new(base: &'static str) -> Self {
        Self { base, flash: None }
    }

    /// Show `text` from `now` until `now + hold`; replaces any earlier flash
    pub fn flash(&mut self, text: &'static str, now: Duration, hold: Duration) {
        self.flash = Some((text, now + hold));
    }

    /// Caption at time `now`
    pub fn text(&self, now: Duration) -> &'static str {
        match self.flash {
            Some((text, until)) if now < until => text,
            _ => self.base,
        }
    }

    /// Whether a status word is showing at `now`
    pub fn is_flashing(&self, now: Duration) -> bool {
        matches!(self.flash, Some((_, until)) if now < until)
    }
}
