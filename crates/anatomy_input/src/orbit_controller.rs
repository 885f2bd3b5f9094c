//! Orbit controller for pointer-driven camera input
//!
//! Controls:
//! - Left drag: orbit around the scene origin
//! - Scroll: zoom in/out
//!
//! A left press that is released without moving past the drag threshold is a
//! click. The controller reports it so the caller can place an object there.

use anatomy_math::Vec3;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

/// Pixels per scroll "line" for devices that report line deltas
const PIXELS_PER_LINE: f32 = 40.0;

/// Outcome of a pointer button event
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerGesture {
    /// Button went down; nothing decided yet
    Pressed,
    /// Released without dragging, at the given window position
    Click { x: f32, y: f32 },
    /// Released after an orbit drag
    DragEnd,
    /// Not a button the controller tracks
    Ignored,
}

/// Camera controller for orbit and zoom input
pub struct OrbitController {
    // Pointer state
    pressed: bool,
    cursor: Option<(f32, f32)>,
    press_origin: (f32, f32),
    dragging: bool,
    pending_yaw: f32,
    pending_pitch: f32,
    pending_zoom: f32,

    // Input smoothing state
    smooth_yaw: f32,
    smooth_pitch: f32,

    // Configuration
    pub orbit_sensitivity: f32,
    pub zoom_sensitivity: f32,
    pub drag_threshold: f32,
    pub smoothing_half_life: f32,
    pub smoothing_enabled: bool,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitController {
    pub fn new() -> Self {
        Self {
            pressed: false,
            cursor: None,
            press_origin: (0.0, 0.0),
            dragging: false,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_zoom: 0.0,

            smooth_yaw: 0.0,
            smooth_pitch: 0.0,

            orbit_sensitivity: 0.005,
            zoom_sensitivity: 0.001,
            drag_threshold: 4.0,
            smoothing_half_life: 0.05,
            smoothing_enabled: false,
        }
    }

    /// Process a mouse button; a left release reports click or drag end
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) -> PointerGesture {
        if button != MouseButton::Left {
            return PointerGesture::Ignored;
        }

        match state {
            ElementState::Pressed => {
                self.pressed = true;
                self.dragging = false;
                self.press_origin = self.cursor.unwrap_or((0.0, 0.0));
                PointerGesture::Pressed
            }
            ElementState::Released => {
                if !self.pressed {
                    return PointerGesture::Ignored;
                }
                self.pressed = false;
                if self.dragging {
                    self.dragging = false;
                    PointerGesture::DragEnd
                } else {
                    let (x, y) = self.cursor.unwrap_or(self.press_origin);
                    PointerGesture::Click { x, y }
                }
            }
        }
    }

    /// Process an absolute cursor position in window pixels
    pub fn process_cursor_moved(&mut self, x: f32, y: f32) {
        if let Some((last_x, last_y)) = self.cursor {
            if self.pressed {
                let (ox, oy) = self.press_origin;
                let travelled = ((x - ox).powi(2) + (y - oy).powi(2)).sqrt();
                if travelled > self.drag_threshold {
                    self.dragging = true;
                }
                if self.dragging {
                    self.pending_yaw += x - last_x;
                    self.pending_pitch += y - last_y;
                }
            }
        }
        self.cursor = Some((x, y));
    }

    /// Process a scroll wheel delta
    pub fn process_scroll(&mut self, delta: MouseScrollDelta) {
        let amount = match delta {
            MouseScrollDelta::LineDelta(_, y) => y * PIXELS_PER_LINE,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
        };
        self.pending_zoom += amount;
    }

    /// Last known cursor position in window pixels
    pub fn cursor(&self) -> Option<(f32, f32)> {
        self.cursor
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Apply accumulated input to the camera and return its eye position
    pub fn update<C: OrbitControl>(&mut self, camera: &mut C, dt: f32) -> Vec3 {
        let (yaw_input, pitch_input) = if self.smoothing_enabled && dt > 0.0 {
            // factor = 2^(-dt / half_life)
            let smooth_factor = 2.0f32.powf(-dt / self.smoothing_half_life);
            self.smooth_yaw = self.smooth_yaw * smooth_factor + self.pending_yaw * (1.0 - smooth_factor);
            self.smooth_pitch = self.smooth_pitch * smooth_factor + self.pending_pitch * (1.0 - smooth_factor);
            (self.smooth_yaw, self.smooth_pitch)
        } else {
            (self.pending_yaw, self.pending_pitch)
        };

        if yaw_input != 0.0 || pitch_input != 0.0 {
            // Dragging right swings the camera left around the target
            camera.orbit(-yaw_input * self.orbit_sensitivity, pitch_input * self.orbit_sensitivity);
        }
        if self.pending_zoom != 0.0 {
            // Scrolling up moves closer
            camera.zoom((-self.pending_zoom * self.zoom_sensitivity).exp());
        }

        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
        self.pending_zoom = 0.0;

        camera.eye()
    }

    /// Builder: set orbit sensitivity (radians per pixel)
    pub fn with_orbit_sensitivity(mut self, sensitivity: f32) -> Self {
        self.orbit_sensitivity = sensitivity;
        self
    }

    /// Builder: set zoom sensitivity
    pub fn with_zoom_sensitivity(mut self, sensitivity: f32) -> Self {
        self.zoom_sensitivity = sensitivity;
        self
    }

    /// Builder: set how far the pointer may move before a press becomes a drag
    pub fn with_drag_threshold(mut self, pixels: f32) -> Self {
        self.drag_threshold = pixels;
        self
    }

    /// Builder: enable or disable smoothing
    pub fn with_smoothing(mut self, enabled: bool) -> Self {
        self.smoothing_enabled = enabled;
        self
    }
}

/// Trait for orbit camera control
/// Allows the controller to work with different camera implementations
pub trait OrbitControl {
    /// Rotate around the target by yaw (about Y) and pitch (about the camera's right axis)
    fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32);
    /// Multiply the distance to the target by `factor`
    fn zoom(&mut self, factor: f32);
    fn eye(&self) -> Vec3;
}
