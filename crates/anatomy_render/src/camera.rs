//! Orbit camera around the scene origin
//!
//! The camera sits on a sphere around `target` and always looks at it. World
//! space is screen-aligned (y grows down), so the camera's up vector is -Y.

use anatomy_input::OrbitControl;
use anatomy_math::{mat4, Mat4, Vec3};

/// Pitch limit just short of the poles
const PITCH_LIMIT: f32 = 1.55;

/// Camera orbiting a fixed target
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub min_distance: f32,
    pub max_distance: f32,

    distance: f32,
    yaw: f32,
    pitch: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(800.0)
    }
}

impl OrbitCamera {
    /// Camera on the +Z axis at `distance` from the origin
    pub fn new(distance: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            fov_y: 60.0_f32.to_radians(),
            near: 1.0,
            far: 5000.0,
            min_distance: 50.0,
            max_distance: 4000.0,
            distance,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Builder: set vertical field of view in degrees
    pub fn with_fov_degrees(mut self, fov: f32) -> Self {
        self.fov_y = fov.to_radians();
        self
    }

    /// Builder: set clip planes
    pub fn with_clip(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Eye position in world space
    pub fn eye_position(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        // pitch > 0 lifts the eye, which is -Y in screen-aligned space
        self.target + Vec3::new(sy * cp, -sp, cy * cp) * self.distance
    }

    pub fn view_matrix(&self) -> Mat4 {
        mat4::look_at(self.eye_position(), self.target, -Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        mat4::perspective(self.fov_y, aspect, self.near, self.far)
    }

    /// Projection * view
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        mat4::mul(self.projection_matrix(aspect), self.view_matrix())
    }
}

impl OrbitControl for OrbitCamera {
    fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    fn zoom(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
        }
    }

    fn eye(&self) -> Vec3 {
        self.eye_position()
    }
}
