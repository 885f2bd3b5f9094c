//! Procedural per-frame animation
//!
//! Every placed organ floats, spins and (depending on its kind) wobbles or
//! pulses. Apart from the accumulated spin stored on the object, the pose is a
//! pure function of the frame index, so frame-rate changes never desynchronize
//! objects and tests can drive any frame directly.

use std::f64::consts::TAU;

use anatomy_core::{PlacedObject, SurfaceMaterial};
use anatomy_math::{mat4, Mat4, Vec3};

/// Tunable animation constants (angles in radians, speeds per frame)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationParams {
    /// Peak vertical float displacement in world units
    pub float_amplitude: f32,
    /// Float phase advance per frame
    pub float_speed: f32,
    /// Spin added to every object per frame
    pub rotation_speed: f64,
    /// Wobble phase advance per frame
    pub wobble_speed: f32,
    /// Peak wobble angle
    pub wobble_amplitude: f32,
    /// Pulse phase advance per frame
    pub pulse_speed: f32,
    /// Peak scale change of the pulse
    pub pulse_amplitude: f32,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            float_amplitude: 20.0,
            float_speed: 0.03,
            rotation_speed: 0.02,
            wobble_speed: 0.04,
            wobble_amplitude: 3.0_f32.to_radians(),
            pulse_speed: 0.08,
            pulse_amplitude: 0.1,
        }
    }
}

/// The rendered pose of one object for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatedPose {
    /// Base position of the object
    pub translation: Vec3,
    /// Vertical float displacement added on top of the base position
    pub float_offset: f32,
    /// Accumulated spin about the vertical axis, reduced to [0, 2π)
    pub spin: f32,
    /// Fixed orientation correction about X
    pub orientation_correction: f32,
    /// Secondary rocking about Z (zero for kinds without wobble)
    pub wobble: f32,
    /// Effective uniform scale including any pulse
    pub scale: f32,
    /// Surface material for the kind
    pub material: SurfaceMaterial,
}

impl AnimatedPose {
    /// Position after the float offset is applied
    pub fn world_position(&self) -> Vec3 {
        self.translation + Vec3::new(0.0, self.float_offset, 0.0)
    }

    /// Model matrix: translate, float, spin, orientation fix, wobble, then scale
    pub fn model_matrix(&self) -> Mat4 {
        let mut m = mat4::translation(self.world_position());
        m = mat4::mul(m, mat4::rotation_y(self.spin));
        m = mat4::mul(m, mat4::rotation_x(self.orientation_correction));
        m = mat4::mul(m, mat4::rotation_z(self.wobble));
        mat4::mul(m, mat4::uniform_scale(self.scale))
    }
}

/// `sin(frame * speed + phase)`, evaluated in f64 so large frame counts stay exact
fn oscillate(frame: u64, speed: f32, phase: f32) -> f32 {
    (frame as f64 * f64::from(speed) + f64::from(phase)).sin() as f32
}

/// Computes per-frame poses from animation parameters
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationEngine {
    pub params: AnimationParams,
}

impl AnimationEngine {
    pub fn new(params: AnimationParams) -> Self {
        Self { params }
    }

    /// Vertical float displacement for an object with `phase` at `frame`
    pub fn float_offset(&self, phase: f32, frame: u64) -> f32 {
        self.params.float_amplitude * oscillate(frame, self.params.float_speed, phase)
    }

    /// Wobble angle for an object with `phase` at `frame`
    pub fn wobble(&self, phase: f32, frame: u64) -> f32 {
        oscillate(frame, self.params.wobble_speed, phase) * self.params.wobble_amplitude
    }

    /// Scale change of the pulse at `frame`, shared by all pulsing objects
    pub fn pulse(&self, frame: u64) -> f32 {
        oscillate(frame, self.params.pulse_speed, 0.0) * self.params.pulse_amplitude
    }

    /// Pose of `object` at `frame` without touching its spin
    pub fn pose(&self, object: &PlacedObject, frame: u64) -> AnimatedPose {
        let profile = object.kind().profile();
        let phase = object.phase_offset();

        let wobble = if profile.has_wobble { self.wobble(phase, frame) } else { 0.0 };
        let scale = if profile.has_pulse {
            object.scale() + self.pulse(frame)
        } else {
            object.scale()
        };

        AnimatedPose {
            translation: object.position(),
            float_offset: self.float_offset(phase, frame),
            spin: object.rotation().rem_euclid(TAU) as f32,
            orientation_correction: profile.orientation_correction,
            wobble,
            scale,
            material: profile.material,
        }
    }

    /// Advance the object's spin by one frame and return its pose
    pub fn advance(&self, object: &mut PlacedObject, frame: u64) -> AnimatedPose {
        object.spin(self.params.rotation_speed);
        self.pose(object, frame)
    }
}
