//! 3D Mathematics Library
//!
//! Small vector and matrix toolkit for the anatomy placement demo.
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Mat4`] - column-major 4x4 matrix plus transform builders
//! - [`map_range`] / [`lerp`] - scalar interpolation helpers

mod vec3;
mod scalar;
pub mod mat4;

pub use vec3::Vec3;
pub use mat4::Mat4;
pub use scalar::{lerp, map_range};
