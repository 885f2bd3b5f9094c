//! 4x4 matrix utilities for 3D model and camera transforms
//!
//! Matrices are column-major (`m[column][row]`), matching WGSL uniform layout.
//! Composition follows the usual convention: `mul(a, b)` applies `b` first.

use crate::Vec3;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Rotation in the plane spanned by axes `p1` and `p2` (0=X, 1=Y, 2=Z).
///
/// A positive angle rotates `p1` toward `p2`.
pub fn plane_rotation(angle: f32, p1: usize, p2: usize) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;
    m[p1][p1] = cs;
    m[p2][p2] = cs;
    m[p1][p2] = sn;
    m[p2][p1] = -sn;
    m
}

/// Rotation about the X axis (right-handed)
pub fn rotation_x(angle: f32) -> Mat4 {
    plane_rotation(angle, 1, 2)
}

/// Rotation about the Y axis (right-handed)
pub fn rotation_y(angle: f32) -> Mat4 {
    plane_rotation(angle, 2, 0)
}

/// Rotation about the Z axis (right-handed)
pub fn rotation_z(angle: f32) -> Mat4 {
    plane_rotation(angle, 0, 1)
}

/// Translation matrix
pub fn translation(offset: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = offset.x;
    m[3][1] = offset.y;
    m[3][2] = offset.z;
    m
}

/// Uniform scale matrix
pub fn uniform_scale(s: f32) -> Mat4 {
    let mut m = IDENTITY;
    m[0][0] = s;
    m[1][1] = s;
    m[2][2] = s;
    m
}

/// Multiply two 4x4 matrices: result = a * b
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a point (w = 1) by a 4x4 matrix
pub fn transform_point(m: Mat4, p: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0],
        m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1],
        m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2],
    )
}

/// Right-handed perspective projection with a [0, 1] depth range (wgpu clip space)
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let range_inv = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, far * range_inv, -1.0],
        [0.0, 0.0, near * far * range_inv, 0.0],
    ]
}

/// Right-handed view matrix looking from `eye` toward `target`
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = (target - eye).normalized();
    let s = f.cross(up).normalized();
    let u = s.cross(f);

    [
        [s.x, u.x, -f.x, 0.0],
        [s.y, u.y, -f.y, 0.0],
        [s.z, u.z, -f.z, 0.0],
        [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON && (a.z - b.z).abs() < EPSILON
    }

    #[test]
    fn test_identity() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(transform_point(IDENTITY, p), p));
    }

    #[test]
    fn test_rotation_y_quarter_turn() {
        // +X rotates toward -Z about +Y
        let result = transform_point(rotation_y(FRAC_PI_2), Vec3::X);
        assert!(vec_approx_eq(result, Vec3::new(0.0, 0.0, -1.0)), "got {:?}", result);
    }

    #[test]
    fn test_rotation_x_quarter_turn() {
        let result = transform_point(rotation_x(FRAC_PI_2), Vec3::Y);
        assert!(vec_approx_eq(result, Vec3::Z), "got {:?}", result);
    }

    #[test]
    fn test_rotation_z_quarter_turn() {
        let result = transform_point(rotation_z(FRAC_PI_2), Vec3::X);
        assert!(vec_approx_eq(result, Vec3::Y), "got {:?}", result);
    }

    #[test]
    fn test_mul_applies_right_first() {
        // Scale then translate
        let m = mul(translation(Vec3::new(10.0, 0.0, 0.0)), uniform_scale(2.0));
        let result = transform_point(m, Vec3::new(1.0, 1.0, 1.0));
        assert!(vec_approx_eq(result, Vec3::new(12.0, 2.0, 2.0)), "got {:?}", result);
    }

    #[test]
    fn test_look_at_maps_target_to_negative_z() {
        let view = look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        let result = transform_point(view, Vec3::ZERO);
        assert!(vec_approx_eq(result, Vec3::new(0.0, 0.0, -10.0)), "got {:?}", result);
    }

    #[test]
    fn test_perspective_depth_range() {
        let proj = perspective(1.0, 1.0, 1.0, 100.0);
        // A point on the near plane lands at depth 0 after the divide
        let near_z = proj[2][2] * -1.0 + proj[3][2];
        let near_w = proj[2][3] * -1.0;
        assert!((near_z / near_w).abs() < EPSILON);
    }
}
