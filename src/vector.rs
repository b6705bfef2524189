use glam::{Vec2, Vec3};

/// Lifts a point of the simulation plane to 3-D with `z = 0`.
#[inline]
pub fn to_3d(vector: Vec2) -> Vec3 {
    vector.extend(0.0)
}

/// Rotates `vector` counter-clockwise by `degrees`.
#[inline]
pub fn rotated_degrees(vector: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(vector)
}

/// Unit vector pointing along `vector`, or zero when `vector` has no usable length.
///
/// Coincident bodies produce a zero difference; this keeps them from injecting NaN into the
/// velocities.
#[inline]
pub fn safe_normal(vector: Vec2) -> Vec2 {
    vector.normalize_or_zero()
}
