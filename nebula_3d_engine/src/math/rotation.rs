/// Closed-form Euler rotation matrices.
///
/// `rotation_zyx` applies X, then Y, then Z (body → world); `rotation_xyz`
/// is its transpose and therefore its inverse (world → body). The pair lets
/// callers move between frames without building a quaternion first.

use glam::{Mat3, Vec3};

/// Rotation matrix `Rz(yaw) · Ry(pitch) · Rx(roll)`.
pub fn rotation_zyx(angles: Vec3) -> Mat3 {
    Mat3::from_rotation_z(angles.z)
        * Mat3::from_rotation_y(angles.y)
        * Mat3::from_rotation_x(angles.x)
}

/// Rotation matrix `Rx(-roll) · Ry(-pitch) · Rz(-yaw)`,
/// the transpose/inverse of [`rotation_zyx`] for the same angles.
pub fn rotation_xyz(angles: Vec3) -> Mat3 {
    Mat3::from_rotation_x(-angles.x)
        * Mat3::from_rotation_y(-angles.y)
        * Mat3::from_rotation_z(-angles.z)
}

/// Rotate `v` by the ZYX-order matrix (body → world).
pub fn rotate_zyx(angles: Vec3, v: Vec3) -> Vec3 {
    rotation_zyx(angles) * v
}

/// Rotate `v` by the XYZ-order matrix (world → body).
pub fn rotate_xyz(angles: Vec3, v: Vec3) -> Vec3 {
    rotation_xyz(angles) * v
}

#[cfg(test)]
#[path = "rotation_tests.rs"]
mod tests;
