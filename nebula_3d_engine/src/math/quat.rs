/// Quaternion algebra.
///
/// Orientations are unit quaternions throughout the engine; every update
/// renormalizes, and a non-finite norm leaves the input untouched so no
/// corruption propagates into the scene graph.

use glam::{Quat, Vec3};

/// Hamilton product `a ⊗ b`. No normalization, no side effects.
pub fn quat_multiply(a: Quat, b: Quat) -> Quat {
    Quat::from_xyzw(
        a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
        a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
        a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
    )
}

/// First-order quaternion integration.
///
/// `q' = normalize(q + 0.5 · q ⊗ (0, delta))` where `delta` is a body-frame
/// angular increment already scaled by elapsed time (radians).
///
/// If the updated norm is zero or non-finite the input is returned
/// unchanged.
pub fn quat_integrate(q: Quat, delta: Vec3) -> Quat {
    let dq = quat_multiply(q, Quat::from_xyzw(delta.x, delta.y, delta.z, 0.0));
    let x = q.x + 0.5 * dq.x;
    let y = q.y + 0.5 * dq.y;
    let z = q.z + 0.5 * dq.z;
    let w = q.w + 0.5 * dq.w;

    let norm = (x * x + y * y + z * z + w * w).sqrt();
    if !norm.is_finite() || norm <= f32::EPSILON {
        return q;
    }
    Quat::from_xyzw(x / norm, y / norm, z / norm, w / norm)
}

/// Euler angles (roll about X, pitch about Y, yaw about Z) to quaternion,
/// ZYX composition: `q = qz(yaw) ⊗ qy(pitch) ⊗ qx(roll)`.
pub fn euler_to_quat(roll: f32, pitch: f32, yaw: f32) -> Quat {
    let qx = Quat::from_rotation_x(roll);
    let qy = Quat::from_rotation_y(pitch);
    let qz = Quat::from_rotation_z(yaw);
    quat_multiply(quat_multiply(qz, qy), qx).normalize()
}

/// Quaternion to Euler angles `(roll, pitch, yaw)`, the inverse of
/// [`euler_to_quat`] away from the `pitch = ±π/2` singularities.
pub fn quat_to_euler(q: Quat) -> Vec3 {
    let roll = (2.0 * (q.y * q.z + q.w * q.x))
        .atan2(1.0 - 2.0 * (q.x * q.x + q.y * q.y));
    // clamp keeps asin defined when rounding pushes the argument past ±1
    let pitch = (2.0 * (q.w * q.y - q.x * q.z)).clamp(-1.0, 1.0).asin();
    let yaw = (2.0 * (q.x * q.y + q.w * q.z))
        .atan2(q.w * q.w + q.x * q.x - q.y * q.y - q.z * q.z);
    Vec3::new(roll, pitch, yaw)
}

/// Sandwich-product rotation `q v q*`, or `q* v q` when `inverse` is set.
///
/// `inverse = false` rotates a body-frame vector into the world frame;
/// `inverse = true` rotates a world-frame vector into the body frame.
pub fn rotate_vector(q: Quat, v: Vec3, inverse: bool) -> Vec3 {
    if inverse {
        q.conjugate() * v
    } else {
        q * v
    }
}

#[cfg(test)]
#[path = "quat_tests.rs"]
mod tests;
