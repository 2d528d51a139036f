/// Perspective projection.
///
/// Camera space is +Z forward, +X right, +Y up. `fov` is the vertical field
/// of view in radians; the horizontal extent is `aspect` times the vertical,
/// so projected coordinates land in the box `[-aspect, aspect] × [-1, 1]`.

use glam::{Vec2, Vec3};
use std::f32::consts::PI;

/// Result of projecting one camera-space point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Normalized screen coordinates, origin at screen center,
    /// x in `[-aspect, aspect]`, y in `[-1, 1]` when visible.
    pub ndc: Vec2,

    /// Camera-space distance past the near plane (`z - near`).
    pub depth: f32,

    /// Whether the point lies inside the frustum (both field-of-view
    /// bounds and `near ≤ z ≤ far`).
    pub inside: bool,
}

impl Projection {
    /// Degenerate-input result: nothing visible, nothing to plot.
    const fn outside() -> Self {
        Self {
            ndc: Vec2::ZERO,
            depth: 0.0,
            inside: false,
        }
    }
}

/// Project a camera-space point through the perspective divide.
///
/// Degenerate inputs (`fov` outside `(0, π)`, non-positive aspect,
/// `near ≥ far`, point on or behind the camera plane) yield
/// `inside = false` without panicking.
pub fn project(fov: f32, p: Vec3, aspect: f32, near: f32, far: f32) -> Projection {
    if !(fov > 0.0 && fov < PI) || aspect <= 0.0 || near >= far {
        return Projection::outside();
    }
    if !p.z.is_finite() || p.z <= f32::EPSILON {
        return Projection::outside();
    }

    let half_tan = (fov * 0.5).tan();
    let ndc = Vec2::new(p.x / (p.z * half_tan), p.y / (p.z * half_tan));

    let inside = ndc.x.abs() < aspect
        && ndc.y.abs() < 1.0
        && p.z >= near
        && p.z <= far;

    Projection {
        ndc,
        depth: p.z - near,
        inside,
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
