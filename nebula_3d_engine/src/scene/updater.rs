/// Per-tick kinematic integration.
///
/// First-order: position and orientation advance by `rate * dt` each
/// tick. Space is toroidal; a body leaving one face of the bounding box
/// re-enters through the opposite face with velocity intact.

use glam::Vec3;

use crate::math::{quat_integrate, quat_to_euler};
use super::unit::Sport;

/// Symmetric world bounds, `[-size/2, size/2]` per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bounds {
    half: Vec3,
}

impl Bounds {
    pub(crate) fn from_sizes(x: f32, y: f32, z: f32) -> Self {
        Self {
            half: Vec3::new(x, y, z) * 0.5,
        }
    }

    /// Wrap a position onto the torus, one axis at a time.
    fn wrap(&self, mut p: Vec3) -> Vec3 {
        for axis in 0..3 {
            let half = self.half[axis];
            let size = half * 2.0;
            if p[axis] > half {
                p[axis] -= size;
            } else if p[axis] < -half {
                p[axis] += size;
            }
        }
        p
    }
}

/// Advance one Sport by `dt` seconds.
pub(crate) fn integrate_sport(sport: &mut Sport, dt: f32, bounds: &Bounds) {
    sport.pose.position = bounds.wrap(sport.pose.position + sport.velocity * dt);
    sport.pose.orientation = quat_integrate(sport.pose.orientation, sport.angular_velocity * dt);
    sport.euler = quat_to_euler(sport.pose.orientation);
}

#[cfg(test)]
#[path = "updater_tests.rs"]
mod tests;
