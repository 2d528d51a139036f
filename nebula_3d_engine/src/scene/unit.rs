/// Pose, Sport and Unit: the kinematic side of the scene graph.
///
/// A Unit is one placement of a shared Model in the scene; its Sport is the
/// mutable kinematic state the background integrator advances every tick.

use std::sync::Arc;
use glam::{Quat, Vec3};
use crate::math::quat_to_euler;
use crate::model::Model;

/// Position + orientation of a rigid body in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    /// Unit quaternion; the only stored orientation representation.
    pub orientation: Quat,
}

impl Pose {
    /// Pose at `position` with identity orientation.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }
}

/// Kinematic state of one Unit.
///
/// Mutated by the Engine's integrator thread each tick and, through the
/// Engine's handle API, by whoever holds the Unit's `SportKey`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sport {
    pub pose: Pose,

    /// Linear velocity, world frame, units per second.
    pub velocity: Vec3,

    /// Angular velocity, body frame, radians per second.
    pub angular_velocity: Vec3,

    /// Euler view of the orientation (roll, pitch, yaw), recomputed by the
    /// integrator after every orientation update. Display/debug only,
    /// never fed back into the orientation.
    pub euler: Vec3,
}

impl Sport {
    /// At-rest kinematic state with the given initial pose.
    pub fn new(pose: Pose) -> Self {
        Self {
            pose,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            euler: quat_to_euler(pose.orientation),
        }
    }
}

impl Default for Sport {
    fn default() -> Self {
        Self::new(Pose::default())
    }
}

/// One placement of a Model in the scene.
///
/// The Unit owns its Sport; the Model is shared read-only.
#[derive(Debug, Clone)]
pub struct Unit {
    pub model: Arc<Model>,
    pub sport: Sport,
}

impl Unit {
    pub fn new(model: Arc<Model>, pose: Pose) -> Self {
        Self {
            model,
            sport: Sport::new(pose),
        }
    }
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
