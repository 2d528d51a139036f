use std::sync::Arc;
use slotmap::SlotMap;

use crate::model::Model;
use super::unit::{Pose, Sport, Unit};

slotmap::new_key_type! {
    /// Stable handle to one Unit's kinematic state.
    ///
    /// Keys survive unrelated insertions and removals and go stale,
    /// never dangling, once their Unit is removed.
    pub struct SportKey;
}

/// The set of Units the integrator advances and the rasterizer draws.
///
/// Plain data, no locking; the Engine wraps a Scene in its own mutex.
#[derive(Debug, Default)]
pub struct Scene {
    units: SlotMap<SportKey, Unit>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a model in the scene at `pose`, at rest.
    pub fn add(&mut self, model: Arc<Model>, pose: Pose) -> SportKey {
        self.units.insert(Unit::new(model, pose))
    }

    /// Remove a Unit. Returns whether the key was still live.
    pub fn remove(&mut self, key: SportKey) -> bool {
        self.units.remove(key).is_some()
    }

    pub fn unit(&self, key: SportKey) -> Option<&Unit> {
        self.units.get(key)
    }

    pub fn sport(&self, key: SportKey) -> Option<Sport> {
        self.units.get(key).map(|u| u.sport)
    }

    pub fn sport_mut(&mut self, key: SportKey) -> Option<&mut Sport> {
        self.units.get_mut(key).map(|u| &mut u.sport)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SportKey, &Unit)> {
        self.units.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SportKey, &mut Unit)> {
        self.units.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn clear(&mut self) {
        self.units.clear();
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
