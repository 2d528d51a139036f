//! Engine core
//!
//! Owns the scene graph behind a single mutex and a background thread
//! that advances every Unit's kinematic state at a fixed cadence. Render
//! passes, handle operations and the integrator all serialize on the
//! scene mutex, so a photo never observes a half-applied tick.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::model::Model;
use crate::scene::{integrate_sport, render_scene, Bounds, Pose, Scene, Sport, SportKey};
use crate::{engine_error, engine_info, engine_warn};

const LOG_SOURCE: &str = "nebula3d::Engine";

/// Scene host with a background kinematic integrator.
///
/// The integrator thread is spawned on construction and idles until
/// [`Engine::start`]; [`Engine::pause`] freezes motion without touching
/// the thread. Drop (or an explicit [`Engine::release`]) stops the
/// thread and clears the scene.
pub struct Engine {
    scene: Arc<Mutex<Scene>>,
    running: Arc<AtomicBool>,
    exit: Arc<AtomicBool>,
    interval: Duration,
    thread: Option<JoinHandle<()>>,
}

impl Engine {
    /// Create an engine with the given tick interval and world size.
    ///
    /// The world is a torus spanning `[-size/2, size/2]` per axis; each
    /// size must be at least 2 and the interval at least 1 ms.
    pub fn new(interval_ms: u64, x_size: f32, y_size: f32, z_size: f32) -> Result<Self> {
        if interval_ms == 0 {
            return Err(Error::InvalidParameter(
                "tick interval must be at least 1 ms".to_string(),
            ));
        }
        for (name, size) in [("x", x_size), ("y", y_size), ("z", z_size)] {
            if !(size >= 2.0) {
                return Err(Error::InvalidParameter(format!(
                    "{} size must be at least 2, got {}",
                    name, size
                )));
            }
        }

        let scene = Arc::new(Mutex::new(Scene::new()));
        let running = Arc::new(AtomicBool::new(false));
        let exit = Arc::new(AtomicBool::new(false));
        let interval = Duration::from_millis(interval_ms);
        let bounds = Bounds::from_sizes(x_size, y_size, z_size);

        let thread = thread::spawn({
            let scene = Arc::clone(&scene);
            let running = Arc::clone(&running);
            let exit = Arc::clone(&exit);
            move || integrator_loop(scene, running, exit, interval, bounds)
        });

        engine_info!(
            LOG_SOURCE,
            "Engine created: tick {} ms, space {}x{}x{}",
            interval_ms,
            x_size,
            y_size,
            z_size
        );

        Ok(Self {
            scene,
            running,
            exit,
            interval,
            thread: Some(thread),
        })
    }

    fn lock_scene(&self) -> Result<MutexGuard<'_, Scene>> {
        self.scene
            .lock()
            .map_err(|_| Error::LockPoisoned("scene mutex".to_string()))
    }

    // ------------------------------------------------------------------
    // Scene management
    // ------------------------------------------------------------------

    /// Place a model in the scene at rest. The returned key is the
    /// handle for all later motion control.
    pub fn add_model(&self, model: Arc<Model>, initial: Pose) -> Result<SportKey> {
        Ok(self.lock_scene()?.add(model, initial))
    }

    /// Remove a placement. `Ok(false)` when the key is already stale.
    pub fn remove_model(&self, key: SportKey) -> Result<bool> {
        Ok(self.lock_scene()?.remove(key))
    }

    /// Snapshot of one Unit's kinematic state, `None` for stale keys.
    pub fn sport(&self, key: SportKey) -> Result<Option<Sport>> {
        Ok(self.lock_scene()?.sport(key))
    }

    /// Edit one Unit's kinematic state under the scene lock. Returns
    /// whether the key was live; a stale key leaves `f` uncalled.
    pub fn with_sport_mut<F>(&self, key: SportKey, f: F) -> Result<bool>
    where
        F: FnOnce(&mut Sport),
    {
        let mut scene = self.lock_scene()?;
        match scene.sport_mut(key) {
            Some(sport) => {
                f(sport);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Number of Units currently in the scene.
    pub fn unit_count(&self) -> Result<usize> {
        Ok(self.lock_scene()?.len())
    }

    // ------------------------------------------------------------------
    // Integrator control
    // ------------------------------------------------------------------

    /// Let the background thread advance kinematics each tick.
    pub fn start(&self) {
        self.running.store(true, Ordering::Release);
    }

    /// Freeze all motion. The thread keeps ticking but skips integration.
    pub fn pause(&self) {
        self.running.store(false, Ordering::Release);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Tick interval the integrator was created with.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Render the current scene into `camera`'s buffers.
    ///
    /// Holds the scene lock for the whole traversal, so the frame is a
    /// consistent snapshot: no tick or add/remove lands mid-photo. The
    /// caller clears the camera beforehand ([`Camera::photo_clear`]).
    pub fn photo(&self, camera: &mut Camera) -> Result<()> {
        let scene = self.lock_scene()?;
        render_scene(&scene, camera);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Shutdown
    // ------------------------------------------------------------------

    /// Stop the integrator thread and clear the scene. Idempotent;
    /// also runs on Drop. An in-flight tick completes first.
    pub fn release(&mut self) {
        if self.thread.is_none() {
            return;
        }

        self.exit.store(true, Ordering::Release);
        self.running.store(false, Ordering::Release);

        if let Some(handle) = self.thread.take() {
            if handle.join().is_err() {
                engine_error!(LOG_SOURCE, "Integrator thread panicked before shutdown");
            }
        }

        match self.scene.lock() {
            Ok(mut scene) => scene.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }

        engine_info!(LOG_SOURCE, "Engine released");
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.release();
    }
}

/// Fixed-cadence tick loop. Sleeps only the remainder of each interval,
/// so a slow tick shortens the next sleep instead of drifting the clock.
fn integrator_loop(
    scene: Arc<Mutex<Scene>>,
    running: Arc<AtomicBool>,
    exit: Arc<AtomicBool>,
    interval: Duration,
    bounds: Bounds,
) {
    let dt = interval.as_secs_f32();
    let mut next_tick = Instant::now() + interval;

    while !exit.load(Ordering::Acquire) {
        if running.load(Ordering::Acquire) {
            match scene.lock() {
                Ok(mut scene) => {
                    for (_, unit) in scene.iter_mut() {
                        integrate_sport(&mut unit.sport, dt, &bounds);
                    }
                }
                Err(_) => {
                    engine_warn!(LOG_SOURCE, "Scene mutex poisoned, integrator stopping");
                    return;
                }
            }
        }

        let now = Instant::now();
        if next_tick > now {
            thread::sleep(next_tick - now);
        }
        next_tick += interval;
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
