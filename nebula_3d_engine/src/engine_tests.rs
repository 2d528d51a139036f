use std::sync::Arc;
use std::thread;
use std::time::Duration;

use glam::Vec3;
use serial_test::serial;
use std::f32::consts::FRAC_PI_2;

use crate::camera::Camera;
use crate::color::Color;
use crate::model::Model;
use crate::scene::Pose;
use super::*;

fn triangle_model() -> Arc<Model> {
    let mut model = Model::new();
    model.add_plane(
        Vec3::new(0.0, 0.0, 10.0),
        Vec3::new(1.0, 0.0, 10.0),
        Vec3::new(0.0, 1.0, 10.0),
        Color::RED,
    );
    Arc::new(model)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_validates_parameters() {
    assert!(Engine::new(0, 100.0, 100.0, 100.0).is_err());
    assert!(Engine::new(10, 1.9, 100.0, 100.0).is_err());
    assert!(Engine::new(10, 100.0, 0.0, 100.0).is_err());
    assert!(Engine::new(10, 100.0, 100.0, -5.0).is_err());
    assert!(Engine::new(10, 100.0, 100.0, f32::NAN).is_err());
    assert!(Engine::new(10, 2.0, 2.0, 2.0).is_ok());
}

// ============================================================================
// Handle lifecycle
// ============================================================================

#[test]
fn test_handle_lifecycle() {
    let engine = Engine::new(10, 100.0, 100.0, 100.0).unwrap();
    assert_eq!(engine.unit_count().unwrap(), 0);

    let key = engine.add_model(triangle_model(), Pose::default()).unwrap();
    assert_eq!(engine.unit_count().unwrap(), 1);
    assert!(engine.sport(key).unwrap().is_some());

    assert!(engine.remove_model(key).unwrap());
    assert_eq!(engine.unit_count().unwrap(), 0);

    // stale key: every operation degrades gracefully
    assert!(!engine.remove_model(key).unwrap());
    assert!(engine.sport(key).unwrap().is_none());
    assert!(!engine.with_sport_mut(key, |_| panic!("must not run")).unwrap());
}

#[test]
fn test_with_sport_mut_applies_edit() {
    let engine = Engine::new(10, 100.0, 100.0, 100.0).unwrap();
    let key = engine.add_model(triangle_model(), Pose::default()).unwrap();

    let applied = engine
        .with_sport_mut(key, |sport| {
            sport.velocity = Vec3::new(1.0, 0.0, 0.0);
            sport.angular_velocity = Vec3::new(0.0, 0.0, 0.5);
        })
        .unwrap();
    assert!(applied);

    let sport = engine.sport(key).unwrap().unwrap();
    assert_eq!(sport.velocity, Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(sport.angular_velocity, Vec3::new(0.0, 0.0, 0.5));
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_end_to_end_photo() {
    let engine = Engine::new(10, 1000.0, 1000.0, 1000.0).unwrap();
    engine.add_model(triangle_model(), Pose::default()).unwrap();

    let pose = Pose::at(Vec3::new(-5.0, 0.0, 0.0));
    let mut camera = Camera::new(64, 64, FRAC_PI_2, 1.0, 100.0, pose).unwrap();
    camera.photo_clear(Color::BLACK);
    engine.photo(&mut camera).unwrap();

    let mut touched = 0;
    let mut depth_ok = false;
    for y in 0..64 {
        for x in 0..64 {
            if camera.pixel_at(x, y) != Some(Color::BLACK) {
                touched += 1;
                let d = camera.depth_at(x, y).unwrap();
                if (d - 9.0).abs() < 0.1 {
                    depth_ok = true;
                }
            }
        }
    }
    assert!(touched > 0, "triangle left no pixels");
    assert!(depth_ok, "no touched pixel near expected depth");
}

#[test]
fn test_photo_of_empty_scene_leaves_clear_color() {
    let engine = Engine::new(10, 100.0, 100.0, 100.0).unwrap();
    let mut camera = Camera::new(32, 32, FRAC_PI_2, 1.0, 100.0, Pose::default()).unwrap();
    camera.photo_clear(Color::BLUE);
    engine.photo(&mut camera).unwrap();
    assert!((0..32)
        .flat_map(|y| (0..32).map(move |x| (x, y)))
        .all(|(x, y)| camera.pixel_at(x, y) == Some(Color::BLUE)));
}

// ============================================================================
// Integrator thread
// ============================================================================

#[test]
#[serial]
fn test_integrator_advances_only_while_running() {
    let engine = Engine::new(5, 1000.0, 1000.0, 1000.0).unwrap();
    let key = engine.add_model(triangle_model(), Pose::default()).unwrap();
    engine
        .with_sport_mut(key, |sport| sport.velocity = Vec3::new(10.0, 0.0, 0.0))
        .unwrap();

    // paused: no motion
    thread::sleep(Duration::from_millis(50));
    let at_rest = engine.sport(key).unwrap().unwrap();
    assert_eq!(at_rest.pose.position, Vec3::ZERO);

    engine.start();
    assert!(engine.is_running());
    thread::sleep(Duration::from_millis(100));
    let moving = engine.sport(key).unwrap().unwrap();
    assert!(
        moving.pose.position.x > 0.1,
        "position {:?}",
        moving.pose.position
    );

    engine.pause();
    thread::sleep(Duration::from_millis(20));
    let frozen = engine.sport(key).unwrap().unwrap();
    thread::sleep(Duration::from_millis(50));
    let still_frozen = engine.sport(key).unwrap().unwrap();
    assert_eq!(frozen.pose.position, still_frozen.pose.position);
}

#[test]
#[serial]
fn test_release_is_idempotent_and_clears() {
    let mut engine = Engine::new(5, 100.0, 100.0, 100.0).unwrap();
    engine.add_model(triangle_model(), Pose::default()).unwrap();
    engine.start();

    engine.release();
    assert_eq!(engine.unit_count().unwrap(), 0);
    engine.release();
    assert_eq!(engine.unit_count().unwrap(), 0);
}
