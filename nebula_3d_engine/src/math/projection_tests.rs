use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};
use super::*;

const FOV: f32 = FRAC_PI_2; // 90°
const ASPECT: f32 = 1.0;
const NEAR: f32 = 1.0;
const FAR: f32 = 100.0;

// ============================================================================
// Frustum boundaries
// ============================================================================

#[test]
fn test_point_past_far_plane_is_outside() {
    let p = Vec3::new(0.0, 0.0, FAR + 0.5);
    assert!(!project(FOV, p, ASPECT, NEAR, FAR).inside);
}

#[test]
fn test_point_before_near_plane_is_outside() {
    let p = Vec3::new(0.0, 0.0, NEAR * 0.5);
    assert!(!project(FOV, p, ASPECT, NEAR, FAR).inside);
}

#[test]
fn test_point_mid_frustum_dead_ahead_is_inside() {
    let p = Vec3::new(0.0, 0.0, (NEAR + FAR) / 2.0);
    let proj = project(FOV, p, ASPECT, NEAR, FAR);
    assert!(proj.inside);
    assert_eq!(proj.ndc, glam::Vec2::ZERO);
}

#[test]
fn test_point_outside_horizontal_fov() {
    // At z = 10 with fov 90° and aspect 1, |x| must stay below 10
    let p = Vec3::new(11.0, 0.0, 10.0);
    let proj = project(FOV, p, ASPECT, NEAR, FAR);
    assert!(!proj.inside);
    // ndc is still reported for callers that clip in screen space
    assert!(proj.ndc.x > 1.0);
}

// ============================================================================
// Projected values
// ============================================================================

#[test]
fn test_known_projection() {
    // fov 90° → tan(fov/2) = 1: ndc = (x/z, y/z)
    let p = Vec3::new(5.0, 2.0, 10.0);
    let proj = project(FOV, p, ASPECT, NEAR, FAR);
    assert!(proj.inside);
    assert!((proj.ndc.x - 0.5).abs() < 1e-5);
    assert!((proj.ndc.y - 0.2).abs() < 1e-5);
}

#[test]
fn test_depth_is_distance_past_near_plane() {
    let p = Vec3::new(0.0, 0.0, 10.0);
    let proj = project(FOV, p, ASPECT, NEAR, FAR);
    assert!((proj.depth - 9.0).abs() < 1e-5);
}

#[test]
fn test_wide_aspect_extends_horizontal_bound() {
    let aspect = 2.0;
    let p = Vec3::new(15.0, 0.0, 10.0); // ndc.x = 1.5
    let proj = project(FOV, p, aspect, NEAR, FAR);
    assert!(proj.inside);
    assert!(!project(FOV, p, 1.0, NEAR, FAR).inside);
}

// ============================================================================
// Degenerate inputs: never panic, always outside
// ============================================================================

#[test]
fn test_fov_out_of_range() {
    let p = Vec3::new(0.0, 0.0, 10.0);
    assert!(!project(0.0, p, ASPECT, NEAR, FAR).inside);
    assert!(!project(PI, p, ASPECT, NEAR, FAR).inside);
    assert!(!project(-1.0, p, ASPECT, NEAR, FAR).inside);
    assert!(!project(4.0, p, ASPECT, NEAR, FAR).inside);
}

#[test]
fn test_near_not_less_than_far() {
    let p = Vec3::new(0.0, 0.0, 10.0);
    assert!(!project(FOV, p, ASPECT, 100.0, 100.0).inside);
    assert!(!project(FOV, p, ASPECT, 200.0, 100.0).inside);
}

#[test]
fn test_point_on_camera_plane() {
    let on_plane = Vec3::new(3.0, -2.0, 0.0);
    let behind = Vec3::new(3.0, -2.0, -5.0);
    assert!(!project(FOV, on_plane, ASPECT, NEAR, FAR).inside);
    assert!(!project(FOV, behind, ASPECT, NEAR, FAR).inside);
}

#[test]
fn test_non_finite_point() {
    let p = Vec3::new(0.0, 0.0, f32::NAN);
    let proj = project(FOV, p, ASPECT, NEAR, FAR);
    assert!(!proj.inside);
    assert_eq!(proj.ndc, glam::Vec2::ZERO);
}
