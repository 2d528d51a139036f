use glam::{Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

use crate::scene::{Pose, Sport};
use super::*;

fn roomy_bounds() -> Bounds {
    Bounds::from_sizes(100.0, 100.0, 100.0)
}

#[test]
fn test_position_advances_by_velocity() {
    let mut sport = Sport::default();
    sport.velocity = Vec3::new(2.0, 0.0, -4.0);

    integrate_sport(&mut sport, 0.5, &roomy_bounds());
    assert_eq!(sport.pose.position, Vec3::new(1.0, 0.0, -2.0));

    integrate_sport(&mut sport, 0.5, &roomy_bounds());
    assert_eq!(sport.pose.position, Vec3::new(2.0, 0.0, -4.0));
}

#[test]
fn test_wraparound_both_directions() {
    let bounds = Bounds::from_sizes(10.0, 10.0, 10.0);

    let mut sport = Sport::new(Pose::at(Vec3::new(4.9, 0.0, 0.0)));
    sport.velocity = Vec3::new(2.0, 0.0, 0.0);
    integrate_sport(&mut sport, 1.0, &bounds);
    // crossed +x face at 5, re-enters near -5
    assert!((sport.pose.position.x - (-3.1)).abs() < 1e-4);
    assert_eq!(sport.velocity, Vec3::new(2.0, 0.0, 0.0));

    let mut sport = Sport::new(Pose::at(Vec3::new(0.0, -4.9, 0.0)));
    sport.velocity = Vec3::new(0.0, -2.0, 0.0);
    integrate_sport(&mut sport, 1.0, &bounds);
    assert!((sport.pose.position.y - 3.1).abs() < 1e-4);
}

#[test]
fn test_axes_wrap_independently() {
    let bounds = Bounds::from_sizes(10.0, 40.0, 40.0);
    let mut sport = Sport::new(Pose::at(Vec3::new(4.0, 4.0, 4.0)));
    sport.velocity = Vec3::new(3.0, 3.0, 3.0);

    integrate_sport(&mut sport, 1.0, &bounds);
    assert!((sport.pose.position.x - (-3.0)).abs() < 1e-4);
    assert!((sport.pose.position.y - 7.0).abs() < 1e-4);
    assert!((sport.pose.position.z - 7.0).abs() < 1e-4);
}

#[test]
fn test_orientation_integrates_and_caches_euler() {
    let mut sport = Sport::default();
    sport.angular_velocity = Vec3::new(0.0, 0.0, FRAC_PI_2);

    // 100 small steps of a quarter-turn-per-second yaw
    for _ in 0..100 {
        integrate_sport(&mut sport, 0.01, &roomy_bounds());
    }

    let expected = Quat::from_rotation_z(FRAC_PI_2);
    assert!(
        sport.pose.orientation.dot(expected).abs() > 0.999,
        "orientation {:?}",
        sport.pose.orientation
    );
    // yaw component of the euler cache tracks the turn
    assert!((sport.euler.z - FRAC_PI_2).abs() < 0.05, "euler {:?}", sport.euler);
    assert!(sport.euler.x.abs() < 0.05 && sport.euler.y.abs() < 0.05);
}

#[test]
fn test_at_rest_sport_is_fixed_point() {
    let mut sport = Sport::new(Pose::at(Vec3::new(1.0, 2.0, 3.0)));
    let before = sport;
    integrate_sport(&mut sport, 0.05, &roomy_bounds());
    assert_eq!(sport.pose.position, before.pose.position);
    assert_eq!(sport.pose.orientation, before.pose.orientation);
}
