use glam::Vec3;
use super::*;

// ============================================================================
// Triangle sampling
// ============================================================================

#[test]
fn test_triangle_points_stay_inside() {
    let v0 = Vec3::new(0.0, 0.0, 0.0);
    let v1 = Vec3::new(4.0, 0.0, 0.0);
    let v2 = Vec3::new(0.0, 4.0, 0.0);

    let mut count = 0;
    for p in triangle_points(v0, v1, v2, 2.0) {
        // planar triangle in the xy plane: samples stay in the triangle
        assert!(p.z.abs() < 1e-5);
        assert!(p.x >= -1e-4 && p.y >= -1e-4);
        assert!(p.x + p.y <= 4.0 + 1e-3);
        count += 1;
    }
    assert!(count > 0);
}

#[test]
fn test_triangle_density_scales_sample_count() {
    let v0 = Vec3::ZERO;
    let v1 = Vec3::new(10.0, 0.0, 0.0);
    let v2 = Vec3::new(0.0, 10.0, 0.0);

    let sparse = triangle_points(v0, v1, v2, 1.0).count();
    let dense = triangle_points(v0, v1, v2, 4.0).count();
    assert!(dense > sparse * 4, "dense={} sparse={}", dense, sparse);
}

#[test]
fn test_triangle_sample_count_is_quadratic_ballpark() {
    // longest edge ~14.1, density 1 → step ~1/14: on the order of edge²/2 points
    let v0 = Vec3::ZERO;
    let v1 = Vec3::new(10.0, 0.0, 0.0);
    let v2 = Vec3::new(0.0, 10.0, 0.0);
    let count = triangle_points(v0, v1, v2, 1.0).count();
    assert!(count > 50 && count < 250, "count={}", count);
}

#[test]
fn test_degenerate_triangle_single_point() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let points: Vec<Vec3> = triangle_points(v, v, v, 10.0).collect();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0], v);
}

#[test]
fn test_zero_density_single_point() {
    let v0 = Vec3::ZERO;
    let v1 = Vec3::new(5.0, 0.0, 0.0);
    let v2 = Vec3::new(0.0, 5.0, 0.0);
    assert_eq!(triangle_points(v0, v1, v2, 0.0).count(), 1);
}

// ============================================================================
// Line sampling
// ============================================================================

#[test]
fn test_line_points_walk_the_segment() {
    let v0 = Vec3::new(0.0, 0.0, 0.0);
    let v1 = Vec3::new(10.0, 5.0, 0.0);

    let points: Vec<Vec3> = line_points(v0, v1, 1.0).collect();
    // longest axis delta 10, density 1 → 11 samples
    assert_eq!(points.len(), 11);
    assert_eq!(points[0], v0);

    // samples stay collinear and monotonic along x
    for pair in points.windows(2) {
        assert!(pair[1].x > pair[0].x);
        assert!((pair[1].y / pair[1].x - 0.5).abs() < 1e-4);
    }
    assert!((points.last().unwrap().x - 10.0).abs() < 1e-3);
}

#[test]
fn test_line_axis_aligned() {
    // vertical segment: x/z increments must be exactly zero
    let v0 = Vec3::new(2.0, 0.0, 7.0);
    let v1 = Vec3::new(2.0, 8.0, 7.0);
    for p in line_points(v0, v1, 1.0) {
        assert_eq!(p.x, 2.0);
        assert_eq!(p.z, 7.0);
    }
}

#[test]
fn test_degenerate_line_single_point() {
    let v = Vec3::new(-4.0, 0.5, 9.0);
    let points: Vec<Vec3> = line_points(v, v, 3.0).collect();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0], v);
}

#[test]
fn test_line_density_scales_sample_count() {
    let v0 = Vec3::ZERO;
    let v1 = Vec3::new(10.0, 0.0, 0.0);
    assert_eq!(line_points(v0, v1, 1.0).count(), 11);
    assert_eq!(line_points(v0, v1, 2.0).count(), 21);
}
