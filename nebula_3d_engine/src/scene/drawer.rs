/// Scene rasterization.
///
/// Planes are sampled with barycentric point enumeration and plotted
/// through the depth test; a strictly nearer sample wins, so draw order
/// never matters. Lines are drawn as screen-space Bresenham overlays
/// without a depth test, keeping wireframes visible over filled
/// surfaces. Labels plot one depth-tested anchor pixel each.

use glam::{Vec2, Vec3};

use crate::camera::Camera;
use crate::color::Color;
use crate::math::{project, rotate_vector, triangle_points};
use super::scene::Scene;
use super::unit::Pose;

/// Draw every Unit of `scene` into `camera`'s buffers.
///
/// The caller clears the camera first; rendering only adds pixels.
pub(crate) fn render_scene(scene: &Scene, camera: &mut Camera) {
    let cam_pose = camera.pose();
    let density = camera.near_plane_density();

    for (_, unit) in scene.iter() {
        let pose = unit.sport.pose;

        for plane in unit.model.planes() {
            let v = plane.vertices.map(|p| to_camera_space(p, &pose, &cam_pose));
            draw_plane(camera, v, density, plane.color);
        }

        for line in unit.model.lines() {
            let a = to_camera_space(line.vertices[0], &pose, &cam_pose);
            let b = to_camera_space(line.vertices[1], &pose, &cam_pose);
            draw_line(camera, a, b, line.color);
        }

        for label in unit.model.labels() {
            let anchor = to_camera_space(label.position, &pose, &cam_pose);
            draw_anchor(camera, anchor, label.color);
        }
    }
}

/// Model-local point through the unit's pose into camera space.
fn to_camera_space(local: Vec3, unit_pose: &Pose, cam_pose: &Pose) -> Vec3 {
    let world = rotate_vector(unit_pose.orientation, local, false) + unit_pose.position;
    rotate_vector(cam_pose.orientation, world - cam_pose.position, true)
}

fn draw_plane(camera: &mut Camera, vertices: [Vec3; 3], density: f32, color: Color) {
    for p in triangle_points(vertices[0], vertices[1], vertices[2], density) {
        let proj = project(camera.fov(), p, camera.aspect(), camera.near(), camera.far());
        if !proj.inside {
            continue;
        }
        let (x, y) = camera.screen_position(proj.ndc);
        camera.plot_depth_tested(x, y, proj.depth, color);
    }
}

fn draw_line(camera: &mut Camera, a: Vec3, b: Vec3, color: Color) {
    // A segment is drawn when at least one endpoint is in frustum.
    if !(camera.is_inside(a) || camera.is_inside(b)) {
        return;
    }
    // An endpoint near the camera plane projects arbitrarily far off
    // screen (and loses all screen-space precision), so clip against the
    // near plane before projecting.
    let Some((a, b)) = clip_to_near_plane(a, b, camera.near()) else {
        return;
    };

    let pa = project(camera.fov(), a, camera.aspect(), camera.near(), camera.far());
    let pb = project(camera.fov(), b, camera.aspect(), camera.near(), camera.far());

    // Clip to the viewport so Bresenham only ever walks in-resolution
    // coordinates.
    let p0 = camera.screen_point(pa.ndc);
    let p1 = camera.screen_point(pb.ndc);
    if !p0.is_finite() || !p1.is_finite() {
        return;
    }
    let max = Vec2::new(camera.width() as f32 - 1.0, camera.height() as f32 - 1.0);
    let Some((c0, c1)) = clip_to_viewport(p0, p1, max) else {
        return;
    };
    // clamp backstops f32 cancellation in the clip for extreme inputs
    let x_max = camera.width() as i32 - 1;
    let y_max = camera.height() as i32 - 1;
    draw_segment(
        camera,
        (c0.x.floor() as i32).clamp(0, x_max),
        (c0.y.floor() as i32).clamp(0, y_max),
        (c1.x.floor() as i32).clamp(0, x_max),
        (c1.y.floor() as i32).clamp(0, y_max),
        color,
    );
}

/// Shorten a camera-space segment to the part at `z >= near`.
/// `None` when the whole segment lies in front of the near plane.
fn clip_to_near_plane(a: Vec3, b: Vec3, near: f32) -> Option<(Vec3, Vec3)> {
    match (a.z >= near, b.z >= near) {
        (true, true) => Some((a, b)),
        (false, false) => None,
        (a_in, _) => {
            let t = (near - a.z) / (b.z - a.z);
            let hit = a + (b - a) * t;
            if a_in {
                Some((a, hit))
            } else {
                Some((hit, b))
            }
        }
    }
}

/// Liang-Barsky clip of a segment against `[0, max.x] × [0, max.y]`.
/// `None` when the segment misses the rectangle entirely.
fn clip_to_viewport(p0: Vec2, p1: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    let d = p1 - p0;
    let mut t0 = 0.0_f32;
    let mut t1 = 1.0_f32;

    let edges = [
        (-d.x, p0.x),
        (d.x, max.x - p0.x),
        (-d.y, p0.y),
        (d.y, max.y - p0.y),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }
    if t0 > t1 {
        return None;
    }
    Some((p0 + d * t0, p0 + d * t1))
}

fn draw_anchor(camera: &mut Camera, p: Vec3, color: Color) {
    let proj = project(camera.fov(), p, camera.aspect(), camera.near(), camera.far());
    if !proj.inside {
        return;
    }
    let (x, y) = camera.screen_position(proj.ndc);
    camera.plot_depth_tested(x, y, proj.depth, color);
}

/// Integer Bresenham with error accumulation. Out-of-bounds pixels are
/// clipped by the plot call.
fn draw_segment(camera: &mut Camera, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut x = x0;
    let mut y = y0;
    let mut err = dx - dy;

    loop {
        camera.plot_overwrite(x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
#[path = "drawer_tests.rs"]
mod tests;
