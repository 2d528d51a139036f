use glam::{Vec2, Vec3};
use std::f32::consts::PI;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::math::{quat_integrate, rotate_vector};
use crate::scene::Pose;

/// Frustum and pose snapshot used by [`Camera::reset`].
///
/// Deliberately buffer-less: restoring a camera rewinds where it looks
/// from and how wide, never what it has already rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub pose: Pose,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

/// A virtual pinhole camera with its own pixel and depth buffers.
///
/// Camera space is +Z forward, +X right, +Y up. The pixel buffer holds
/// `width * height` RGB triplets in row-major order, top row first; the
/// depth buffer holds one distance-past-near value per pixel, with
/// [`Camera::DEPTH_UNOCCUPIED`] marking pixels no primitive has claimed.
///
/// `Clone` duplicates both buffers.
#[derive(Debug, Clone)]
pub struct Camera {
    width: u32,
    height: u32,
    aspect: f32,
    fov: f32,
    near: f32,
    far: f32,
    pose: Pose,
    backup: CameraState,
    pixels: Vec<u8>,
    depth: Vec<f32>,
}

impl Camera {
    /// Depth-buffer value of a pixel no primitive has written.
    /// Any finite depth compares strictly less, so the first write
    /// to a cleared pixel always lands.
    pub const DEPTH_UNOCCUPIED: f32 = f32::INFINITY;

    /// Create a camera with cleared (black, unoccupied) buffers.
    ///
    /// `fov` is the vertical field of view in radians and must lie in
    /// `(0, π)`. `near` must be at least 1 and `far` beyond `near`;
    /// both resolution axes must be non-zero.
    pub fn new(width: u32, height: u32, fov: f32, near: f32, far: f32, pose: Pose) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidParameter(format!(
                "camera resolution must be non-zero, got {}x{}",
                width, height
            )));
        }
        if !(fov > 0.0 && fov < PI) {
            return Err(Error::InvalidParameter(format!(
                "camera fov must be in (0, pi) radians, got {}",
                fov
            )));
        }
        if !(near >= 1.0) {
            return Err(Error::InvalidParameter(format!(
                "camera near plane must be >= 1, got {}",
                near
            )));
        }
        if !(far > near) {
            return Err(Error::InvalidParameter(format!(
                "camera far plane must exceed near ({}), got {}",
                near, far
            )));
        }

        let pixel_count = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            aspect: width as f32 / height as f32,
            fov,
            near,
            far,
            pose,
            backup: CameraState {
                pose,
                fov,
                near,
                far,
            },
            pixels: vec![0; pixel_count * 3],
            depth: vec![Self::DEPTH_UNOCCUPIED; pixel_count],
        })
    }

    // ------------------------------------------------------------------
    // Frame lifecycle
    // ------------------------------------------------------------------

    /// Fill the pixel buffer with `color` and mark every depth-buffer
    /// entry unoccupied. Called at the start of each frame.
    pub fn photo_clear(&mut self, color: Color) {
        bytemuck::cast_slice_mut::<u8, Color>(&mut self.pixels).fill(color);
        self.depth.fill(Self::DEPTH_UNOCCUPIED);
    }

    /// Overwrite the stored backup with the current pose and frustum.
    pub fn backup(&mut self) {
        self.backup = CameraState {
            pose: self.pose,
            fov: self.fov,
            near: self.near,
            far: self.far,
        };
    }

    /// Restore pose and frustum from the stored backup. Buffers and
    /// resolution are untouched.
    pub fn reset(&mut self) {
        self.pose = self.backup.pose;
        self.fov = self.backup.fov;
        self.near = self.backup.near;
        self.far = self.backup.far;
    }

    // ------------------------------------------------------------------
    // Motion
    // ------------------------------------------------------------------

    /// Rotate the camera by a body-frame angular increment (radians).
    pub fn roll(&mut self, delta: Vec3) {
        self.pose.orientation = quat_integrate(self.pose.orientation, delta);
    }

    /// Move the camera by a body-frame translation (applied in the
    /// direction the camera currently faces).
    pub fn translate(&mut self, delta: Vec3) {
        self.pose.position += rotate_vector(self.pose.orientation, delta, false);
    }

    // ------------------------------------------------------------------
    // Frustum queries
    // ------------------------------------------------------------------

    /// Whether a camera-space point lies inside the view frustum.
    pub fn is_inside(&self, p: Vec3) -> bool {
        if p.z < self.near || p.z > self.far {
            return false;
        }
        let half_tan = (self.fov * 0.5).tan();
        p.x.abs() <= self.aspect * half_tan * p.z && p.y.abs() <= half_tan * p.z
    }

    /// Sampling density matching one near-plane pixel: points spaced at
    /// most one pixel apart after projection onto this camera's screen.
    pub(crate) fn near_plane_density(&self) -> f32 {
        self.height as f32 / (2.0 * (self.fov * 0.5).tan() * self.near)
    }

    /// Map normalized screen coordinates to fractional pixel coordinates,
    /// origin top-left, y growing downward. Unbounded; callers clip.
    pub(crate) fn screen_point(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            ndc.x / (2.0 * self.aspect) * self.width as f32 + self.width as f32 * 0.5,
            self.height as f32 * 0.5 - ndc.y * 0.5 * self.height as f32,
        )
    }

    /// [`Camera::screen_point`] floored to integer pixel coordinates.
    pub(crate) fn screen_position(&self, ndc: Vec2) -> (i32, i32) {
        let p = self.screen_point(ndc);
        (p.x.floor() as i32, p.y.floor() as i32)
    }

    // ------------------------------------------------------------------
    // Plotting
    // ------------------------------------------------------------------

    /// Write one pixel if it is in bounds and strictly nearer than what
    /// the depth buffer already holds. Returns whether the pixel landed.
    pub(crate) fn plot_depth_tested(&mut self, x: i32, y: i32, depth: f32, color: Color) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        let idx = y as usize * self.width as usize + x as usize;
        if depth >= self.depth[idx] {
            return false;
        }
        self.depth[idx] = depth;
        self.pixels[idx * 3] = color.r;
        self.pixels[idx * 3 + 1] = color.g;
        self.pixels[idx * 3 + 2] = color.b;
        true
    }

    /// Write one pixel unconditionally (bounds-clipped, no depth test).
    /// Wireframe overlays use this to stay visible over filled surfaces.
    pub(crate) fn plot_overwrite(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels[idx * 3] = color.r;
        self.pixels[idx * 3 + 1] = color.g;
        self.pixels[idx * 3 + 2] = color.b;
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width over height.
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Vertical field of view in radians.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    /// Raw RGB pixel buffer, `width * height * 3` bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Per-pixel distance past the near plane;
    /// [`Camera::DEPTH_UNOCCUPIED`] where nothing was drawn.
    pub fn depth_buffer(&self) -> &[f32] {
        &self.depth
    }

    /// Color of one pixel, or `None` if out of bounds.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        Some(Color {
            r: self.pixels[idx],
            g: self.pixels[idx + 1],
            b: self.pixels[idx + 2],
        })
    }

    /// Depth of one pixel, or `None` if out of bounds.
    pub fn depth_at(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.depth[y as usize * self.width as usize + x as usize])
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
