//! Virtual cameras
//!
//! A Camera bundles a world-space pose, a perspective frustum and the two
//! buffers a render pass writes into: an RGB pixel buffer and a depth
//! buffer. Cameras are plain values; the Engine borrows one mutably for
//! the duration of a `photo` call and never keeps it.

mod camera;

pub use camera::{Camera, CameraState};
