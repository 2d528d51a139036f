//! Math kernel
//!
//! Quaternion algebra, Euler-angle conversions, closed-form rotation
//! matrices, perspective projection and primitive point enumeration.
//! Everything works in radians; orientation is always a quaternion.
//!
//! Numerical degeneracy (zero-norm quaternions, degenerate triangles,
//! points on the camera plane) is handled by local fallbacks, never by
//! panicking or returning errors.

mod quat;
mod rotation;
mod projection;
mod sampling;

pub use quat::{euler_to_quat, quat_integrate, quat_multiply, quat_to_euler, rotate_vector};
pub use rotation::{rotate_xyz, rotate_zyx, rotation_xyz, rotation_zyx};
pub use projection::{project, Projection};
pub use sampling::{line_points, triangle_points, LinePoints, TrianglePoints};
