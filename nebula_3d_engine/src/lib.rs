/*!
# Nebula 3D Engine

Software 3D scene engine: rigid bodies moving in a bounded space, advanced by
a background kinematic integrator and rendered through virtual cameras into
depth-buffered RGB pixel images.

## Architecture

- **math**: quaternion algebra, Euler conversions, rotation matrices,
  perspective projection, triangle/line point enumeration
- **Model**: immutable primitive storage (planes, lines, labels), shared
  read-only across any number of scene placements
- **Camera**: pose, frustum, pixel + depth buffers
- **Engine**: scene graph, background integrator thread, render pipeline
- **output / input**: boundary traits for display sinks, image encoders and
  key-event sources; the engine owns no device

The engine rasterizes on the CPU into each Camera's own buffers; what happens
to a finished frame (framebuffer blit, file encoding) is the caller's business
through the `output` traits.
*/

// Internal modules
mod color;
mod error;
mod engine;
pub mod log;
pub mod math;
pub mod model;
pub mod camera;
pub mod scene;
pub mod input;
pub mod output;

// Main nebula3d namespace module
pub mod nebula3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine and scene graph
    pub use crate::engine::Engine;
    pub use crate::scene::{Pose, Sport, SportKey};

    // Primitives and cameras
    pub use crate::color::Color;
    pub use crate::model::{Label, Line, Model, Plane};
    pub use crate::camera::Camera;

    // Logging sub-module (types and logger swap, NOT macros)
    pub mod log {
        pub use crate::log::{
            reset_logger, set_logger, DefaultLogger, LogEntry, LogSeverity, Logger,
        };
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }

    // Math kernel
    pub mod math {
        pub use crate::math::*;
    }

    // Boundary contracts
    pub mod output {
        pub use crate::output::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}

// Flat re-exports for the common path
pub use crate::camera::Camera;
pub use crate::color::Color;
pub use crate::engine::Engine;
pub use crate::error::{Error, Result};
pub use crate::model::Model;
pub use crate::scene::{Pose, Sport, SportKey};

// Re-export math library at crate root
pub use glam;
