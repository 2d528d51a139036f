//! Scene primitive storage
//!
//! A Model is an immutable bag of colored primitives (triangular planes,
//! lines, labels) in model-local coordinates. Models are built once by the
//! caller and shared read-only across any number of Engine placements.

mod model;

pub use model::{Label, Line, Model, Plane};
