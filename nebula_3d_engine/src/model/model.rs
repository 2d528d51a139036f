/// Model: primitive storage shared read-only across scene placements.
///
/// Three independent, insertion-ordered collections. The Engine never
/// mutates a Model; share one across Units with `Arc<Model>` and let the
/// per-Unit Sport carry position and orientation.

use glam::Vec3;
use crate::color::Color;

/// A filled triangle in model-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub vertices: [Vec3; 3],
    pub color: Color,
}

/// A wireframe segment in model-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub vertices: [Vec3; 2],
    pub color: Color,
}

/// A text annotation anchored to a model-local point.
///
/// Only the anchor is rasterized (a single depth-tested marker pixel);
/// glyph rendering is the caller's business.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub position: Vec3,
    pub text: String,
    pub color: Color,
}

/// An immutable bag of colored primitives.
///
/// `Clone` is a deep copy of all three collections, including label text.
///
/// # Example
///
/// ```
/// use nebula_3d_engine::nebula3d::{Color, Model};
/// use nebula_3d_engine::glam::Vec3;
///
/// let mut model = Model::new();
/// model
///     .add_plane(Vec3::ZERO, Vec3::X, Vec3::Y, Color::RED)
///     .add_line(Vec3::ZERO, Vec3::Z, Color::WHITE)
///     .add_label(Vec3::Z, "apex", Color::GREEN);
/// assert_eq!(model.plane_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    planes: Vec<Plane>,
    lines: Vec<Line>,
    labels: Vec<Label>,
}

impl Model {
    /// Create a new empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a triangular plane. Returns `&mut self` for chaining.
    pub fn add_plane(&mut self, v0: Vec3, v1: Vec3, v2: Vec3, color: Color) -> &mut Self {
        self.planes.push(Plane {
            vertices: [v0, v1, v2],
            color,
        });
        self
    }

    /// Append a line segment. Returns `&mut self` for chaining.
    pub fn add_line(&mut self, v0: Vec3, v1: Vec3, color: Color) -> &mut Self {
        self.lines.push(Line {
            vertices: [v0, v1],
            color,
        });
        self
    }

    /// Append a label anchored at `position`. Returns `&mut self` for chaining.
    pub fn add_label(&mut self, position: Vec3, text: impl Into<String>, color: Color) -> &mut Self {
        self.labels.push(Label {
            position,
            text: text.into(),
            color,
        });
        self
    }

    /// Planes in insertion order.
    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Whether the model holds no primitives at all.
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty() && self.lines.is_empty() && self.labels.is_empty()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
