/// Primitive point enumeration.
///
/// Triangles are filled by barycentric sampling (`P = i·v0 + j·v1 + k·v2`,
/// `i + j + k = 1`); lines by parametric stepping along the
/// longest-magnitude axis delta. Both return finite, non-restartable
/// iterators sized by `density` (samples per unit length), and both fall
/// back to a single-point sequence for degenerate geometry instead of
/// dividing by zero.

use glam::Vec3;

/// Barycentric sampling of a triangle's interior (edges included).
///
/// The sample count is roughly quadratic in the longest edge length times
/// `density`, so callers should pick `density` from the target resolution.
pub fn triangle_points(v0: Vec3, v1: Vec3, v2: Vec3, density: f32) -> TrianglePoints {
    let longest = (v0 - v1)
        .length()
        .max((v0 - v2).length())
        .max((v1 - v2).length());

    let steps = longest * density;
    // degenerate (coincident vertices, zero density, NaN): one sample
    let step = if steps.is_finite() && steps > 1.0 {
        1.0 / steps
    } else {
        1.0
    };

    TrianglePoints {
        v0,
        v1,
        v2,
        step,
        i: 0.0,
        j: 0.0,
        exhausted: false,
    }
}

/// Iterator over barycentric samples of one triangle. See [`triangle_points`].
pub struct TrianglePoints {
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    step: f32,
    i: f32,
    j: f32,
    exhausted: bool,
}

impl Iterator for TrianglePoints {
    type Item = Vec3;

    fn next(&mut self) -> Option<Vec3> {
        if self.exhausted {
            return None;
        }

        let k = 1.0 - self.i - self.j;
        let p = self.i * self.v0 + self.j * self.v1 + k * self.v2;

        self.j += self.step;
        if self.j >= 1.0 - self.i {
            self.j = 0.0;
            self.i += self.step;
            if self.i >= 1.0 {
                self.exhausted = true;
            }
        }

        Some(p)
    }
}

/// Parametric sampling of a segment from `v0` to `v1`.
///
/// Steps along the longest-magnitude axis delta scaled by `density`;
/// a zero-length segment yields exactly one point.
pub fn line_points(v0: Vec3, v1: Vec3, density: f32) -> LinePoints {
    let delta = v1 - v0;
    let longest = delta.abs().max_element();

    let steps = longest * density;
    if !steps.is_finite() || steps < 1.0 {
        return LinePoints {
            cursor: v0,
            increment: Vec3::ZERO,
            remaining: 1,
        };
    }

    LinePoints {
        cursor: v0,
        increment: delta / steps,
        remaining: steps as usize + 1,
    }
}

/// Iterator over parametric samples of one segment. See [`line_points`].
pub struct LinePoints {
    cursor: Vec3,
    increment: Vec3,
    remaining: usize,
}

impl Iterator for LinePoints {
    type Item = Vec3;

    fn next(&mut self) -> Option<Vec3> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let p = self.cursor;
        self.cursor += self.increment;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

#[cfg(test)]
#[path = "sampling_tests.rs"]
mod tests;
