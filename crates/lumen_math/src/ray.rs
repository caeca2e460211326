use crate::{Matrix, MatrixBackend, Tuple};

/// A ray in 3D space with an origin point and a direction vector.
///
/// The direction is not required to be normalized; intersection distances
/// are measured in multiples of it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Tuple,
    pub direction: Tuple,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Tuple, direction: Tuple) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn position(&self, t: f64) -> Tuple {
        self.origin + self.direction * t
    }

    /// Apply `m` to both origin and direction.
    pub fn transform(&self, m: &Matrix, backend: &dyn MatrixBackend) -> Ray {
        Ray::new(
            backend.multiply_tuple(m, self.origin),
            backend.multiply_tuple(m, self.direction),
        )
    }
}
