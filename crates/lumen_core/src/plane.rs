//! Infinite XZ plane at y = 0.

use lumen_math::{BoundingBox, Ray, Tuple, EPSILON};

pub(crate) fn intersect(ray: &Ray) -> Vec<f64> {
    // Parallel or coplanar rays never register a hit
    if ray.direction.y.abs() < EPSILON {
        return Vec::new();
    }
    vec![-ray.origin.y / ray.direction.y]
}

pub(crate) fn normal_at(_point: Tuple) -> Tuple {
    Tuple::vector(0.0, 1.0, 0.0)
}

pub(crate) fn bounds() -> BoundingBox {
    BoundingBox::new(
        Tuple::point(f64::NEG_INFINITY, 0.0, f64::NEG_INFINITY),
        Tuple::point(f64::INFINITY, 0.0, f64::INFINITY),
    )
}
