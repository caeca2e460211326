//! Unit-radius cylinder around the Y axis, optionally truncated and capped.

use lumen_math::{BoundingBox, Interval, Ray, Tuple, EPSILON};

use crate::Truncation;

pub(crate) fn intersect(ray: &Ray, truncation: &Truncation) -> Vec<f64> {
    let mut xs = Vec::with_capacity(2);
    let (o, d) = (ray.origin, ray.direction);

    let a = d.x * d.x + d.z * d.z;
    // A ray parallel to the axis can only meet the caps
    if a.abs() >= EPSILON {
        let b = 2.0 * o.x * d.x + 2.0 * o.z * d.z;
        let c = o.x * o.x + o.z * o.z - 1.0;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return xs;
        }

        let sqrtd = discriminant.sqrt();
        let mut t0 = (-b - sqrtd) / (2.0 * a);
        let mut t1 = (-b + sqrtd) / (2.0 * a);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        for t in [t0, t1] {
            let y = o.y + t * d.y;
            if truncation.bounds.surrounds(y) {
                xs.push(t);
            }
        }
    }

    intersect_caps(ray, truncation, |_| 1.0, &mut xs);
    xs
}

/// Test the end-cap disks at `bounds.min` and `bounds.max`.
///
/// `radius_at` gives the disk radius for a cap height, constant for a
/// cylinder and |y| for a cone.
pub(crate) fn intersect_caps(
    ray: &Ray,
    truncation: &Truncation,
    radius_at: impl Fn(f64) -> f64,
    xs: &mut Vec<f64>,
) {
    if !truncation.closed || ray.direction.y.abs() < EPSILON {
        return;
    }
    for y in [truncation.bounds.min, truncation.bounds.max] {
        if !y.is_finite() {
            continue;
        }
        let t = (y - ray.origin.y) / ray.direction.y;
        if within_disk(ray, t, radius_at(y)) {
            xs.push(t);
        }
    }
}

fn within_disk(ray: &Ray, t: f64, radius: f64) -> bool {
    let x = ray.origin.x + t * ray.direction.x;
    let z = ray.origin.z + t * ray.direction.z;
    x * x + z * z <= radius * radius
}

pub(crate) fn normal_at(point: Tuple, truncation: &Truncation) -> Tuple {
    let dist = point.x * point.x + point.z * point.z;
    if dist < 1.0 && point.y >= truncation.bounds.max - EPSILON {
        Tuple::vector(0.0, 1.0, 0.0)
    } else if dist < 1.0 && point.y <= truncation.bounds.min + EPSILON {
        Tuple::vector(0.0, -1.0, 0.0)
    } else {
        Tuple::vector(point.x, 0.0, point.z)
    }
}

pub(crate) fn bounds(truncation: &Truncation) -> BoundingBox {
    let Interval { min, max } = truncation.bounds;
    BoundingBox::new(Tuple::point(-1.0, min, -1.0), Tuple::point(1.0, max, 1.0))
}
