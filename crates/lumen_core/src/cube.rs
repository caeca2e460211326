//! Axis-aligned cube spanning [-1, 1] on every axis.

use lumen_math::{check_axis, BoundingBox, Interval, Ray, Tuple};

const SLAB: Interval = Interval { min: -1.0, max: 1.0 };

/// Slab method: intersect the three per-axis parameter ranges.
pub(crate) fn intersect(ray: &Ray) -> Vec<f64> {
    let span = check_axis(ray.origin.x, ray.direction.x, SLAB)
        .intersection(&check_axis(ray.origin.y, ray.direction.y, SLAB))
        .intersection(&check_axis(ray.origin.z, ray.direction.z, SLAB));

    if span.is_empty() {
        return Vec::new();
    }
    vec![span.min, span.max]
}

/// The face normal is the axis with the largest absolute coordinate.
pub(crate) fn normal_at(point: Tuple) -> Tuple {
    let (ax, ay, az) = (point.x.abs(), point.y.abs(), point.z.abs());
    let max = ax.max(ay).max(az);

    if max == ax {
        Tuple::vector(point.x, 0.0, 0.0)
    } else if max == ay {
        Tuple::vector(0.0, point.y, 0.0)
    } else {
        Tuple::vector(0.0, 0.0, point.z)
    }
}

pub(crate) fn bounds() -> BoundingBox {
    BoundingBox::unit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_hits_each_face() {
        let cases = [
            (Tuple::point(5.0, 0.5, 0.0), Tuple::vector(-1.0, 0.0, 0.0), 4.0, 6.0),
            (Tuple::point(-5.0, 0.5, 0.0), Tuple::vector(1.0, 0.0, 0.0), 4.0, 6.0),
            (Tuple::point(0.5, 5.0, 0.0), Tuple::vector(0.0, -1.0, 0.0), 4.0, 6.0),
            (Tuple::point(0.5, -5.0, 0.0), Tuple::vector(0.0, 1.0, 0.0), 4.0, 6.0),
            (Tuple::point(0.5, 0.0, 5.0), Tuple::vector(0.0, 0.0, -1.0), 4.0, 6.0),
            (Tuple::point(0.5, 0.0, -5.0), Tuple::vector(0.0, 0.0, 1.0), 4.0, 6.0),
            (Tuple::point(0.0, 0.5, 0.0), Tuple::vector(0.0, 0.0, 1.0), -1.0, 1.0),
        ];
        for (origin, direction, t1, t2) in cases {
            let xs = intersect(&Ray::new(origin, direction));
            assert_eq!(xs, vec![t1, t2], "{origin:?}");
        }
    }

    #[test]
    fn test_ray_misses() {
        let cases = [
            (Tuple::point(-2.0, 0.0, 0.0), Tuple::vector(0.2673, 0.5345, 0.8018)),
            (Tuple::point(0.0, -2.0, 0.0), Tuple::vector(0.8018, 0.2673, 0.5345)),
            (Tuple::point(0.0, 0.0, -2.0), Tuple::vector(0.5345, 0.8018, 0.2673)),
            (Tuple::point(2.0, 0.0, 2.0), Tuple::vector(0.0, 0.0, -1.0)),
            (Tuple::point(0.0, 2.0, 2.0), Tuple::vector(0.0, -1.0, 0.0)),
            (Tuple::point(2.0, 2.0, 0.0), Tuple::vector(-1.0, 0.0, 0.0)),
        ];
        for (origin, direction) in cases {
            assert!(intersect(&Ray::new(origin, direction)).is_empty(), "{origin:?}");
        }
    }

    #[test]
    fn test_normals_on_faces_and_corners() {
        let cases = [
            (Tuple::point(1.0, 0.5, -0.8), Tuple::vector(1.0, 0.0, 0.0)),
            (Tuple::point(-1.0, -0.2, 0.9), Tuple::vector(-1.0, 0.0, 0.0)),
            (Tuple::point(-0.4, 1.0, -0.1), Tuple::vector(0.0, 1.0, 0.0)),
            (Tuple::point(0.3, -1.0, -0.7), Tuple::vector(0.0, -1.0, 0.0)),
            (Tuple::point(-0.6, 0.3, 1.0), Tuple::vector(0.0, 0.0, 1.0)),
            (Tuple::point(0.4, 0.4, -1.0), Tuple::vector(0.0, 0.0, -1.0)),
            (Tuple::point(1.0, 1.0, 1.0), Tuple::vector(1.0, 0.0, 0.0)),
            (Tuple::point(-1.0, -1.0, -1.0), Tuple::vector(-1.0, 0.0, 0.0)),
        ];
        for (point, expected) in cases {
            assert_eq!(normal_at(point), expected);
        }
    }
}
