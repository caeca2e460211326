//! Unit sphere centered at the object-space origin.

use lumen_math::{BoundingBox, Ray, Tuple};

/// Distances along `ray` where it crosses the unit sphere.
///
/// Solves |O + tD|^2 = 1. A tangent ray yields the same root twice.
pub(crate) fn intersect(ray: &Ray) -> Vec<f64> {
    let sphere_to_ray = ray.origin - Tuple::ORIGIN;
    let a = ray.direction.dot(&ray.direction);
    let b = 2.0 * ray.direction.dot(&sphere_to_ray);
    let c = sphere_to_ray.dot(&sphere_to_ray) - 1.0;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Vec::new();
    }

    let sqrtd = discriminant.sqrt();
    let t1 = (-b - sqrtd) / (2.0 * a);
    let t2 = (-b + sqrtd) / (2.0 * a);
    vec![t1.min(t2), t1.max(t2)]
}

pub(crate) fn normal_at(point: Tuple) -> Tuple {
    point - Tuple::ORIGIN
}

pub(crate) fn bounds() -> BoundingBox {
    BoundingBox::unit()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray(origin: Tuple, direction: Tuple) -> Ray {
        Ray::new(origin, direction)
    }

    #[test]
    fn test_ray_through_center() {
        let xs = intersect(&ray(Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 0.0, 1.0)));
        assert_eq!(xs, vec![4.0, 6.0]);
    }

    #[test]
    fn test_tangent_counts_twice() {
        let xs = intersect(&ray(Tuple::point(0.0, 1.0, -5.0), Tuple::vector(0.0, 0.0, 1.0)));
        assert_eq!(xs, vec![5.0, 5.0]);
    }

    #[test]
    fn test_miss() {
        let xs = intersect(&ray(Tuple::point(0.0, 2.0, -5.0), Tuple::vector(0.0, 0.0, 1.0)));
        assert!(xs.is_empty());
    }

    #[test]
    fn test_origin_inside_and_behind() {
        let xs = intersect(&ray(Tuple::point(0.0, 0.0, 0.0), Tuple::vector(0.0, 0.0, 1.0)));
        assert_eq!(xs, vec![-1.0, 1.0]);

        let xs = intersect(&ray(Tuple::point(0.0, 0.0, 5.0), Tuple::vector(0.0, 0.0, 1.0)));
        assert_eq!(xs, vec![-6.0, -4.0]);
    }

    #[test]
    fn test_normal_is_radial() {
        let s = 3.0_f64.sqrt() / 3.0;
        assert_eq!(normal_at(Tuple::point(1.0, 0.0, 0.0)), Tuple::vector(1.0, 0.0, 0.0));
        assert_eq!(normal_at(Tuple::point(0.0, 0.0, 1.0)), Tuple::vector(0.0, 0.0, 1.0));
        assert_eq!(normal_at(Tuple::point(s, s, s)), Tuple::vector(s, s, s));
    }
}
