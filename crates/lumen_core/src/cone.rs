//! Double-napped cone x^2 + z^2 = y^2 around the Y axis.
//!
//! Shares truncation and cap handling with the cylinder; the cap radius at
//! height y is |y|.

use lumen_math::{BoundingBox, Ray, Tuple, EPSILON};

use crate::cylinder::intersect_caps;
use crate::Truncation;

pub(crate) fn intersect(ray: &Ray, truncation: &Truncation) -> Vec<f64> {
    let mut xs = Vec::with_capacity(4);
    let (o, d) = (ray.origin, ray.direction);

    let a = d.x * d.x - d.y * d.y + d.z * d.z;
    let b = 2.0 * (o.x * d.x - o.y * d.y + o.z * d.z);
    let c = o.x * o.x - o.y * o.y + o.z * o.z;

    if a.abs() < EPSILON {
        // Ray parallel to one of the cone's halves: a single crossing
        if b.abs() >= EPSILON {
            let t = -c / (2.0 * b);
            if truncation.bounds.surrounds(o.y + t * d.y) {
                xs.push(t);
            }
        }
    } else {
        let discriminant = b * b - 4.0 * a * c;
        // Rays grazing the apex produce a tiny negative discriminant
        if discriminant >= -EPSILON {
            let sqrtd = discriminant.max(0.0).sqrt();
            let mut t0 = (-b - sqrtd) / (2.0 * a);
            let mut t1 = (-b + sqrtd) / (2.0 * a);
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            for t in [t0, t1] {
                if truncation.bounds.surrounds(o.y + t * d.y) {
                    xs.push(t);
                }
            }
        }
    }

    intersect_caps(ray, truncation, f64::abs, &mut xs);
    xs
}

pub(crate) fn normal_at(point: Tuple, truncation: &Truncation) -> Tuple {
    let dist = point.x * point.x + point.z * point.z;
    let cap_radius = point.y * point.y;

    if dist < cap_radius && point.y >= truncation.bounds.max - EPSILON {
        return Tuple::vector(0.0, 1.0, 0.0);
    }
    if dist < cap_radius && point.y <= truncation.bounds.min + EPSILON {
        return Tuple::vector(0.0, -1.0, 0.0);
    }

    let mut y = dist.sqrt();
    if point.y > 0.0 {
        y = -y;
    }
    Tuple::vector(point.x, y, point.z)
}

pub(crate) fn bounds(truncation: &Truncation) -> BoundingBox {
    let limit = truncation.bounds.max_abs();
    BoundingBox::new(
        Tuple::point(-limit, truncation.bounds.min, -limit),
        Tuple::point(limit, truncation.bounds.max, limit),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::ApproxEq;

    #[test]
    fn test_ray_strikes_cone() {
        let cases = [
            (Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 0.0, 1.0), 5.0, 5.0),
            (Tuple::point(0.0, 0.0, -5.0), Tuple::vector(1.0, 1.0, 1.0), 8.66025, 8.66025),
            (Tuple::point(1.0, 1.0, -5.0), Tuple::vector(-0.5, -1.0, 1.0), 4.55006, 49.44994),
        ];
        for (origin, direction, t0, t1) in cases {
            let ray = Ray::new(origin, direction.normalize());
            let xs = intersect(&ray, &Truncation::default());
            assert_eq!(xs.len(), 2, "{origin:?} {direction:?}");
            assert!(xs[0].approx_eq(&t0, 1e-4), "{} vs {t0}", xs[0]);
            assert!(xs[1].approx_eq(&t1, 1e-4), "{} vs {t1}", xs[1]);
        }
    }

    #[test]
    fn test_ray_parallel_to_one_half() {
        let ray = Ray::new(
            Tuple::point(0.0, 0.0, -1.0),
            Tuple::vector(0.0, 1.0, 1.0).normalize(),
        );
        let xs = intersect(&ray, &Truncation::default());
        assert_eq!(xs.len(), 1);
        assert!(xs[0].approx_eq(&0.35355, 1e-4));
    }

    #[test]
    fn test_capped_cone() {
        let truncation = Truncation::new(-0.5, 0.5, true);
        let cases = [
            (Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 1.0, 0.0), 0),
            (Tuple::point(0.0, 0.0, -0.25), Tuple::vector(0.0, 1.0, 1.0), 2),
            (Tuple::point(0.0, 0.0, -0.25), Tuple::vector(0.0, 1.0, 0.0), 4),
        ];
        for (origin, direction, count) in cases {
            let ray = Ray::new(origin, direction.normalize());
            assert_eq!(intersect(&ray, &truncation).len(), count, "{origin:?}");
        }
    }

    #[test]
    fn test_normals() {
        let open = Truncation::default();
        let s2 = 2.0_f64.sqrt();
        assert_eq!(normal_at(Tuple::point(0.0, 0.0, 0.0), &open), Tuple::vector(0.0, 0.0, 0.0));
        assert!(normal_at(Tuple::point(1.0, 1.0, 1.0), &open)
            .approx_eq(&Tuple::vector(1.0, -s2, 1.0), 1e-9));
        assert_eq!(normal_at(Tuple::point(-1.0, -1.0, 0.0), &open), Tuple::vector(-1.0, 1.0, 0.0));
    }

    #[test]
    fn test_cap_normals() {
        let truncation = Truncation::new(-1.0, 2.0, true);
        assert_eq!(
            normal_at(Tuple::point(0.5, 2.0, 0.5), &truncation),
            Tuple::vector(0.0, 1.0, 0.0)
        );
        assert_eq!(
            normal_at(Tuple::point(0.2, -1.0, 0.0), &truncation),
            Tuple::vector(0.0, -1.0, 0.0)
        );
    }

    #[test]
    fn test_bounds() {
        let bbox = bounds(&Truncation::new(-5.0, 3.0, false));
        assert_eq!(bbox.min, Tuple::point(-5.0, -5.0, -5.0));
        assert_eq!(bbox.max, Tuple::point(5.0, 3.0, 5.0));

        let open = bounds(&Truncation::default());
        assert_eq!(open.min.x, f64::NEG_INFINITY);
        assert_eq!(open.max.y, f64::INFINITY);
    }
}
