//! Homogeneous 4-component tuples.
//!
//! `w = 1` marks a point, `w = 0` a vector. Operations that have no
//! geometric meaning (point + point, vector - point, cross product of
//! points) are rejected: the `try_*` methods return an error and the
//! operator impls panic with the same message.

use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::DVec4;

use crate::{ApproxEq, MathError, MathResult};

/// A point or vector in homogeneous coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tuple {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Tuple {
    /// Create a tuple from raw components.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Create a point (w = 1).
    pub const fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Create a vector (w = 0).
    pub const fn vector(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0)
    }

    pub const ORIGIN: Tuple = Tuple::point(0.0, 0.0, 0.0);

    pub fn is_point(&self) -> bool {
        self.w == 1.0
    }

    pub fn is_vector(&self) -> bool {
        self.w == 0.0
    }

    /// Component-wise addition. Adding two points is rejected.
    pub fn try_add(self, rhs: Tuple) -> MathResult<Tuple> {
        if self.is_point() && rhs.is_point() {
            return Err(MathError::InvalidTupleOperation("cannot add two points"));
        }
        Ok(Tuple::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        ))
    }

    /// Component-wise subtraction. Subtracting a point from a vector is rejected.
    pub fn try_sub(self, rhs: Tuple) -> MathResult<Tuple> {
        if self.is_vector() && rhs.is_point() {
            return Err(MathError::InvalidTupleOperation(
                "cannot subtract a point from a vector",
            ));
        }
        Ok(Tuple::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        ))
    }

    /// Euclidean length over all four components (w is zero for vectors).
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Unit-length copy of this tuple. A zero tuple is returned unchanged.
    pub fn normalize(&self) -> Tuple {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return *self;
        }
        *self / magnitude
    }

    pub fn dot(&self, rhs: &Tuple) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// Cross product, defined for vectors only.
    pub fn cross(&self, rhs: &Tuple) -> MathResult<Tuple> {
        if !self.is_vector() || !rhs.is_vector() {
            return Err(MathError::InvalidTupleOperation(
                "cross product requires two vectors",
            ));
        }
        Ok(Tuple::vector(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        ))
    }

    /// Reflect this vector around `normal`: v - 2 (v . n) n.
    pub fn reflect(&self, normal: &Tuple) -> Tuple {
        *self - *normal * (2.0 * self.dot(normal))
    }
}

impl ApproxEq for Tuple {
    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.approx_eq(&other.x, epsilon)
            && self.y.approx_eq(&other.y, epsilon)
            && self.z.approx_eq(&other.z, epsilon)
            && self.w.approx_eq(&other.w, epsilon)
    }
}

impl From<Tuple> for DVec4 {
    fn from(t: Tuple) -> Self {
        DVec4::new(t.x, t.y, t.z, t.w)
    }
}

impl From<DVec4> for Tuple {
    fn from(v: DVec4) -> Self {
        Tuple::new(v.x, v.y, v.z, v.w)
    }
}

/// # Panics
///
/// Panics when both operands are points.
impl Add for Tuple {
    type Output = Tuple;

    fn add(self, rhs: Tuple) -> Tuple {
        match self.try_add(rhs) {
            Ok(t) => t,
            Err(e) => panic!("{e}"),
        }
    }
}

/// # Panics
///
/// Panics when subtracting a point from a vector.
impl Sub for Tuple {
    type Output = Tuple;

    fn sub(self, rhs: Tuple) -> Tuple {
        match self.try_sub(rhs) {
            Ok(t) => t,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Neg for Tuple {
    type Output = Tuple;

    fn neg(self) -> Tuple {
        Tuple::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<f64> for Tuple {
    type Output = Tuple;

    fn mul(self, rhs: f64) -> Tuple {
        Tuple::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Div<f64> for Tuple {
    type Output = Tuple;

    fn div(self, rhs: f64) -> Tuple {
        Tuple::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_point_and_vector_tags() {
        let p = Tuple::point(4.3, -4.2, 3.1);
        assert!(p.is_point());
        assert!(!p.is_vector());

        let v = Tuple::vector(4.3, -4.2, 3.1);
        assert!(v.is_vector());
        assert!(!v.is_point());
    }

    #[test]
    fn test_point_plus_vector_is_point() {
        let p = Tuple::point(3.0, -2.0, 5.0);
        let v = Tuple::vector(-2.0, 3.0, 1.0);
        assert_eq!(p + v, Tuple::point(1.0, 1.0, 6.0));
    }

    #[test]
    fn test_point_minus_point_is_vector() {
        let a = Tuple::point(3.0, 2.0, 1.0);
        let b = Tuple::point(5.0, 6.0, 7.0);
        assert_eq!(a - b, Tuple::vector(-2.0, -4.0, -6.0));
    }

    #[test]
    fn test_invalid_operations_are_rejected() {
        let p = Tuple::point(1.0, 2.0, 3.0);
        let v = Tuple::vector(1.0, 2.0, 3.0);

        assert!(matches!(
            p.try_add(p),
            Err(MathError::InvalidTupleOperation(_))
        ));
        assert!(matches!(
            v.try_sub(p),
            Err(MathError::InvalidTupleOperation(_))
        ));
        assert!(matches!(
            p.cross(&v),
            Err(MathError::InvalidTupleOperation(_))
        ));
    }

    #[test]
    #[should_panic(expected = "cannot add two points")]
    fn test_add_operator_panics_on_two_points() {
        let _ = Tuple::point(1.0, 0.0, 0.0) + Tuple::point(0.0, 1.0, 0.0);
    }

    #[test]
    fn test_scalar_ops_and_negate() {
        let a = Tuple::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(-a, Tuple::new(-1.0, 2.0, -3.0, 4.0));
        assert_eq!(a * 0.5, Tuple::new(0.5, -1.0, 1.5, -2.0));
        assert_eq!(a / 2.0, Tuple::new(0.5, -1.0, 1.5, -2.0));
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Tuple::vector(0.0, 1.0, 0.0).magnitude(), 1.0);
        assert!(Tuple::vector(1.0, 2.0, 3.0)
            .magnitude()
            .approx_eq(&14.0_f64.sqrt(), EPSILON));
    }

    #[test]
    fn test_normalize_yields_unit_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let v = Tuple::vector(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
            );
            if v.magnitude() < 1e-6 {
                continue;
            }
            assert!(v.normalize().magnitude().approx_eq(&1.0, EPSILON));
        }
    }

    #[test]
    fn test_dot_and_cross() {
        let a = Tuple::vector(1.0, 2.0, 3.0);
        let b = Tuple::vector(2.0, 3.0, 4.0);
        assert_eq!(a.dot(&b), 20.0);
        assert_eq!(a.cross(&b).unwrap(), Tuple::vector(-1.0, 2.0, -1.0));
        assert_eq!(b.cross(&a).unwrap(), Tuple::vector(1.0, -2.0, 1.0));
    }

    #[test]
    fn test_reflect() {
        let v = Tuple::vector(1.0, -1.0, 0.0);
        let n = Tuple::vector(0.0, 1.0, 0.0);
        assert_eq!(v.reflect(&n), Tuple::vector(1.0, 1.0, 0.0));

        let v = Tuple::vector(0.0, -1.0, 0.0);
        let s = 2.0_f64.sqrt() / 2.0;
        let n = Tuple::vector(s, s, 0.0);
        assert!(v.reflect(&n).approx_eq(&Tuple::vector(1.0, 0.0, 0.0), EPSILON));
    }
}
