use crate::{Interval, Matrix, Ray, Tuple, EPSILON};

/// Axis-aligned bounding box given by its lower and upper corner points.
///
/// Corners may be infinite (planes are unbounded in x and z). The empty box
/// has `min = +inf` and `max = -inf` on every axis so that merging anything
/// into it yields that thing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingBox {
    pub min: Tuple,
    pub max: Tuple,
}

impl BoundingBox {
    /// Create a box from its two corners.
    pub fn new(min: Tuple, max: Tuple) -> Self {
        Self { min, max }
    }

    /// Box with all axes `[-1, 1]`, the extent of the unit sphere and cube.
    pub fn unit() -> Self {
        Self::new(Tuple::point(-1.0, -1.0, -1.0), Tuple::point(1.0, 1.0, 1.0))
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Grow the box to include `p`.
    pub fn add_point(&mut self, p: Tuple) {
        self.min = Tuple::point(self.min.x.min(p.x), self.min.y.min(p.y), self.min.z.min(p.z));
        self.max = Tuple::point(self.max.x.max(p.x), self.max.y.max(p.y), self.max.z.max(p.z));
    }

    /// Create a box that surrounds two other boxes.
    pub fn surrounding(a: &BoundingBox, b: &BoundingBox) -> Self {
        let mut out = *a;
        if !b.is_empty() {
            out.add_point(b.min);
            out.add_point(b.max);
        }
        out
    }

    pub fn contains_point(&self, p: Tuple) -> bool {
        self.axis_interval(0).contains(p.x)
            && self.axis_interval(1).contains(p.y)
            && self.axis_interval(2).contains(p.z)
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => Interval::new(self.min.x, self.max.x),
            1 => Interval::new(self.min.y, self.max.y),
            _ => Interval::new(self.min.z, self.max.z),
        }
    }

    /// Bounding box of this box's eight corners after applying `m`.
    ///
    /// Terms whose matrix entry is zero are skipped so that an infinite
    /// corner coordinate never meets a zero coefficient (which would give NaN).
    pub fn transform(&self, m: &Matrix) -> BoundingBox {
        if self.is_empty() {
            return *self;
        }
        let mut out = BoundingBox::EMPTY;
        for &x in &[self.min.x, self.max.x] {
            for &y in &[self.min.y, self.max.y] {
                for &z in &[self.min.z, self.max.z] {
                    out.add_point(transform_corner(m, [x, y, z]));
                }
            }
        }
        out
    }

    /// Slab test against the whole box.
    pub fn intersects(&self, ray: &Ray) -> bool {
        if self.is_empty() {
            return false;
        }
        let span = (0..3).fold(Interval::UNIVERSE, |acc, axis| {
            let (origin, direction) = match axis {
                0 => (ray.origin.x, ray.direction.x),
                1 => (ray.origin.y, ray.direction.y),
                _ => (ray.origin.z, ray.direction.z),
            };
            acc.intersection(&check_axis(origin, direction, self.axis_interval(axis)))
        });
        !span.is_empty()
    }

    pub const EMPTY: BoundingBox = BoundingBox {
        min: Tuple::point(f64::INFINITY, f64::INFINITY, f64::INFINITY),
        max: Tuple::point(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
    };
}

fn transform_corner(m: &Matrix, corner: [f64; 3]) -> Tuple {
    let input = [corner[0], corner[1], corner[2], 1.0];
    let mut out = [0.0; 3];
    for (r, slot) in out.iter_mut().enumerate() {
        *slot = (0..4)
            .filter(|&c| m.get(r, c) != 0.0)
            .map(|c| m.get(r, c) * input[c])
            .sum();
    }
    Tuple::point(out[0], out[1], out[2])
}

/// Ray parameter range spent inside the slab `bounds` along one axis.
///
/// A direction component within `EPSILON` of zero is treated as parallel:
/// the range is unbounded when the origin lies inside the slab and empty
/// otherwise.
pub fn check_axis(origin: f64, direction: f64, bounds: Interval) -> Interval {
    if direction.abs() < EPSILON {
        return if bounds.contains(origin) {
            Interval::UNIVERSE
        } else {
            Interval::EMPTY
        };
    }
    let t0 = (bounds.min - origin) / direction;
    let t1 = (bounds.max - origin) / direction;
    if t0 > t1 {
        Interval::new(t1, t0)
    } else {
        Interval::new(t0, t1)
    }
}
