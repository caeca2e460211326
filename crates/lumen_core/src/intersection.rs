use crate::ShapeId;

/// A ray hitting a shape at distance `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub t: f64,
    pub shape: ShapeId,
}

impl Intersection {
    pub fn new(t: f64, shape: ShapeId) -> Self {
        Self { t, shape }
    }
}

/// Sort by ascending distance. The sort is stable so equal distances keep
/// the order in which they were found.
pub fn sort_intersections(xs: &mut [Intersection]) {
    xs.sort_by(|a, b| a.t.total_cmp(&b.t));
}

/// The visible intersection: smallest strictly positive `t`.
///
/// Ties resolve to the earliest entry in `xs`.
pub fn hit(xs: &[Intersection]) -> Option<&Intersection> {
    xs.iter().filter(|i| i.t > 0.0).fold(None, |best, i| match best {
        Some(b) if b.t <= i.t => Some(b),
        _ => Some(i),
    })
}
