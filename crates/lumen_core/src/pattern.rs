//! Procedural color patterns.
//!
//! A pattern is evaluated in pattern space: the scene maps a world point
//! through the shape's inverse transform and then through the pattern's
//! inverse transform before calling [`Pattern::color_at`].

use lumen_math::{transform, Color, Matrix, Tuple};

use crate::{UvMapping, UvPattern};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PatternKind {
    /// A single color everywhere.
    Solid(Color),
    /// Alternates on the parity of `floor(x)`.
    Stripe(Color, Color),
    /// Linear blend from the first color to the second over each unit of x.
    Gradient(Color, Color),
    /// Concentric rings in xz, alternating on `floor(sqrt(x² + z²))`.
    Ring(Color, Color),
    /// 3D checkerboard on `floor(x) + floor(y) + floor(z)`.
    Checker(Color, Color),
    /// A 2D pattern wrapped onto the surface through a UV mapping.
    TextureMap { pattern: UvPattern, mapping: UvMapping },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pattern {
    pub kind: PatternKind,
    pub transform: Matrix,
}

impl Pattern {
    pub fn new(kind: PatternKind) -> Self {
        Self {
            kind,
            transform: transform::identity(),
        }
    }

    pub fn solid(c: Color) -> Self {
        Self::new(PatternKind::Solid(c))
    }

    pub fn stripe(a: Color, b: Color) -> Self {
        Self::new(PatternKind::Stripe(a, b))
    }

    pub fn gradient(a: Color, b: Color) -> Self {
        Self::new(PatternKind::Gradient(a, b))
    }

    pub fn ring(a: Color, b: Color) -> Self {
        Self::new(PatternKind::Ring(a, b))
    }

    pub fn checker(a: Color, b: Color) -> Self {
        Self::new(PatternKind::Checker(a, b))
    }

    pub fn texture_map(pattern: UvPattern, mapping: UvMapping) -> Self {
        Self::new(PatternKind::TextureMap { pattern, mapping })
    }

    pub fn with_transform(mut self, transform: Matrix) -> Self {
        self.transform = transform;
        self
    }

    /// Color at a point already expressed in pattern space.
    pub fn color_at(&self, p: Tuple) -> Color {
        match self.kind {
            PatternKind::Solid(c) => c,
            PatternKind::Stripe(a, b) => pick(a, b, p.x.floor()),
            PatternKind::Gradient(a, b) => a + (b - a) * (p.x - p.x.floor()),
            PatternKind::Ring(a, b) => pick(a, b, (p.x * p.x + p.z * p.z).sqrt().floor()),
            PatternKind::Checker(a, b) => pick(a, b, p.x.floor() + p.y.floor() + p.z.floor()),
            PatternKind::TextureMap { pattern, mapping } => {
                let (u, v) = mapping.map(p);
                pattern.color_at(u, v)
            }
        }
    }
}

/// `a` on even `n`, `b` on odd; `n` is already floored.
fn pick(a: Color, b: Color, n: f64) -> Color {
    if n.rem_euclid(2.0) == 0.0 {
        a
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::{color, ApproxEq, BLACK, WHITE};

    #[test]
    fn test_stripe_alternates_in_x() {
        let pattern = Pattern::stripe(WHITE, BLACK);
        assert_eq!(pattern.color_at(Tuple::point(0.0, 1.0, 2.0)), WHITE);
        assert_eq!(pattern.color_at(Tuple::point(0.9, 0.0, 0.0)), WHITE);
        assert_eq!(pattern.color_at(Tuple::point(1.0, 0.0, 0.0)), BLACK);
        assert_eq!(pattern.color_at(Tuple::point(-0.1, 0.0, 0.0)), BLACK);
        assert_eq!(pattern.color_at(Tuple::point(-1.0, 0.0, 0.0)), BLACK);
        assert_eq!(pattern.color_at(Tuple::point(-1.1, 0.0, 0.0)), WHITE);
    }

    #[test]
    fn test_gradient_interpolates() {
        let pattern = Pattern::gradient(WHITE, BLACK);
        assert_eq!(pattern.color_at(Tuple::point(0.0, 0.0, 0.0)), WHITE);
        assert!(pattern
            .color_at(Tuple::point(0.25, 0.0, 0.0))
            .approx_eq(&color(0.75, 0.75, 0.75), 1e-9));
        assert!(pattern
            .color_at(Tuple::point(0.75, 0.0, 0.0))
            .approx_eq(&color(0.25, 0.25, 0.25), 1e-9));
    }

    #[test]
    fn test_ring_extends_in_x_and_z() {
        let pattern = Pattern::ring(WHITE, BLACK);
        assert_eq!(pattern.color_at(Tuple::point(0.0, 0.0, 0.0)), WHITE);
        assert_eq!(pattern.color_at(Tuple::point(1.0, 0.0, 0.0)), BLACK);
        assert_eq!(pattern.color_at(Tuple::point(0.0, 0.0, 1.0)), BLACK);
        assert_eq!(pattern.color_at(Tuple::point(0.708, 0.0, 0.708)), BLACK);
    }

    #[test]
    fn test_checker_repeats_in_each_axis() {
        let pattern = Pattern::checker(WHITE, BLACK);
        assert_eq!(pattern.color_at(Tuple::point(0.99, 0.0, 0.0)), WHITE);
        assert_eq!(pattern.color_at(Tuple::point(1.01, 0.0, 0.0)), BLACK);
        assert_eq!(pattern.color_at(Tuple::point(0.0, 0.99, 0.0)), WHITE);
        assert_eq!(pattern.color_at(Tuple::point(0.0, 1.01, 0.0)), BLACK);
        assert_eq!(pattern.color_at(Tuple::point(0.0, 0.0, 0.99)), WHITE);
        assert_eq!(pattern.color_at(Tuple::point(0.0, 0.0, 1.01)), BLACK);
    }

    #[test]
    fn test_solid_ignores_position() {
        let c = color(0.2, 0.4, 0.6);
        let pattern = Pattern::solid(c);
        assert_eq!(pattern.color_at(Tuple::point(10.0, -3.0, 0.5)), c);
    }

    #[test]
    fn test_texture_map_on_sphere() {
        let checkers = UvPattern::checkers(16.0, 8.0, BLACK, WHITE);
        let pattern = Pattern::texture_map(checkers, UvMapping::Spherical);
        let cases = [
            (Tuple::point(0.4315, 0.4670, 0.7719), WHITE),
            (Tuple::point(-0.9654, 0.2552, -0.0534), BLACK),
            (Tuple::point(0.1039, 0.7090, 0.6975), WHITE),
            (Tuple::point(-0.4986, -0.7856, -0.3663), BLACK),
            (Tuple::point(-0.0317, -0.9395, 0.3411), BLACK),
            (Tuple::point(0.4809, -0.7721, 0.4154), BLACK),
            (Tuple::point(0.0285, -0.9612, -0.2745), BLACK),
            (Tuple::point(-0.5734, -0.2162, -0.7903), WHITE),
            (Tuple::point(0.7688, -0.1470, 0.6223), BLACK),
            (Tuple::point(-0.7652, 0.2175, 0.6060), BLACK),
        ];
        for (p, expected) in cases {
            assert_eq!(pattern.color_at(p), expected, "{p:?}");
        }
    }
}
