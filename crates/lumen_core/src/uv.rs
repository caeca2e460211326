//! UV mappings and two-dimensional patterns.
//!
//! A mapping projects a 3D pattern-space point onto `(u, v)` in `[0, 1)`;
//! a UV pattern turns that pair into a color.

use std::f64::consts::PI;

use lumen_math::{Color, Tuple};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UvMapping {
    /// Longitude/latitude on the unit sphere.
    Spherical,
    /// The xz plane, repeating every unit.
    Planar,
    /// Around the y axis; v repeats every unit of height.
    Cylindrical,
}

impl UvMapping {
    pub fn map(&self, p: Tuple) -> (f64, f64) {
        match self {
            UvMapping::Spherical => spherical(p),
            UvMapping::Planar => (p.x.rem_euclid(1.0), p.z.rem_euclid(1.0)),
            UvMapping::Cylindrical => (azimuth(p), p.y.rem_euclid(1.0)),
        }
    }
}

/// Fraction of a turn around y, increasing counter-clockwise seen from above.
fn azimuth(p: Tuple) -> f64 {
    let theta = p.x.atan2(p.z);
    let raw_u = theta / (2.0 * PI);
    1.0 - (raw_u + 0.5)
}

fn spherical(p: Tuple) -> (f64, f64) {
    let radius = Tuple::vector(p.x, p.y, p.z).magnitude();
    if radius == 0.0 {
        return (0.0, 0.0);
    }
    let phi = (p.y / radius).acos();
    (azimuth(p), 1.0 - phi / PI)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UvPattern {
    /// `width` by `height` checkerboard over the unit square.
    Checkers {
        width: f64,
        height: f64,
        a: Color,
        b: Color,
    },
    /// Solid `main` with a differently colored square in each corner.
    /// Useful for checking the orientation of a mapping.
    AlignCheck {
        main: Color,
        ul: Color,
        ur: Color,
        bl: Color,
        br: Color,
    },
}

impl UvPattern {
    pub fn checkers(width: f64, height: f64, a: Color, b: Color) -> Self {
        UvPattern::Checkers { width, height, a, b }
    }

    pub fn color_at(&self, u: f64, v: f64) -> Color {
        match *self {
            UvPattern::Checkers { width, height, a, b } => {
                let u2 = (u * width).floor();
                let v2 = (v * height).floor();
                if (u2 + v2).rem_euclid(2.0) == 0.0 {
                    a
                } else {
                    b
                }
            }
            UvPattern::AlignCheck { main, ul, ur, bl, br } => {
                if v > 0.8 {
                    if u < 0.2 {
                        return ul;
                    }
                    if u > 0.8 {
                        return ur;
                    }
                } else if v < 0.2 {
                    if u < 0.2 {
                        return bl;
                    }
                    if u > 0.8 {
                        return br;
                    }
                }
                main
            }
        }
    }
}
