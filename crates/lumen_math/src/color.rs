//! RGB colors.
//!
//! Colors reuse glam's `DVec3`: addition, scaling and the component-wise
//! (Hadamard) product all come for free.

use glam::DVec3;

use crate::ApproxEq;

/// Color type alias (RGB values typically 0-1)
pub type Color = DVec3;

pub const BLACK: Color = DVec3::ZERO;
pub const WHITE: Color = DVec3::ONE;

/// Convenience constructor mirroring `Tuple::point`/`Tuple::vector`.
#[inline]
pub fn color(r: f64, g: f64, b: f64) -> Color {
    DVec3::new(r, g, b)
}

impl ApproxEq for DVec3 {
    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (*self - *other).abs().max_element() < epsilon
    }
}
