//! Lumen math - the algebra core of the Lumen ray tracer.
//!
//! - **Tuples**: homogeneous points (`w = 1`) and vectors (`w = 0`)
//! - **Matrices**: square row-major matrices up to 4x4 plus transform factories
//! - **Backends**: the [`MatrixBackend`] strategy trait with a naive
//!   cofactor implementation and a glam-backed one
//! - **Rays and bounding boxes** used by the intersection engine

mod aabb;
mod backend;
mod color;
mod error;
mod interval;
mod matrix;
mod ray;
pub mod transform;
mod tuple;

pub use aabb::{check_axis, BoundingBox};
pub use backend::{GlamBackend, MatrixBackend, NaiveBackend};
pub use color::{color, Color, BLACK, WHITE};
pub use error::{MathError, MathResult};
pub use interval::Interval;
pub use matrix::Matrix;
pub use ray::Ray;
pub use tuple::Tuple;

/// Tolerance for floating-point comparisons throughout the renderer.
pub const EPSILON: f64 = 1e-5;

/// Epsilon-based equality for math value types.
///
/// Kept as an explicit method rather than `PartialEq` so every call site
/// shows which tolerance it uses.
pub trait ApproxEq {
    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self - other).abs() < epsilon
    }
}

/// Free-function form of [`ApproxEq::approx_eq`] for scalars.
#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    a.approx_eq(&b, epsilon)
}
