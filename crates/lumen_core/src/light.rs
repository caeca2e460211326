use lumen_math::{Color, Tuple};

/// A point light with no size; casts hard shadows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Tuple,
    pub intensity: Color,
}

impl PointLight {
    pub fn new(position: Tuple, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }
}
