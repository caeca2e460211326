//! Surface materials.

use lumen_math::{Color, WHITE};

use crate::Pattern;

/// Phong surface parameters plus the reflection/refraction terms used by
/// recursive tracing.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Base color, used when no pattern is set
    pub color: Color,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    /// Specular exponent; larger is a tighter highlight
    pub shininess: f64,
    /// 0 = matte, 1 = perfect mirror
    pub reflective: f64,
    /// 0 = opaque, 1 = fully transparent
    pub transparency: f64,
    pub refractive_index: f64,
    pub pattern: Option<Pattern>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: WHITE,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
            reflective: 0.0,
            transparency: 0.0,
            refractive_index: 1.0,
            pattern: None,
        }
    }
}

impl Material {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_ambient(mut self, ambient: f64) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_diffuse(mut self, diffuse: f64) -> Self {
        self.diffuse = diffuse;
        self
    }

    pub fn with_specular(mut self, specular: f64) -> Self {
        self.specular = specular;
        self
    }

    pub fn with_shininess(mut self, shininess: f64) -> Self {
        self.shininess = shininess;
        self
    }

    pub fn with_reflective(mut self, reflective: f64) -> Self {
        self.reflective = reflective;
        self
    }

    pub fn with_transparency(mut self, transparency: f64) -> Self {
        self.transparency = transparency;
        self
    }

    pub fn with_refractive_index(mut self, refractive_index: f64) -> Self {
        self.refractive_index = refractive_index;
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Glass-like preset: fully transparent with index 1.5.
    pub fn glass() -> Self {
        Self::default()
            .with_transparency(1.0)
            .with_refractive_index(1.5)
    }
}
