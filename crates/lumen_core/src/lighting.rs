//! Phong illumination.

use lumen_math::{Color, Tuple, BLACK};

use crate::{Material, PointLight};

/// Local shading at `point`: ambient, plus diffuse and specular unless the
/// point is in shadow.
///
/// `surface_color` is the material's color or the pattern color at the
/// point; the caller resolves it because patterns need the shape's
/// transforms.
pub fn lighting(
    material: &Material,
    surface_color: Color,
    light: &PointLight,
    point: Tuple,
    eyev: Tuple,
    normalv: Tuple,
    in_shadow: bool,
) -> Color {
    let effective_color = surface_color * light.intensity;
    let ambient = effective_color * material.ambient;
    if in_shadow {
        return ambient;
    }

    let lightv = (light.position - point).normalize();
    let light_dot_normal = lightv.dot(&normalv);
    if light_dot_normal < 0.0 {
        return ambient;
    }

    let diffuse = effective_color * material.diffuse * light_dot_normal;
    let reflectv = (-lightv).reflect(&normalv);
    let reflect_dot_eye = reflectv.dot(&eyev);
    let specular = if reflect_dot_eye <= 0.0 {
        BLACK
    } else {
        light.intensity * material.specular * reflect_dot_eye.powf(material.shininess)
    };

    ambient + diffuse + specular
}
