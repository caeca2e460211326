//! Shape descriptions.
//!
//! A [`Shape`] is a value: geometry, a local transform and a material. It
//! becomes part of a scene graph once handed to [`crate::Scene`], which
//! caches the inverse transforms and links parents and children.

use lumen_math::{transform, BoundingBox, Interval, Matrix, Ray, Tuple};

use crate::{cone, cube, cylinder, plane, sphere, Material};

/// Height limits for cylinders and cones, and whether the ends are capped.
///
/// The default is unbounded in both directions and open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Truncation {
    pub bounds: Interval,
    pub closed: bool,
}

impl Truncation {
    pub fn new(min: f64, max: f64, closed: bool) -> Self {
        Self {
            bounds: Interval::new(min, max),
            closed,
        }
    }
}

impl Default for Truncation {
    fn default() -> Self {
        Self {
            bounds: Interval::UNIVERSE,
            closed: false,
        }
    }
}

/// The closed set of shape variants.
///
/// Every primitive is a leaf; `Group` is the only composite and carries no
/// geometry of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Sphere,
    Plane,
    Cube,
    Cylinder(Truncation),
    Cone(Truncation),
    Group,
}

impl Geometry {
    /// Distances at which a local-space ray meets this primitive.
    ///
    /// Groups return nothing here; the scene resolves them through their
    /// children.
    pub fn local_intersect(&self, ray: &Ray) -> Vec<f64> {
        match self {
            Geometry::Sphere => sphere::intersect(ray),
            Geometry::Plane => plane::intersect(ray),
            Geometry::Cube => cube::intersect(ray),
            Geometry::Cylinder(truncation) => cylinder::intersect(ray, truncation),
            Geometry::Cone(truncation) => cone::intersect(ray, truncation),
            Geometry::Group => Vec::new(),
        }
    }

    /// Object-space surface normal, or `None` for a group.
    pub fn local_normal_at(&self, point: Tuple) -> Option<Tuple> {
        match self {
            Geometry::Sphere => Some(sphere::normal_at(point)),
            Geometry::Plane => Some(plane::normal_at(point)),
            Geometry::Cube => Some(cube::normal_at(point)),
            Geometry::Cylinder(truncation) => Some(cylinder::normal_at(point, truncation)),
            Geometry::Cone(truncation) => Some(cone::normal_at(point, truncation)),
            Geometry::Group => None,
        }
    }

    /// Object-space bounds of the primitive. Empty for a group.
    pub fn bounds(&self) -> BoundingBox {
        match self {
            Geometry::Sphere => sphere::bounds(),
            Geometry::Plane => plane::bounds(),
            Geometry::Cube => cube::bounds(),
            Geometry::Cylinder(truncation) => cylinder::bounds(truncation),
            Geometry::Cone(truncation) => cone::bounds(truncation),
            Geometry::Group => BoundingBox::EMPTY,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Geometry::Group)
    }
}

/// Geometry plus its local transform and material.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub geometry: Geometry,
    pub transform: Matrix,
    pub material: Material,
}

impl Shape {
    /// Create a shape with the identity transform and default material.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            transform: transform::identity(),
            material: Material::default(),
        }
    }

    pub fn sphere() -> Self {
        Self::new(Geometry::Sphere)
    }

    pub fn plane() -> Self {
        Self::new(Geometry::Plane)
    }

    pub fn cube() -> Self {
        Self::new(Geometry::Cube)
    }

    /// Infinite open cylinder.
    pub fn cylinder() -> Self {
        Self::new(Geometry::Cylinder(Truncation::default()))
    }

    /// Cylinder limited to `min < y < max`, capped when `closed`.
    pub fn truncated_cylinder(min: f64, max: f64, closed: bool) -> Self {
        Self::new(Geometry::Cylinder(Truncation::new(min, max, closed)))
    }

    /// Infinite open double cone.
    pub fn cone() -> Self {
        Self::new(Geometry::Cone(Truncation::default()))
    }

    /// Cone limited to `min < y < max`, capped when `closed`.
    pub fn truncated_cone(min: f64, max: f64, closed: bool) -> Self {
        Self::new(Geometry::Cone(Truncation::new(min, max, closed)))
    }

    /// An empty group. Children are attached through the scene.
    pub fn group() -> Self {
        Self::new(Geometry::Group)
    }

    /// Set the local transform.
    pub fn with_transform(mut self, transform: Matrix) -> Self {
        self.transform = transform;
        self
    }

    /// Set the material.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transform_and_material() {
        let s = Shape::sphere();
        assert_eq!(s.transform, transform::identity());
        assert_eq!(s.material, Material::default());
    }

    #[test]
    fn test_builders() {
        let m = Material::default().with_ambient(1.0);
        let s = Shape::cube()
            .with_transform(transform::translation(2.0, 3.0, 4.0))
            .with_material(m.clone());
        assert_eq!(s.transform, transform::translation(2.0, 3.0, 4.0));
        assert_eq!(s.material, m);
    }

    #[test]
    fn test_default_truncation_is_unbounded() {
        let Geometry::Cylinder(t) = Shape::cylinder().geometry else {
            panic!("expected a cylinder");
        };
        assert_eq!(t.bounds.min, f64::NEG_INFINITY);
        assert_eq!(t.bounds.max, f64::INFINITY);
        assert!(!t.closed);
    }

    #[test]
    fn test_group_has_no_local_geometry() {
        let group = Geometry::Group;
        assert!(group.is_group());
        assert!(group.local_normal_at(Tuple::point(0.0, 0.0, 0.0)).is_none());
        assert!(group.bounds().is_empty());
    }

    #[test]
    fn test_sphere_dispatch() {
        let ray = Ray::new(Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));
        assert_eq!(Geometry::Sphere.local_intersect(&ray), vec![4.0, 6.0]);
    }
}
