//! Lumen core - shapes, scene graph and shading for the Lumen ray tracer.
//!
//! This crate provides:
//!
//! - **Shapes**: spheres, planes, cubes, cylinders, cones and groups, each
//!   with a local transform and a material
//! - **Scene graph**: an arena of shapes addressed by [`ShapeId`], with
//!   group bounding boxes and world/object space conversion
//! - **Shading**: Phong [`lighting`], materials and procedural patterns
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use lumen_core::{Scene, Shape};
//! use lumen_math::{transform, NaiveBackend, Ray, Tuple};
//!
//! let mut scene = Scene::new(Arc::new(NaiveBackend));
//! scene.add_object(Shape::sphere().with_transform(transform::scaling(2.0, 2.0, 2.0)))?;
//!
//! let ray = Ray::new(Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));
//! assert_eq!(scene.intersect(&ray).len(), 2);
//! # Ok::<(), lumen_core::SceneError>(())
//! ```

mod cone;
mod cube;
mod cylinder;
mod error;
mod intersection;
mod light;
mod lighting;
mod material;
mod pattern;
mod plane;
mod scene;
mod shape;
mod sphere;
mod uv;

pub use error::{SceneError, SceneResult};
pub use intersection::{hit, sort_intersections, Intersection};
pub use light::PointLight;
pub use lighting::lighting;
pub use material::Material;
pub use pattern::{Pattern, PatternKind};
pub use scene::{Scene, ShapeId};
pub use shape::{Geometry, Shape, Truncation};
pub use uv::{UvMapping, UvPattern};
