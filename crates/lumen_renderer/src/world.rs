//! World composition and Whitted-style shading.
//!
//! A [`World`] is one point light plus a [`Scene`]. Shading a ray finds the
//! nearest positive hit, lights it locally with a shadow test and then, while
//! depth remains, adds reflected and refracted contributions.

use std::sync::Arc;

use lumen_core::{
    hit, lighting, Intersection, PointLight, Scene, SceneResult, Shape, ShapeId,
};
use lumen_math::{Color, MatrixBackend, Ray, Tuple, BLACK, EPSILON};

use crate::RenderResult;

/// Everything shading needs about one intersection, computed once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Precalc {
    pub t: f64,
    pub shape: ShapeId,
    pub point: Tuple,
    pub eyev: Tuple,
    pub normalv: Tuple,
    /// The hit is on the inside of the surface; `normalv` has been flipped
    pub inside: bool,
    /// Just above the surface; origin for shadow and reflection rays
    pub over_point: Tuple,
    /// Just below the surface; origin for refraction rays
    pub under_point: Tuple,
    pub reflectv: Tuple,
    /// Refractive index on the side the ray comes from
    pub n1: f64,
    /// Refractive index on the side the ray enters
    pub n2: f64,
}

/// A light and the shapes it illuminates.
#[derive(Debug, Clone)]
pub struct World {
    pub light: PointLight,
    scene: Scene,
}

impl World {
    /// Create an empty world.
    pub fn new(light: PointLight, backend: Arc<dyn MatrixBackend>) -> Self {
        Self {
            light,
            scene: Scene::new(backend),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access for building groups and editing shapes. Must not be
    /// used while a render borrows the world.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn add_object(&mut self, shape: Shape) -> SceneResult<ShapeId> {
        self.scene.add_object(shape)
    }

    pub fn add_objects<I>(&mut self, shapes: I) -> SceneResult<Vec<ShapeId>>
    where
        I: IntoIterator<Item = Shape>,
    {
        self.scene.add_objects(shapes)
    }

    /// All intersections of `ray` with the world, nearest first.
    pub fn intersect(&self, ray: &Ray) -> Vec<Intersection> {
        self.scene.intersect(ray)
    }

    /// Color seen along `ray`, recursing at most `remaining` times for
    /// reflection and refraction. Black when nothing is hit.
    pub fn color_at(&self, ray: &Ray, remaining: u32) -> RenderResult<Color> {
        let xs = self.intersect(ray);
        match hit(&xs) {
            Some(h) => {
                let comps = self.prepare_computations(h, ray, &xs)?;
                self.shade_hit(&comps, remaining)
            }
            None => Ok(BLACK),
        }
    }

    /// Build the shading inputs for `hit`.
    ///
    /// `xs` is the full sorted intersection list the hit came from; it is
    /// walked to find the refractive indices on either side of the surface.
    pub fn prepare_computations(
        &self,
        hit: &Intersection,
        ray: &Ray,
        xs: &[Intersection],
    ) -> RenderResult<Precalc> {
        let point = ray.position(hit.t);
        let eyev = -ray.direction;
        let mut normalv = self.scene.normal_at(hit.shape, point)?;
        let inside = normalv.dot(&eyev) < 0.0;
        if inside {
            normalv = -normalv;
        }
        let reflectv = ray.direction.reflect(&normalv);
        let (n1, n2) = self.refractive_indices(hit, xs)?;

        Ok(Precalc {
            t: hit.t,
            shape: hit.shape,
            point,
            eyev,
            normalv,
            inside,
            over_point: point + normalv * EPSILON,
            under_point: point - normalv * EPSILON,
            reflectv,
            n1,
            n2,
        })
    }

    /// Walk `xs` keeping a stack of the shapes the ray is currently inside.
    fn refractive_indices(&self, hit: &Intersection, xs: &[Intersection]) -> SceneResult<(f64, f64)> {
        let mut containers: Vec<ShapeId> = Vec::new();
        let mut n1 = 1.0;
        for i in xs {
            let is_hit = i == hit;
            if is_hit {
                n1 = self.outermost_index(&containers)?;
            }
            match containers.iter().position(|&s| s == i.shape) {
                Some(pos) => {
                    containers.remove(pos);
                }
                None => containers.push(i.shape),
            }
            if is_hit {
                return Ok((n1, self.outermost_index(&containers)?));
            }
        }
        Ok((n1, 1.0))
    }

    fn outermost_index(&self, containers: &[ShapeId]) -> SceneResult<f64> {
        match containers.last() {
            Some(&id) => Ok(self.scene.material(id)?.refractive_index),
            None => Ok(1.0),
        }
    }

    /// Local lighting plus reflected and refracted light.
    ///
    /// Lighting is evaluated at the over point, the same point the shadow
    /// ray starts from.
    pub fn shade_hit(&self, comps: &Precalc, remaining: u32) -> RenderResult<Color> {
        let material = self.scene.material(comps.shape)?;
        let shadowed = self.is_shadowed(comps.over_point);
        let surface_color = self.scene.surface_color(comps.shape, comps.over_point)?;
        let surface = lighting(
            material,
            surface_color,
            &self.light,
            comps.over_point,
            comps.eyev,
            comps.normalv,
            shadowed,
        );

        let reflected = self.reflected_color(comps, remaining)?;
        let refracted = self.refracted_color(comps, remaining)?;

        if material.reflective > 0.0 && material.transparency > 0.0 {
            let reflectance = schlick(comps);
            Ok(surface + reflected * reflectance + refracted * (1.0 - reflectance))
        } else {
            Ok(surface + reflected + refracted)
        }
    }

    /// True when something lies strictly between `point` and the light.
    pub fn is_shadowed(&self, point: Tuple) -> bool {
        let v = self.light.position - point;
        let distance = v.magnitude();
        let ray = Ray::new(point, v.normalize());
        let xs = self.intersect(&ray);
        hit(&xs).is_some_and(|h| h.t < distance)
    }

    pub fn reflected_color(&self, comps: &Precalc, remaining: u32) -> RenderResult<Color> {
        let reflective = self.scene.material(comps.shape)?.reflective;
        if remaining == 0 || reflective == 0.0 {
            return Ok(BLACK);
        }
        let ray = Ray::new(comps.over_point, comps.reflectv);
        Ok(self.color_at(&ray, remaining - 1)? * reflective)
    }

    pub fn refracted_color(&self, comps: &Precalc, remaining: u32) -> RenderResult<Color> {
        let transparency = self.scene.material(comps.shape)?.transparency;
        if remaining == 0 || transparency == 0.0 {
            return Ok(BLACK);
        }

        // Snell's law
        let n_ratio = comps.n1 / comps.n2;
        let cos_i = comps.eyev.dot(&comps.normalv);
        let sin2_t = n_ratio * n_ratio * (1.0 - cos_i * cos_i);
        if sin2_t > 1.0 {
            // Total internal reflection
            return Ok(BLACK);
        }

        let cos_t = (1.0 - sin2_t).sqrt();
        let direction = comps.normalv * (n_ratio * cos_i - cos_t) - comps.eyev * n_ratio;
        let ray = Ray::new(comps.under_point, direction);
        Ok(self.color_at(&ray, remaining - 1)? * transparency)
    }
}

/// Schlick's approximation of the Fresnel reflectance at a hit.
pub fn schlick(comps: &Precalc) -> f64 {
    let mut cos = comps.eyev.dot(&comps.normalv);
    if comps.n1 > comps.n2 {
        let n = comps.n1 / comps.n2;
        let sin2_t = n * n * (1.0 - cos * cos);
        if sin2_t > 1.0 {
            return 1.0;
        }
        cos = (1.0 - sin2_t).sqrt();
    }
    let r0 = ((comps.n1 - comps.n2) / (comps.n1 + comps.n2)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cos).powi(5)
}
