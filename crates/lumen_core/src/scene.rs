//! Scene graph arena.
//!
//! Shapes live in a flat `Vec` and refer to each other through [`ShapeId`]
//! handles. Groups own their children's handles; every child keeps a
//! non-owning handle to its parent, which coordinate conversion walks up.
//!
//! The scene is read-only while a render is in flight. All mutation goes
//! through `&mut self`, so holding a shared borrow for the duration of a
//! render is enough to uphold that.

use std::fmt;
use std::sync::Arc;

use lumen_math::{BoundingBox, Color, Matrix, MatrixBackend, Ray, Tuple};

use crate::{
    sort_intersections, Intersection, Material, SceneError, SceneResult, Shape,
};

/// Handle to a shape stored in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(usize);

impl ShapeId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A shape plus everything cached for it at insertion time.
#[derive(Debug, Clone)]
struct Node {
    shape: Shape,
    inverse: Matrix,
    /// Inverse-transpose of the upper-left 3x3 of the transform
    normal_matrix: Matrix,
    pattern_inverse: Option<Matrix>,
    parent: Option<ShapeId>,
    children: Vec<ShapeId>,
    /// Bounds in the shape's own space
    bounds: BoundingBox,
}

/// All shapes of a world, arranged as a forest of groups and leaves.
#[derive(Debug, Clone)]
pub struct Scene {
    nodes: Vec<Node>,
    roots: Vec<ShapeId>,
    backend: Arc<dyn MatrixBackend>,
}

impl Scene {
    /// Create an empty scene whose cached matrices come from `backend`.
    pub fn new(backend: Arc<dyn MatrixBackend>) -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            backend,
        }
    }

    pub fn backend(&self) -> &Arc<dyn MatrixBackend> {
        &self.backend
    }

    /// Total number of shapes, groups and nested children included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level shapes in insertion order.
    pub fn roots(&self) -> &[ShapeId] {
        &self.roots
    }

    /// Add a top-level shape.
    ///
    /// Fails if the shape's transform or its pattern's transform is singular.
    pub fn add_object(&mut self, shape: Shape) -> SceneResult<ShapeId> {
        let id = self.insert(shape, None)?;
        self.roots.push(id);
        Ok(id)
    }

    /// Add several top-level shapes, returning their handles in order.
    pub fn add_objects<I>(&mut self, shapes: I) -> SceneResult<Vec<ShapeId>>
    where
        I: IntoIterator<Item = Shape>,
    {
        shapes.into_iter().map(|s| self.add_object(s)).collect()
    }

    /// Attach `shape` as a child of `group` and grow the bounds of `group`
    /// and every group above it.
    pub fn add_child(&mut self, group: ShapeId, shape: Shape) -> SceneResult<ShapeId> {
        if !self.node(group)?.shape.geometry.is_group() {
            return Err(SceneError::NotAGroup(group));
        }
        let id = self.insert(shape, Some(group))?;
        self.nodes[group.0].children.push(id);
        self.refresh_bounds(Some(group));
        Ok(id)
    }

    /// Replace the local transform of `id`.
    ///
    /// The cached inverse and normal matrix are recomputed and every
    /// ancestor group's bounds are refreshed. Nothing changes on failure.
    pub fn set_transform(&mut self, id: ShapeId, transform: Matrix) -> SceneResult<()> {
        self.node(id)?;
        let (inverse, normal_matrix) = self.transform_caches(&transform)?;
        let node = &mut self.nodes[id.0];
        node.shape.transform = transform;
        node.inverse = inverse;
        node.normal_matrix = normal_matrix;
        let parent = node.parent;
        self.refresh_bounds(parent);
        Ok(())
    }

    /// Replace the material of `id`.
    pub fn set_material(&mut self, id: ShapeId, material: Material) -> SceneResult<()> {
        self.node(id)?;
        let pattern_inverse = self.pattern_inverse(&material)?;
        let node = &mut self.nodes[id.0];
        node.shape.material = material;
        node.pattern_inverse = pattern_inverse;
        Ok(())
    }

    pub fn shape(&self, id: ShapeId) -> SceneResult<&Shape> {
        Ok(&self.node(id)?.shape)
    }

    pub fn material(&self, id: ShapeId) -> SceneResult<&Material> {
        Ok(&self.node(id)?.shape.material)
    }

    pub fn parent(&self, id: ShapeId) -> SceneResult<Option<ShapeId>> {
        Ok(self.node(id)?.parent)
    }

    pub fn children(&self, id: ShapeId) -> SceneResult<&[ShapeId]> {
        Ok(&self.node(id)?.children)
    }

    /// Bounds of `id` in its own object space.
    pub fn bounds(&self, id: ShapeId) -> SceneResult<BoundingBox> {
        Ok(self.node(id)?.bounds)
    }

    /// Intersect `ray` with every top-level shape, sorted by distance.
    pub fn intersect(&self, ray: &Ray) -> Vec<Intersection> {
        let mut xs = Vec::new();
        for &root in &self.roots {
            self.collect_intersections(root, ray, &mut xs);
        }
        sort_intersections(&mut xs);
        xs
    }

    /// Intersect `ray`, given in the space of the parent of `id`, with `id`
    /// and, for a group, everything below it.
    pub fn intersect_shape(&self, id: ShapeId, ray: &Ray) -> SceneResult<Vec<Intersection>> {
        self.node(id)?;
        let mut xs = Vec::new();
        self.collect_intersections(id, ray, &mut xs);
        sort_intersections(&mut xs);
        Ok(xs)
    }

    fn collect_intersections(&self, id: ShapeId, ray: &Ray, xs: &mut Vec<Intersection>) {
        let node = &self.nodes[id.0];
        let local_ray = ray.transform(&node.inverse, self.backend.as_ref());
        if node.shape.geometry.is_group() {
            if !node.bounds.intersects(&local_ray) {
                return;
            }
            for &child in &node.children {
                self.collect_intersections(child, &local_ray, xs);
            }
        } else {
            xs.extend(
                node.shape
                    .geometry
                    .local_intersect(&local_ray)
                    .into_iter()
                    .map(|t| Intersection::new(t, id)),
            );
        }
    }

    /// Convert a world-space point into the object space of `id`, applying
    /// each ancestor's inverse from the root down.
    pub fn world_to_object(&self, id: ShapeId, point: Tuple) -> SceneResult<Tuple> {
        let lineage = self.lineage(id)?;
        Ok(lineage.iter().rev().fold(point, |p, ancestor| {
            self.backend
                .multiply_tuple(&self.nodes[ancestor.0].inverse, p)
        }))
    }

    /// Convert an object-space normal of `id` into world space, applying
    /// each normal matrix from `id` up to the root.
    pub fn normal_to_world(&self, id: ShapeId, normal: Tuple) -> SceneResult<Tuple> {
        let lineage = self.lineage(id)?;
        Ok(lineage.iter().fold(normal, |n, ancestor| {
            let n = self
                .backend
                .multiply_tuple(&self.nodes[ancestor.0].normal_matrix, n);
            Tuple::vector(n.x, n.y, n.z).normalize()
        }))
    }

    /// World-space unit normal of `id` at `world_point`.
    pub fn normal_at(&self, id: ShapeId, world_point: Tuple) -> SceneResult<Tuple> {
        let geometry = self.node(id)?.shape.geometry;
        let local_point = self.world_to_object(id, world_point)?;
        let local_normal = geometry
            .local_normal_at(local_point)
            .ok_or(SceneError::NoLocalGeometry(id))?;
        self.normal_to_world(id, local_normal)
    }

    /// The unlit surface color of `id` at `world_point`: the pattern color
    /// when the material has one, otherwise the material color.
    pub fn surface_color(&self, id: ShapeId, world_point: Tuple) -> SceneResult<Color> {
        let node = self.node(id)?;
        let material = &node.shape.material;
        match (&material.pattern, &node.pattern_inverse) {
            (Some(pattern), Some(pattern_inverse)) => {
                let object_point = self.world_to_object(id, world_point)?;
                let pattern_point = self.backend.multiply_tuple(pattern_inverse, object_point);
                Ok(pattern.color_at(pattern_point))
            }
            _ => Ok(material.color),
        }
    }

    fn node(&self, id: ShapeId) -> SceneResult<&Node> {
        self.nodes.get(id.0).ok_or(SceneError::UnknownShape(id))
    }

    /// `id` followed by its ancestors up to the root.
    fn lineage(&self, id: ShapeId) -> SceneResult<Vec<ShapeId>> {
        let mut lineage = vec![id];
        let mut current = self.node(id)?.parent;
        while let Some(parent) = current {
            lineage.push(parent);
            current = self.nodes[parent.0].parent;
        }
        Ok(lineage)
    }

    fn insert(&mut self, shape: Shape, parent: Option<ShapeId>) -> SceneResult<ShapeId> {
        let (inverse, normal_matrix) = self.transform_caches(&shape.transform)?;
        let pattern_inverse = self.pattern_inverse(&shape.material)?;
        let id = ShapeId(self.nodes.len());
        let bounds = shape.geometry.bounds();
        self.nodes.push(Node {
            shape,
            inverse,
            normal_matrix,
            pattern_inverse,
            parent,
            children: Vec::new(),
            bounds,
        });
        Ok(id)
    }

    fn transform_caches(&self, transform: &Matrix) -> SceneResult<(Matrix, Matrix)> {
        let inverse = self.backend.inverse(transform)?;
        let linear = self.backend.submatrix(transform, 3, 3);
        let normal_matrix = self.backend.transpose(&self.backend.inverse(&linear)?);
        Ok((inverse, normal_matrix))
    }

    fn pattern_inverse(&self, material: &Material) -> SceneResult<Option<Matrix>> {
        material
            .pattern
            .as_ref()
            .map(|p| self.backend.inverse(&p.transform))
            .transpose()
            .map_err(SceneError::from)
    }

    /// Recompute group bounds from `start` up to the root.
    fn refresh_bounds(&mut self, start: Option<ShapeId>) {
        let mut current = start;
        while let Some(id) = current {
            let bounds = self.nodes[id.0]
                .children
                .iter()
                .map(|&c| {
                    let child = &self.nodes[c.0];
                    child.bounds.transform(&child.shape.transform)
                })
                .fold(BoundingBox::EMPTY, |acc, b| BoundingBox::surrounding(&acc, &b));
            log::debug!("group {} bounds now {:?} .. {:?}", id, bounds.min, bounds.max);
            self.nodes[id.0].bounds = bounds;
            current = self.nodes[id.0].parent;
        }
    }
}
