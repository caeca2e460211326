//! Pinhole camera for primary ray generation.

use std::sync::Arc;

use lumen_math::{transform, MathResult, Matrix, MatrixBackend, Ray, Tuple};

/// Maps pixel coordinates to world-space rays.
///
/// The camera looks down -z from the origin of its own space, with the
/// image plane at z = -1. Its transform is the world-to-camera (view)
/// matrix; the inverse is cached whenever the transform changes.
#[derive(Debug, Clone)]
pub struct Camera {
    hsize: usize,
    vsize: usize,
    transform: Matrix,
    inverse: Matrix,

    // Derived from size and field of view
    half_width: f64,
    half_height: f64,
    pixel_size: f64,

    backend: Arc<dyn MatrixBackend>,
}

impl Camera {
    /// Create a camera for a `hsize` x `vsize` image with a horizontal or
    /// vertical field of view (whichever is longer) of `field_of_view`
    /// radians. The transform starts as identity.
    pub fn new(
        hsize: usize,
        vsize: usize,
        field_of_view: f64,
        backend: Arc<dyn MatrixBackend>,
    ) -> Self {
        if hsize == 0 || vsize == 0 {
            log::warn!("camera created with an empty {}x{} image", hsize, vsize);
        }

        let half_view = (field_of_view / 2.0).tan();
        let aspect = hsize as f64 / vsize as f64;
        let (half_width, half_height) = if aspect >= 1.0 {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };

        Self {
            hsize,
            vsize,
            transform: transform::identity(),
            inverse: transform::identity(),
            half_width,
            half_height,
            pixel_size: half_width * 2.0 / hsize as f64,
            backend,
        }
    }

    /// Set the view transform, usually from [`transform::view_transform`].
    pub fn with_transform(mut self, transform: Matrix) -> MathResult<Self> {
        self.set_transform(transform)?;
        Ok(self)
    }

    /// Replace the view transform. Fails on a singular matrix and leaves
    /// the camera unchanged.
    pub fn set_transform(&mut self, transform: Matrix) -> MathResult<()> {
        self.inverse = self.backend.inverse(&transform)?;
        self.transform = transform;
        Ok(())
    }

    pub fn hsize(&self) -> usize {
        self.hsize
    }

    pub fn vsize(&self) -> usize {
        self.vsize
    }

    pub fn transform(&self) -> &Matrix {
        &self.transform
    }

    /// World-space width of one pixel on the image plane.
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// Ray from the eye through the center of pixel `(px, py)`.
    pub fn ray_for_pixel(&self, px: usize, py: usize) -> Ray {
        let xoffset = (px as f64 + 0.5) * self.pixel_size;
        let yoffset = (py as f64 + 0.5) * self.pixel_size;

        // The camera looks toward -z, so +x is to the left
        let world_x = self.half_width - xoffset;
        let world_y = self.half_height - yoffset;

        let pixel = self
            .backend
            .multiply_tuple(&self.inverse, Tuple::point(world_x, world_y, -1.0));
        let origin = self.backend.multiply_tuple(&self.inverse, Tuple::ORIGIN);
        Ray::new(origin, (pixel - origin).normalize())
    }
}
