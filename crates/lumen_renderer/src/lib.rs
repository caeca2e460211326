//! Lumen renderer - Whitted-style ray tracing on the CPU.
//!
//! Combines a [`World`] (one point light plus a scene of shapes) with a
//! [`Camera`] and renders the image in parallel tiles on a rayon pool.

mod camera;
mod canvas;
mod error;
mod renderer;
mod tile;
mod world;

pub use camera::Camera;
pub use canvas::{Canvas, PixelSink};
pub use error::{RenderError, RenderResult};
pub use renderer::{render, render_into, RenderConfig};
pub use tile::{generate_tiles, Tile, TileOrder, TileResult};
pub use world::{schlick, Precalc, World};

/// Re-export the types needed to build a scene
pub use lumen_core::{Material, Pattern, PointLight, Shape, ShapeId};
pub use lumen_math::{color, transform, Color, GlamBackend, MatrixBackend, NaiveBackend, Tuple};
