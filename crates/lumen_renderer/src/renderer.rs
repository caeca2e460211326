//! Parallel tiled renderer.
//!
//! The image is split into tiles which a rayon pool renders independently.
//! Each tile returns its own pixel vector; nothing is written to the sink
//! until every tile has succeeded, so a failed render leaves it untouched.
//!
//! The world must not be mutated while a render is running. Both `render`
//! entry points borrow it immutably for their whole duration.

use std::time::Instant;

use lumen_math::Color;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    generate_tiles, Camera, Canvas, PixelSink, RenderResult, Tile, TileOrder, TileResult, World,
};

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Number of tiles; 1 or a perfect square
    pub tile_count: usize,
    /// Reflection/refraction recursion limit; 0 gives local shading only
    pub max_depth: u32,
    /// Worker threads; 0 uses one per core
    pub threads: usize,
    pub tile_order: TileOrder,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tile_count: 16,
            max_depth: 5,
            threads: 0,
            tile_order: TileOrder::RowMajor,
        }
    }
}

impl RenderConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> RenderResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Render `world` as seen by `camera` into a new canvas.
pub fn render(camera: &Camera, world: &World, config: &RenderConfig) -> RenderResult<Canvas> {
    let mut canvas = Canvas::new(camera.hsize(), camera.vsize());
    render_into(camera, world, config, &mut canvas)?;
    Ok(canvas)
}

/// Render into an existing pixel sink sized to the camera.
pub fn render_into<S>(
    camera: &Camera,
    world: &World,
    config: &RenderConfig,
    sink: &mut S,
) -> RenderResult<()>
where
    S: PixelSink + ?Sized,
{
    let start = Instant::now();
    log::info!(
        "Rendering {}x{} in {} tiles (max depth {})",
        camera.hsize(),
        camera.vsize(),
        config.tile_count,
        config.max_depth
    );

    render_tiles(camera.hsize(), camera.vsize(), config, sink, |x, y| {
        world.color_at(&camera.ray_for_pixel(x, y), config.max_depth)
    })?;

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(())
}

/// Shade every pixel of a `width x height` image in parallel tiles and
/// copy the results into `sink`.
///
/// The first pixel error aborts the render; `sink` is only written once
/// all tiles have finished.
fn render_tiles<S, F>(
    width: usize,
    height: usize,
    config: &RenderConfig,
    sink: &mut S,
    shade: F,
) -> RenderResult<()>
where
    S: PixelSink + ?Sized,
    F: Fn(usize, usize) -> RenderResult<Color> + Sync,
{
    let tiles = generate_tiles(width, height, config.tile_count, config.tile_order)?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    let results: Vec<TileResult> = pool.install(|| {
        tiles
            .par_iter()
            .map(|tile| render_tile(tile, &shade))
            .collect::<RenderResult<Vec<_>>>()
    })?;

    for result in &results {
        for ((x, y), color) in result.tile.pixels().zip(&result.pixels) {
            sink.write(x, y, *color);
        }
    }
    Ok(())
}

fn render_tile<F>(tile: &Tile, shade: &F) -> RenderResult<TileResult>
where
    F: Fn(usize, usize) -> RenderResult<Color>,
{
    let pixels = tile
        .pixels()
        .map(|(x, y)| shade(x, y))
        .collect::<RenderResult<Vec<_>>>()?;
    log::debug!(
        "Tile {} ({}x{} at {},{}) done",
        tile.index,
        tile.width,
        tile.height,
        tile.x,
        tile.y
    );
    Ok(TileResult::new(*tile, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::tests::default_world;
    use crate::RenderError;
    use lumen_core::SceneError;
    use lumen_math::{color, transform, ApproxEq, NaiveBackend, Tuple, BLACK};
    use std::f64::consts::PI;
    use std::sync::Arc;

    fn camera(hsize: usize, vsize: usize) -> Camera {
        let backend = Arc::new(NaiveBackend);
        let view = transform::view_transform(
            backend.as_ref(),
            Tuple::point(0.0, 0.0, -5.0),
            Tuple::point(0.0, 0.0, 0.0),
            Tuple::vector(0.0, 1.0, 0.0),
        )
        .unwrap();
        Camera::new(hsize, vsize, PI / 2.0, backend)
            .with_transform(view)
            .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.tile_count, 16);
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.threads, 0);
        assert_eq!(config.tile_order, TileOrder::RowMajor);
    }

    #[test]
    fn test_config_from_json_fills_defaults() {
        let config = RenderConfig::from_json(r#"{ "tile_count": 4, "tile_order": "spiral" }"#).unwrap();
        assert_eq!(config.tile_count, 4);
        assert_eq!(config.tile_order, TileOrder::Spiral);
        assert_eq!(config.max_depth, 5);
    }

    #[test]
    fn test_config_from_bad_json() {
        let err = RenderConfig::from_json(r#"{ "tile_order": "diagonal" }"#).unwrap_err();
        assert!(matches!(err, RenderError::Config(_)));
    }

    #[test]
    fn test_render_default_world() {
        let (world, _, _) = default_world();
        let config = RenderConfig {
            tile_count: 1,
            ..Default::default()
        };
        let image = render(&camera(11, 11), &world, &config).unwrap();
        assert!(image
            .read(5, 5)
            .approx_eq(&color(0.38066, 0.47583, 0.2855), 1e-4));
    }

    #[test]
    fn test_render_is_deterministic_across_schedules() {
        let (world, _, _) = default_world();
        let cam = camera(24, 12);
        let base = RenderConfig {
            tile_count: 4,
            ..Default::default()
        };
        let first = render(&cam, &world, &base).unwrap();
        let again = render(&cam, &world, &base).unwrap();
        assert_eq!(first, again);

        let spiral = RenderConfig {
            tile_count: 9,
            threads: 2,
            tile_order: TileOrder::Spiral,
            ..base.clone()
        };
        assert_eq!(render(&cam, &world, &spiral).unwrap(), first);

        let single = RenderConfig {
            tile_count: 1,
            threads: 1,
            ..base
        };
        assert_eq!(render(&cam, &world, &single).unwrap(), first);
    }

    #[test]
    fn test_default_config_renders_tiny_image() {
        let (world, _, _) = default_world();
        let image = render(&camera(3, 3), &world, &RenderConfig::default()).unwrap();
        assert_eq!(image.pixels().len(), 9);
        assert!(image
            .read(1, 1)
            .approx_eq(&color(0.38066, 0.47583, 0.2855), 1e-4));
    }

    #[test]
    fn test_invalid_tile_count_fails_before_rendering() {
        let (world, _, _) = default_world();
        let config = RenderConfig {
            tile_count: 3,
            ..Default::default()
        };
        let err = render(&camera(10, 10), &world, &config).unwrap_err();
        assert!(matches!(err, RenderError::InvalidTileCount(3)));
    }

    #[test]
    fn test_pixel_error_aborts_whole_render() {
        let config = RenderConfig {
            tile_count: 4,
            ..Default::default()
        };
        let mut canvas = Canvas::new(8, 8);
        let result = render_tiles(8, 8, &config, &mut canvas, |x, y| {
            if (x, y) == (6, 6) {
                Err(SceneError::NoLocalGeometry(lumen_core::ShapeId::new(0)).into())
            } else {
                Ok(color(1.0, 1.0, 1.0))
            }
        });
        assert!(matches!(result, Err(RenderError::Scene(_))));
        assert!(canvas.pixels().iter().all(|&c| c == BLACK));
    }

    #[test]
    fn test_render_tiles_writes_each_pixel() {
        let config = RenderConfig {
            tile_count: 4,
            ..Default::default()
        };
        let mut canvas = Canvas::new(5, 3);
        render_tiles(5, 3, &config, &mut canvas, |x, y| {
            Ok(color(x as f64, y as f64, 0.0))
        })
        .unwrap();
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(canvas.read(x, y), color(x as f64, y as f64, 0.0));
            }
        }
    }
}
