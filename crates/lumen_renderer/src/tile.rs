//! Tile partitioning for parallel rendering.
//!
//! The image is cut into an `n x n` grid of rectangles (tiles). Tiles never
//! overlap and together cover every pixel exactly once, so each one can be
//! rendered on its own worker and copied into the canvas afterwards.

use lumen_math::Color;
use serde::{Deserialize, Serialize};

use crate::{RenderError, RenderResult};

/// A rectangular region of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// X coordinate of the tile's top-left corner
    pub x: usize,
    /// Y coordinate of the tile's top-left corner
    pub y: usize,
    pub width: usize,
    pub height: usize,
    /// Position of this tile in the scheduling order
    pub index: usize,
}

impl Tile {
    pub fn new(x: usize, y: usize, width: usize, height: usize, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Pixel coordinates covered by this tile, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.y..self.y + self.height)
            .flat_map(move |y| (self.x..self.x + self.width).map(move |x| (x, y)))
    }
}

/// Order in which tiles are handed to the worker pool.
///
/// Only scheduling changes; the finished image is identical either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileOrder {
    /// Left to right, top to bottom
    #[default]
    RowMajor,
    /// Nearest the image center first
    Spiral,
}

/// Split a `width x height` image into `tile_count` tiles.
///
/// `tile_count` must be a perfect square (1, 4, 9, ...). Each tile is
/// `width / n` by `height / n`; the last column and row absorb the
/// remainder. When the grid is finer than the image the leading tiles are
/// empty and the last row and column cover it. An empty image yields no
/// tiles.
pub fn generate_tiles(
    width: usize,
    height: usize,
    tile_count: usize,
    order: TileOrder,
) -> RenderResult<Vec<Tile>> {
    let grid = grid_size(tile_count)?;
    if width == 0 || height == 0 {
        return Ok(Vec::new());
    }
    let base_w = width / grid;
    let base_h = height / grid;
    let mut tiles = Vec::with_capacity(tile_count);
    for row in 0..grid {
        for col in 0..grid {
            let x = col * base_w;
            let y = row * base_h;
            let w = if col == grid - 1 { width - x } else { base_w };
            let h = if row == grid - 1 { height - y } else { base_h };
            tiles.push(Tile::new(x, y, w, h, tiles.len()));
        }
    }

    if order == TileOrder::Spiral {
        sort_spiral(&mut tiles, width, height);
        for (i, tile) in tiles.iter_mut().enumerate() {
            tile.index = i;
        }
    }

    Ok(tiles)
}

/// Side length of the tile grid, or an error if `tile_count` is not a
/// positive perfect square.
fn grid_size(tile_count: usize) -> RenderResult<usize> {
    let n = (tile_count as f64).sqrt().round() as usize;
    if tile_count == 0 || n.checked_mul(n) != Some(tile_count) {
        return Err(RenderError::InvalidTileCount(tile_count));
    }
    Ok(n)
}

/// Sort tiles by distance from the image center.
fn sort_spiral(tiles: &mut [Tile], width: usize, height: usize) {
    let center_x = width as f64 / 2.0;
    let center_y = height as f64 / 2.0;
    let dist = |t: &Tile| {
        let cx = t.x as f64 + t.width as f64 / 2.0;
        let cy = t.y as f64 + t.height as f64 / 2.0;
        (cx - center_x).powi(2) + (cy - center_y).powi(2)
    };
    tiles.sort_by(|a, b| dist(a).total_cmp(&dist(b)));
}

/// Result of rendering a tile.
#[derive(Debug, Clone)]
pub struct TileResult {
    pub tile: Tile,
    /// Pixel colors in row-major order within the tile
    pub pixels: Vec<Color>,
}

impl TileResult {
    pub fn new(tile: Tile, pixels: Vec<Color>) -> Self {
        Self { tile, pixels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coverage(tiles: &[Tile], width: usize, height: usize) -> Vec<u32> {
        let mut hits = vec![0; width * height];
        for tile in tiles {
            for (x, y) in tile.pixels() {
                hits[y * width + x] += 1;
            }
        }
        hits
    }

    #[test]
    fn test_four_tiles_on_100x50() {
        let tiles = generate_tiles(100, 50, 4, TileOrder::RowMajor).unwrap();
        let spans: Vec<_> = tiles
            .iter()
            .map(|t| (t.x, t.x + t.width - 1, t.y, t.y + t.height - 1))
            .collect();
        assert_eq!(
            spans,
            vec![(0, 49, 0, 24), (50, 99, 0, 24), (0, 49, 25, 49), (50, 99, 25, 49)]
        );
        assert!(coverage(&tiles, 100, 50).iter().all(|&n| n == 1));
    }

    #[test]
    fn test_remainder_goes_to_last_row_and_column() {
        let tiles = generate_tiles(10, 7, 9, TileOrder::RowMajor).unwrap();
        assert_eq!(tiles.len(), 9);
        assert_eq!(tiles[0].width, 3);
        assert_eq!(tiles[2].width, 4);
        assert_eq!(tiles[0].height, 2);
        assert_eq!(tiles[8].height, 3);

        let total: usize = tiles.iter().map(Tile::pixel_count).sum();
        assert_eq!(total, 70);
        assert!(coverage(&tiles, 10, 7).iter().all(|&n| n == 1));
    }

    #[test]
    fn test_single_tile_covers_image() {
        let tiles = generate_tiles(11, 11, 1, TileOrder::RowMajor).unwrap();
        assert_eq!(tiles, vec![Tile::new(0, 0, 11, 11, 0)]);
    }

    #[test]
    fn test_tile_count_must_be_perfect_square() {
        for count in [0, 2, 3, 5, 8, 15] {
            let err = generate_tiles(100, 100, count, TileOrder::RowMajor).unwrap_err();
            assert!(matches!(err, RenderError::InvalidTileCount(n) if n == count));
        }
    }

    #[test]
    fn test_huge_tile_count_is_rejected() {
        let err = generate_tiles(10, 10, usize::MAX, TileOrder::RowMajor).unwrap_err();
        assert!(matches!(err, RenderError::InvalidTileCount(usize::MAX)));
    }

    #[test]
    fn test_grid_finer_than_image() {
        let tiles = generate_tiles(3, 2, 16, TileOrder::RowMajor).unwrap();
        assert_eq!(tiles.len(), 16);
        assert_eq!(tiles[15], Tile::new(0, 0, 3, 2, 15));
        assert!(tiles[..15].iter().all(|t| t.pixel_count() == 0));
        assert!(coverage(&tiles, 3, 2).iter().all(|&n| n == 1));

        let spiral = generate_tiles(3, 2, 16, TileOrder::Spiral).unwrap();
        assert!(coverage(&spiral, 3, 2).iter().all(|&n| n == 1));
    }

    #[test]
    fn test_spiral_order_starts_at_center() {
        let tiles = generate_tiles(192, 192, 9, TileOrder::Spiral).unwrap();
        assert_eq!((tiles[0].x, tiles[0].y), (64, 64));
        assert!(tiles.iter().enumerate().all(|(i, t)| t.index == i));
        assert!(coverage(&tiles, 192, 192).iter().all(|&n| n == 1));
    }
}
