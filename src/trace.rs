//! Boundary tracing: pixel grid → ordered closed loop of border pixels.
//!
//! 1. Border mask: foreground pixels with a background 4-neighbour
//! 2. 8-connected walk from the first border pixel in row-major order,
//!    sweeping neighbours clockwise from over the left shoulder

use std::f64::consts::TAU;

use kurbo::Point;

use crate::bitmap::PixelGrid;
use crate::error::PieceError;
use crate::geom::centroid;

/// Clockwise sweep as the image is viewed, starting straight up.
const NEIGHBORS: [(i32, i32); 8] = [
    (0, -1),  // above
    (1, -1),  // above right
    (1, 0),   // right
    (1, 1),   // below right
    (0, 1),   // below
    (-1, 1),  // below left
    (-1, 0),  // left
    (-1, -1), // above left
];

/// Foreground pixels that touch the background through a 4-neighbour.
#[derive(Debug, Clone)]
pub struct BorderMask {
    data: Vec<bool>,
    width: i32,
    height: i32,
}

impl BorderMask {
    /// Pixels outside the grid count as background, so foreground on the
    /// image frame is always border.
    pub fn from_grid(grid: &PixelGrid) -> Self {
        let width = grid.width() as i32;
        let height = grid.height() as i32;
        let mut data = vec![false; (width * height) as usize];
        for y in 0..height {
            for x in 0..width {
                if !grid.get(x, y) {
                    continue;
                }
                let touches_background = !grid.get(x, y - 1)
                    || !grid.get(x, y + 1)
                    || !grid.get(x - 1, y)
                    || !grid.get(x + 1, y);
                if touches_background {
                    data[(y * width + x) as usize] = true;
                }
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Out-of-bounds = false.
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return false;
        }
        self.data[(y * self.width + x) as usize]
    }

    /// Number of border pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// First border pixel in row-major scan order.
    pub fn first(&self) -> Option<(i32, i32)> {
        let i = self.data.iter().position(|&v| v)? as i32;
        Some((i % self.width, i / self.width))
    }

    fn on_frame(&self, x: i32, y: i32) -> bool {
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }
}

/// The traced outline of a piece.
#[derive(Debug, Clone)]
pub struct Boundary {
    /// Pixel-center vertices in walk order. The loop is closed: the vertex
    /// after the last one is the first, which is stored once.
    pub vertices: Vec<Point>,
    /// Mean of all vertices.
    pub centroid: Point,
}

/// Trace the outline of the single piece in `grid`.
pub fn trace(grid: &PixelGrid, piece_id: &str) -> Result<Boundary, PieceError> {
    let mask = BorderMask::from_grid(grid);
    let pixels = walk(&mask, piece_id)?;
    let vertices: Vec<Point> = pixels
        .iter()
        .map(|&(x, y)| Point::new(x as f64, y as f64))
        .collect();
    let centroid = centroid(&vertices);
    Ok(Boundary { vertices, centroid })
}

/// Wind around the border mask until the walk returns to its start.
///
/// At every step the previous heading picks where the clockwise sweep
/// starts: the neighbour "behind the left shoulder". The first border
/// neighbour found is the next vertex.
pub fn walk(mask: &BorderMask, piece_id: &str) -> Result<Vec<(i32, i32)>, PieceError> {
    let start = mask.first().ok_or_else(|| PieceError::NoBorder {
        piece_id: piece_id.to_string(),
    })?;

    // A simple outline visits each border pixel once; thin necks may be
    // crossed twice. Anything beyond this never closes.
    let max_steps = mask.count() * NEIGHBORS.len();

    let mut pixels = vec![start];
    let (mut cx, mut cy) = start;
    let mut heading = 0.0f64;

    loop {
        // Foreground on the frame means the silhouette is clipped and the
        // walk would follow the image edge instead of the piece.
        if mask.on_frame(cx, cy) {
            return Err(PieceError::Stuck {
                piece_id: piece_id.to_string(),
                x: cx,
                y: cy,
            });
        }

        let shift = (heading * NEIGHBORS.len() as f64 / TAU).round() as i32;
        let next = (shift..shift + NEIGHBORS.len() as i32)
            .map(|k| {
                let (dx, dy) = NEIGHBORS[k.rem_euclid(NEIGHBORS.len() as i32) as usize];
                (cx + dx, cy + dy)
            })
            .find(|&(nx, ny)| mask.get(nx, ny));

        let Some((nx, ny)) = next else {
            return Err(PieceError::Stuck {
                piece_id: piece_id.to_string(),
                x: cx,
                y: cy,
            });
        };

        heading = ((ny - cy) as f64).atan2((nx - cx) as f64);
        cx = nx;
        cy = ny;

        if (cx, cy) == start {
            break;
        }
        pixels.push((cx, cy));

        if pixels.len() > max_steps {
            return Err(PieceError::Unclosed {
                piece_id: piece_id.to_string(),
                steps: pixels.len(),
            });
        }
    }

    Ok(pixels)
}
