//! piecetrace: puzzle-piece silhouette → four corners and four sides.
//!
//! Traces the outline of a single binary piece, finds its four corners,
//! splits the outline into four simplified sides and checks that they form
//! a plausible, roughly square piece.
//!
//! # Example
//!
//! ```no_run
//! use piecetrace::{process_file, PieceConfig};
//! use std::path::Path;
//!
//! let config = PieceConfig::default();
//! let piece = process_file(Path::new("piece_07.png"), "piece_07", &config)?;
//! for side in piece.sides() {
//!     println!("{} {:.1} edge={}", side.index(), side.length(), side.is_edge());
//! }
//! # Ok::<(), piecetrace::PieceError>(())
//! ```

#![forbid(unsafe_code)]

pub mod bitmap;
pub mod compare;
mod config;
pub mod corners;
pub mod cyclic;
pub mod error;
pub mod geom;
mod piece;
pub mod sides;
pub mod trace;

// Re-export kurbo so downstream users get the same Point/Line types.
pub use kurbo;

pub use bitmap::{load_and_threshold, PixelGrid};
pub use compare::{best_alignment, compare, rank_matches, Alignment, SideFit};
pub use config::{PieceConfig, ThresholdMethod};
pub use corners::Corner;
pub use error::PieceError;
pub use piece::Piece;
pub use sides::Side;

use std::path::Path;
use std::time::Instant;

/// Full pipeline: silhouette → validated piece.
///
/// Any failure is fatal for this piece; the error names `id` and the
/// measured value that broke the limit.
pub fn process(id: &str, grid: PixelGrid, config: &PieceConfig) -> Result<Piece, PieceError> {
    let t_start = Instant::now();

    // ── Trace ─────────────────────────────────────────────
    let boundary = trace::trace(&grid, id)?;
    log::info!(
        "{}: trace {}x{} px -> {} border vertices, centroid ({:.1}, {:.1})",
        id,
        grid.width(),
        grid.height(),
        boundary.vertices.len(),
        boundary.centroid.x,
        boundary.centroid.y,
    );

    // ── Corners ───────────────────────────────────────────
    let corners = corners::find_four_corners(&boundary, config, id)?;
    log::info!(
        "{}: corners {}",
        id,
        corners
            .iter()
            .map(|c| format!("({}, {})", c.vertex.x, c.vertex.y))
            .collect::<Vec<_>>()
            .join(" ")
    );

    // ── Sides ─────────────────────────────────────────────
    let sides = sides::extract_sides(id, &boundary.vertices, boundary.centroid, &corners, config);
    for side in &sides {
        log::debug!(
            "{}: side {} {} vertices, length {:.1}, angle {:.1}°{}",
            id,
            side.index(),
            side.vertices().len(),
            side.length(),
            side.angle().to_degrees(),
            if side.is_edge() { ", edge" } else { "" },
        );
    }

    // ── Validate ──────────────────────────────────────────
    sides::validate(id, &sides, config)?;
    let found = sides.len();
    let sides: [Side; 4] = sides.try_into().map_err(|_| PieceError::SideCount {
        piece_id: id.to_string(),
        found,
    })?;

    let piece = Piece::new(id.to_string(), grid, boundary, corners, sides);
    log::info!(
        "{}: accepted, {} edge side(s)  ({}ms)",
        id,
        piece.edge_count(),
        t_start.elapsed().as_millis()
    );
    Ok(piece)
}

/// Convenience: load, binarize and process an image file.
pub fn process_file(path: &Path, id: &str, config: &PieceConfig) -> Result<Piece, PieceError> {
    let grid = load_and_threshold(path, config)?;
    process(id, grid, config)
}
