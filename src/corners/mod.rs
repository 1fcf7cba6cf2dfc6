//! Corner detection: boundary loop → four corners in winding order.
//!
//! Two independent heuristics propose hypotheses (distance maxima from the
//! centroid, and vertices where two straight spokes meet), refinement
//! nudges each to its best nearby vertex, and selection pairs them into
//! two diagonals.

pub mod candidate;
pub mod maxima;
pub mod select;
pub mod spokes;

use kurbo::Point;

use crate::config::PieceConfig;
use crate::error::PieceError;
use crate::trace::Boundary;

pub use candidate::{Candidate, CornerMetrics};

/// A selected corner: its position and where it sits in the boundary loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner {
    pub vertex: Point,
    pub index: usize,
}

impl From<Candidate> for Corner {
    fn from(c: Candidate) -> Self {
        Self {
            vertex: c.vertex,
            index: c.index,
        }
    }
}

/// Find the four corners of a traced piece.
pub fn find_four_corners(
    boundary: &Boundary,
    config: &PieceConfig,
    piece_id: &str,
) -> Result<[Corner; 4], PieceError> {
    let vertices = &boundary.vertices;
    let centroid = boundary.centroid;

    let mut candidates = maxima::find_candidates(vertices, centroid, config.maxima_window);
    let n_maxima = candidates.len();
    candidates.extend(spokes::find_candidates(vertices, centroid, config));
    let n_spokes = candidates.len() - n_maxima;

    let refined = select::refine(&candidates, vertices, centroid, config);
    log::debug!(
        "{}: {} maxima + {} spoke candidates -> {} refined",
        piece_id,
        n_maxima,
        n_spokes,
        refined.len()
    );

    let selected = select::select(&refined, centroid, config, piece_id)?;
    for c in &selected {
        log::debug!(
            "{}: corner #{} ({}, {}) score {:.3}",
            piece_id,
            c.index,
            c.vertex.x,
            c.vertex.y,
            c.score()
        );
    }
    Ok(selected.map(Corner::from))
}
