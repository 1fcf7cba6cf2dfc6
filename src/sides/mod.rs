//! The four sides of a piece: extraction from the boundary and the
//! plausibility checks a piece must pass.

pub mod extract;
pub mod validate;

use kurbo::{Line, Point};

use crate::geom::{angle_between, polyline_length};

pub use extract::{extract_sides, merge_close_points};
pub use validate::validate;

/// One boundary run between two consecutive corners.
///
/// Immutable once built; the derived direction, length and chord are
/// computed up front.
#[derive(Debug, Clone, PartialEq)]
pub struct Side {
    piece_id: String,
    index: usize,
    vertices: Vec<Point>,
    piece_center: Point,
    is_edge: bool,
    angle: f64,
    length: f64,
    segment: Line,
}

impl Side {
    /// `vertices` run corner to corner and should hold at least two points.
    pub fn new(
        piece_id: impl Into<String>,
        index: usize,
        vertices: Vec<Point>,
        piece_center: Point,
        is_edge: bool,
    ) -> Self {
        let first = vertices.first().copied().unwrap_or(piece_center);
        let last = vertices.last().copied().unwrap_or(first);
        Self {
            piece_id: piece_id.into(),
            index,
            angle: angle_between(first, last),
            length: polyline_length(&vertices),
            segment: Line::new(first, last),
            vertices,
            piece_center,
            is_edge,
        }
    }

    pub fn piece_id(&self) -> &str {
        &self.piece_id
    }

    /// Slot 0-3 in winding order.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn piece_center(&self) -> Point {
        self.piece_center
    }

    /// True when the side is a straight outer edge of the puzzle.
    pub fn is_edge(&self) -> bool {
        self.is_edge
    }

    /// Heading from the first to the last vertex, in `[0, 2π)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Polyline length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Corner-to-corner chord.
    pub fn segment(&self) -> Line {
        self.segment
    }
}
