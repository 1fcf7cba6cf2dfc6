use std::f64::consts::FRAC_PI_2;

use kurbo::{Point, Vec2};

use crate::config::PieceConfig;
use crate::cyclic::Cyclic;
use crate::geom::{angle_between, colinearity, compare_angles, counterclockwise_angle_between_vectors, midpoint};

// Score weights. Lower score = better corner.
const ANGLE_WEIGHT: f64 = 0.8;
const OFFSET_WEIGHT: f64 = 0.6;
const DISPERSION_WEIGHT: f64 = 0.9;
const POINTED_AWAY_PENALTY: f64 = 0.5;

/// How a vertex looks as a corner: the two spokes fitted on either side
/// of it and how the wedge between them sits relative to the centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerMetrics {
    /// Interior angle between the trailing and leading spoke (radians).
    pub angle: f64,
    /// Angle between the wedge bisector and the direction to the centroid.
    pub offset_from_center: f64,
    /// Whether the wedge opens toward the centroid.
    pub pointed_toward_center: bool,
    /// Mean dispersion of the two spoke fits.
    pub dispersion: f64,
    /// Heading of the wedge bisector, in `[0, 2π)`.
    pub midangle: f64,
}

impl CornerMetrics {
    /// Mix of how far the wedge is from 90°, how far it opens away from
    /// the centroid and how bent the spokes are.
    ///
    /// Wedges sharper than 90° are allowed to score below zero.
    pub fn score(&self) -> f64 {
        let angle_error = self.angle - FRAC_PI_2;
        let pointed_away_penalty = if self.pointed_toward_center {
            0.0
        } else {
            POINTED_AWAY_PENALTY
        };
        ANGLE_WEIGHT * angle_error
            + OFFSET_WEIGHT * self.offset_from_center
            + DISPERSION_WEIGHT * self.dispersion
            + pointed_away_penalty
    }
}

/// A corner hypothesis at one boundary vertex.
///
/// Equality is by vertex position only, which is the dedup key across
/// generators.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub vertex: Point,
    /// Position in the boundary loop.
    pub index: usize,
    pub centroid: Point,
    /// `None` until the vertex has been measured.
    pub metrics: Option<CornerMetrics>,
}

impl Candidate {
    /// A bare hypothesis; refinement measures it later.
    pub fn unmeasured(vertex: Point, index: usize, centroid: Point) -> Self {
        Self {
            vertex,
            index,
            centroid,
            metrics: None,
        }
    }

    /// Measure the vertex at `index` (wrapped) of the boundary loop.
    pub fn measured(vertices: &[Point], index: isize, centroid: Point, config: &PieceConfig) -> Self {
        let ring = Cyclic::new(vertices);
        let index = ring.wrap(index);
        Self {
            vertex: vertices[index],
            index,
            centroid,
            metrics: Some(measure(vertices, index, centroid, config)),
        }
    }

    /// Unmeasured candidates rank last.
    pub fn score(&self) -> f64 {
        self.metrics.map_or(f64::INFINITY, |m| m.score())
    }

    pub fn midangle(&self) -> f64 {
        self.metrics.map_or(0.0, |m| m.midangle)
    }

    /// Hashable form of the vertex.
    pub fn key(&self) -> (i64, i64) {
        (self.vertex.x.round() as i64, self.vertex.y.round() as i64)
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.vertex == other.vertex
    }
}

/// Fit both spokes at `index` and describe the wedge between them.
///
/// Spokes skip `spoke_offset` immediate neighbours and fit the next
/// `spoke_length` points on each side. Synthetic points are projected
/// `spoke_extent` out along each spoke to measure the wedge.
pub fn measure(vertices: &[Point], index: usize, centroid: Point, config: &PieceConfig) -> CornerMetrics {
    let ring = Cyclic::new(vertices);
    let i = index as isize;
    let offset = config.spoke_offset as isize;
    let length = config.spoke_length as isize;
    let v = vertices[index];

    let trailing = colinearity(v, &ring.slice(i - length - offset, i - offset - 1));
    let leading = colinearity(v, &ring.slice(i + offset + 1, i + length + offset));

    let p_h = v + Vec2::from_angle(trailing.angle) * config.spoke_extent;
    let p_j = v + Vec2::from_angle(leading.angle) * config.spoke_extent;

    let angle = counterclockwise_angle_between_vectors(p_h, v, p_j);
    let to_center = angle_between(v, centroid);
    let midangle = angle_between(v, midpoint(p_h, p_j));
    let offset_from_center = compare_angles(midangle, to_center);

    CornerMetrics {
        angle,
        offset_from_center,
        pointed_toward_center: offset_from_center < angle / 2.0,
        dispersion: (trailing.dispersion + leading.dispersion) / 2.0,
        midangle,
    }
}
