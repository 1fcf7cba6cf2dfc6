//! Plausibility checks: four sides that form a roughly square quadrilateral
//! touching at most two non-opposite puzzle edges.

use std::f64::consts::{FRAC_PI_2, PI};

use super::Side;
use crate::config::PieceConfig;
use crate::error::PieceError;
use crate::geom::{compare_angles, distance_between_segments};

/// Run every check in order; the first failure is returned.
pub fn validate(piece_id: &str, sides: &[Side], config: &PieceConfig) -> Result<(), PieceError> {
    if sides.len() != 4 {
        return Err(PieceError::SideCount {
            piece_id: piece_id.to_string(),
            found: sides.len(),
        });
    }

    for (a, b) in [(0, 2), (1, 3)] {
        let actual_deg = parallel_error(&sides[a], &sides[b]).to_degrees();
        if actual_deg > config.parallel_tolerance_deg {
            return Err(PieceError::NotParallel {
                piece_id: piece_id.to_string(),
                a,
                b,
                actual_deg,
                limit_deg: config.parallel_tolerance_deg,
            });
        }
    }

    let orthogonal_deg = orthogonal_error(&sides[0], &sides[1]).to_degrees();
    if orthogonal_deg > config.side_orthogonal_tolerance_deg {
        return Err(PieceError::NotOrthogonal {
            piece_id: piece_id.to_string(),
            a: 0,
            b: 1,
            actual_deg: compare_angles(sides[0].angle(), sides[1].angle()).to_degrees(),
            tolerance_deg: config.side_orthogonal_tolerance_deg,
        });
    }

    for (a, b) in [(0, 2), (1, 3)] {
        let ratio = length_mismatch(&sides[a], &sides[b]);
        if ratio > config.length_ratio_tolerance {
            return Err(PieceError::LengthMismatch {
                piece_id: piece_id.to_string(),
                a,
                b,
                ratio,
                limit: config.length_ratio_tolerance,
            });
        }
    }

    let (d02, d13) = separations(sides);
    let limit = config.aspect_ratio_tolerance;
    if d02 > limit * d13 || d13 > limit * d02 {
        return Err(PieceError::NotSquare {
            piece_id: piece_id.to_string(),
            d02,
            d13,
            limit,
        });
    }

    let count = sides.iter().filter(|s| s.is_edge()).count();
    if count > config.max_edges {
        return Err(PieceError::TooManyEdges {
            piece_id: piece_id.to_string(),
            count,
            max: config.max_edges,
        });
    }
    for (a, b) in [(0, 2), (1, 3)] {
        if sides[a].is_edge() && sides[b].is_edge() {
            return Err(PieceError::ParallelEdges {
                piece_id: piece_id.to_string(),
                a,
                b,
            });
        }
    }

    Ok(())
}

/// Deviation from parallel, ignoring traversal direction, in `[0, π/2]`.
///
/// Opposite sides are walked in opposite directions, so their headings
/// differ by about π when they are parallel.
pub fn parallel_error(a: &Side, b: &Side) -> f64 {
    let d = compare_angles(a.angle(), b.angle());
    d.min(PI - d)
}

/// Deviation of the angle between two sides from 90°.
pub fn orthogonal_error(a: &Side, b: &Side) -> f64 {
    (compare_angles(a.angle(), b.angle()) - FRAC_PI_2).abs()
}

/// Length difference as a fraction of the mean length.
pub fn length_mismatch(a: &Side, b: &Side) -> f64 {
    let mean = (a.length() + b.length()) / 2.0;
    if mean <= 0.0 {
        return 0.0;
    }
    (a.length() - b.length()).abs() / mean
}

/// Distances between the chords of sides 0/2 and of sides 1/3.
pub fn separations(sides: &[Side]) -> (f64, f64) {
    (
        distance_between_segments(sides[0].segment(), sides[2].segment()),
        distance_between_segments(sides[1].segment(), sides[3].segment()),
    )
}
