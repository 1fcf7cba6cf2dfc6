//! Corner hypotheses where two straight spokes meet at roughly 90°.

use std::f64::consts::FRAC_PI_2;

use kurbo::Point;

use super::candidate::{measure, Candidate};
use crate::config::PieceConfig;

/// Vertices whose spokes are straight, roughly orthogonal, and whose
/// wedge opens toward the centroid.
pub fn find_candidates(vertices: &[Point], centroid: Point, config: &PieceConfig) -> Vec<Candidate> {
    let tolerance = config.spoke_orthogonal_tolerance_deg.to_radians();

    (0..vertices.len())
        .filter_map(|i| {
            let metrics = measure(vertices, i, centroid, config);
            if metrics.dispersion > config.max_spoke_dispersion {
                return None;
            }
            if (FRAC_PI_2 - metrics.angle).abs() >= tolerance {
                return None;
            }
            if !metrics.pointed_toward_center {
                return None;
            }
            Some(Candidate {
                vertex: vertices[i],
                index: i,
                centroid,
                metrics: Some(metrics),
            })
        })
        .collect()
}
