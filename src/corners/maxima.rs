//! Corner hypotheses from local maxima of the distance to the centroid.

use kurbo::Point;

use super::candidate::Candidate;
use crate::cyclic::Cyclic;

/// Vertices at least as far from the centroid as every vertex within
/// `window` steps on either side. Ties count as maxima.
pub fn find_candidates(vertices: &[Point], centroid: Point, window: usize) -> Vec<Candidate> {
    let distances: Vec<f64> = vertices.iter().map(|v| v.distance(centroid)).collect();
    let ring = Cyclic::new(&distances);
    let w = window as isize;

    let farthest = |from: isize, to: isize| ring.range(from, to).copied().fold(f64::NEG_INFINITY, f64::max);

    distances
        .iter()
        .enumerate()
        .filter(|&(i, &d)| {
            let i = i as isize;
            d >= farthest(i - w, i - 1) && d >= farthest(i + 1, i + w)
        })
        .map(|(i, _)| Candidate::unmeasured(vertices[i], i, centroid))
        .collect()
}
