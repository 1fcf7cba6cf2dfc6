//! Candidate refinement and global selection of four corners.
//!
//! 1. Dedup by vertex, then nudge each hypothesis to the best-scoring
//!    vertex in its neighbourhood
//! 2. Keep the best candidates and score every pair as a diagonal
//! 3. Greedily claim pairs, lowest score first; the two best claimed
//!    pairs are the corners

use std::collections::HashSet;
use std::f64::consts::PI;

use kurbo::Point;

use super::candidate::Candidate;
use crate::config::PieceConfig;
use crate::cyclic::Cyclic;
use crate::error::PieceError;
use crate::geom::angle_between;

/// Penalty per radian that a pair strays from sitting opposite each other
/// around the centroid.
const RADIAL_WEIGHT: f64 = 0.5;
/// Penalty per degree that a pair's bisectors stray from facing each other.
const ORIENTATION_WEIGHT_PER_DEG: f64 = 0.01;

/// Drop repeated vertices, keeping the first occurrence.
pub fn dedup(candidates: &[Candidate]) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    candidates
        .iter()
        .filter(|c| seen.insert(c.key()))
        .copied()
        .collect()
}

/// Replace each hypothesis by the best vertex within `refine_radius`.
///
/// Hypotheses are visited in boundary order. A hypothesis whose vertex was
/// already examined while refining an earlier one is dropped.
pub fn refine(candidates: &[Candidate], vertices: &[Point], centroid: Point, config: &PieceConfig) -> Vec<Candidate> {
    let mut ordered = dedup(candidates);
    ordered.sort_by_key(|c| c.index);

    let mut visited = HashSet::new();
    ordered
        .iter()
        .filter_map(|c| refine_one(c, vertices, centroid, config, &mut visited))
        .collect()
}

/// Best-scoring vertex around `candidate`, marking every examined index.
fn refine_one(
    candidate: &Candidate,
    vertices: &[Point],
    centroid: Point,
    config: &PieceConfig,
    visited: &mut HashSet<usize>,
) -> Option<Candidate> {
    if visited.contains(&candidate.index) {
        return None;
    }
    let ring = Cyclic::new(vertices);
    let radius = config.refine_radius as isize;

    let mut best: Option<Candidate> = None;
    for j in -radius..=radius {
        let i = candidate.index as isize + j;
        visited.insert(ring.wrap(i));
        let sub = Candidate::measured(vertices, i, centroid, config);
        if best.map_or(true, |b| sub.score() < b.score()) {
            best = Some(sub);
        }
    }
    if let Some(b) = &best {
        log::debug!(
            "refined #{} ({}, {}) -> #{} ({}, {}) score {:.3}",
            candidate.index,
            candidate.vertex.x,
            candidate.vertex.y,
            b.index,
            b.vertex.x,
            b.vertex.y,
            b.score()
        );
    }
    best
}

/// Score a pair of candidates as diagonal corners. Lower is better.
pub fn pair_score(a: &Candidate, b: &Candidate, centroid: Point) -> f64 {
    let radial_delta = (angle_between(centroid, a.vertex) - angle_between(centroid, b.vertex)).abs();
    let radial_penalty = RADIAL_WEIGHT * (radial_delta - PI).abs();

    let orientation_delta = (a.midangle() - b.midangle()).abs();
    let orientation_penalty = ORIENTATION_WEIGHT_PER_DEG * (orientation_delta - PI).abs().to_degrees();

    a.score() + b.score() + radial_penalty + orientation_penalty
}

/// Pick four corners from refined candidates, ordered by their angular
/// position around the centroid.
pub fn select(
    candidates: &[Candidate],
    centroid: Point,
    config: &PieceConfig,
    piece_id: &str,
) -> Result<[Candidate; 4], PieceError> {
    let mut pool = dedup(candidates);
    pool.sort_by(|a, b| a.score().total_cmp(&b.score()));
    pool.truncate(config.max_candidates);

    let mut pairs = Vec::with_capacity(pool.len() * pool.len().saturating_sub(1) / 2);
    for i in 0..pool.len() {
        for j in i + 1..pool.len() {
            pairs.push((i, j, pair_score(&pool[i], &pool[j], centroid)));
        }
    }
    pairs.sort_by(|a, b| a.2.total_cmp(&b.2));

    // Greedy claiming; not an optimal matching.
    let mut claimed = vec![false; pool.len()];
    let mut diagonals = Vec::with_capacity(2);
    for (i, j, score) in pairs {
        if claimed[i] || claimed[j] {
            continue;
        }
        claimed[i] = true;
        claimed[j] = true;
        log::debug!(
            "diagonal ({}, {}) - ({}, {}) score {:.3}",
            pool[i].vertex.x,
            pool[i].vertex.y,
            pool[j].vertex.x,
            pool[j].vertex.y,
            score
        );
        diagonals.push((i, j));
        if diagonals.len() == 2 {
            break;
        }
    }

    if diagonals.len() < 2 {
        return Err(PieceError::NotEnoughCorners {
            piece_id: piece_id.to_string(),
            found: pool.len(),
        });
    }
    let (a, c) = diagonals[0];
    let (b, d) = diagonals[1];

    let mut corners = [pool[a], pool[c], pool[b], pool[d]];
    corners.sort_by(|x, y| angle_between(centroid, x.vertex).total_cmp(&angle_between(centroid, y.vertex)));
    Ok(corners)
}
