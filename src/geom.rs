//! Shared geometry primitives.
//!
//! Angles follow image orientation: y grows downward, `atan2(dy, dx)` gives
//! the heading of a vector, and canonical angles live in `[0, 2π)`.

use std::f64::consts::{PI, TAU};

use geo::{LineString, Simplify};
use kurbo::{Line, Point, Vec2};

pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Arithmetic mean of `points`; the origin for an empty slice.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::ZERO;
    }
    let sum = points.iter().fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
    (sum / points.len() as f64).to_point()
}

pub fn midpoint(a: Point, b: Point) -> Point {
    a.midpoint(b)
}

/// Reduce an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Heading of the vector a→b in `[0, 2π)`.
pub fn angle_between(a: Point, b: Point) -> f64 {
    normalize_angle((b.y - a.y).atan2(b.x - a.x))
}

/// Smallest absolute difference between two angles, in `[0, π]`.
pub fn compare_angles(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d).clamp(0.0, PI)
}

/// Angle swept counterclockwise (as the image is viewed) from ray p_i→p_h
/// to ray p_i→p_j, in `[0, 2π)`.
///
/// The boundary walk runs clockwise on screen with the piece on its right,
/// so a convex corner measured from the trailing spoke to the leading
/// spoke comes out near 90°.
pub fn counterclockwise_angle_between_vectors(p_h: Point, p_i: Point, p_j: Point) -> f64 {
    normalize_angle(angle_between(p_i, p_h) - angle_between(p_i, p_j))
}

/// Best-fit direction from a point toward a run of points, and how straight
/// that run looks from there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colinearity {
    /// Circular mean of the headings toward each point, in `[0, 2π)`.
    pub angle: f64,
    /// Root-mean-square angular residual around `angle` (radians).
    pub dispersion: f64,
}

/// Fit a direction from `from_point` toward `to_points`.
///
/// Points coinciding with `from_point` carry no direction and are ignored.
/// A run with no usable point yields angle 0 and the maximal dispersion π,
/// so it never passes a straightness gate.
pub fn colinearity(from_point: Point, to_points: &[Point]) -> Colinearity {
    let headings: Vec<f64> = to_points
        .iter()
        .filter(|&&p| p != from_point)
        .map(|&p| angle_between(from_point, p))
        .collect();
    if headings.is_empty() {
        return Colinearity {
            angle: 0.0,
            dispersion: PI,
        };
    }

    let (sx, sy) = headings
        .iter()
        .fold((0.0, 0.0), |(sx, sy), a| (sx + a.cos(), sy + a.sin()));
    let angle = normalize_angle(sy.atan2(sx));

    let variance = headings
        .iter()
        .map(|&a| compare_angles(a, angle).powi(2))
        .sum::<f64>()
        / headings.len() as f64;

    Colinearity {
        angle,
        dispersion: variance.sqrt(),
    }
}

/// Sum of consecutive segment lengths.
pub fn polyline_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// The vertex of `path` halfway (by walked length) from `a` to `b`.
///
/// Walks forward from the first occurrence of `a` to the next occurrence of
/// `b` and returns the first vertex at or beyond half the walked length, so
/// the result always lies on the path. Falls back to the straight midpoint
/// when `a` or `b` is not on the path.
pub fn midpoint_along_path(path: &[Point], a: Point, b: Point) -> Point {
    let Some(start) = path.iter().position(|&p| p == a) else {
        return midpoint(a, b);
    };
    let Some(offset) = path[start..].iter().position(|&p| p == b) else {
        return midpoint(a, b);
    };
    let run = &path[start..=start + offset];

    let half = polyline_length(run) / 2.0;
    let mut walked = 0.0;
    for w in run.windows(2) {
        walked += w[0].distance(w[1]);
        if walked >= half {
            return w[1];
        }
    }
    run[0]
}

/// Ramer–Douglas–Peucker simplification.
///
/// The first and last input points are always kept.
pub fn ramer_douglas_peucker(points: &[Point], epsilon: f64) -> Vec<Point> {
    if points.len() <= 2 || epsilon <= 0.0 {
        return points.to_vec();
    }
    let coords: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
    LineString::from(coords)
        .simplify(&epsilon)
        .into_inner()
        .into_iter()
        .map(|c| Point::new(c.x, c.y))
        .collect()
}

/// Distance from `p` to the closest point of the finite segment.
pub fn distance_to_segment(p: Point, seg: Line) -> f64 {
    let ab = seg.p1 - seg.p0;
    let len_sq = ab.hypot2();
    if len_sq < 1e-12 {
        return p.distance(seg.p0);
    }
    let t = ((p - seg.p0).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(seg.p0 + ab * t)
}

/// Minimum distance between two finite segments; zero if they cross.
pub fn distance_between_segments(a: Line, b: Line) -> f64 {
    if segments_cross(a, b) {
        return 0.0;
    }
    distance_to_segment(a.p0, b)
        .min(distance_to_segment(a.p1, b))
        .min(distance_to_segment(b.p0, a))
        .min(distance_to_segment(b.p1, a))
}

/// Proper crossing test. Touching and colinear overlap are caught by the
/// endpoint distances instead.
fn segments_cross(a: Line, b: Line) -> bool {
    let da = a.p1 - a.p0;
    let db = b.p1 - b.p0;
    let s1 = da.cross(b.p0 - a.p0);
    let s2 = da.cross(b.p1 - a.p0);
    let s3 = db.cross(a.p0 - b.p0);
    let s4 = db.cross(a.p1 - b.p0);
    s1 * s2 < 0.0 && s3 * s4 < 0.0
}
