use kurbo::Point;

use super::Side;
use crate::config::PieceConfig;
use crate::corners::Corner;
use crate::cyclic::Cyclic;
use crate::geom::{midpoint_along_path, polyline_length, ramer_douglas_peucker};

/// Slice the boundary into one side per pair of consecutive corners.
///
/// Each run is RDP-simplified, close vertices are merged, and the exact
/// corner coordinates are restored at both ends.
pub fn extract_sides(
    piece_id: &str,
    vertices: &[Point],
    centroid: Point,
    corners: &[Corner],
    config: &PieceConfig,
) -> Vec<Side> {
    let ring = Cyclic::new(vertices);
    let n = corners.len();

    (0..n)
        .map(|i| {
            let from = corners[i];
            let to = corners[(i + 1) % n];
            let run = ring.slice(from.index as isize, to.index as isize);

            let mut points = ramer_douglas_peucker(&run, config.rdp_epsilon);
            merge_close_points(&mut points, config.merge_distance);

            if points.first() != Some(&from.vertex) {
                points.insert(0, from.vertex);
            }
            if points.last() != Some(&to.vertex) {
                points.push(to.vertex);
            }

            let is_edge = is_straight(&points, config.edge_ratio);
            Side::new(piece_id, i, points, centroid, is_edge)
        })
        .collect()
}

/// Collapse consecutive vertices closer than `threshold`.
///
/// A close pair is replaced by its midpoint along the path. When that lands
/// on the later vertex the earlier one is kept instead; otherwise merging
/// would creep forward along a run of close neighbours.
pub fn merge_close_points(points: &mut Vec<Point>, threshold: f64) {
    let mut i = 0;
    while i + 1 < points.len() {
        let (a, b) = (points[i], points[i + 1]);
        if a.distance(b) <= threshold {
            let mut merged = midpoint_along_path(points, a, b);
            if merged == b {
                merged = a;
            }
            points[i] = merged;
            points.remove(i + 1);
        } else {
            i += 1;
        }
    }
}

/// Straight sides barely exceed their chord.
fn is_straight(points: &[Point], edge_ratio: f64) -> bool {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return false;
    };
    let chord = first.distance(*last);
    if chord <= 0.0 {
        return false;
    }
    polyline_length(points) / chord < edge_ratio
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_the_earlier_point_of_adjacent_pairs() {
        let mut pts = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(6.0, 1.0),
        ];
        merge_close_points(&mut pts, 1.75);
        assert_eq!(
            pts,
            vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(5.0, 0.0)]
        );
    }

    #[test]
    fn merge_leaves_spread_points_alone() {
        let mut pts: Vec<Point> = (0..5).map(|i| Point::new(i as f64 * 2.0, 0.0)).collect();
        let before = pts.clone();
        merge_close_points(&mut pts, 1.75);
        assert_eq!(pts, before);
    }

    #[test]
    fn straightness() {
        let flat = [Point::new(0.0, 0.0), Point::new(5.0, 0.3), Point::new(10.0, 0.0)];
        assert!(is_straight(&flat, 1.1));
        let tab = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(6.0, 4.0),
            Point::new(6.0, 0.0),
            Point::new(10.0, 0.0),
        ];
        assert!(!is_straight(&tab, 1.1));
        assert!(!is_straight(&[Point::ZERO, Point::ZERO], 1.1));
    }

    #[test]
    fn sides_run_corner_to_corner_across_the_seam() {
        // square loop of side 20 starting mid-way along the top edge
        let mut pts = Vec::new();
        for x in 10..20 {
            pts.push((x, 0));
        }
        for y in 0..20 {
            pts.push((20, y));
        }
        for x in (1..=20).rev() {
            pts.push((x, 20));
        }
        for y in (1..=20).rev() {
            pts.push((0, y));
        }
        for x in 0..10 {
            pts.push((x, 0));
        }
        let vertices: Vec<Point> = pts
            .into_iter()
            .map(|(x, y)| Point::new(x as f64, y as f64))
            .collect();
        let corner_at = |x: f64, y: f64| {
            let index = vertices.iter().position(|&p| p == Point::new(x, y)).unwrap();
            Corner {
                vertex: vertices[index],
                index,
            }
        };
        let corners = [
            corner_at(20.0, 0.0),
            corner_at(20.0, 20.0),
            corner_at(0.0, 20.0),
            corner_at(0.0, 0.0),
        ];
        let sides = extract_sides("sq", &vertices, Point::new(10.0, 10.0), &corners, &PieceConfig::default());
        assert_eq!(sides.len(), 4);
        for (i, side) in sides.iter().enumerate() {
            assert_eq!(side.vertices().first(), Some(&corners[i].vertex));
            assert_eq!(side.vertices().last(), Some(&corners[(i + 1) % 4].vertex));
            assert!(side.is_edge());
            assert!((side.length() - 20.0).abs() < 1e-9);
        }
        // the top side wraps past the loop start
        assert_eq!(sides[3].vertices().len(), 2);
    }
}
