mod common;

use common::init_logging;
use common::synthetic::{rectangle, rounded_square, square_with_blanks};
use kurbo::Point;
use piecetrace::corners::find_four_corners;
use piecetrace::sides::{extract_sides, validate};
use piecetrace::trace::{trace, walk, BorderMask};
use piecetrace::{process, PieceConfig, PieceError};

const MARGIN: u32 = 20;

#[test]
fn walk_visits_every_border_pixel_once() {
    init_logging();
    for grid in [rounded_square(100, 2, MARGIN), square_with_blanks(101, 15, MARGIN)] {
        let mask = BorderMask::from_grid(&grid);
        let pixels = walk(&mask, "loop").unwrap();
        assert_eq!(pixels.len(), mask.count());

        let mut unique = pixels.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), pixels.len());

        // consecutive pixels, including last -> first, are 8-neighbours
        for (i, &(x, y)) in pixels.iter().enumerate() {
            let (nx, ny) = pixels[(i + 1) % pixels.len()];
            assert!((nx - x).abs() <= 1 && (ny - y).abs() <= 1, "gap at {i}");
        }
    }
}

#[test]
fn rounded_square_corners_are_found() {
    init_logging();
    let config = PieceConfig::default();
    let grid = rounded_square(100, 2, MARGIN);
    let boundary = trace(&grid, "square").unwrap();

    let lo = MARGIN as f64;
    let hi = (MARGIN + 99) as f64;
    let truth = [
        Point::new(lo, lo),
        Point::new(hi, lo),
        Point::new(hi, hi),
        Point::new(lo, hi),
    ];

    let corners = find_four_corners(&boundary, &config, "square").unwrap();
    for t in truth {
        let nearest = corners
            .iter()
            .map(|c| c.vertex.distance(t))
            .fold(f64::INFINITY, f64::min);
        assert!(nearest < 5.0, "no corner near {t:?}: {corners:?}");
    }

    let sides = extract_sides("square", &boundary.vertices, boundary.centroid, &corners, &config);
    assert_eq!(sides.len(), 4);
    for (i, side) in sides.iter().enumerate() {
        assert_eq!(side.vertices().first(), Some(&corners[i].vertex));
        assert_eq!(side.vertices().last(), Some(&corners[(i + 1) % 4].vertex));
    }
    for (a, b) in [(0, 2), (1, 3)] {
        let parallel = validate::parallel_error(&sides[a], &sides[b]).to_degrees();
        assert!(parallel <= config.parallel_tolerance_deg, "{a}/{b}: {parallel}");
        let ratio = validate::length_mismatch(&sides[a], &sides[b]);
        assert!(ratio <= config.length_ratio_tolerance, "{a}/{b}: {ratio}");
    }
    let orthogonal = validate::orthogonal_error(&sides[0], &sides[1]).to_degrees();
    assert!(orthogonal <= config.side_orthogonal_tolerance_deg);
}

#[test]
fn plain_square_has_too_many_edges() {
    init_logging();
    let err = process("square", rounded_square(100, 2, MARGIN), &PieceConfig::default()).unwrap_err();
    assert!(
        matches!(err, PieceError::TooManyEdges { count: 4, max: 2, .. }),
        "{err}"
    );
    assert_eq!(err.piece_id(), Some("square"));
}

#[test]
fn interior_piece_is_accepted() {
    init_logging();
    let piece = process("blanks", square_with_blanks(101, 15, MARGIN), &PieceConfig::default()).unwrap();

    assert_eq!(piece.id(), "blanks");
    assert_eq!(piece.edge_count(), 0);
    let centre = (MARGIN + 50) as f64;
    assert!(piece.centroid().distance(Point::new(centre, centre)) < 1e-9);

    let lo = MARGIN as f64;
    let hi = (MARGIN + 100) as f64;
    let mut found: Vec<(f64, f64)> = piece.corners().iter().map(|c| (c.vertex.x, c.vertex.y)).collect();
    found.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(found, vec![(lo, lo), (lo, hi), (hi, lo), (hi, hi)]);

    for (i, side) in piece.sides().iter().enumerate() {
        assert_eq!(side.index(), i);
        assert_eq!(side.piece_id(), "blanks");
        assert_eq!(side.vertices().first(), Some(&piece.corners()[i].vertex));
        assert_eq!(side.vertices().last(), Some(&piece.corners()[(i + 1) % 4].vertex));
        assert!((side.segment().length() - 100.0).abs() < 1e-9);
        // the blank makes the side noticeably longer than its chord
        assert!(side.length() > 110.0, "side {i}: {}", side.length());
    }
}

#[test]
fn piece_touching_the_image_edge_is_stuck() {
    init_logging();
    // top row of the piece is row 0
    let grid = rectangle(80, 80, 10, 0, 60, 50);
    let err = process("clipped", grid, &PieceConfig::default()).unwrap_err();
    assert!(matches!(err, PieceError::Stuck { x: 10, y: 0, .. }), "{err}");
}

#[test]
fn empty_image_has_no_border() {
    let grid = rectangle(20, 20, 30, 30, 40, 40);
    let err = process("empty", grid, &PieceConfig::default()).unwrap_err();
    assert!(matches!(err, PieceError::NoBorder { .. }));
}
