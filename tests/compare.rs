use piecetrace::compare::alignment_error;
use piecetrace::kurbo::Point;
use piecetrace::{best_alignment, Side};

/// A side of chord `length` whose middle vertex sits `bump` off the chord.
/// Positive bumps are tabs, negative ones blanks.
fn side(index: usize, length: f64, bump: f64) -> Side {
    Side::new(
        "p",
        index,
        vec![Point::ZERO, Point::new(length / 2.0, bump), Point::new(length, 0.0)],
        Point::new(length / 2.0, length / 2.0),
        false,
    )
}

fn sides(lengths: [f64; 4], bumps: [f64; 4]) -> [Side; 4] {
    [0, 1, 2, 3].map(|i| side(i, lengths[i], bumps[i]))
}

fn bump(s: &Side) -> f64 {
    s.vertices()[1].y
}

/// Chords must match within 5 px; a tab fits the blank of the same size.
fn tab_fit(a: &Side, b: &Side, _flip: bool, _render: bool) -> Option<f64> {
    let chord_error = (a.segment().length() - b.segment().length()).abs();
    if chord_error > 5.0 {
        return None;
    }
    Some(chord_error + (bump(a) + bump(b)).abs())
}

#[test]
fn matching_rotation_is_the_unique_minimum() {
    let a = sides([10.0, 20.0, 10.0, 20.0], [1.0, 2.0, -3.0, 4.0]);
    // b's side i is shaped to receive a's side i + 1
    let b = sides([20.0, 10.0, 20.0, 10.0], [-2.0, 3.0, -4.0, -1.0]);

    let best = best_alignment(&a, &b, &tab_fit).unwrap();
    assert_eq!(best.rotation, 1);
    assert!(best.error.abs() < 1e-9);

    for rotation in [0, 2, 3] {
        match alignment_error(&a, &b, rotation, &tab_fit) {
            None => {}
            Some(error) => assert!(error > best.error, "rotation {rotation}: {error}"),
        }
    }
    // the other odd rotation also lines up the chords but not the tabs
    assert!(alignment_error(&a, &b, 3, &tab_fit).is_some());
}

#[test]
fn closure_fitters_work_too() {
    let a = sides([10.0; 4], [1.0, -1.0, 1.0, -1.0]);
    let b = sides([10.0; 4], [1.0, -1.0, 1.0, -1.0]);
    let calls = std::cell::Cell::new(0);
    let fitter = |x: &Side, y: &Side, flip: bool, render: bool| {
        assert!(!flip && !render);
        calls.set(calls.get() + 1);
        tab_fit(x, y, flip, render)
    };
    let best = best_alignment(&a, &b, &fitter).unwrap();
    assert_eq!(best.rotation, 1);
    assert_eq!(calls.get(), 16);
}
