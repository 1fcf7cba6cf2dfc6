//! Piece-to-piece comparison over the four rotational alignments.
//!
//! How well two individual sides fit is not decided here; it is delegated
//! to a [`SideFit`] implementation. A side pair that cannot fit at all is
//! reported as `None`, which is a normal outcome, not an error.

use rayon::prelude::*;

use crate::piece::Piece;
use crate::sides::Side;

/// Scores how well two sides fit together.
pub trait SideFit {
    /// A non-negative error, lower is better, or `None` when the sides
    /// cannot fit (an edge against a tab, for instance).
    fn error_when_fit_with(&self, side: &Side, other: &Side, flip: bool, render: bool) -> Option<f64>;
}

impl<F> SideFit for F
where
    F: Fn(&Side, &Side, bool, bool) -> Option<f64>,
{
    fn error_when_fit_with(&self, side: &Side, other: &Side, flip: bool, render: bool) -> Option<f64> {
        self(side, other, flip, render)
    }
}

/// The winning rotation of one piece's sides against another's.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alignment {
    /// Side `i` of the other piece is paired with side `(i + rotation) % 4`.
    pub rotation: usize,
    pub error: f64,
}

/// Summed fit error with the sides of `a` shifted by `rotation`, or `None`
/// as soon as one pair cannot fit.
pub fn alignment_error<F: SideFit + ?Sized>(
    a: &[Side; 4],
    b: &[Side; 4],
    rotation: usize,
    fitter: &F,
) -> Option<f64> {
    (0..4).try_fold(0.0, |total, i| {
        let error = fitter.error_when_fit_with(&a[(i + rotation) % 4], &b[i], false, false)?;
        Some(total + error)
    })
}

/// Lowest-error rotation, or `None` if no rotation fits. Ties go to the
/// smaller rotation.
pub fn best_alignment<F: SideFit + ?Sized>(a: &[Side; 4], b: &[Side; 4], fitter: &F) -> Option<Alignment> {
    let mut best: Option<Alignment> = None;
    for rotation in 0..4 {
        let Some(error) = alignment_error(a, b, rotation, fitter) else {
            continue;
        };
        log::trace!("rotation {rotation}: error {error:.3}");
        if best.map_or(true, |current| error < current.error) {
            best = Some(Alignment { rotation, error });
        }
    }
    best
}

/// Minimum summed error between two pieces over all rotations.
pub fn compare<F: SideFit + ?Sized>(piece: &Piece, other: &Piece, fitter: &F) -> Option<f64> {
    best_alignment(piece.sides(), other.sides(), fitter).map(|a| a.error)
}

/// Score `piece` against every candidate in parallel, best first.
///
/// Candidates that cannot fit in any rotation, and candidates with the same
/// id as `piece`, are left out.
pub fn rank_matches<'a, F>(piece: &Piece, others: &'a [Piece], fitter: &F) -> Vec<(&'a Piece, Alignment)>
where
    F: SideFit + Sync + ?Sized,
{
    let mut ranked: Vec<(&'a Piece, Alignment)> = others
        .par_iter()
        .filter(|other| other.id() != piece.id())
        .filter_map(|other| best_alignment(piece.sides(), other.sides(), fitter).map(|a| (other, a)))
        .collect();
    ranked.sort_by(|x, y| x.1.error.total_cmp(&y.1.error));
    ranked
}
