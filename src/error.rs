use thiserror::Error;

/// Errors that abort processing of a piece.
///
/// Every geometric variant names the piece and the measured value next to
/// the configured limit. A missing fit between two sides is not an error;
/// the comparator reports it as `None`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PieceError {
    #[error("failed to load image: {0}")]
    ImageLoad(String),

    #[error("piece {piece_id}: no border to walk")]
    NoBorder { piece_id: String },

    #[error(
        "piece {piece_id}: boundary walk stuck at ({x}, {y}); the piece touches the \
         image edge, re-capture it centered on a brighter background"
    )]
    Stuck { piece_id: String, x: i32, y: i32 },

    #[error("piece {piece_id}: boundary walk did not close after {steps} steps")]
    Unclosed { piece_id: String, steps: usize },

    #[error("piece {piece_id}: need 4 corners but only {found} candidates could be paired")]
    NotEnoughCorners { piece_id: String, found: usize },

    #[error("piece {piece_id}: expected 4 sides, found {found}")]
    SideCount { piece_id: String, found: usize },

    #[error("piece {piece_id}: sides {a} and {b} are not parallel ({actual_deg:.1}° apart, limit {limit_deg}°)")]
    NotParallel {
        piece_id: String,
        a: usize,
        b: usize,
        actual_deg: f64,
        limit_deg: f64,
    },

    #[error("piece {piece_id}: sides {a} and {b} meet at {actual_deg:.1}°, expected 90° ± {tolerance_deg}°")]
    NotOrthogonal {
        piece_id: String,
        a: usize,
        b: usize,
        actual_deg: f64,
        tolerance_deg: f64,
    },

    #[error("piece {piece_id}: sides {a} and {b} differ in length by {ratio:.2} of their mean (limit {limit})")]
    LengthMismatch {
        piece_id: String,
        a: usize,
        b: usize,
        ratio: f64,
        limit: f64,
    },

    #[error("piece {piece_id}: not roughly square, opposite sides are {d02:.1} and {d13:.1} apart (limit ×{limit})")]
    NotSquare {
        piece_id: String,
        d02: f64,
        d13: f64,
        limit: f64,
    },

    #[error("piece {piece_id}: a piece cannot lie on {count} edges (max {max})")]
    TooManyEdges {
        piece_id: String,
        count: usize,
        max: usize,
    },

    #[error("piece {piece_id}: opposite sides {a} and {b} cannot both be edges")]
    ParallelEdges { piece_id: String, a: usize, b: usize },
}

impl PieceError {
    /// Id of the piece that failed, if the failure is tied to one.
    pub fn piece_id(&self) -> Option<&str> {
        match self {
            PieceError::ImageLoad(_) => None,
            PieceError::NoBorder { piece_id }
            | PieceError::Stuck { piece_id, .. }
            | PieceError::Unclosed { piece_id, .. }
            | PieceError::NotEnoughCorners { piece_id, .. }
            | PieceError::SideCount { piece_id, .. }
            | PieceError::NotParallel { piece_id, .. }
            | PieceError::NotOrthogonal { piece_id, .. }
            | PieceError::LengthMismatch { piece_id, .. }
            | PieceError::NotSquare { piece_id, .. }
            | PieceError::TooManyEdges { piece_id, .. }
            | PieceError::ParallelEdges { piece_id, .. } => Some(piece_id),
        }
    }
}
