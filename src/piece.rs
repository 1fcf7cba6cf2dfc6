use kurbo::Point;

use crate::bitmap::PixelGrid;
use crate::corners::Corner;
use crate::sides::Side;
use crate::trace::Boundary;

/// A fully processed piece: exactly four corners and four sides in
/// winding order, each side running from `corners[i]` to `corners[i + 1]`.
///
/// Immutable once built, so pieces can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Piece {
    id: String,
    grid: PixelGrid,
    boundary: Boundary,
    corners: [Corner; 4],
    sides: [Side; 4],
}

impl Piece {
    pub(crate) fn new(
        id: String,
        grid: PixelGrid,
        boundary: Boundary,
        corners: [Corner; 4],
        sides: [Side; 4],
    ) -> Self {
        Self {
            id,
            grid,
            boundary,
            corners,
            sides,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The silhouette the piece was traced from.
    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Border pixels in walk order.
    pub fn vertices(&self) -> &[Point] {
        &self.boundary.vertices
    }

    pub fn centroid(&self) -> Point {
        self.boundary.centroid
    }

    pub fn corners(&self) -> &[Corner; 4] {
        &self.corners
    }

    pub fn sides(&self) -> &[Side; 4] {
        &self.sides
    }

    /// Number of sides flagged as straight puzzle edges.
    pub fn edge_count(&self) -> usize {
        self.sides.iter().filter(|s| s.is_edge()).count()
    }
}
