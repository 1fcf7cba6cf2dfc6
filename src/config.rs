/// All piece-processing parameters in one struct.
/// Defaults reproduce the tuned behaviour; callers may relax or tighten
/// any threshold per batch.
#[derive(Debug, Clone)]
pub struct PieceConfig {
    // -- Bitmap stage --
    /// Threshold method for converting a photo to binary.
    pub threshold: ThresholdMethod,
    /// If true, invert the image (swap foreground/background) before tracing.
    pub invert: bool,

    // -- Corner candidates --
    /// Vertices on each side of a distance maximum it must dominate.
    pub maxima_window: usize,
    /// Neighbours skipped next to a vertex before fitting a spoke.
    /// Very short vectors have noisy angles.
    pub spoke_offset: usize,
    /// Number of boundary points each spoke is fitted to.
    pub spoke_length: usize,
    /// Distance the synthetic spoke endpoints are projected out.
    pub spoke_extent: f64,
    /// Mean spoke dispersion (radians) above which a vertex is not a corner.
    pub max_spoke_dispersion: f64,
    /// The two spokes of a corner must meet at 90° within this many degrees.
    pub spoke_orthogonal_tolerance_deg: f64,

    // -- Refinement & selection --
    /// Boundary indices searched on each side of a candidate.
    pub refine_radius: usize,
    /// Only the best-scoring candidates enter pairing.
    pub max_candidates: usize,

    // -- Side extraction --
    /// RDP simplification epsilon (pixels).
    pub rdp_epsilon: f64,
    /// Consecutive side vertices this close (pixels) are merged.
    pub merge_distance: f64,
    /// A side whose polyline/chord ratio is below this is a straight edge.
    pub edge_ratio: f64,

    // -- Validation --
    /// Sides 0 and 1 must meet at 90° within this many degrees.
    pub side_orthogonal_tolerance_deg: f64,
    /// Opposite sides must be parallel within this many degrees.
    pub parallel_tolerance_deg: f64,
    /// Opposite side lengths may differ by this fraction of their mean.
    pub length_ratio_tolerance: f64,
    /// Max ratio between the two opposite-side separations.
    pub aspect_ratio_tolerance: f64,
    /// A piece can sit on at most this many outer edges of the puzzle.
    pub max_edges: usize,
}

/// Threshold method for converting a grayscale image to binary.
#[derive(Debug, Clone, Copy)]
pub enum ThresholdMethod {
    /// Fixed brightness threshold (0-255).
    Fixed(u8),
    /// Otsu's method (automatic).
    Otsu,
}

impl Default for PieceConfig {
    fn default() -> Self {
        Self {
            threshold: ThresholdMethod::Otsu,
            invert: false,
            maxima_window: 7,
            spoke_offset: 1,
            spoke_length: 12,
            spoke_extent: 10.0,
            max_spoke_dispersion: 0.2,
            spoke_orthogonal_tolerance_deg: 50.0,
            refine_radius: 4,
            max_candidates: 12,
            rdp_epsilon: 0.25,
            merge_distance: 1.75,
            edge_ratio: 1.1,
            side_orthogonal_tolerance_deg: 50.0,
            parallel_tolerance_deg: 32.0,
            length_ratio_tolerance: 0.55,
            aspect_ratio_tolerance: 1.35,
            max_edges: 2,
        }
    }
}
