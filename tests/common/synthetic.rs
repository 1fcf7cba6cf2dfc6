use piecetrace::PixelGrid;

/// Square of `size` pixels at (`margin`, `margin`) with its four corners
/// rounded off to `radius`.
pub fn rounded_square(size: u32, radius: u32, margin: u32) -> PixelGrid {
    assert!(2 * radius < size, "radius too large for the square");
    let extent = size + 2 * margin;
    let lo = margin as i64;
    let hi = (margin + size - 1) as i64;
    let r = radius as i64;
    PixelGrid::from_fn(extent, extent, |x, y| {
        let (x, y) = (x as i64, y as i64);
        if x < lo || x > hi || y < lo || y > hi {
            return false;
        }
        // nearest rounding centre, if the pixel is in a corner box
        let cx = if x < lo + r { lo + r } else if x > hi - r { hi - r } else { return true };
        let cy = if y < lo + r { lo + r } else if y > hi - r { hi - r } else { return true };
        (x - cx).pow(2) + (y - cy).pow(2) <= r * r
    })
}

/// Square of `size` pixels with a semicircular blank of `radius` cut into
/// the middle of every side. Symmetric under quarter turns, so the
/// boundary centroid is the square's centre.
pub fn square_with_blanks(size: u32, radius: u32, margin: u32) -> PixelGrid {
    assert!(size % 2 == 1, "odd size keeps the blanks centred on a pixel");
    let extent = size + 2 * margin;
    let lo = margin as i64;
    let hi = (margin + size - 1) as i64;
    let mid = (lo + hi) / 2;
    let r2 = (radius * radius) as i64;
    let blanks = [(mid, lo), (hi, mid), (mid, hi), (lo, mid)];
    PixelGrid::from_fn(extent, extent, |x, y| {
        let (x, y) = (x as i64, y as i64);
        if x < lo || x > hi || y < lo || y > hi {
            return false;
        }
        blanks
            .iter()
            .all(|&(bx, by)| (x - bx).pow(2) + (y - by).pow(2) >= r2)
    })
}

/// Filled rectangle; any part outside the grid is clipped.
pub fn rectangle(width: u32, height: u32, x0: u32, y0: u32, x1: u32, y1: u32) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, y| x >= x0 && x <= x1 && y >= y0 && y <= y1)
}
