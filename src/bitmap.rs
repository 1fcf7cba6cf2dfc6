use std::path::Path;

use image::{GrayImage, ImageReader};
use imageproc::contrast::otsu_level;

use crate::config::{PieceConfig, ThresholdMethod};
use crate::error::PieceError;

/// A binary silhouette: `true` = piece, `false` = background.
///
/// Stored row-major with y growing downward, as the image is viewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    data: Vec<bool>,
    width: u32,
    height: u32,
}

impl PixelGrid {
    /// An all-background grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![false; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Build a grid by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> bool) -> Self {
        let mut grid = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if f(x, y) {
                    grid.set(x, y, true);
                }
            }
        }
        grid
    }

    /// Create from a binary GrayImage (non-zero = foreground).
    pub fn from_gray(img: &GrayImage) -> Self {
        let (w, h) = img.dimensions();
        Self::from_fn(w, h, |x, y| img.get_pixel(x, y).0[0] > 0)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at (x, y). Out-of-bounds = background.
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Panics if (x, y) is outside the grid.
    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) outside grid");
        self.data[y as usize * self.width as usize + x as usize] = value;
    }

    /// Number of foreground pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }
}

/// Load a photo of a piece and convert it to a binary grid.
///
/// The piece is expected to be darker than the background; dark pixels
/// become foreground unless `config.invert` is set.
pub fn load_and_threshold(path: &Path, config: &PieceConfig) -> Result<PixelGrid, PieceError> {
    let img = ImageReader::open(path)
        .map_err(|e| PieceError::ImageLoad(e.to_string()))?
        .decode()
        .map_err(|e| PieceError::ImageLoad(e.to_string()))?
        .into_luma8();

    let threshold = match config.threshold {
        ThresholdMethod::Fixed(t) => t,
        ThresholdMethod::Otsu => {
            let t = otsu_level(&img);
            log::debug!("{}: Otsu threshold = {}", path.display(), t);
            t
        }
    };

    let mut binary =
        imageproc::contrast::threshold(&img, threshold, imageproc::contrast::ThresholdType::BinaryInverted);

    if config.invert {
        for pixel in binary.pixels_mut() {
            pixel.0[0] = 255 - pixel.0[0];
        }
    }

    Ok(PixelGrid::from_gray(&binary))
}
