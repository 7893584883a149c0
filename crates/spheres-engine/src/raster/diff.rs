use image::RgbImage;

/// Outcome of comparing two rasterized frames.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ImageDiff {
    /// Same dimensions, same pixels.
    Identical,
    /// Same dimensions, `count` pixels differ.
    Pixels { count: u64 },
    /// Dimensions differ; pixels were not compared.
    Dimensions { left: (u32, u32), right: (u32, u32) },
}

impl ImageDiff {
    #[inline]
    pub fn is_identical(self) -> bool {
        self == ImageDiff::Identical
    }
}

/// Compares two images pixel by pixel.
pub fn compare(left: &RgbImage, right: &RgbImage) -> ImageDiff {
    if left.dimensions() != right.dimensions() {
        return ImageDiff::Dimensions {
            left: left.dimensions(),
            right: right.dimensions(),
        };
    }

    let count = left
        .pixels()
        .zip(right.pixels())
        .filter(|(a, b)| a != b)
        .count() as u64;

    if count == 0 {
        ImageDiff::Identical
    } else {
        ImageDiff::Pixels { count }
    }
}
