//! Domain-specific types for plane statistics

use std::fmt;

/// Tolerance used when checking whether a plane already spans the unit range.
pub const UNIT_RANGE_TOLERANCE: f32 = 1e-4;

/// Width and height of a single-channel plane, in samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{width}x{height}",
            width = self.width,
            height = self.height
        )
    }
}

/// Minimum and maximum sample values observed in a plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema {
    pub min: f32,
    pub max: f32,
}

impl Extrema {
    #[must_use]
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    #[must_use]
    pub fn range(&self) -> f32 {
        self.max - self.min
    }

    /// All samples share one value; rescaling would divide by zero.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.range() == 0.0
    }

    /// Whether the observed values already span `[0, 1]` within tolerance.
    #[inline]
    #[must_use]
    pub fn is_unit_range(&self) -> bool {
        self.min.abs() <= UNIT_RANGE_TOLERANCE && (self.max - 1.0).abs() <= UNIT_RANGE_TOLERANCE
    }
}

impl fmt::Display for Extrema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min={min}, max={max}, range={range}",
            min = self.min,
            max = self.max,
            range = self.range()
        )
    }
}

/// Population mean and standard deviation of a plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanStdDev {
    pub mean: f32,
    pub std_dev: f32,
}

impl MeanStdDev {
    #[must_use]
    pub fn new(mean: f32, std_dev: f32) -> Self {
        Self { mean, std_dev }
    }
}

impl fmt::Display for MeanStdDev {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mean={mean}, stddev={std_dev}",
            mean = self.mean,
            std_dev = self.std_dev
        )
    }
}
