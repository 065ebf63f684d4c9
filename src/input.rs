//! Loading image files into float planes
//!
//! Any format the `image` crate can decode is accepted; the decoded image
//! is collapsed to a single luma channel of `f32` samples in `[0, 1]` (for
//! integer sources) or raw float values (for float sources such as EXR).

use anyhow::{Context, Result};
use std::path::Path;

use crate::plane::PlaneBuf;
use crate::types::Dimensions;

/// Decode an image file and return its luma channel as an owned plane.
pub fn load_plane(path: &Path) -> Result<PlaneBuf> {
    let img = image::open(path)
        .with_context(|| format!("Failed to open image file: {}", path.display()))?;

    let luma = img.to_luma32f();
    let dimensions = Dimensions::new(luma.width(), luma.height());
    let samples = luma.into_raw();

    PlaneBuf::new(samples, dimensions)
        .with_context(|| format!("Decoded image has inconsistent dimensions: {dimensions}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn test_load_plane_from_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradient.png");

        let img = GrayImage::from_fn(4, 2, |x, y| Luma([(x * 60 + y * 10) as u8]));
        img.save(&path).unwrap();

        let plane = load_plane(&path).unwrap();
        assert_eq!(plane.dimensions(), Dimensions::new(4, 2));
        assert_eq!(plane.samples().len(), 8);

        // Integer luma is scaled into [0, 1] on decode
        assert!(plane.samples().iter().all(|&v| (0.0..=1.0).contains(&v)));
        assert_eq!(plane.samples()[0], 0.0);
    }

    #[test]
    fn test_load_plane_missing_file() {
        let result = load_plane(Path::new("/nonexistent/plane.png"));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to open image file"));
    }
}
