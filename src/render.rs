//! Rendering a float plane as an 8-bit grayscale image
//!
//! Maps the plane's observed value range onto 0..=255 so the output is
//! displayable regardless of which normalization path produced it
//! (unit-range samples and z-scores both render sensibly).

use anyhow::{Context, Result};
use image::{DynamicImage, GrayImage, ImageBuffer};

use crate::normalize::extrema_of;
use crate::plane::PlaneBuf;

/// Convert a plane into a grayscale image, stretching its value range over
/// the full 8-bit scale.
pub fn render_gray(plane: &PlaneBuf) -> Result<DynamicImage> {
    let extrema = extrema_of(plane.samples())?;

    // A constant plane maps to a single mid-gray level instead of failing;
    // there is nothing degenerate about displaying it
    let range = if extrema.is_degenerate() {
        1.0_f32
    } else {
        extrema.range()
    };

    let pixels: Vec<u8> = plane
        .samples()
        .iter()
        .map(|&v| {
            let normalized = (v - extrema.min) / range;
            // Saturating cast guards against floating-point rounding just
            // past the endpoints
            (normalized * 255.0_f32) as u8
        })
        .collect();

    let dims = plane.dimensions();
    let gray: GrayImage = ImageBuffer::from_raw(dims.width, dims.height, pixels)
        .context("Failed to create grayscale image buffer")?;

    Ok(DynamicImage::ImageLuma8(gray))
}
