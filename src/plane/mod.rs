//! Plane buffers and validated views
//!
//! A plane is one channel of an image: a contiguous row-major `f32` buffer
//! with explicit width and height. The normalization kernel only ever sees
//! a [`PlaneMut`] view, so exclusive access for the duration of a call is
//! enforced by the borrow checker rather than by a lock/unlock convention,
//! and the width/height/length invariant is checked once at construction.

mod error;

pub use error::NormalizeError;

use crate::types::Dimensions;

/// Exclusive mutable view over a caller-owned plane buffer.
///
/// The view is valid by construction: dimensions are non-zero and the slice
/// length equals `width * height`. It is never stored beyond the call it is
/// passed to.
#[derive(Debug)]
pub struct PlaneMut<'a> {
    samples: &'a mut [f32],
    dimensions: Dimensions,
}

impl<'a> PlaneMut<'a> {
    /// Wrap a mutable sample buffer, validating it against `dimensions`.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::InvalidDimensions`] if either dimension is
    /// zero or the buffer length does not match `width * height`.
    pub fn new(samples: &'a mut [f32], dimensions: Dimensions) -> Result<Self, NormalizeError> {
        if !dimensions.is_valid() || samples.len() != dimensions.pixel_count() {
            return Err(NormalizeError::InvalidDimensions {
                width: dimensions.width,
                height: dimensions.height,
                len: samples.len(),
            });
        }

        Ok(Self {
            samples,
            dimensions,
        })
    }

    #[inline]
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[inline]
    #[must_use]
    pub fn samples(&self) -> &[f32] {
        self.samples
    }

    #[inline]
    #[must_use]
    pub fn samples_mut(&mut self) -> &mut [f32] {
        self.samples
    }
}

/// Owned plane buffer, used where the pipeline allocates the plane itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneBuf {
    samples: Vec<f32>,
    dimensions: Dimensions,
}

impl PlaneBuf {
    /// Take ownership of a sample buffer, validating it against `dimensions`.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::InvalidDimensions`] if either dimension is
    /// zero or the buffer length does not match `width * height`.
    pub fn new(samples: Vec<f32>, dimensions: Dimensions) -> Result<Self, NormalizeError> {
        if !dimensions.is_valid() || samples.len() != dimensions.pixel_count() {
            return Err(NormalizeError::InvalidDimensions {
                width: dimensions.width,
                height: dimensions.height,
                len: samples.len(),
            });
        }

        Ok(Self {
            samples,
            dimensions,
        })
    }

    #[inline]
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[inline]
    #[must_use]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Borrow the whole buffer as a mutable view.
    ///
    /// Infallible: the length invariant was established in [`PlaneBuf::new`]
    /// and the buffer is never resized afterwards.
    #[must_use]
    pub fn view_mut(&mut self) -> PlaneMut<'_> {
        PlaneMut {
            samples: &mut self.samples,
            dimensions: self.dimensions,
        }
    }

    #[must_use]
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}
