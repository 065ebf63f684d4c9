use thiserror::Error;

/// Errors surfaced by plane construction and normalization.
///
/// All variants are detected before any arithmetic runs; none are
/// recoverable inside the kernel. The caller decides whether to skip
/// normalization, substitute a default, or drop the frame.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum NormalizeError {
    /// Width or height is zero, or the buffer length does not match
    /// width * height.
    #[error("plane dimensions {width}x{height} do not match buffer of {len} samples")]
    InvalidDimensions { width: u32, height: u32, len: usize },

    /// A statistics pass was asked to run over zero samples.
    #[error("cannot compute statistics over an empty plane")]
    EmptyInput,

    /// Every sample holds the same value, so dividing by the range or the
    /// standard deviation would produce non-finite output.
    #[error("degenerate plane: every sample equals {value}")]
    DegenerateRange { value: f32 },
}
