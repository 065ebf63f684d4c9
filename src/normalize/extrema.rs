use crate::plane::{NormalizeError, PlaneMut};
use crate::types::{Extrema, MeanStdDev};

/// Scan every sample of the plane once and return the minimum and maximum.
///
/// # Errors
///
/// Never fails for a [`PlaneMut`], whose construction already rules out the
/// empty case; the `Result` is kept so callers handle one error type across
/// the whole kernel.
#[inline]
pub fn extrema(plane: &PlaneMut<'_>) -> Result<Extrema, NormalizeError> {
    extrema_of(plane.samples())
}

/// Minimum and maximum over a raw sample slice.
///
/// Folds from `(INFINITY, NEG_INFINITY)` so the first sample always wins;
/// an empty slice is rejected up front instead of yielding an inverted
/// range.
pub fn extrema_of(samples: &[f32]) -> Result<Extrema, NormalizeError> {
    if samples.is_empty() {
        return Err(NormalizeError::EmptyInput);
    }

    let (min, max) = samples
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &val| {
            (min.min(val), max.max(val))
        });

    Ok(Extrema::new(min, max))
}

/// Population mean and standard deviation over a raw sample slice.
///
/// Accumulates in f64 to keep the two-pass variance stable on large planes,
/// then narrows the result back to the sample precision.
pub fn mean_std_dev(samples: &[f32]) -> Result<MeanStdDev, NormalizeError> {
    if samples.is_empty() {
        return Err(NormalizeError::EmptyInput);
    }

    let count = samples.len() as f64;
    let mean = samples.iter().map(|&v| f64::from(v)).sum::<f64>() / count;

    let variance = samples
        .iter()
        .map(|&v| {
            let delta = f64::from(v) - mean;
            delta * delta
        })
        .sum::<f64>()
        / count;

    Ok(MeanStdDev::new(mean as f32, variance.sqrt() as f32))
}
