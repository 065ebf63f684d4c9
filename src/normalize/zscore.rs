use tracing::debug;

use super::extrema::mean_std_dev;
use super::rescale::{Pass, rescale_report};
use crate::plane::{NormalizeError, PlaneMut};
use crate::types::MeanStdDev;

/// Rewrite every sample as its z-score, `(sample - mean) / stddev`.
///
/// The plane is duplicated into a scratch copy first; statistics are taken
/// from the copy and the rewrite reads from the copy while writing into the
/// original, so partially written output never feeds back into the input.
/// The scratch copy is dropped on every exit path.
///
/// Applying this twice is not a no-op: a second pass re-centers the already
/// z-scored data.
///
/// # Errors
///
/// Returns [`NormalizeError::DegenerateRange`] when the standard deviation
/// is zero (constant input), before touching the buffer.
pub fn zscore(plane: &mut PlaneMut<'_>) -> Result<MeanStdDev, NormalizeError> {
    let scratch = plane.samples().to_vec();

    let stats = mean_std_dev(&scratch)?;
    if stats.std_dev == 0.0 {
        return Err(NormalizeError::DegenerateRange { value: stats.mean });
    }

    for (out, &src) in plane.samples_mut().iter_mut().zip(scratch.iter()) {
        *out = (src - stats.mean) / stats.std_dev;
    }

    debug!(
        mean = stats.mean,
        std_dev = stats.std_dev,
        "applied z-score normalization"
    );

    // Diagnostic pass over the rewritten plane; result only feeds the log
    rescale_report(plane, Pass::Inspect)?;

    Ok(stats)
}
