use tracing::debug;

use super::extrema::extrema;
use crate::plane::{NormalizeError, PlaneMut};
use crate::types::Extrema;

/// Whether a statistics pass should also rewrite the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Report statistics only; the plane is left untouched.
    Inspect,
    /// Rescale the plane into the unit range, then re-report.
    Rewrite,
}

/// Statistics gathered around a rescale pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RescaleReport {
    /// Extrema observed before any rewrite.
    pub before: Extrema,
    /// Extrema recomputed after the rewrite; `None` for [`Pass::Inspect`].
    pub after: Option<Extrema>,
}

/// Map every sample from `[min, max]` to `[0, 1]` in place.
///
/// The original minimum maps to 0.0 and the maximum to 1.0. The extrema are
/// taken as an argument so a caller can reuse a scan it already paid for.
///
/// # Errors
///
/// Returns [`NormalizeError::DegenerateRange`] when `min == max`, before
/// touching the buffer; dividing by a zero range would set every sample to
/// NaN or infinity.
pub fn rescale_unit(plane: &mut PlaneMut<'_>, extrema: Extrema) -> Result<(), NormalizeError> {
    let range = extrema.range();
    if range == 0.0 {
        return Err(NormalizeError::DegenerateRange { value: extrema.min });
    }

    for sample in plane.samples_mut() {
        *sample = (*sample - extrema.min) / range;
    }

    Ok(())
}

/// Scan the plane, optionally rescale it to the unit range, and report the
/// statistics of both states.
///
/// With [`Pass::Rewrite`] the extrema are recomputed after the rewrite so
/// the caller (and the log) can verify the plane actually landed on
/// `[0, 1]`. With [`Pass::Inspect`] this is a pure diagnostic pass.
///
/// Rewriting is not idempotent in general; only the inspect pass is safe to
/// repeat unconditionally.
pub fn rescale_report(
    plane: &mut PlaneMut<'_>,
    pass: Pass,
) -> Result<RescaleReport, NormalizeError> {
    let before = extrema(plane)?;
    debug!(
        min = before.min,
        max = before.max,
        range = before.range(),
        "plane statistics"
    );

    match pass {
        Pass::Inspect => Ok(RescaleReport {
            before,
            after: None,
        }),
        Pass::Rewrite => {
            rescale_unit(plane, before)?;

            let after = extrema(plane)?;
            debug!(
                min = after.min,
                max = after.max,
                range = after.range(),
                "plane statistics after rescale"
            );

            Ok(RescaleReport {
                before,
                after: Some(after),
            })
        }
    }
}
