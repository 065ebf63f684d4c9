//! Plane normalization kernel
//!
//! Two in-place normalization paths over a single-channel float plane: a
//! linear rescale into the unit range, and a z-score rewrite driven by the
//! plane's mean and standard deviation. Each call is synchronous, stateless
//! and pure arithmetic; the only allocation is the short-lived scratch copy
//! taken by the z-score path.

mod extrema;
mod rescale;
mod zscore;

pub use extrema::{extrema, extrema_of, mean_std_dev};
pub use rescale::{Pass, RescaleReport, rescale_report, rescale_unit};
pub use zscore::zscore;

use crate::plane::{NormalizeError, PlaneMut};
use crate::types::MeanStdDev;

/// Everything a full normalization run computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizeOutcome {
    /// Before/after extrema of the unit-range rescale pass.
    pub rescale: RescaleReport,
    /// Mean/stddev of the z-score pass, when it ran.
    pub zscore: Option<MeanStdDev>,
}

/// Full normalization run: rescale to the unit range, then apply the
/// z-score pass when the input was not already unit-normalized.
///
/// A plane whose values already spanned `[0, 1]` is left as the identity
/// rescale produced it; anything else additionally gets the mean/stddev
/// rewrite, so the final samples are z-scores in that case.
///
/// # Errors
///
/// Returns [`NormalizeError::DegenerateRange`] for constant input; neither
/// pass has a defined result there.
pub fn normalize(plane: &mut PlaneMut<'_>) -> Result<NormalizeOutcome, NormalizeError> {
    let rescale = rescale_report(plane, Pass::Rewrite)?;

    let zscore = if rescale.before.is_unit_range() {
        None
    } else {
        Some(zscore::zscore(plane)?)
    };

    Ok(NormalizeOutcome { rescale, zscore })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dimensions;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;

    #[test]
    fn test_normalize_applies_zscore_to_unnormalized_plane() {
        let mut samples = vec![2.0_f32, 4.0, 6.0, 8.0];
        let mut plane = PlaneMut::new(&mut samples, Dimensions::new(2, 2)).unwrap();

        let outcome = normalize(&mut plane).unwrap();

        assert_eq!((outcome.rescale.before.min, outcome.rescale.before.max), (2.0, 8.0));
        assert!(outcome.rescale.after.unwrap().is_unit_range());

        // Input was outside the unit range, so the z-score pass ran over
        // the rescaled samples
        let stats = outcome.zscore.unwrap();
        assert_relative_eq!(stats.mean, 0.5, epsilon = 1e-6);

        let final_stats = mean_std_dev(&samples).unwrap();
        assert_relative_eq!(final_stats.mean, 0.0, epsilon = 1e-5);
        assert_relative_eq!(final_stats.std_dev, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_normalize_skips_zscore_for_unit_range_plane() {
        let mut samples = vec![0.0_f32, 0.25, 0.75, 1.0];
        let mut plane = PlaneMut::new(&mut samples, Dimensions::new(2, 2)).unwrap();

        let outcome = normalize(&mut plane).unwrap();

        assert!(outcome.zscore.is_none());
        // Rescaling a [0, 1] plane is the identity
        let expected = [0.0, 0.25, 0.75, 1.0];
        for (got, want) in samples.iter().zip(expected) {
            assert_relative_eq!(*got, want, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_normalize_constant_plane_fails() {
        let mut samples = vec![5.0_f32; 4];
        let mut plane = PlaneMut::new(&mut samples, Dimensions::new(2, 2)).unwrap();

        let result = normalize(&mut plane);
        assert_matches!(result, Err(NormalizeError::DegenerateRange { value }) if value == 5.0);
    }
}
