use std::borrow::Cow;

use crate::interpolate::linear::lerp_lookup;
use crate::spectral::distribution::{exact_sample_index, SpectralDistribution};

// ---------------------------------------------------------------------------
// Domain resampling (zero-extend policy)
// ---------------------------------------------------------------------------

/// Align `sd` to the `target` wavelength domain.
///
/// If the source already covers exactly the target domain it is returned
/// borrowed, without copying.  Otherwise a new distribution over exactly the
/// target wavelengths is built: inside the source range a target wavelength
/// takes its exact sampled value when present and a linear interpolation of
/// the bracketing samples otherwise; outside the source range the value is
/// zero.  An SPD or illuminant that does not cover a CMF's full range thus
/// contributes nothing outside its known range instead of failing.
pub fn resample_to<'a>(
    sd: &'a SpectralDistribution,
    target: &[f64],
) -> Cow<'a, SpectralDistribution> {
    if sd.wavelengths() == target {
        return Cow::Borrowed(sd);
    }

    let start = sd.start();
    let end = sd.end();
    let values = target
        .iter()
        .map(|&w| {
            if sd.is_empty() || w < start || w > end {
                0.0
            } else if let Some(i) = exact_sample_index(sd.wavelengths(), w) {
                sd.values()[i]
            } else {
                lerp_lookup(sd.wavelengths(), sd.values(), w)
            }
        })
        .collect();

    Cow::Owned(SpectralDistribution::from_raw_parts(
        target.to_vec(),
        values,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_domain_is_borrowed() {
        let sd =
            SpectralDistribution::new(vec![380.0, 385.0, 390.0], vec![1.0, 2.0, 3.0]).unwrap();
        let out = resample_to(&sd, &[380.0, 385.0, 390.0]);
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn outside_source_range_is_zero_filled() {
        let sd = SpectralDistribution::new(vec![385.0, 390.0], vec![2.0, 3.0]).unwrap();
        let out = resample_to(&sd, &[375.0, 380.0, 385.0, 390.0, 395.0]);
        assert_eq!(out.values(), &[0.0, 0.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    fn inside_source_range_is_interpolated() {
        let sd = SpectralDistribution::new(vec![380.0, 390.0], vec![1.0, 3.0]).unwrap();
        let out = resample_to(&sd, &[380.0, 385.0, 390.0]);
        assert_eq!(out.values(), &[1.0, 2.0, 3.0]);
    }
}
