use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::error::{Result, TristimulusError};

/// Tolerance used when comparing wavelengths and step sizes.
pub(crate) const DOMAIN_EPSILON: f64 = 1e-9;

// ---------------------------------------------------------------------------
// SpectralShape – the declared domain of a distribution
// ---------------------------------------------------------------------------

/// The `(start, end, step)` description of a spectral domain, in nanometres.
///
/// `step` is the spacing of the first sample pair; the domain as a whole is
/// uniform only if every consecutive pair shares that spacing (see
/// [`SpectralDistribution::is_uniform`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpectralShape {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

// ---------------------------------------------------------------------------
// SpectralDistribution – ordered wavelength → value mapping
// ---------------------------------------------------------------------------

/// An ordered mapping from wavelength (nm) to a scalar value, stored as
/// parallel arrays.
///
/// Invariant, enforced at construction: both arrays have equal length and
/// the wavelengths are strictly increasing.  The core never mutates a
/// distribution after construction; resampling produces a new one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpectralDistribution {
    wavelengths: Vec<f64>,
    values: Vec<f64>,
}

impl SpectralDistribution {
    /// Build a distribution, validating the domain invariants.
    pub fn new(wavelengths: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        if wavelengths.len() != values.len() {
            return Err(TristimulusError::LengthMismatch {
                wavelengths: wavelengths.len(),
                values: values.len(),
            });
        }
        if let Some(index) = first_non_increasing(&wavelengths) {
            return Err(TristimulusError::NonMonotonicDomain { index });
        }
        Ok(SpectralDistribution {
            wavelengths,
            values,
        })
    }

    /// Build a distribution holding `value` at every given wavelength.
    /// Used for the synthetic equal-energy illuminant.
    pub fn constant(wavelengths: Vec<f64>, value: f64) -> Result<Self> {
        let values = vec![value; wavelengths.len()];
        Self::new(wavelengths, values)
    }

    /// Construct from arrays already known to satisfy the invariants
    /// (e.g. a validated CMF domain).
    pub(crate) fn from_raw_parts(wavelengths: Vec<f64>, values: Vec<f64>) -> Self {
        debug_assert_eq!(wavelengths.len(), values.len());
        debug_assert!(first_non_increasing(&wavelengths).is_none());
        SpectralDistribution {
            wavelengths,
            values,
        }
    }

    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelengths
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }

    /// First sampled wavelength.
    pub fn start(&self) -> f64 {
        self.wavelengths.first().copied().unwrap_or(f64::NAN)
    }

    /// Last sampled wavelength.
    pub fn end(&self) -> f64 {
        self.wavelengths.last().copied().unwrap_or(f64::NAN)
    }

    /// The declared `(start, end, step)` shape of this distribution.
    pub fn shape(&self) -> SpectralShape {
        let step = if self.wavelengths.len() >= 2 {
            self.wavelengths[1] - self.wavelengths[0]
        } else {
            0.0
        };
        SpectralShape {
            start: self.start(),
            end: self.end(),
            step,
        }
    }

    /// True iff every consecutive wavelength pair shares the declared step.
    pub fn is_uniform(&self) -> bool {
        is_uniform(&self.wavelengths)
    }

    /// The sampled value at `wavelength`, if it is an exact sample point.
    pub fn value_at(&self, wavelength: f64) -> Option<f64> {
        exact_sample_index(&self.wavelengths, wavelength).map(|i| self.values[i])
    }

    /// A value-equality signature of this distribution: two distributions
    /// with identical domains and values share a signature, regardless of
    /// which instance they are.
    pub fn signature(&self) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        hash_f64_slice(&self.wavelengths, &mut hasher);
        hash_f64_slice(&self.values, &mut hasher);
        hasher.finish()
    }
}

// ---------------------------------------------------------------------------
// Domain helpers shared with the CMF set
// ---------------------------------------------------------------------------

/// Index of the first wavelength that fails strict monotonicity, if any.
pub(crate) fn first_non_increasing(wavelengths: &[f64]) -> Option<usize> {
    (1..wavelengths.len()).find(|&i| wavelengths[i] <= wavelengths[i - 1])
}

pub(crate) fn is_uniform(wavelengths: &[f64]) -> bool {
    if wavelengths.len() < 3 {
        return true;
    }
    let step = wavelengths[1] - wavelengths[0];
    wavelengths
        .windows(2)
        .all(|w| ((w[1] - w[0]) - step).abs() < DOMAIN_EPSILON)
}

/// Binary-search for `wavelength` as an exact sample point.
pub(crate) fn exact_sample_index(wavelengths: &[f64], wavelength: f64) -> Option<usize> {
    let i = wavelengths.partition_point(|&w| w < wavelength - DOMAIN_EPSILON);
    if i < wavelengths.len() && (wavelengths[i] - wavelength).abs() < DOMAIN_EPSILON {
        Some(i)
    } else {
        None
    }
}

/// Hash floats by their bit pattern so structurally equal data hashes
/// identically.
pub(crate) fn hash_f64_slice<H: Hasher>(slice: &[f64], hasher: &mut H) {
    slice.len().hash(hasher);
    for v in slice {
        v.to_bits().hash(hasher);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> SpectralDistribution {
        SpectralDistribution::new(
            vec![380.0, 385.0, 390.0, 395.0],
            vec![0.1, 0.2, 0.3, 0.4],
        )
        .unwrap()
    }

    #[test]
    fn shape_reports_declared_domain() {
        let sd = ramp();
        let shape = sd.shape();
        assert_eq!(shape.start, 380.0);
        assert_eq!(shape.end, 395.0);
        assert_eq!(shape.step, 5.0);
        assert!(sd.is_uniform());
    }

    #[test]
    fn non_uniform_domain_detected() {
        let sd =
            SpectralDistribution::new(vec![380.0, 385.0, 400.0], vec![1.0, 2.0, 3.0]).unwrap();
        assert!(!sd.is_uniform());
    }

    #[test]
    fn non_monotonic_domain_rejected() {
        let err = SpectralDistribution::new(vec![380.0, 380.0, 390.0], vec![1.0, 2.0, 3.0])
            .unwrap_err();
        assert_eq!(err, TristimulusError::NonMonotonicDomain { index: 1 });
    }

    #[test]
    fn length_mismatch_rejected() {
        let err = SpectralDistribution::new(vec![380.0, 385.0], vec![1.0]).unwrap_err();
        assert_eq!(
            err,
            TristimulusError::LengthMismatch {
                wavelengths: 2,
                values: 1
            }
        );
    }

    #[test]
    fn exact_sample_lookup() {
        let sd = ramp();
        assert_eq!(sd.value_at(385.0), Some(0.2));
        assert_eq!(sd.value_at(386.0), None);
    }

    #[test]
    fn signature_follows_values_not_identity() {
        let a = ramp();
        let b = ramp();
        assert_eq!(a.signature(), b.signature());

        let c = SpectralDistribution::new(
            vec![380.0, 385.0, 390.0, 395.0],
            vec![0.1, 0.2, 0.3, 0.5],
        )
        .unwrap();
        assert_ne!(a.signature(), c.signature());
    }
}
