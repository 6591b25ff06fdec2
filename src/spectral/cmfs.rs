use std::hash::Hasher;

use crate::error::{Result, TristimulusError};
use crate::spectral::distribution::{
    exact_sample_index, first_non_increasing, hash_f64_slice, is_uniform, SpectralShape,
};

// ---------------------------------------------------------------------------
// ColourMatchingFunctions – a standard observer's x̄, ȳ, z̄ channels
// ---------------------------------------------------------------------------

/// The three colour matching functions of a standard observer, sampled over
/// one shared wavelength domain.
///
/// Invariant, enforced at construction: all three channels have the same
/// length as the wavelength array, and the wavelengths are strictly
/// increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourMatchingFunctions {
    name: String,
    wavelengths: Vec<f64>,
    x_bar: Vec<f64>,
    y_bar: Vec<f64>,
    z_bar: Vec<f64>,
}

impl ColourMatchingFunctions {
    pub fn new(
        name: impl Into<String>,
        wavelengths: Vec<f64>,
        x_bar: Vec<f64>,
        y_bar: Vec<f64>,
        z_bar: Vec<f64>,
    ) -> Result<Self> {
        let n = wavelengths.len();
        if x_bar.len() != n || y_bar.len() != n || z_bar.len() != n {
            return Err(TristimulusError::MismatchedChannels);
        }
        if let Some(index) = first_non_increasing(&wavelengths) {
            return Err(TristimulusError::NonMonotonicDomain { index });
        }
        Ok(ColourMatchingFunctions {
            name: name.into(),
            wavelengths,
            x_bar,
            y_bar,
            z_bar,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelengths
    }

    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }

    pub fn start(&self) -> f64 {
        self.wavelengths.first().copied().unwrap_or(f64::NAN)
    }

    pub fn end(&self) -> f64 {
        self.wavelengths.last().copied().unwrap_or(f64::NAN)
    }

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

    pub fn is_uniform(&self) -> bool {
        is_uniform(&self.wavelengths)
    }

    /// The x̄, ȳ, z̄ channels in X, Y, Z order.
    pub fn channels(&self) -> [&[f64]; 3] {
        [&self.x_bar, &self.y_bar, &self.z_bar]
    }

    pub fn x_bar(&self) -> &[f64] {
        &self.x_bar
    }

    pub fn y_bar(&self) -> &[f64] {
        &self.y_bar
    }

    pub fn z_bar(&self) -> &[f64] {
        &self.z_bar
    }

    /// The tabulated `[x̄, ȳ, z̄]` triple at `wavelength`, if it is an exact
    /// sample point of the shared domain.
    pub fn triple_at(&self, wavelength: f64) -> Option<[f64; 3]> {
        exact_sample_index(&self.wavelengths, wavelength)
            .map(|i| [self.x_bar[i], self.y_bar[i], self.z_bar[i]])
    }

    /// A value-equality signature of the whole set (domain plus all three
    /// channels).  Two structurally equal sets share a signature; sets with
    /// different data do not collide in practice.
    pub fn signature(&self) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        hash_f64_slice(&self.wavelengths, &mut hasher);
        hash_f64_slice(&self.x_bar, &mut hasher);
        hash_f64_slice(&self.y_bar, &mut hasher);
        hash_f64_slice(&self.z_bar, &mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> ColourMatchingFunctions {
        ColourMatchingFunctions::new(
            "tiny",
            vec![400.0, 410.0, 420.0],
            vec![0.01, 0.02, 0.03],
            vec![0.1, 0.2, 0.3],
            vec![1.0, 2.0, 3.0],
        )
        .unwrap()
    }

    #[test]
    fn mismatched_channel_lengths_rejected() {
        let err = ColourMatchingFunctions::new(
            "bad",
            vec![400.0, 410.0],
            vec![0.1, 0.2],
            vec![0.1],
            vec![0.1, 0.2],
        )
        .unwrap_err();
        assert_eq!(err, TristimulusError::MismatchedChannels);
    }

    #[test]
    fn triple_lookup_at_sample_point() {
        let cmfs = tiny();
        assert_eq!(cmfs.triple_at(410.0), Some([0.02, 0.2, 2.0]));
        assert_eq!(cmfs.triple_at(415.0), None);
    }

    #[test]
    fn signature_distinguishes_data() {
        let a = tiny();
        let b = tiny();
        assert_eq!(a.signature(), b.signature());

        let c = ColourMatchingFunctions::new(
            "tiny",
            vec![400.0, 410.0, 420.0],
            vec![0.01, 0.02, 0.04],
            vec![0.1, 0.2, 0.3],
            vec![1.0, 2.0, 3.0],
        )
        .unwrap();
        assert_ne!(a.signature(), c.signature());
    }
}
