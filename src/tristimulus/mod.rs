//! Spectral → CIE XYZ conversion: integration and single-wavelength lookup.
//!
//! Control flow:
//! ```text
//!   SPD + CMFs (+ illuminant)          wavelength + CMFs
//!        │                                  │
//!        ▼                                  ▼
//!   ┌───────────┐                     ┌───────────┐
//!   │ resample  │                     │ XyzCache  │ probe by value signature
//!   └───────────┘                     └───────────┘
//!        │                                  │ miss
//!        ▼                                  ▼
//!   ┌───────────┐                     ┌───────────┐
//!   │ integrate │                     │interpolate│ Sprague / spline / linear
//!   └───────────┘                     └───────────┘
//!        │                                  │
//!        ▼                                  ▼
//!     [X, Y, Z]                          [X, Y, Z]
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::error::{Result, TristimulusError};
use crate::spectral::{resample_to, ColourMatchingFunctions, SpectralDistribution};

// ---------------------------------------------------------------------------
// Integrator
// ---------------------------------------------------------------------------

/// Convert a spectral power distribution to CIE XYZ tristimulus values
/// using the given colour matching functions and illuminant.
///
/// The SPD and illuminant are resampled to the CMF domain when their
/// domains differ (zero-extended outside their sampled range).  An absent
/// illuminant means equal energy: 1.0 at every wavelength of the CMF
/// domain.  The result is scaled so that integrating an equal-energy
/// illuminant against ȳ yields Y = 100.
///
/// No explicit Δλ factor appears in either sum: the sample step cancels
/// between the channel sums and the normalising sum, which is what makes
/// the result independent of how densely the shared domain is sampled.
/// Introducing a step factor on one side only would break that
/// cancellation.
///
/// Fails with [`TristimulusError::ZeroNormalisation`] if Σ(ȳ·illuminant)
/// is zero over the domain (an illuminant that is identically zero); that
/// is a precondition violation, not a recoverable state.
pub fn spectral_to_xyz(
    spd: &SpectralDistribution,
    cmfs: &ColourMatchingFunctions,
    illuminant: Option<&SpectralDistribution>,
) -> Result<[f64; 3]> {
    let domain = cmfs.wavelengths();
    let spd = resample_to(spd, domain);

    let illuminant = match illuminant {
        Some(illuminant) => resample_to(illuminant, domain),
        None => Cow::Owned(SpectralDistribution::constant(domain.to_vec(), 1.0)?),
    };

    let spd = spd.values();
    let illuminant = illuminant.values();
    let [x_bar, y_bar, z_bar] = cmfs.channels();

    let normalising_sum: f64 = y_bar
        .iter()
        .zip(illuminant)
        .map(|(c, i)| c * i)
        .sum();
    if normalising_sum.abs() <= f64::EPSILON {
        return Err(TristimulusError::ZeroNormalisation);
    }
    let normalising_factor = 100.0 / normalising_sum;

    let mut xyz = [0.0; 3];
    for (slot, channel) in xyz.iter_mut().zip([x_bar, y_bar, z_bar]) {
        *slot = normalising_factor
            * spd
                .iter()
                .zip(channel)
                .zip(illuminant)
                .map(|((s, c), i)| s * c * i)
                .sum::<f64>();
    }
    Ok(xyz)
}

// ---------------------------------------------------------------------------
// WavelengthLookupCache
// ---------------------------------------------------------------------------

/// Key of one memoized lookup: the wavelength's bit pattern plus the
/// value-equality signature of the CMF set.  Keying by value means two
/// structurally equal CMF instances hit the same entry, while sets with
/// different data never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    wavelength_bits: u64,
    cmfs_signature: u64,
}

/// Memoization of single-wavelength XYZ lookups.
///
/// Entries are created lazily and never evicted; the wavelengths and CMF
/// sets used in practice form a small, finite population, so unbounded
/// growth is accepted.  The mutex makes the read-check-insert sequence
/// atomic, so the cache is safe to share across threads.
///
/// [`wavelength_to_xyz`] uses a process-wide instance; tests and embedders
/// that want isolation can inject their own through
/// [`wavelength_to_xyz_with_cache`].
#[derive(Debug, Default)]
pub struct XyzCache {
    entries: Mutex<HashMap<CacheKey, [f64; 3]>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl XyzCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memoized entries.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Lookups that had to compute their result.  One miss corresponds to
    /// one invocation of the interpolation (or exact-lookup) path.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    fn get_or_compute(
        &self,
        key: CacheKey,
        compute: impl FnOnce() -> Result<[f64; 3]>,
    ) -> Result<[f64; 3]> {
        // The lock is held across the computation so concurrent callers
        // cannot race the check-then-insert.
        let mut entries = self.entries.lock().expect("cache mutex poisoned");
        if let Some(xyz) = entries.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(*xyz);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let xyz = compute()?;
        entries.insert(key, xyz);
        Ok(xyz)
    }
}

static LOOKUP_CACHE: Lazy<XyzCache> = Lazy::new(XyzCache::new);

// ---------------------------------------------------------------------------
// Single-wavelength lookup
// ---------------------------------------------------------------------------

/// Convert a single wavelength to its CIE XYZ triple under the given
/// colour matching functions, memoizing through the process-wide cache.
///
/// The triple is returned exactly as tabulated when the wavelength is a
/// sample point of the CMF domain; otherwise it is interpolated, with
/// Sprague interpolation for uniform domains and a cubic spline (or the
/// linear fallback) for non-uniform ones.
pub fn wavelength_to_xyz(wavelength: f64, cmfs: &ColourMatchingFunctions) -> Result<[f64; 3]> {
    wavelength_to_xyz_with_cache(wavelength, cmfs, &LOOKUP_CACHE)
}

/// [`wavelength_to_xyz`] against an injected cache instance.
pub fn wavelength_to_xyz_with_cache(
    wavelength: f64,
    cmfs: &ColourMatchingFunctions,
    cache: &XyzCache,
) -> Result<[f64; 3]> {
    let (start, end) = (cmfs.start(), cmfs.end());
    if wavelength < start || wavelength > end {
        return Err(TristimulusError::WavelengthOutOfRange {
            wavelength,
            start,
            end,
        });
    }

    let key = CacheKey {
        wavelength_bits: wavelength.to_bits(),
        cmfs_signature: cmfs.signature(),
    };

    // Exact samples skip interpolation but still go through the cache, so
    // every lookup behaves uniformly.
    cache.get_or_compute(key, || {
        if let Some(triple) = cmfs.triple_at(wavelength) {
            return Ok(triple);
        }

        let uniform = cmfs.is_uniform();
        let mut xyz = [0.0; 3];
        for (slot, channel) in xyz.iter_mut().zip(cmfs.channels()) {
            let interpolator =
                crate::interpolate::select_interpolator(cmfs.wavelengths(), channel, uniform)?;
            *slot = interpolator.evaluate(wavelength);
        }
        Ok(xyz)
    })
}
