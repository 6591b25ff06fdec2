//! Continuous estimates of sampled spectral curves.
//!
//! Three tiers, tried in preference order:
//! 1. Sprague (1880) for uniformly sampled data, per CIE recommendation;
//! 2. a natural cubic spline for non-uniform data, when the `cubic-spline`
//!    feature is enabled;
//! 3. piecewise-linear, which never depends on an optional capability and
//!    is therefore the guaranteed final fallback.
//!
//! Falling through to tier 3 for a non-uniform domain logs a non-fatal
//! warning; the computation still completes.

pub mod linear;
pub mod sprague;
#[cfg(feature = "cubic-spline")]
pub mod spline;

pub use linear::LinearInterpolator;
pub use sprague::SpragueInterpolator;
#[cfg(feature = "cubic-spline")]
pub use spline::CubicSplineInterpolator;

use crate::error::Result;

/// A continuous estimate of a sampled curve at arbitrary positions inside
/// its sampled range.
pub trait CurveInterpolator {
    /// Evaluate the curve at `x`.  `x` must lie within the sampled range;
    /// callers are expected to have range-checked already.
    fn evaluate(&self, x: f64) -> f64;
}

/// Build the preferred available interpolator for one sampled channel.
///
/// `uniform` is the domain uniformity of the data, decided once by the
/// caller so that all three channels of a CMF set select the same tier.
pub fn select_interpolator(
    wavelengths: &[f64],
    values: &[f64],
    uniform: bool,
) -> Result<Box<dyn CurveInterpolator>> {
    if uniform {
        return Ok(Box::new(SpragueInterpolator::new(wavelengths, values)?));
    }

    #[cfg(feature = "cubic-spline")]
    {
        return Ok(Box::new(CubicSplineInterpolator::new(wavelengths, values)?));
    }

    #[cfg(not(feature = "cubic-spline"))]
    {
        log::warn!(
            "cubic-spline interpolation is unavailable, \
             using linear interpolation for a non-uniform domain"
        );
        return Ok(Box::new(LinearInterpolator::new(wavelengths, values)?));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_domain_selects_sprague_exactness() {
        // Sprague reproduces the samples themselves; a spline or linear
        // interpolator would too, but an interior quintic check separates
        // the tiers.
        let xs: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let ys: Vec<f64> = xs.iter().map(|&x| x * x * x).collect();
        let interp = select_interpolator(&xs, &ys, true).unwrap();
        let q = 4.5_f64;
        assert!((interp.evaluate(q) - q.powi(3)).abs() < 1e-9);
    }

    #[test]
    fn non_uniform_domain_still_interpolates() {
        let xs = [0.0, 1.0, 3.0, 4.0, 7.0, 9.0];
        let ys = [0.0, 1.0, 3.0, 4.0, 7.0, 9.0];
        let interp = select_interpolator(&xs, &ys, false).unwrap();
        // Both the spline and the linear fallback are exact on linear data.
        assert!((interp.evaluate(5.5) - 5.5).abs() < 1e-9);
    }
}
