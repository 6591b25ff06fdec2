use crate::error::{Result, TristimulusError};

use super::CurveInterpolator;

// ---------------------------------------------------------------------------
// Piecewise-linear interpolation – the guaranteed fallback tier
// ---------------------------------------------------------------------------

/// Piecewise-linear interpolation of a sampled curve.  Lowest fidelity,
/// but has no preconditions beyond two samples and never depends on an
/// optional capability.
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    pub fn new(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() < 2 {
            return Err(TristimulusError::TooFewSamples {
                required: 2,
                actual: xs.len(),
            });
        }
        debug_assert_eq!(xs.len(), ys.len());
        Ok(LinearInterpolator {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }
}

impl CurveInterpolator for LinearInterpolator {
    fn evaluate(&self, x: f64) -> f64 {
        lerp_lookup(&self.xs, &self.ys, x)
    }
}

/// Linear interpolation of `(xs, ys)` at `x`, clamping to the end values
/// outside the sampled range.  `xs` must be strictly increasing.
pub(crate) fn lerp_lookup(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    let n = xs.len();
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[n - 1] {
        return ys[n - 1];
    }

    let hi = xs.partition_point(|&v| v < x).clamp(1, n - 1);
    let lo = hi - 1;
    let t = (x - xs[lo]) / (xs[hi] - xs[lo]);
    ys[lo] + t * (ys[hi] - ys[lo])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_and_clamping() {
        let interp = LinearInterpolator::new(&[0.0, 10.0, 20.0], &[0.0, 100.0, 0.0]).unwrap();
        assert_eq!(interp.evaluate(5.0), 50.0);
        assert_eq!(interp.evaluate(15.0), 50.0);
        assert_eq!(interp.evaluate(10.0), 100.0);
        // outside the range clamps rather than extrapolating
        assert_eq!(interp.evaluate(-5.0), 0.0);
        assert_eq!(interp.evaluate(25.0), 0.0);
    }

    #[test]
    fn single_sample_rejected() {
        let err = LinearInterpolator::new(&[1.0], &[1.0]).unwrap_err();
        assert_eq!(
            err,
            TristimulusError::TooFewSamples {
                required: 2,
                actual: 1
            }
        );
    }
}
