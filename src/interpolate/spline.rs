use crate::error::{Result, TristimulusError};

use super::CurveInterpolator;

// ---------------------------------------------------------------------------
// Natural cubic spline – high-precision tier for non-uniform domains
// ---------------------------------------------------------------------------

/// A natural cubic spline: piecewise cubic polynomials with continuous
/// first and second derivatives, and zero second derivative at both ends.
///
/// Used for non-uniformly sampled data, where Sprague interpolation does
/// not apply.
#[derive(Debug, Clone)]
pub struct CubicSplineInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at each knot, computed at construction.
    y2s: Vec<f64>,
}

impl CubicSplineInterpolator {
    pub fn new(xs: &[f64], ys: &[f64]) -> Result<Self> {
        let n = xs.len();
        if n < 3 {
            return Err(TristimulusError::TooFewSamples {
                required: 3,
                actual: n,
            });
        }
        debug_assert_eq!(xs.len(), ys.len());

        // Tridiagonal solve for the natural spline's second derivatives.
        let mut y2s = vec![0.0; n];
        let mut u = vec![0.0; n - 1];
        for i in 1..n - 1 {
            let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
            let p = sig * y2s[i - 1] + 2.0;
            y2s[i] = (sig - 1.0) / p;
            u[i] = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i])
                - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
            u[i] = (6.0 * u[i] / (xs[i + 1] - xs[i - 1]) - sig * u[i - 1]) / p;
        }
        for k in (0..n - 2).rev() {
            y2s[k + 1] = y2s[k + 1] * y2s[k + 2] + u[k + 1];
        }

        Ok(CubicSplineInterpolator {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            y2s,
        })
    }
}

impl CurveInterpolator for CubicSplineInterpolator {
    fn evaluate(&self, x: f64) -> f64 {
        let n = self.xs.len();
        let hi = self.xs.partition_point(|&v| v < x).clamp(1, n - 1);
        let lo = hi - 1;

        let h = self.xs[hi] - self.xs[lo];
        let a = (self.xs[hi] - x) / h;
        let b = (x - self.xs[lo]) / h;

        a * self.ys[lo]
            + b * self.ys[hi]
            + (h * h / 6.0)
                * ((a * a - 1.0) * a * self.y2s[lo] + (b * b - 1.0) * b * self.y2s[hi])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_at_knots() {
        let xs = [380.0, 385.0, 401.0, 420.5, 460.0, 500.0];
        let ys = [0.1, 0.6, 0.3, 0.9, 0.2, 0.05];
        let spline = CubicSplineInterpolator::new(&xs, &ys).unwrap();
        for (x, y) in xs.iter().zip(&ys) {
            assert!((spline.evaluate(*x) - y).abs() < 1e-12);
        }
    }

    #[test]
    fn exact_on_linear_data() {
        let xs = [0.0, 1.0, 2.5, 4.0, 7.0];
        let ys: Vec<f64> = xs.iter().map(|&x| 2.0 * x + 1.0).collect();
        let spline = CubicSplineInterpolator::new(&xs, &ys).unwrap();
        for q in [0.5, 1.9, 3.0, 6.2] {
            assert!((spline.evaluate(q) - (2.0 * q + 1.0)).abs() < 1e-12);
        }
    }

    #[test]
    fn close_to_smooth_function_between_knots() {
        let xs: Vec<f64> = (0..20).map(|i| i as f64 * 0.5).collect();
        let ys: Vec<f64> = xs.iter().map(|&x| x.sin()).collect();
        let spline = CubicSplineInterpolator::new(&xs, &ys).unwrap();
        for q in [1.1, 3.3, 5.25, 8.8] {
            assert!((spline.evaluate(q) - q.sin()).abs() < 1e-3);
        }
    }

    #[test]
    fn too_few_samples_rejected() {
        let err = CubicSplineInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            TristimulusError::TooFewSamples {
                required: 3,
                actual: 2
            }
        );
    }
}
