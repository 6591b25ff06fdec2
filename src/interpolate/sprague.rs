use crate::error::{Result, TristimulusError};
use crate::spectral::distribution::DOMAIN_EPSILON;

use super::CurveInterpolator;

// ---------------------------------------------------------------------------
// Sprague (1880) fifth-order interpolation
// ---------------------------------------------------------------------------

/// Coefficient rows used to synthesize the two extension points on each side
/// of the data, divided by 209.  Rows 0 and 1 produce the points at
/// positions -2 and -1; rows 2 and 3 the points at n and n+1.
const BOUNDARY_COEFFICIENTS: [[f64; 6]; 4] = [
    [884.0, -1960.0, 3033.0, -2648.0, 1080.0, -180.0],
    [508.0, -540.0, 488.0, -367.0, 144.0, -24.0],
    [-24.0, 144.0, -367.0, 488.0, -540.0, 508.0],
    [-180.0, 1080.0, -2648.0, 3033.0, -1960.0, 884.0],
];

/// Fifth-order polynomial interpolation on a six-point local stencil,
/// recommended by the CIE for uniformly sampled colorimetric data.
///
/// Near the domain boundaries, where a full six-point stencil does not
/// exist, two synthetic edge points are derived on each side from the
/// existing data rather than truncating the stencil.  This keeps the
/// interpolant free of discontinuities at the first and last few samples,
/// which is the method's main advantage over a plain cubic spline for
/// smooth, band-limited curves.
///
/// Requires a uniform domain with at least six samples.
#[derive(Debug, Clone)]
pub struct SpragueInterpolator {
    x0: f64,
    step: f64,
    /// Sampled values with two synthetic extension points on each side.
    padded: Vec<f64>,
}

impl SpragueInterpolator {
    pub fn new(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() < 6 {
            return Err(TristimulusError::TooFewSamples {
                required: 6,
                actual: xs.len(),
            });
        }
        debug_assert_eq!(xs.len(), ys.len());
        let step = xs[1] - xs[0];
        debug_assert!(xs
            .windows(2)
            .all(|w| ((w[1] - w[0]) - step).abs() < DOMAIN_EPSILON));

        let head: Vec<f64> = BOUNDARY_COEFFICIENTS[..2]
            .iter()
            .map(|row| dot6(row, &ys[..6]) / 209.0)
            .collect();
        let tail: Vec<f64> = BOUNDARY_COEFFICIENTS[2..]
            .iter()
            .map(|row| dot6(row, &ys[ys.len() - 6..]) / 209.0)
            .collect();

        let mut padded = Vec::with_capacity(ys.len() + 4);
        padded.extend_from_slice(&head);
        padded.extend_from_slice(ys);
        padded.extend_from_slice(&tail);

        Ok(SpragueInterpolator {
            x0: xs[0],
            step,
            padded,
        })
    }
}

impl CurveInterpolator for SpragueInterpolator {
    fn evaluate(&self, x: f64) -> f64 {
        let n = self.padded.len() - 4;
        let t = (x - self.x0) / self.step;

        // Interval index into the original samples; the final sample
        // evaluates as t = 1 on the last interval.
        let i = (t.floor() as isize).clamp(0, n as isize - 2) as usize;
        let t = t - i as f64;

        // Index into the padded array, which carries two extra points on
        // each side.
        let r = &self.padded;
        let j = i + 2;

        let a0 = r[j];
        let a1 = (2.0 * r[j - 2] - 16.0 * r[j - 1] + 16.0 * r[j + 1] - 2.0 * r[j + 2]) / 24.0;
        let a2 = (-r[j - 2] + 16.0 * r[j - 1] - 30.0 * r[j] + 16.0 * r[j + 1] - r[j + 2]) / 24.0;
        let a3 = (-9.0 * r[j - 2] + 39.0 * r[j - 1] - 70.0 * r[j] + 66.0 * r[j + 1]
            - 33.0 * r[j + 2]
            + 7.0 * r[j + 3])
            / 24.0;
        let a4 = (13.0 * r[j - 2] - 64.0 * r[j - 1] + 126.0 * r[j] - 124.0 * r[j + 1]
            + 61.0 * r[j + 2]
            - 12.0 * r[j + 3])
            / 24.0;
        let a5 = (-5.0 * r[j - 2] + 25.0 * r[j - 1] - 50.0 * r[j] + 50.0 * r[j + 1]
            - 25.0 * r[j + 2]
            + 5.0 * r[j + 3])
            / 24.0;

        a0 + t * (a1 + t * (a2 + t * (a3 + t * (a4 + t * a5))))
    }
}

fn dot6(coefficients: &[f64; 6], values: &[f64]) -> f64 {
    coefficients
        .iter()
        .zip(values)
        .map(|(c, v)| c * v)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_few_samples_rejected() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let err = SpragueInterpolator::new(&xs, &xs).unwrap_err();
        assert_eq!(
            err,
            TristimulusError::TooFewSamples {
                required: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn exact_at_sample_points() {
        let xs: Vec<f64> = (0..10).map(|i| 380.0 + 5.0 * i as f64).collect();
        let ys: Vec<f64> = (0..10).map(|i| (i as f64 * 0.7).sin()).collect();
        let interp = SpragueInterpolator::new(&xs, &ys).unwrap();
        for (x, y) in xs.iter().zip(&ys) {
            assert!((interp.evaluate(*x) - y).abs() < 1e-12);
        }
    }

    #[test]
    fn exact_on_linear_data_everywhere() {
        // The boundary-extension rows reproduce affine data exactly, so the
        // first and last intervals are covered too.
        let xs: Vec<f64> = (0..8).map(|i| i as f64).collect();
        let ys: Vec<f64> = xs.iter().map(|&x| 3.0 * x - 1.5).collect();
        let interp = SpragueInterpolator::new(&xs, &ys).unwrap();
        for q in [0.25, 0.9, 3.5, 6.1, 6.99] {
            assert!((interp.evaluate(q) - (3.0 * q - 1.5)).abs() < 1e-9);
        }
    }

    #[test]
    fn exact_on_cubic_in_the_interior() {
        let cubic = |x: f64| 0.3 * x.powi(3) - 2.0 * x.powi(2) + x + 5.0;
        let xs: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let ys: Vec<f64> = xs.iter().map(|&x| cubic(x)).collect();
        let interp = SpragueInterpolator::new(&xs, &ys).unwrap();
        // Interior intervals (full real stencil) reproduce quintics and
        // below exactly.
        for q in [2.25, 2.5, 3.7, 4.33, 6.9] {
            assert!((interp.evaluate(q) - cubic(q)).abs() < 1e-9);
        }
    }
}
