use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::dataset::cmfs::reference_wavelengths;
use crate::spectral::SpectralDistribution;

// ---------------------------------------------------------------------------
// Relative illuminant SPDs over the 380–780 nm, 5 nm reference domain
// ---------------------------------------------------------------------------

/// CIE Standard Illuminant D65 relative SPD, 380–780 nm at 5 nm.
const D65_VALUES: [f64; 81] = [
    49.9755, 52.3118, 54.6482, 68.7015, 82.7549, 87.1204, 91.4860, 92.4589, 93.4318, 90.0570,
    86.6823, 95.7736, 104.865, 110.936, 117.008, 117.410, 117.812, 116.336, 114.861, 115.392,
    115.923, 112.367, 108.811, 109.082, 109.354, 108.578, 107.802, 106.296, 104.790, 106.239,
    107.689, 106.047, 104.405, 104.225, 104.046, 102.023, 100.000, 98.1671, 96.3342, 96.0611,
    95.7880, 92.2368, 88.6856, 89.3459, 90.0062, 89.8026, 89.5991, 88.6489, 87.6987, 85.4936,
    83.2886, 83.4939, 83.6992, 81.8630, 80.0268, 80.1207, 80.2146, 81.2462, 82.2778, 80.2810,
    78.2842, 74.0027, 69.7213, 70.6652, 71.6091, 72.9790, 74.3490, 67.9765, 61.6040, 65.7448,
    69.8856, 72.4863, 75.0870, 69.3398, 63.5927, 55.0054, 46.4182, 56.6118, 66.8054, 65.0941,
    63.3828,
];

/// CIE Standard Illuminant A relative SPD at `wavelength` nm, from the
/// Planckian closed form at T = 2848 K with c2 = 1.435e7 nm·K, normalised
/// to 100 at 560 nm.
fn illuminant_a(wavelength: f64) -> f64 {
    const C2: f64 = 1.435e7;
    const T: f64 = 2848.0;
    100.0
        * (560.0 / wavelength).powi(5)
        * ((C2 / (T * 560.0)).exp() - 1.0)
        / ((C2 / (T * wavelength)).exp() - 1.0)
}

static ILLUMINANTS: Lazy<BTreeMap<&'static str, SpectralDistribution>> = Lazy::new(|| {
    let domain = reference_wavelengths();
    let mut illuminants = BTreeMap::new();

    illuminants.insert(
        "E",
        SpectralDistribution::constant(domain.clone(), 100.0)
            .expect("bundled illuminant is valid"),
    );
    illuminants.insert(
        "A",
        SpectralDistribution::new(
            domain.clone(),
            domain.iter().map(|&l| illuminant_a(l)).collect(),
        )
        .expect("bundled illuminant is valid"),
    );
    illuminants.insert(
        "D65",
        SpectralDistribution::new(domain, D65_VALUES.to_vec())
            .expect("bundled illuminant is valid"),
    );

    illuminants
});

/// Look up a bundled relative illuminant SPD by name ("A", "D65", "E").
pub fn illuminant(name: &str) -> Option<&'static SpectralDistribution> {
    ILLUMINANTS.get(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bundled_illuminants_cover_the_reference_domain() {
        for name in ["A", "D65", "E"] {
            let spd = illuminant(name).unwrap();
            assert_eq!(spd.len(), 81, "{name}");
            assert_eq!(spd.start(), 380.0, "{name}");
            assert_eq!(spd.end(), 780.0, "{name}");
        }
    }

    #[test]
    fn illuminant_a_is_normalised_at_560_nm() {
        assert_relative_eq!(illuminant_a(560.0), 100.0, max_relative = 1e-12);
        assert_relative_eq!(illuminant_a(380.0), 9.7951, max_relative = 1e-4);
        assert_relative_eq!(illuminant_a(780.0), 241.6754, max_relative = 1e-4);
    }

    #[test]
    fn d65_is_normalised_at_560_nm() {
        let d65 = illuminant("D65").unwrap();
        assert_eq!(d65.value_at(560.0), Some(100.0));
    }
}
