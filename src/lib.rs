//! Conversion of spectral power distributions to CIE XYZ tristimulus
//! values using standard-observer colour matching functions and an
//! illuminant spectrum.
//!
//! The two entry points are [`spectral_to_xyz`], which integrates an SPD
//! against a CMF set and illuminant over a shared domain, and
//! [`wavelength_to_xyz`], which looks up (or interpolates) the XYZ triple
//! of a single wavelength through a process-wide memoization cache.
//!
//! ```
//! use tristimulus::{dataset, spectral_to_xyz, wavelength_to_xyz, SpectralDistribution};
//!
//! let cmfs = dataset::cie_1931_2_degree();
//!
//! let spd = SpectralDistribution::new(
//!     vec![380.0, 385.0, 390.0],
//!     vec![0.06, 0.06, 0.06],
//! )?;
//! let xyz = spectral_to_xyz(&spd, cmfs, None)?;
//! assert!(xyz[1] > 0.0);
//!
//! let triple = wavelength_to_xyz(480.0, cmfs)?;
//! assert_eq!(triple, [0.09564, 0.13902, 0.81295]);
//! # Ok::<(), tristimulus::TristimulusError>(())
//! ```
//!
//! The computation core is synchronous and deterministic.  The only shared
//! mutable state is the wavelength lookup cache, which is internally
//! synchronised; see [`XyzCache`].

pub mod dataset;
pub mod error;
pub mod interpolate;
pub mod spectral;
pub mod tristimulus;

pub use error::TristimulusError;
pub use spectral::{ColourMatchingFunctions, SpectralDistribution, SpectralShape};
pub use crate::tristimulus::{
    spectral_to_xyz, wavelength_to_xyz, wavelength_to_xyz_with_cache, XyzCache,
};
