//! Spectral data layer: distributions, CMF sets, and domain alignment.
//!
//! Architecture:
//! ```text
//!  measured / tabulated SPD
//!        │
//!        ▼
//!   ┌───────────────────────┐
//!   │ SpectralDistribution  │  wavelength + value arrays, shape queries
//!   └───────────────────────┘
//!        │
//!        ▼
//!   ┌───────────────────────┐
//!   │       resample        │  align to a CMF domain (zero-extend)
//!   └───────────────────────┘
//!        │
//!        ▼
//!   ┌───────────────────────┐
//!   │ ColourMatchingFunctions│  x̄ ȳ z̄ over one shared domain
//!   └───────────────────────┘
//! ```

pub mod cmfs;
pub mod distribution;
pub mod resample;

pub use cmfs::ColourMatchingFunctions;
pub use distribution::{SpectralDistribution, SpectralShape};
pub use resample::resample_to;
