use thiserror::Error;

/// Errors raised by the spectral computation core.
///
/// Domain errors and precondition violations are fatal to the call that
/// raised them; there is no transient failure mode to retry against.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TristimulusError {
    /// Requested wavelength lies outside the colour matching functions'
    /// sampled range.  The boundary wavelengths themselves are valid.
    #[error("'{wavelength} nm' wavelength not in '{start} - {end}' nm supported wavelengths range")]
    WavelengthOutOfRange {
        wavelength: f64,
        start: f64,
        end: f64,
    },

    /// Wavelength and value arrays disagree in length.
    #[error("spectral data has {wavelengths} wavelengths but {values} values")]
    LengthMismatch { wavelengths: usize, values: usize },

    /// Wavelengths must be strictly increasing.
    #[error("wavelengths are not strictly increasing at index {index}")]
    NonMonotonicDomain { index: usize },

    /// The x̄, ȳ, z̄ channels of a CMF set must share one domain.
    #[error("colour matching function channels do not share a common domain")]
    MismatchedChannels,

    /// Fewer samples than the selected interpolation method requires.
    #[error("interpolation requires at least {required} samples, got {actual}")]
    TooFewSamples { required: usize, actual: usize },

    /// Σ(ȳ·illuminant) over the integration domain is zero, so the
    /// normalising factor is undefined.  Caller error, not recoverable.
    #[error("normalising sum of y_bar * illuminant is zero over the integration domain")]
    ZeroNormalisation,
}

pub type Result<T> = std::result::Result<T, TristimulusError>;
