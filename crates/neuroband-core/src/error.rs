//! Error types for pipeline construction.
//!
//! The streaming path itself is infallible: once a pipeline is built it can
//! only transform samples, never fail. Every rejectable condition is caught
//! here, at configuration time.

use thiserror::Error;

use crate::types::Band;

/// Errors from invalid pipeline configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Window size is not a power of two (required by the FFT contract)
    #[error("window size {requested} is not a power of two")]
    WindowNotPowerOfTwo {
        /// The requested window size
        requested: usize,
    },

    /// Window size below the supported minimum
    #[error("window size {requested} is below the minimum of {minimum}")]
    WindowTooSmall {
        /// The requested window size
        requested: usize,
        /// Smallest supported window size
        minimum: usize,
    },

    /// Sample rate is zero, negative, or non-finite
    #[error("invalid sample rate: {requested_hz} Hz")]
    InvalidSampleRate {
        /// The requested sample rate in Hz
        requested_hz: f64,
    },

    /// Notch frequency outside the representable range
    #[error("notch frequency {requested_hz} Hz outside (0, {nyquist_hz}) Hz")]
    InvalidNotchFrequency {
        /// The requested notch frequency in Hz
        requested_hz: f64,
        /// Nyquist frequency for the configured sample rate
        nyquist_hz: f64,
    },

    /// Band edges fall outside `[0, Nyquist)`
    #[error("{} band edges {low_hz}-{high_hz} Hz outside [0, {nyquist_hz}) Hz", band.name())]
    BandOutOfRange {
        /// Which band is misconfigured
        band: Band,
        /// Lower edge in Hz
        low_hz: f64,
        /// Upper edge in Hz
        high_hz: f64,
        /// Nyquist frequency for the configured sample rate
        nyquist_hz: f64,
    },

    /// Band lower edge at or above its upper edge
    #[error("{} band edges inverted: {low_hz} >= {high_hz} Hz", band.name())]
    InvertedBandEdges {
        /// Which band is misconfigured
        band: Band,
        /// Lower edge in Hz
        low_hz: f64,
        /// Upper edge in Hz
        high_hz: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_band() {
        let err = ConfigError::BandOutOfRange {
            band: Band::Gamma,
            low_hz: 30.0,
            high_hz: 130.0,
            nyquist_hz: 125.0,
        };
        let message = err.to_string();
        assert!(message.contains("Gamma"));
        assert!(message.contains("125"));
    }

    #[test]
    fn test_error_display_window() {
        let err = ConfigError::WindowNotPowerOfTwo { requested: 300 };
        assert!(err.to_string().contains("300"));
    }
}
