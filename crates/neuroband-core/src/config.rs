//! Pipeline configuration with eager validation.
//!
//! All tunables of the processing pipeline live here: sample rate, analysis
//! window size, band edges, and the mains notch frequency. Invalid settings
//! are rejected at construction via [`PipelineConfig::validate`], never
//! discovered mid-stream.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::Band;

// ============================================================================
// Band Ranges
// ============================================================================

/// A half-open frequency interval `[low_hz, high_hz)` for one band.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BandRange {
    /// Lower edge in Hz (inclusive)
    pub low_hz: f64,
    /// Upper edge in Hz (exclusive)
    pub high_hz: f64,
}

impl BandRange {
    /// Create a range from edge frequencies.
    #[inline]
    #[must_use]
    pub const fn new(low_hz: f64, high_hz: f64) -> Self {
        Self { low_hz, high_hz }
    }

    /// Get both edges as a tuple.
    #[inline]
    #[must_use]
    pub const fn bounds(self) -> (f64, f64) {
        (self.low_hz, self.high_hz)
    }
}

/// Frequency edges for all four reported bands.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BandEdges {
    /// Theta edges (default 4-8 Hz)
    pub theta: BandRange,
    /// Alpha edges (default 8-12 Hz)
    pub alpha: BandRange,
    /// Beta edges (default 13-30 Hz)
    pub beta: BandRange,
    /// Gamma edges (default 30-49 Hz)
    pub gamma: BandRange,
}

impl BandEdges {
    /// Get the range for a specific band.
    #[inline]
    #[must_use]
    pub const fn range(&self, band: Band) -> BandRange {
        match band {
            Band::Theta => self.theta,
            Band::Alpha => self.alpha,
            Band::Beta => self.beta,
            Band::Gamma => self.gamma,
        }
    }
}

impl Default for BandEdges {
    fn default() -> Self {
        let range = |band: Band| {
            let (low, high) = band.default_range_hz();
            BandRange::new(low, high)
        };
        Self {
            theta: range(Band::Theta),
            alpha: range(Band::Alpha),
            beta: range(Band::Beta),
            gamma: range(Band::Gamma),
        }
    }
}

// ============================================================================
// Pipeline Configuration
// ============================================================================

/// Complete configuration for one single-channel pipeline instance.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Nominal hardware sample rate in Hz
    pub sample_rate_hz: f64,
    /// Analysis window size in samples (power of two)
    pub window_size: usize,
    /// Mains interference frequency to notch out (50 or 60 Hz)
    pub notch_hz: f64,
    /// Band edge frequencies
    pub bands: BandEdges,
}

impl PipelineConfig {
    /// Default sample rate for BrainBit-class headsets.
    pub const DEFAULT_SAMPLE_RATE_HZ: f64 = 250.0;

    /// Default analysis window size (~1.024 s at 250 Hz).
    pub const DEFAULT_WINDOW_SIZE: usize = 256;

    /// Default mains notch frequency (European grid).
    pub const DEFAULT_NOTCH_HZ: f64 = 50.0;

    /// Smallest supported analysis window.
    pub const MIN_WINDOW_SIZE: usize = 4;

    /// Create a configuration for a given sample rate, defaults elsewhere.
    #[must_use]
    pub fn with_sample_rate(sample_rate_hz: f64) -> Self {
        Self {
            sample_rate_hz,
            ..Self::default()
        }
    }

    /// The Nyquist frequency for this sample rate.
    #[inline]
    #[must_use]
    pub fn nyquist_hz(&self) -> f64 {
        self.sample_rate_hz / 2.0
    }

    /// Spectral resolution in Hz per bin (rate / N).
    #[inline]
    #[must_use]
    pub fn frequency_resolution(&self) -> f64 {
        self.sample_rate_hz / self.window_size as f64
    }

    /// Number of samples between consecutive emitted results.
    #[inline]
    #[must_use]
    pub const fn hop_size(&self) -> usize {
        self.window_size / 2
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the window size is not a supported
    /// power of two, the sample rate is not positive and finite, the notch
    /// frequency is outside `(0, Nyquist)`, or any band edge pair is
    /// inverted or falls outside `[0, Nyquist)`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.sample_rate_hz.is_finite() || self.sample_rate_hz <= 0.0 {
            return Err(ConfigError::InvalidSampleRate {
                requested_hz: self.sample_rate_hz,
            });
        }

        if self.window_size < Self::MIN_WINDOW_SIZE {
            return Err(ConfigError::WindowTooSmall {
                requested: self.window_size,
                minimum: Self::MIN_WINDOW_SIZE,
            });
        }

        if !self.window_size.is_power_of_two() {
            return Err(ConfigError::WindowNotPowerOfTwo {
                requested: self.window_size,
            });
        }

        let nyquist = self.nyquist_hz();

        if !self.notch_hz.is_finite() || self.notch_hz <= 0.0 || self.notch_hz >= nyquist {
            return Err(ConfigError::InvalidNotchFrequency {
                requested_hz: self.notch_hz,
                nyquist_hz: nyquist,
            });
        }

        for band in Band::ALL {
            let range = self.bands.range(band);
            let (low, high) = range.bounds();

            if !low.is_finite() || !high.is_finite() || low < 0.0 || high >= nyquist {
                return Err(ConfigError::BandOutOfRange {
                    band,
                    low_hz: low,
                    high_hz: high,
                    nyquist_hz: nyquist,
                });
            }

            if low >= high {
                return Err(ConfigError::InvertedBandEdges {
                    band,
                    low_hz: low,
                    high_hz: high,
                });
            }
        }

        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: Self::DEFAULT_SAMPLE_RATE_HZ,
            window_size: Self::DEFAULT_WINDOW_SIZE,
            notch_hz: Self::DEFAULT_NOTCH_HZ,
            bands: BandEdges::default(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
