//! Deterministic synthetic EEG generation
//!
//! Produces raw microvolt samples shaped like a relaxed-but-engaged
//! recording: a 10 Hz alpha carrier, a 20 Hz beta component, and
//! low-amplitude pseudo-noise. Used by the demo binary and benchmarks in
//! place of hardware; no RNG dependency, so runs are reproducible.

use std::f64::consts::PI;

/// Synthetic single-channel EEG source at a fixed sample rate.
#[derive(Clone, Debug)]
pub struct SignalSimulator {
    sample_rate: f64,
    index: u64,
    alpha_uv: f64,
    beta_uv: f64,
    noise_uv: f64,
}

impl SignalSimulator {
    /// Alpha carrier frequency (Hz).
    pub const ALPHA_HZ: f64 = 10.0;

    /// Beta component frequency (Hz).
    pub const BETA_HZ: f64 = 20.0;

    /// Create a simulator with default amplitudes (alpha-dominant).
    #[must_use]
    pub fn new(sample_rate: f64) -> Self {
        Self {
            sample_rate,
            index: 0,
            alpha_uv: 10.0,
            beta_uv: 5.0,
            noise_uv: 2.0,
        }
    }

    /// Override the component amplitudes (µV).
    #[must_use]
    pub fn with_amplitudes(mut self, alpha_uv: f64, beta_uv: f64, noise_uv: f64) -> Self {
        self.alpha_uv = alpha_uv;
        self.beta_uv = beta_uv;
        self.noise_uv = noise_uv;
        self
    }

    /// Generate the next raw sample (µV).
    pub fn next_sample(&mut self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let t = self.index as f64 / self.sample_rate;
        #[allow(clippy::cast_precision_loss)]
        let n = self.index as f64;
        self.index += 1;

        self.alpha_uv * (2.0 * PI * Self::ALPHA_HZ * t).sin()
            + self.beta_uv * (2.0 * PI * Self::BETA_HZ * t).sin()
            + self.noise_uv * (n * 0.123).sin()
    }

    /// Generate a block of `n` consecutive samples.
    #[must_use]
    pub fn take_samples(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.next_sample()).collect()
    }
}

impl Iterator for SignalSimulator {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_sample())
    }
}
