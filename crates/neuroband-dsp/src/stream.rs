//! Streaming pipeline orchestration
//!
//! [`StreamProcessor`] is the sole public entry point of the pipeline:
//! raw sample → filter chain → window accumulator → spectral analyzer.

use neuroband_core::{BandPowers, ConfigError, PipelineConfig};

use crate::filters::FilterChain;
use crate::spectral::SpectralAnalyzer;
use crate::window::WindowAccumulator;

/// Single-channel streaming processor.
///
/// Calls must be strictly sequential and match physical sample arrival
/// order; filter state and window position are order-dependent. One
/// instance serves exactly one channel — multi-channel setups construct
/// one processor per electrode, never sharing state. The per-sample path
/// performs no I/O, holds no queue, and completes well within the
/// inter-sample interval (4 ms at 250 Hz).
pub struct StreamProcessor {
    config: PipelineConfig,
    chain: FilterChain,
    window: WindowAccumulator,
    analyzer: SpectralAnalyzer,
}

impl StreamProcessor {
    /// Build a processor, validating the configuration eagerly.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for any setting the pipeline cannot run
    /// with; nothing is rediscovered mid-stream.
    pub fn new(config: PipelineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            chain: FilterChain::new(config.sample_rate_hz, config.notch_hz),
            window: WindowAccumulator::new(config.window_size),
            analyzer: SpectralAnalyzer::new(&config),
            config,
        })
    }

    /// Process one raw sample (µV); returns band powers when a window fills.
    ///
    /// `None` is the common case — one result arrives per N/2 samples once
    /// the first window has filled. Non-finite samples propagate through
    /// to non-finite powers; sanitization belongs upstream.
    pub fn process_sample(&mut self, raw_uv: f64) -> Option<BandPowers> {
        let filtered = self.chain.filter(raw_uv);
        let window = self.window.push(filtered)?;
        Some(self.analyzer.analyze(&window))
    }

    /// The validated configuration this processor was built with.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Reset all filter state and drop buffered samples.
    ///
    /// Equivalent to reconstructing the pipeline with the same config.
    pub fn reset(&mut self) {
        self.chain.reset();
        self.window.clear();
    }
}
