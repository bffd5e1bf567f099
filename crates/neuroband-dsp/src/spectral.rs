//! FFT-based spectral analysis
//!
//! Consumes one full analysis window and produces the average magnitude
//! per configured frequency band.

use rustfft::{num_complex::Complex, FftPlanner};

use neuroband_core::{BandEdges, BandPowers, BandRange, PipelineConfig};

/// FFT magnitude spectrum and band-power aggregation.
///
/// Holds the FFT plan and scratch buffers so the per-window path does not
/// allocate. One analyzer serves one pipeline instance.
pub struct SpectralAnalyzer {
    window_size: usize,
    sample_rate: f64,
    bands: BandEdges,
    planner: FftPlanner<f64>,
    buffer: Vec<Complex<f64>>,
    scratch: Vec<Complex<f64>>,
}

impl SpectralAnalyzer {
    /// Create an analyzer from a validated pipeline configuration.
    #[must_use]
    pub fn new(config: &PipelineConfig) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(config.window_size);

        Self {
            window_size: config.window_size,
            sample_rate: config.sample_rate_hz,
            bands: config.bands,
            planner,
            buffer: vec![Complex::new(0.0, 0.0); config.window_size],
            scratch: vec![Complex::new(0.0, 0.0); fft.get_inplace_scratch_len()],
        }
    }

    /// Frequency resolution (Hz per bin).
    #[must_use]
    pub fn frequency_resolution(&self) -> f64 {
        self.sample_rate / self.window_size as f64
    }

    /// Compute the magnitude spectrum of one window.
    ///
    /// Returns `sqrt(re² + im²)` for the first N/2 bins (Nyquist-limited),
    /// unnormalized. Bin i corresponds to i · (rate / N) Hz.
    ///
    /// # Panics
    ///
    /// Panics if `samples` is not exactly the configured window size.
    pub fn magnitudes(&mut self, samples: &[f64]) -> Vec<f64> {
        assert_eq!(samples.len(), self.window_size, "window size mismatch");

        for (slot, &s) in self.buffer.iter_mut().zip(samples.iter()) {
            *slot = Complex::new(s, 0.0);
        }

        let fft = self.planner.plan_fft_forward(self.window_size);
        fft.process_with_scratch(&mut self.buffer, &mut self.scratch);

        self.buffer[..self.window_size / 2]
            .iter()
            .map(|c| (c.re * c.re + c.im * c.im).sqrt())
            .collect()
    }

    /// Average magnitude over one band's bin range.
    ///
    /// The lower edge maps to `floor(low / resolution)`, the upper edge to
    /// `ceil(high / resolution)`, clamped to the available bins; the range
    /// is inclusive and the divisor never drops below 1. Edges that leave
    /// no candidate bins yield 0.
    #[must_use]
    pub fn band_power(&self, magnitudes: &[f64], range: BandRange) -> f64 {
        let freq_res = self.frequency_resolution();

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let start_bin = (range.low_hz / freq_res).floor() as usize;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let end_bin = (range.high_hz / freq_res).ceil() as usize;

        if start_bin >= magnitudes.len() {
            return 0.0;
        }
        let end_bin = end_bin.min(magnitudes.len() - 1);
        if start_bin > end_bin {
            return 0.0;
        }

        let sum: f64 = magnitudes[start_bin..=end_bin].iter().sum();
        sum / (end_bin - start_bin + 1).max(1) as f64
    }

    /// Analyze one full window into the four band powers.
    ///
    /// # Panics
    ///
    /// Panics if `samples` is not exactly the configured window size.
    pub fn analyze(&mut self, samples: &[f64]) -> BandPowers {
        let magnitudes = self.magnitudes(samples);

        BandPowers {
            theta: self.band_power(&magnitudes, self.bands.theta),
            alpha: self.band_power(&magnitudes, self.bands.alpha),
            beta: self.band_power(&magnitudes, self.bands.beta),
            gamma: self.band_power(&magnitudes, self.bands.gamma),
        }
    }
}
