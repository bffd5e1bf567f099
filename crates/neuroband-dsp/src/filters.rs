//! Digital filters for EEG preprocessing
//!
//! Provides second-order IIR sections with coefficients derived at
//! construction from (cutoff, sample rate), and the fixed three-stage
//! chain applied to every raw sample before windowing.

/// Butterworth IIR filter coefficients (second-order section)
#[derive(Clone, Copy, Debug)]
pub struct BiquadCoeffs {
    /// Numerator coefficients [b0, b1, b2]
    pub b: [f64; 3],
    /// Denominator coefficients [a0=1, a1, a2]
    pub a: [f64; 3],
}

/// Second-order biquad filter section (direct form II)
///
/// The two-element delay line is exclusively owned by this section and
/// mutated in place on every sample. Non-finite inputs propagate through
/// the recursion unmasked.
#[derive(Clone, Debug)]
pub struct Biquad {
    coeffs: BiquadCoeffs,
    /// Delay line: [w1, w2]
    state: [f64; 2],
}

impl Biquad {
    /// Create a new biquad section with given coefficients.
    #[must_use]
    pub fn new(coeffs: BiquadCoeffs) -> Self {
        Self {
            coeffs,
            state: [0.0, 0.0],
        }
    }

    /// Create a second-order Butterworth lowpass filter.
    #[must_use]
    pub fn lowpass(sample_rate: f64, cutoff: f64) -> Self {
        let omega = std::f64::consts::PI * cutoff / sample_rate;
        let k = omega.tan();
        let k2 = k * k;
        let sqrt2 = std::f64::consts::SQRT_2;

        let norm = 1.0 / (1.0 + sqrt2 * k + k2);

        let coeffs = BiquadCoeffs {
            b: [k2 * norm, 2.0 * k2 * norm, k2 * norm],
            a: [1.0, 2.0 * (k2 - 1.0) * norm, (1.0 - sqrt2 * k + k2) * norm],
        };

        Self::new(coeffs)
    }

    /// Create a second-order Butterworth highpass filter.
    #[must_use]
    pub fn highpass(sample_rate: f64, cutoff: f64) -> Self {
        let omega = std::f64::consts::PI * cutoff / sample_rate;
        let k = omega.tan();
        let k2 = k * k;
        let sqrt2 = std::f64::consts::SQRT_2;

        let norm = 1.0 / (1.0 + sqrt2 * k + k2);

        let coeffs = BiquadCoeffs {
            b: [norm, -2.0 * norm, norm],
            a: [1.0, 2.0 * (k2 - 1.0) * norm, (1.0 - sqrt2 * k + k2) * norm],
        };

        Self::new(coeffs)
    }

    /// Create a notch filter for power line interference.
    #[must_use]
    pub fn notch(sample_rate: f64, notch_freq: f64, q: f64) -> Self {
        let omega = 2.0 * std::f64::consts::PI * notch_freq / sample_rate;
        let cos_omega = omega.cos();
        let sin_omega = omega.sin();
        let alpha = sin_omega / (2.0 * q);

        let norm = 1.0 / (1.0 + alpha);

        let coeffs = BiquadCoeffs {
            b: [norm, -2.0 * cos_omega * norm, norm],
            a: [1.0, -2.0 * cos_omega * norm, (1.0 - alpha) * norm],
        };

        Self::new(coeffs)
    }

    /// Process a single sample.
    ///
    /// The newest delay value is the input minus the denominator-weighted
    /// delay line; the output is the numerator-weighted (shifted) delay
    /// line. The line then shifts by one.
    #[inline]
    pub fn filter(&mut self, input: f64) -> f64 {
        let w0 = input - self.coeffs.a[1] * self.state[0] - self.coeffs.a[2] * self.state[1];
        let output = self.coeffs.b[0] * w0
            + self.coeffs.b[1] * self.state[0]
            + self.coeffs.b[2] * self.state[1];

        self.state[1] = self.state[0];
        self.state[0] = w0;

        output
    }

    /// Reset filter state to zero.
    pub fn reset(&mut self) {
        self.state = [0.0, 0.0];
    }
}

/// Fixed preprocessing cascade applied per raw sample.
///
/// Stage order matches signal arrival: highpass (drift/DC removal) →
/// lowpass (anti-alias/noise suppression) → two cascaded notch sections
/// (4th-order mains rejection). Each stage owns an independent delay line;
/// there is no cross-call buffering beyond them.
#[derive(Clone, Debug)]
pub struct FilterChain {
    highpass: Biquad,
    lowpass: Biquad,
    notch: [Biquad; 2],
}

impl FilterChain {
    /// Highpass cutoff for slow drift / DC offset removal.
    pub const HIGHPASS_CUTOFF_HZ: f64 = 0.5;

    /// Lowpass cutoff above the gamma band.
    pub const LOWPASS_CUTOFF_HZ: f64 = 45.0;

    /// Quality factor for each mains notch section.
    pub const NOTCH_Q: f64 = 30.0;

    /// Create the chain for a sample rate and mains frequency.
    #[must_use]
    pub fn new(sample_rate: f64, notch_hz: f64) -> Self {
        Self {
            highpass: Biquad::highpass(sample_rate, Self::HIGHPASS_CUTOFF_HZ),
            lowpass: Biquad::lowpass(sample_rate, Self::LOWPASS_CUTOFF_HZ),
            notch: [
                Biquad::notch(sample_rate, notch_hz, Self::NOTCH_Q),
                Biquad::notch(sample_rate, notch_hz, Self::NOTCH_Q),
            ],
        }
    }

    /// Process a single raw sample through all three stages.
    #[inline]
    pub fn filter(&mut self, input: f64) -> f64 {
        let mut out = self.highpass.filter(input);
        out = self.lowpass.filter(out);
        out = self.notch[0].filter(out);
        self.notch[1].filter(out)
    }

    /// Reset all stages to zero state.
    pub fn reset(&mut self) {
        self.highpass.reset();
        self.lowpass.reset();
        for section in &mut self.notch {
            section.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_input_zero_output() {
        let mut chain = FilterChain::new(250.0, 50.0);
        for _ in 0..1000 {
            assert_eq!(chain.filter(0.0), 0.0);
        }

        let mut biquad = Biquad::lowpass(250.0, 45.0);
        for _ in 0..1000 {
            assert_eq!(biquad.filter(0.0), 0.0);
        }
    }

    #[test]
    fn test_bounded_input_stays_bounded() {
        let mut chain = FilterChain::new(250.0, 50.0);

        // Worst-case bounded input: alternating full-scale square wave
        let mut max_out = 0.0f64;
        for i in 0..10_000 {
            let x = if i % 2 == 0 { 100.0 } else { -100.0 };
            let y = chain.filter(x);
            assert!(y.is_finite());
            max_out = max_out.max(y.abs());
        }

        assert!(max_out < 10_000.0, "chain diverged: peak {max_out}");
    }

    #[test]
    fn test_nan_input_propagates() {
        let mut chain = FilterChain::new(250.0, 50.0);
        chain.filter(1.0);
        let out = chain.filter(f64::NAN);
        assert!(out.is_nan());

        // The delay lines are poisoned: later finite input stays non-finite
        let later = chain.filter(1.0);
        assert!(!later.is_finite() || later.is_nan());
    }

    #[test]
    fn test_highpass_removes_dc() {
        let mut chain = FilterChain::new(250.0, 50.0);

        // Constant offset should decay towards zero after settling
        let mut last = f64::MAX;
        for _ in 0..5000 {
            last = chain.filter(100.0);
        }
        assert!(last.abs() < 1.0, "DC not removed: {last}");
    }

    #[test]
    fn test_lowpass_attenuates_high_frequency() {
        let sample_rate = 250.0;
        let mut lp = Biquad::lowpass(sample_rate, 45.0);

        // 100 Hz input, well above cutoff
        let mut peak = 0.0f64;
        for i in 0..2500 {
            let t = f64::from(i) / sample_rate;
            let y = lp.filter((2.0 * std::f64::consts::PI * 100.0 * t).sin());
            if i > 250 {
                peak = peak.max(y.abs());
            }
        }
        assert!(peak < 0.3, "100 Hz leaked through lowpass: {peak}");
    }

    #[test]
    fn test_notch_attenuates_mains() {
        let sample_rate = 250.0;
        let mut chain = FilterChain::new(sample_rate, 50.0);

        let mut peak = 0.0f64;
        for i in 0..5000 {
            let t = f64::from(i) / sample_rate;
            let y = chain.filter(100.0 * (2.0 * std::f64::consts::PI * 50.0 * t).sin());
            if i > 1000 {
                peak = peak.max(y.abs());
            }
        }
        // 4th-order notch: residual should be a small fraction of input
        assert!(peak < 10.0, "50 Hz leaked through notch: {peak}");
    }

    #[test]
    fn test_passband_frequency_survives() {
        let sample_rate = 250.0;
        let mut chain = FilterChain::new(sample_rate, 50.0);

        // 10 Hz is inside the passband (0.5-45 Hz, away from the notch)
        let mut peak = 0.0f64;
        for i in 0..5000 {
            let t = f64::from(i) / sample_rate;
            let y = chain.filter(100.0 * (2.0 * std::f64::consts::PI * 10.0 * t).sin());
            if i > 1000 {
                peak = peak.max(y.abs());
            }
        }
        assert!(peak > 50.0, "10 Hz over-attenuated: {peak}");
    }

    #[test]
    fn test_reset_restores_zero_state() {
        let mut chain = FilterChain::new(250.0, 50.0);
        for i in 0..100 {
            chain.filter(f64::from(i));
        }
        chain.reset();
        assert_eq!(chain.filter(0.0), 0.0);
    }

    #[test]
    fn test_determinism() {
        let run = || {
            let mut chain = FilterChain::new(250.0, 50.0);
            (0..512)
                .map(|i| chain.filter(f64::from(i % 17) - 8.0))
                .collect::<Vec<_>>()
        };

        let a = run();
        let b = run();
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }
}
