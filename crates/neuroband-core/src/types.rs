//! Core data types for band-power extraction.

use serde::{Deserialize, Serialize};

// ============================================================================
// EEG Frequency Bands
// ============================================================================

/// The four frequency bands the pipeline reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Band {
    /// Theta: 4-8 Hz (drowsiness, memory)
    Theta,
    /// Alpha: 8-12 Hz (relaxed, eyes closed)
    Alpha,
    /// Beta: 13-30 Hz (active thinking)
    Beta,
    /// Gamma: 30-49 Hz (cognitive processing)
    Gamma,
}

impl Band {
    /// All bands in reporting order.
    pub const ALL: [Self; 4] = [Self::Theta, Self::Alpha, Self::Beta, Self::Gamma];

    /// Get the default frequency range for this band (low, high) in Hz.
    #[inline]
    #[must_use]
    pub const fn default_range_hz(self) -> (f64, f64) {
        match self {
            Self::Theta => (4.0, 8.0),
            Self::Alpha => (8.0, 12.0),
            Self::Beta => (13.0, 30.0),
            Self::Gamma => (30.0, 49.0),
        }
    }

    /// Get the band name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Theta => "Theta",
            Self::Alpha => "Alpha",
            Self::Beta => "Beta",
            Self::Gamma => "Gamma",
        }
    }
}

// ============================================================================
// Band-Power Records
// ============================================================================

/// Average spectral magnitude per band for one analysis window.
///
/// One record is emitted every half window (128 samples at the default
/// 256-sample window). Values are non-negative for finite input; non-finite
/// input samples propagate into non-finite powers by design.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BandPowers {
    /// Theta band power
    pub theta: f64,
    /// Alpha band power
    pub alpha: f64,
    /// Beta band power
    pub beta: f64,
    /// Gamma band power
    pub gamma: f64,
}

impl BandPowers {
    /// Get the power for a specific band.
    #[inline]
    #[must_use]
    pub const fn get(&self, band: Band) -> f64 {
        match band {
            Band::Theta => self.theta,
            Band::Alpha => self.alpha,
            Band::Beta => self.beta,
            Band::Gamma => self.gamma,
        }
    }

    /// Total power across all four bands.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.theta + self.alpha + self.beta + self.gamma
    }

    /// The band with the highest power.
    ///
    /// Ties resolve to the earlier band in [`Band::ALL`] order.
    #[must_use]
    pub fn dominant(&self) -> Band {
        let mut best = Band::Theta;
        for band in Band::ALL {
            if self.get(band) > self.get(best) {
                best = band;
            }
        }
        best
    }

    /// Focus score: beta over (alpha + theta), scaled to 0-100.
    ///
    /// A non-normative engagement metric carried over from earlier
    /// consumers; the denominator falls back to 1 to stay zero-safe.
    #[must_use]
    pub fn focus_score(&self) -> f64 {
        let mut denominator = self.alpha + self.theta;
        if denominator == 0.0 {
            denominator = 1.0;
        }
        (self.beta / denominator * 10.0).clamp(0.0, 100.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_default_ranges() {
        assert_eq!(Band::Theta.default_range_hz(), (4.0, 8.0));
        assert_eq!(Band::Alpha.default_range_hz(), (8.0, 12.0));
        assert_eq!(Band::Beta.default_range_hz(), (13.0, 30.0));
        assert_eq!(Band::Gamma.default_range_hz(), (30.0, 49.0));
    }

    #[test]
    fn test_band_powers_get() {
        let powers = BandPowers {
            theta: 1.0,
            alpha: 2.0,
            beta: 3.0,
            gamma: 4.0,
        };

        assert_eq!(powers.get(Band::Theta), 1.0);
        assert_eq!(powers.get(Band::Gamma), 4.0);
        assert_eq!(powers.total(), 10.0);
    }

    #[test]
    fn test_dominant_band() {
        let powers = BandPowers {
            theta: 1.0,
            alpha: 8.0,
            beta: 3.0,
            gamma: 2.0,
        };
        assert_eq!(powers.dominant(), Band::Alpha);
    }

    #[test]
    fn test_dominant_band_tie_prefers_earlier() {
        let powers = BandPowers {
            theta: 5.0,
            alpha: 5.0,
            beta: 1.0,
            gamma: 0.0,
        };
        assert_eq!(powers.dominant(), Band::Theta);
    }

    #[test]
    fn test_focus_score_zero_safe() {
        let powers = BandPowers {
            theta: 0.0,
            alpha: 0.0,
            beta: 2.0,
            gamma: 0.0,
        };
        // Denominator falls back to 1: 2.0 / 1.0 * 10 = 20
        assert!((powers.focus_score() - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_focus_score_clamped() {
        let powers = BandPowers {
            theta: 0.1,
            alpha: 0.1,
            beta: 1000.0,
            gamma: 0.0,
        };
        assert!((powers.focus_score() - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_band_powers_serde_round_trip() {
        let powers = BandPowers {
            theta: 1.5,
            alpha: 2.5,
            beta: 3.5,
            gamma: 4.5,
        };

        let json = serde_json::to_string(&powers).unwrap();
        let back: BandPowers = serde_json::from_str(&json).unwrap();
        assert_eq!(powers, back);
    }
}
