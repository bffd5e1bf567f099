//! Neuroband DSP - host-side signal processing for EEG band power
//!
//! This crate turns a stream of raw single-channel voltage samples into
//! periodic band-power snapshots:
//!
//! 1. [`filters`]: per-sample IIR filtering (drift removal, anti-alias
//!    lowpass, mains notch)
//! 2. [`window`]: 50%-overlap analysis window accumulation
//! 3. [`spectral`]: FFT magnitude spectrum and per-band averaging
//! 4. [`stream`]: the [`StreamProcessor`] orchestrating the above
//! 5. [`simulate`]: deterministic synthetic EEG for tests and demos
//!
//! # Example
//!
//! ```rust
//! use neuroband_core::PipelineConfig;
//! use neuroband_dsp::StreamProcessor;
//!
//! let mut processor = StreamProcessor::new(PipelineConfig::default()).unwrap();
//! for _ in 0..256 {
//!     if let Some(powers) = processor.process_sample(0.0) {
//!         assert_eq!(powers.total(), 0.0);
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod filters;
pub mod simulate;
pub mod spectral;
pub mod stream;
pub mod window;

// Re-export key types
pub use filters::{Biquad, BiquadCoeffs, FilterChain};
pub use simulate::SignalSimulator;
pub use spectral::SpectralAnalyzer;
pub use stream::StreamProcessor;
pub use window::WindowAccumulator;
