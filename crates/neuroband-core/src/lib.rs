//! Neuroband Core - types and configuration for EEG band-power extraction
//!
//! This crate provides the foundational types for the neuroband pipeline:
//! frequency band definitions, band-power records, and validated pipeline
//! configuration. The signal processing itself lives in `neuroband-dsp`.
//!
//! # Modules
//!
//! - [`types`]: Frequency bands and band-power records
//! - [`config`]: Pipeline configuration with eager validation
//! - [`error`]: Configuration error types
//!
//! # Example
//!
//! ```rust
//! use neuroband_core::{Band, PipelineConfig};
//!
//! let config = PipelineConfig::default();
//! assert!(config.validate().is_ok());
//!
//! let (low, high) = config.bands.range(Band::Alpha).bounds();
//! assert_eq!((low, high), (8.0, 12.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use config::{BandEdges, BandRange, PipelineConfig};
pub use error::ConfigError;
pub use types::{Band, BandPowers};
