//! Neuroband demo application
//!
//! Streams simulated single-channel EEG through the band-power pipeline
//! and logs one snapshot per half window.
//!
//! # Usage
//!
//! ```bash
//! # Stream 10 seconds of simulated data (default)
//! neuroband
//!
//! # Custom rate and window, paced in real time
//! neuroband stream --sample-rate 500 --window-size 512 --realtime
//!
//! # Print the effective configuration as JSON
//! neuroband config --window-size 512
//! ```

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use neuroband_core::PipelineConfig;
use neuroband_dsp::{SignalSimulator, StreamProcessor};

/// Neuroband band-power pipeline demo
#[derive(Parser, Debug)]
#[command(name = "neuroband")]
#[command(author, version, about = "EEG band-power pipeline demo", long_about = None)]
struct Cli {
    /// Logging verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Pipeline settings shared by subcommands.
#[derive(Args, Debug, Clone)]
struct PipelineArgs {
    /// Hardware sample rate in Hz
    #[arg(long, default_value_t = PipelineConfig::DEFAULT_SAMPLE_RATE_HZ)]
    sample_rate: f64,

    /// Analysis window size in samples (power of two)
    #[arg(long, default_value_t = PipelineConfig::DEFAULT_WINDOW_SIZE)]
    window_size: usize,

    /// Mains notch frequency in Hz (50 or 60)
    #[arg(long, default_value_t = PipelineConfig::DEFAULT_NOTCH_HZ)]
    notch: f64,
}

impl PipelineArgs {
    fn defaults() -> Self {
        Self {
            sample_rate: PipelineConfig::DEFAULT_SAMPLE_RATE_HZ,
            window_size: PipelineConfig::DEFAULT_WINDOW_SIZE,
            notch: PipelineConfig::DEFAULT_NOTCH_HZ,
        }
    }

    fn to_config(&self) -> PipelineConfig {
        PipelineConfig {
            sample_rate_hz: self.sample_rate,
            window_size: self.window_size,
            notch_hz: self.notch,
            ..PipelineConfig::default()
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Stream simulated EEG through the pipeline (default if no subcommand)
    Stream {
        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Duration to stream, in seconds
        #[arg(short, long, default_value = "10")]
        duration: u64,

        /// Pace sample delivery at the hardware rate instead of running flat out
        #[arg(long)]
        realtime: bool,
    },

    /// Print the effective pipeline configuration as JSON
    Config {
        #[command(flatten)]
        pipeline: PipelineArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Neuroband v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        None => run_stream(&PipelineArgs::defaults(), 10, false),
        Some(Commands::Stream {
            pipeline,
            duration,
            realtime,
        }) => run_stream(&pipeline, duration, realtime),
        Some(Commands::Config { pipeline }) => print_config(&pipeline),
    }
}

/// Stream simulated samples through the pipeline and log snapshots.
fn run_stream(args: &PipelineArgs, duration_s: u64, realtime: bool) -> anyhow::Result<()> {
    let config = args.to_config();
    let mut processor = StreamProcessor::new(config)?;
    let mut simulator = SignalSimulator::new(config.sample_rate_hz);

    info!(
        "Streaming {duration_s}s of simulated EEG at {} Hz (window {}, {:.3} Hz/bin)",
        config.sample_rate_hz,
        config.window_size,
        config.frequency_resolution()
    );

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_samples = (config.sample_rate_hz * duration_s as f64) as u64;
    let interval = Duration::from_secs_f64(1.0 / config.sample_rate_hz);

    let mut snapshots = 0u64;
    for _ in 0..total_samples {
        if let Some(powers) = processor.process_sample(simulator.next_sample()) {
            snapshots += 1;
            info!(
                "bands: theta={:.2} alpha={:.2} beta={:.2} gamma={:.2} | dominant={} focus={:.1}",
                powers.theta,
                powers.alpha,
                powers.beta,
                powers.gamma,
                powers.dominant().name(),
                powers.focus_score()
            );
        }

        if realtime {
            std::thread::sleep(interval);
        }
    }

    info!("Done: {total_samples} samples, {snapshots} snapshots");
    Ok(())
}

/// Print the effective configuration after validation.
fn print_config(args: &PipelineArgs) -> anyhow::Result<()> {
    let config = args.to_config();
    config.validate()?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
