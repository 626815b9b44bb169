//! pilapse CLI
//!
//! Interval time-lapse capture for Raspberry Pi cameras.

use chrono::NaiveDateTime;
use clap::Parser;
use pilapse::{
    camera::{self, CameraKind, DEFAULT_STILL_COMMAND},
    config::{parse_start_time, CaptureConfig, TimeUnit},
    core::{self, CaptureLoop, Clock, SystemClock},
    stats::{create_shared_stats, SharedCaptureStats},
    VERSION,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pilapse")]
#[command(version = VERSION)]
#[command(about = "Capture a time lapse at a fixed interval", long_about = None)]
struct Cli {
    /// Directory for saving images
    #[arg(long, short = 'o', default_value = ".")]
    outdir: PathBuf,

    /// Start date and time, formatted as YYYY-MM-DD-HH-MM-SS (default: start immediately)
    #[arg(long, short = 's', value_parser = parse_start_time)]
    start: Option<NaiveDateTime>,

    /// Duration of the time lapse in --unit. Runs forever if unset
    #[arg(long, short = 'd', default_value_t = 0.0, allow_negative_numbers = true)]
    duration: f64,

    /// Time lapse interval in --unit
    #[arg(long, short = 'i', default_value_t = 1.0, allow_negative_numbers = true)]
    interval: f64,

    /// Time unit for --duration and --interval
    #[arg(long, short = 'u', value_enum, ignore_case = true, default_value_t = TimeUnit::Seconds)]
    unit: TimeUnit,

    /// Camera backend
    #[arg(long, value_enum, default_value_t = CameraKind::Still)]
    camera: CameraKind,

    /// Still-capture program used by the `still` backend
    #[arg(long, default_value = DEFAULT_STILL_COMMAND)]
    still_command: String,

    /// Print the summary and exit without capturing
    #[arg(long)]
    dry_run: bool,

    /// Log debug diagnostics to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Cli {
    fn capture_config(&self) -> CaptureConfig {
        CaptureConfig {
            outdir: self.outdir.clone(),
            start: self.start,
            duration: self.duration,
            interval: self.interval,
            unit: self.unit,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    cmd_run(&cli);
}

fn cmd_run(cli: &Cli) {
    let clock = SystemClock;
    let config = cli.capture_config();

    // Clock reading for the default start and the past-start check. The loop
    // reads the clock again on every iteration.
    let invoked_at = clock.now();

    if let Err(e) = config.ensure_directories() {
        eprintln!("Error: Could not create {}: {e}", config.outdir.display());
        std::process::exit(1);
    }

    let resolved = match core::resolve(&config, invoked_at) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if resolved.start_clamped {
        println!("Warning: start time occurs in the past. Starting now.");
    }

    println!();
    println!("{}", core::summary(&config, &resolved.window));
    tracing::debug!(window = ?resolved.window, camera = ?cli.camera, "resolved capture window");

    if cli.dry_run {
        return;
    }

    let stats = create_shared_stats();
    ctrlc_handler(stats.clone());

    let camera = camera::open(cli.camera, &cli.still_command);
    let mut capture = CaptureLoop::new(camera, clock, resolved.window, &config.outdir, stats.clone());

    let result = capture.start_camera().and_then(|_| capture.run());
    if let Err(e) = result {
        eprintln!("Error: {e}");
        println!();
        println!("{}", stats.summary());
        std::process::exit(1);
    }

    println!();
    println!("{}", stats.summary());
}

/// Print the session summary and exit on Ctrl+C.
fn ctrlc_handler(stats: SharedCaptureStats) {
    let installed = ctrlc::set_handler(move || {
        println!();
        println!("Interrupted.");
        println!("{}", stats.summary());
        std::process::exit(130);
    });
    if let Err(e) = installed {
        tracing::warn!("Could not install Ctrl+C handler: {e}");
    }
}

/// Diagnostics go to stderr so they never mix with the status lines.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "pilapse=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
