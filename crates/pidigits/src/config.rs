//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::Parser;

use pidigits_cli::output::OutputFormat;
use pidigits_core::constants::DEFAULT_MONITOR_INTERVAL;
use pidigits_core::options::Options;

/// PiDigits-rs: hexadecimal digits of pi via the BBP formula.
#[derive(Parser, Debug)]
#[command(name = "pidigits", version, about, allow_negative_numbers = true)]
pub struct AppConfig {
    /// First digit position (0 = first hex digit after the point).
    #[arg(short, long, default_value = "0", env = "PIDIGITS_START")]
    pub start: i64,

    /// Number of hex digits to compute.
    #[arg(short = 'n', long, default_value = "16", env = "PIDIGITS_COUNT")]
    pub count: i64,

    /// Number of worker threads (0 = one per CPU).
    #[arg(short, long, default_value = "0", env = "PIDIGITS_WORKERS")]
    pub workers: usize,

    /// Report progress periodically while workers run.
    #[arg(short, long)]
    pub monitor: bool,

    /// Pause at every progress report until ENTER is pressed (implies --monitor).
    #[arg(short, long)]
    pub pause: bool,

    /// Interval between progress reports (e.g., "5s", "500ms", "1m").
    #[arg(long, default_value = "5s", env = "PIDIGITS_INTERVAL")]
    pub interval: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Hex)]
    pub format: OutputFormat,

    /// Also write the hex digits to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (only output the digits).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show the per-worker partition.
    #[arg(short, long)]
    pub details: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Whether a progress monitor should observe the workers.
    #[must_use]
    pub fn monitored(&self) -> bool {
        self.monitor || self.pause
    }

    /// Parse the interval string into a Duration.
    #[must_use]
    pub fn monitor_interval(&self) -> Duration {
        parse_duration(&self.interval).unwrap_or(DEFAULT_MONITOR_INTERVAL)
    }

    /// Request options with defaults applied.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            workers: self.workers,
            monitor_interval: self.monitor_interval(),
        }
        .normalize()
    }
}

/// Parse a duration string like "5m", "1h", "30s", "250ms".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n * 60))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n * 3600))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}
