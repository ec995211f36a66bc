//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

use serde::Serialize;

use pidigits_orchestration::interfaces::DigitsResult;

/// How the digit sequence is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Uppercase hex characters, one per digit.
    #[default]
    Hex,
    /// A JSON report with the range, worker count, and digits.
    Json,
}

/// Render nibbles as uppercase hex characters.
///
/// # Example
/// ```
/// assert_eq!(pidigits_cli::output::format_hex(&[2, 4, 3, 15]), "243F");
/// ```
#[must_use]
pub fn format_hex(digits: &[u8]) -> String {
    digits
        .iter()
        .map(|&d| {
            char::from_digit(u32::from(d & 0x0F), 16).map_or('?', |c| c.to_ascii_uppercase())
        })
        .collect()
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Machine-readable summary of a request.
#[derive(Debug, Serialize)]
pub struct DigitReport {
    pub start: u64,
    pub count: u64,
    pub workers: usize,
    pub digits: String,
    pub duration_ms: f64,
}

impl From<&DigitsResult> for DigitReport {
    fn from(result: &DigitsResult) -> Self {
        Self {
            start: result.range.start,
            count: result.range.count,
            workers: result.workers(),
            digits: format_hex(&result.digits),
            duration_ms: result.duration.as_secs_f64() * 1000.0,
        }
    }
}

/// Serialize a result as pretty JSON.
pub fn format_json(result: &DigitsResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&DigitReport::from(result))
}

/// Write the hex digit string to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, digits: &[u8]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{}", format_hex(digits))?;
    Ok(())
}
