//! CLI result presenter and progress reporter.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use pidigits_core::observer::ProgressObserver;
use pidigits_core::progress::ProgressUpdate;
use pidigits_orchestration::interfaces::{DigitsResult, ResultPresenter};

use crate::output::{format_duration, format_hex, format_json, format_number, OutputFormat};
use crate::ui;

/// CLI result presenter.
pub struct CLIResultPresenter {
    format: OutputFormat,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Lines printed for a result, without the trailing newline.
    #[must_use]
    pub fn render(&self, result: &DigitsResult, details: bool) -> Vec<String> {
        if self.format == OutputFormat::Json {
            return match format_json(result) {
                Ok(json) => vec![json],
                Err(e) => vec![format!("{{\"error\": \"{e}\"}}")],
            };
        }

        let hex = format_hex(&result.digits);
        if self.quiet {
            return vec![hex];
        }

        let mut lines = vec![
            ui::header("Hex digits of pi"),
            format!("Range: {}", result.range),
            format!("Digits: {}", format_number(result.range.count)),
            format!("Workers: {}", result.workers()),
            format!("Duration: {}", format_duration(result.duration)),
        ];

        if details {
            for (i, part) in result.partition.iter().enumerate() {
                lines.push(format!(
                    "  worker {i:>3}: {part} ({} digits)",
                    format_number(part.count)
                ));
            }
        }

        lines.push(format!("Result: {hex}"));
        lines
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, result: &DigitsResult, details: bool) {
        for line in self.render(result, details) {
            println!("{line}");
        }
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}

/// Progress reporter drawing an `indicatif` bar on stderr.
pub struct CLIProgressReporter {
    bar: ProgressBar,
}

impl CLIProgressReporter {
    /// Create a reporter for a request of `total` digits.
    #[must_use]
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());
        bar.set_style(
            ProgressStyle::with_template(
                "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} digits {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar }
    }

    /// Create a reporter that never draws.
    #[must_use]
    pub fn hidden(total: u64) -> Self {
        Self {
            bar: ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::hidden()),
        }
    }

    /// Last position drawn.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Whether the bar has been finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

impl ProgressObserver for CLIProgressReporter {
    fn on_progress(&self, update: &ProgressUpdate) {
        self.bar.set_position(update.computed);
        if update.done {
            self.bar.finish_with_message("done");
        } else {
            self.bar
                .set_message(format!("Digits found: {}", format_number(update.computed)));
        }
    }

    fn suspend(&self, f: &mut dyn FnMut()) {
        self.bar.suspend(|| f());
    }
}
