//! Application entry point and dispatch.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::warn;

use pidigits_cli::operator::{stdin_is_terminal, ConsoleOperator};
use pidigits_cli::output::write_to_file;
use pidigits_cli::presenter::{CLIProgressReporter, CLIResultPresenter};
use pidigits_core::monitor::ProgressMonitor;
use pidigits_core::observer::ProgressSubject;
use pidigits_core::observers::LoggingObserver;
use pidigits_core::options::Options;
use pidigits_core::range::DigitRequest;
use pidigits_orchestration::interfaces::ResultPresenter;
use pidigits_orchestration::orchestrator::{execute_request, Completion};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        pidigits_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let opts = config.options();
    let request = DigitRequest::try_new(config.start, config.count, opts.workers)?;

    let mut completion = completion_for(config, &opts, request.range.count);
    let result = execute_request(&request, &mut completion)?;

    let presenter = CLIResultPresenter::new(config.format, config.quiet);
    presenter.present_result(&result, config.details);

    if let Some(ref path) = config.output {
        write_to_file(path, &result.digits)
            .with_context(|| format!("failed to write digits to {path}"))?;
    }

    Ok(())
}

/// Pick how the request waits for its workers.
fn completion_for(config: &AppConfig, opts: &Options, total: u64) -> Completion {
    if !config.monitored() {
        return Completion::Join;
    }

    let subject = ProgressSubject::new();
    subject.register(Arc::new(LoggingObserver::new()));
    if !config.quiet {
        subject.register(Arc::new(CLIProgressReporter::new(total)));
    }

    let monitor = ProgressMonitor::new(opts.monitor_interval, Arc::new(subject));
    if !config.pause {
        return Completion::Monitor(monitor);
    }

    if stdin_is_terminal() {
        Completion::Monitor(monitor.with_operator(Box::new(ConsoleOperator::stdin())))
    } else {
        warn!("stdin is not a terminal; --pause ignored, joining workers directly");
        Completion::Join
    }
}
