//! # pidigits-cli
//!
//! CLI output, progress display, operator prompts, and shell completion.

pub mod completion;
pub mod operator;
pub mod output;
pub mod presenter;
pub mod ui;

pub use operator::ConsoleOperator;
pub use output::OutputFormat;
pub use presenter::{CLIProgressReporter, CLIResultPresenter};
