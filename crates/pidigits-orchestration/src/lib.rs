//! # pidigits-orchestration
//!
//! Request execution, completion strategies, and result presentation.

pub mod interfaces;
pub mod orchestrator;

pub use interfaces::{DigitsResult, ResultPresenter};
pub use orchestrator::{compute_digits, execute_request, Completion};
