//! Application logic for the hex digit extractor.

pub mod app;
pub mod config;
pub mod errors;
