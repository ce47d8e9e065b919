//! marvin - Documentation quality checks with a persistent result history
//!
//! This library runs external documentation checkers (Vale, markdownlint)
//! as subprocesses, persists each run's findings as a durable result
//! record, and exposes query operations over the accumulated history.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod checker;
pub mod config;
pub mod models;
pub mod output;
pub mod query;
pub mod runner;
pub mod server;
pub mod store;
