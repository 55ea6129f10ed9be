//! CLI plumbing for the `jdts` binary.
//!
//! Everything outside the core pipeline lives here: argument parsing,
//! the JSON source-set config, `.java` discovery, tracing setup, and the
//! driver that wires parse → model → extract → emit → write.

pub mod args;
pub mod config;
pub mod discover;
pub mod driver;
pub mod trace;

pub use args::CliArgs;
pub use config::{Config, SourceSet, load_config};
pub use driver::{RunSummary, run};
