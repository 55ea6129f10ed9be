//! Common types and utilities for the jdts declaration generator.
//!
//! This crate provides foundational pieces used across all jdts crates:
//! - Qualified-name helpers (`split_name`, `qualified_name`, `base_package`)
//! - Output module keys (`module_file_stem`)
//! - Run diagnostics (`Diagnostic`, `DiagnosticSink`)

pub mod diagnostics;
pub mod names;

pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticSink};
pub use names::{base_package, decapitalize, module_file_stem, qualified_name, split_name};
