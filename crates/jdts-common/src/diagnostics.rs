//! Run diagnostics.
//!
//! Extraction-local resolution failures degrade to raw text instead of
//! aborting the run, but they must not disappear silently either. Every
//! degradation is recorded here and reported at the end of the run.

use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

/// A single reported condition, tied to the container it occurred in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    /// Canonical name of the declaration (or package) the condition occurred in.
    pub context: String,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            category: DiagnosticCategory::Warning,
            context: context.into(),
            message: message.into(),
        }
    }

    pub fn error(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            context: context.into(),
            message: message.into(),
        }
    }
}

/// Ordered collection of diagnostics for one run.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.category == DiagnosticCategory::Warning)
            .count()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_preserves_order_and_counts() {
        let mut sink = DiagnosticSink::new();
        sink.push(Diagnostic::warning("a.B", "cannot resolve `Foo`"));
        sink.push(Diagnostic::error("a.C", "bad input"));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.warning_count(), 1);
        let contexts: Vec<&str> = sink.iter().map(|d| d.context.as_str()).collect();
        assert_eq!(contexts, ["a.B", "a.C"]);
    }
}
