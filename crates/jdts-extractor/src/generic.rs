//! Generic signature parsing.
//!
//! Raw type text arrives in the compact form the syntax layer produces
//! (`Map<String,List<Foo>>`, `?extendsFoo`, `int[]`). This is a narrow,
//! bracket-depth-aware scan for that constrained subset, not a grammar:
//! the first angle group splits into top-level arguments, each argument
//! recurses, and the base name goes through the name resolver unless it
//! is a primitive or already deeply qualified.

use jdts_common::{Diagnostic, DiagnosticSink};
use jdts_ir::GenericDefinition;
use jdts_model::{Container, Project, resolve};

/// Names that never go through the resolver: Java primitives, the two
/// `java.lang` types with native TypeScript equivalents, and the bare
/// wildcard.
pub const PRIMITIVE_TYPES: &[&str] = &[
    "void", "boolean", "byte", "short", "int", "long", "float", "double", "char", "String",
    "Object", "?",
];

/// Dotted names longer than this are taken as already resolved.
const MAX_RESOLVED_SEGMENTS: usize = 3;

/// Resolve one base name to canonical text, degrading to the raw text on
/// failure. Wildcard bound markers and the `@NotNull` annotation are
/// stripped before resolution; array suffixes are re-appended afterwards.
pub fn resolve_type_text(
    project: &Project,
    container: Container,
    raw: &str,
    known_external_names: &[String],
    sink: &mut DiagnosticSink,
) -> String {
    let cleaned = raw
        .replace("?super", "")
        .replace("?extends", "")
        .replace("@NotNull", "");

    let mut base = cleaned.as_str();
    let mut suffix = String::new();
    while let Some(stripped) = base.strip_suffix("[]") {
        base = stripped;
        suffix.push_str("[]");
    }

    if PRIMITIVE_TYPES.contains(&base) || base.split('.').count() > MAX_RESOLVED_SEGMENTS {
        return format!("{base}{suffix}");
    }

    match resolve(project, container, base, known_external_names) {
        Ok(resolved) => format!("{}{}", resolved.canonical_name(project), suffix),
        Err(error) => {
            tracing::warn!(%error, "keeping raw type text");
            sink.push(Diagnostic::warning(
                project.describe_container(container),
                format!("failed to resolve `{base}`, keeping raw text"),
            ));
            format!("{base}{suffix}")
        }
    }
}

/// Parse raw generic-type text into a resolved type-expression tree.
pub fn parse_generic(
    project: &Project,
    container: Container,
    raw: &str,
    nullable: bool,
    known_external_names: &[String],
    sink: &mut DiagnosticSink,
) -> GenericDefinition {
    let raw = raw.trim();

    // Arrays recurse on the element type and re-append the suffix.
    if let Some(element) = raw.strip_suffix("[]") {
        let mut definition =
            parse_generic(project, container, element, nullable, known_external_names, sink);
        definition.name.push_str("[]");
        return definition;
    }

    if let Some(open) = raw.find('<') {
        if let Some(close) = raw.rfind('>') {
            if close > open {
                let name = resolve_type_text(
                    project,
                    container,
                    &raw[..open],
                    known_external_names,
                    sink,
                );
                let generics = split_top_level(&raw[open + 1..close])
                    .into_iter()
                    .map(|argument| {
                        parse_generic(
                            project,
                            container,
                            argument,
                            false,
                            known_external_names,
                            sink,
                        )
                    })
                    .collect();
                return GenericDefinition {
                    name,
                    generics,
                    extends: Vec::new(),
                    nullable,
                };
            }
        }
    }

    GenericDefinition {
        name: resolve_type_text(project, container, raw, known_external_names, sink),
        generics: Vec::new(),
        extends: Vec::new(),
        nullable,
    }
}

/// Split an angle-group body at top-level commas; nested groups are
/// never split.
fn split_top_level(arguments: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (index, c) in arguments.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                let part = arguments[start..index].trim();
                if !part.is_empty() {
                    parts.push(part);
                }
                start = index + 1;
            }
            _ => {}
        }
    }
    let last = arguments[start..].trim();
    if !last.is_empty() {
        parts.push(last);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::split_top_level;

    #[test]
    fn splits_only_top_level_commas() {
        assert_eq!(
            split_top_level("String,List<Map<K,V>>,int[]"),
            ["String", "List<Map<K,V>>", "int[]"]
        );
        assert_eq!(split_top_level("Foo"), ["Foo"]);
        assert_eq!(split_top_level(""), Vec::<&str>::new());
    }
}
