//! Dotted-name helpers shared by the model, extractor, and emitter.
//!
//! Java type names are dotted paths through packages and enclosing types.
//! These helpers are the single place that splits, joins, and truncates
//! them so every crate agrees on the conventions.

/// Number of package segments that form an output module key.
///
/// `io.papermc.paper.entity` and `io.papermc.paper.block` both land in the
/// `io.papermc` output file; a one-segment package is its own key.
pub const MODULE_KEY_DEPTH: usize = 2;

/// Split a dotted name into `(qualifier, simple_name)` at the last dot.
///
/// Returns `(None, name)` when there is no dot.
pub fn split_name(name: &str) -> (Option<&str>, &str) {
    match name.rsplit_once('.') {
        Some((qualifier, simple)) => (Some(qualifier), simple),
        None => (None, name),
    }
}

/// Join an optional package with a simple name.
pub fn qualified_name(package: Option<&str>, name: &str) -> String {
    match package {
        Some(pkg) if !pkg.is_empty() => format!("{pkg}.{name}"),
        _ => name.to_string(),
    }
}

/// Truncate a package path to the module key depth.
pub fn base_package(package: &str) -> String {
    package
        .split('.')
        .take(MODULE_KEY_DEPTH)
        .collect::<Vec<&str>>()
        .join(".")
}

/// Turn a module key into a filename-safe stem.
///
/// Every character that is not an ASCII identifier character is replaced
/// with `_`, so `io.papermc` becomes `io_papermc`.
pub fn module_file_stem(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Lower-case the first character, leaving the rest untouched.
pub fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_name_takes_last_dot() {
        assert_eq!(split_name("java.util.List"), (Some("java.util"), "List"));
        assert_eq!(split_name("List"), (None, "List"));
    }

    #[test]
    fn qualified_name_handles_default_package() {
        assert_eq!(qualified_name(Some("a.b"), "C"), "a.b.C");
        assert_eq!(qualified_name(None, "C"), "C");
        assert_eq!(qualified_name(Some(""), "C"), "C");
    }

    #[test]
    fn base_package_truncates_to_two_segments() {
        assert_eq!(base_package("io.papermc.paper.entity"), "io.papermc");
        assert_eq!(base_package("single"), "single");
        assert_eq!(base_package("a.b"), "a.b");
    }

    #[test]
    fn module_file_stem_is_filename_safe() {
        assert_eq!(module_file_stem("io.papermc"), "io_papermc");
        assert_eq!(module_file_stem("net.kyori-adventure"), "net_kyori_adventure");
    }

    #[test]
    fn decapitalize_lowers_only_first_char() {
        assert_eq!(decapitalize("MaxHealth"), "maxHealth");
        assert_eq!(decapitalize(""), "");
    }
}
