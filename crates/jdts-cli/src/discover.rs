//! `.java` discovery under a source set.
//!
//! The package of a file is derived from its path relative to the
//! (offset-adjusted) root; include/exclude filters are package-prefix
//! matches against it.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::SourceSet;

pub fn discover_java_files(set: &SourceSet) -> Result<Vec<PathBuf>> {
    let root = match &set.offset {
        Some(offset) => set.root.join(offset),
        None => set.root.clone(),
    };

    let mut files = Vec::new();
    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("failed to walk source root {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("java") {
            continue;
        }
        let package = package_of(&root, path);
        if is_package_allowed(&package, &set.include, &set.exclude) {
            files.push(path.to_path_buf());
        } else {
            tracing::debug!(path = %path.display(), package, "filtered out by package rules");
        }
    }
    Ok(files)
}

/// Dotted package derived from the directory path relative to `root`.
fn package_of(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let mut segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    segments.pop(); // file name
    segments.join(".")
}

pub fn is_package_allowed(package: &str, include: &[String], exclude: &[String]) -> bool {
    if !include.is_empty() && !include.iter().any(|prefix| package.starts_with(prefix.as_str())) {
        return false;
    }
    !exclude
        .iter()
        .any(|prefix| package.starts_with(prefix.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn include_filters_to_prefixes() {
        let include = strings(&["org.bukkit"]);
        assert!(is_package_allowed("org.bukkit.entity", &include, &[]));
        assert!(!is_package_allowed("com.example", &include, &[]));
    }

    #[test]
    fn exclude_applies_after_include() {
        let include = strings(&["org.bukkit"]);
        let exclude = strings(&["org.bukkit.craft"]);
        assert!(is_package_allowed("org.bukkit.entity", &include, &exclude));
        assert!(!is_package_allowed("org.bukkit.craft.internal", &include, &exclude));
    }

    #[test]
    fn empty_filters_allow_everything() {
        assert!(is_package_allowed("anything.at.all", &[], &[]));
    }

    #[test]
    fn package_of_uses_directories_only() {
        let root = Path::new("/src");
        let path = Path::new("/src/org/bukkit/Pig.java");
        assert_eq!(package_of(root, path), "org.bukkit");
    }
}
