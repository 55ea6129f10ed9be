//! Run configuration.
//!
//! A config file is a JSON object with the source sets to process and an
//! optional allow-list of fully qualified dependency types used to
//! disambiguate multi-wildcard imports:
//!
//! ```json
//! {
//!   "sources": [
//!     { "root": "./paper-api", "include": ["io.papermc", "org.bukkit"] },
//!     { "root": "./adventure", "exclude": ["net.kyori.examination"] }
//!   ],
//!   "knownTypes": ["net.kyori.adventure.text.Component"]
//! }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub sources: Vec<SourceSet>,
    /// Fully qualified names of types in direct dependencies; used only
    /// for multi-wildcard import disambiguation.
    #[serde(default)]
    pub known_types: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSet {
    /// Directory containing extracted Java sources.
    pub root: PathBuf,
    /// Package prefixes to keep; empty keeps everything.
    #[serde(default)]
    pub include: Vec<String>,
    /// Package prefixes to drop, applied after `include`.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Subdirectory inside `root` to start from.
    #[serde(default)]
    pub offset: Option<String>,
}

impl Config {
    /// Config equivalent of plain `--root DIR` arguments.
    pub fn from_roots(roots: Vec<PathBuf>) -> Self {
        Self {
            sources: roots
                .into_iter()
                .map(|root| SourceSet {
                    root,
                    include: Vec::new(),
                    exclude: Vec::new(),
                    offset: None,
                })
                .collect(),
            known_types: Vec::new(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}
