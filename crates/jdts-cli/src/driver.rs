//! The pipeline driver: parse → model → extract → emit → write.
//!
//! Files parse in parallel; everything after the project is built runs
//! single-threaded (the resolver is a pure read over the project, the
//! emitter mutates only its own module's declarations).

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use jdts_common::{Diagnostic, base_package, module_file_stem};
use jdts_emitter::TypeScriptEmitter;
use jdts_extractor::extract_project;
use jdts_ir::TypeDefinition;
use jdts_model::Project;
use jdts_syntax::{CompilationUnitContext, parse_compilation_unit};

use crate::config::Config;
use crate::discover::discover_java_files;

#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_parsed: usize,
    pub definitions: usize,
    pub modules_written: Vec<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Run the whole pipeline for one config.
pub fn run(config: &Config, out_dir: &Path, dump_ir: bool) -> Result<RunSummary> {
    if config.sources.is_empty() {
        bail!("no source sets configured; pass a config file or --root");
    }

    let mut files = Vec::new();
    for set in &config.sources {
        let mut found = discover_java_files(set)?;
        tracing::info!(root = %set.root.display(), count = found.len(), "discovered sources");
        files.append(&mut found);
    }
    if files.is_empty() {
        bail!("no .java files found under the configured source roots");
    }

    // Parsing is pure per-file; a structural parse failure aborts the run.
    let units: Vec<CompilationUnitContext> = files
        .par_iter()
        .map(|path| {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            parse_compilation_unit(&source)
                .with_context(|| format!("failed to parse {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let project = Project::from_units(units);
    let (definitions, sink) = extract_project(&project, &config.known_types);
    tracing::info!(definitions = definitions.len(), "extraction complete");

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    let mut summary = RunSummary {
        files_parsed: files.len(),
        definitions: definitions.len(),
        modules_written: Vec::new(),
        diagnostics: sink.into_vec(),
    };

    if dump_ir {
        let path = out_dir.join("ir.json");
        let json = serde_json::to_string_pretty(&definitions)?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        summary.modules_written.push(path);
        return Ok(summary);
    }

    // Group by output module key: the package truncated to a fixed depth.
    let mut modules: IndexMap<String, Vec<TypeDefinition>> = IndexMap::new();
    for definition in &definitions {
        modules
            .entry(base_package(&definition.package))
            .or_default()
            .push(definition.clone());
    }
    modules.sort_keys();

    let emitter = TypeScriptEmitter::new(&definitions);
    let mut reference_files = Vec::new();
    for (module_key, module_types) in modules {
        let output = emitter.emit_package(&module_key, module_types);
        let file_name = format!("{}.d.ts", module_file_stem(&module_key));
        let path = out_dir.join(&file_name);
        std::fs::write(&path, format!("{output}\n"))
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(module = module_key, path = %path.display(), "wrote module");
        reference_files.push(file_name);
        summary.modules_written.push(path);
    }

    let index = index_file(&reference_files);
    let index_path = out_dir.join("index.d.ts");
    std::fs::write(&index_path, index)
        .with_context(|| format!("failed to write {}", index_path.display()))?;
    summary.modules_written.push(index_path);

    Ok(summary)
}

fn index_file(reference_files: &[String]) -> String {
    let references: Vec<String> = reference_files
        .iter()
        .map(|file| format!("/// <reference path=\"{file}\" />"))
        .collect();
    format!(
        "// Auto generated index file, do not edit!\n\n{}\n",
        references.join("\n")
    )
}
