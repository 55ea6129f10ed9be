use std::fs;
use std::path::Path;

use jdts_cli::config::{Config, SourceSet};
use jdts_cli::run;

fn write_source(root: &Path, package_path: &str, name: &str, source: &str) {
    let dir = root.join(package_path);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{name}.java")), source).unwrap();
}

fn source_set(root: &Path) -> SourceSet {
    SourceSet {
        root: root.to_path_buf(),
        include: vec![],
        exclude: vec![],
        offset: None,
    }
}

#[test]
fn end_to_end_generates_declaration_modules_and_index() {
    let temp = tempfile::tempdir().unwrap();
    let sources = temp.path().join("sources");
    let out = temp.path().join("out");

    write_source(
        &sources,
        "org/bukkit/entity",
        "Pig",
        r#"
package org.bukkit.entity;

import java.util.List;

public class Pig extends Animal {
    /** Returns the saddle state. */
    public boolean hasSaddle() { return false; }

    public List<Pig> getPassengers() { return null; }
}
"#,
    );
    write_source(
        &sources,
        "org/bukkit/entity",
        "Animal",
        r#"
package org.bukkit.entity;

public class Animal {
    public String getName() { return null; }
    public void setName(String name) {}
}
"#,
    );

    let config = Config {
        sources: vec![source_set(&sources)],
        known_types: vec![],
    };
    let summary = run(&config, &out, false).unwrap();
    assert_eq!(summary.files_parsed, 2);
    assert_eq!(summary.definitions, 2);
    assert!(summary.diagnostics.is_empty());

    let module = fs::read_to_string(out.join("org_bukkit.d.ts")).unwrap();
    assert!(module.contains("declare module 'org.bukkit.entity' {"), "{module}");
    assert!(module.contains("class Animal {"), "{module}");
    assert!(module.contains("class Pig extends Animal {"), "{module}");
    // List<Pig> erased to an array.
    assert!(module.contains("getPassengers(): Pig[];"), "{module}");
    // Accessor pair on Animal synthesized into a property.
    assert!(module.contains("get name(): string;"), "{module}");

    let index = fs::read_to_string(out.join("index.d.ts")).unwrap();
    assert!(index.starts_with("// Auto generated index file, do not edit!"));
    assert!(index.contains("/// <reference path=\"org_bukkit.d.ts\" />"));
}

#[test]
fn include_filter_limits_packages() {
    let temp = tempfile::tempdir().unwrap();
    let sources = temp.path().join("sources");
    let out = temp.path().join("out");

    write_source(
        &sources,
        "org/bukkit",
        "Keep",
        "package org.bukkit; public class Keep {}",
    );
    write_source(
        &sources,
        "com/example",
        "Drop",
        "package com.example; public class Drop {}",
    );

    let mut set = source_set(&sources);
    set.include = vec!["org.bukkit".to_string()];
    let config = Config {
        sources: vec![set],
        known_types: vec![],
    };
    let summary = run(&config, &out, false).unwrap();
    assert_eq!(summary.files_parsed, 1);
    assert!(out.join("org_bukkit.d.ts").exists());
    assert!(!out.join("com_example.d.ts").exists());
}

#[test]
fn dump_ir_writes_json_instead_of_declarations() {
    let temp = tempfile::tempdir().unwrap();
    let sources = temp.path().join("sources");
    let out = temp.path().join("out");

    write_source(
        &sources,
        "a",
        "Foo",
        "package a; public class Foo { public int count() { return 0; } }",
    );

    let config = Config {
        sources: vec![source_set(&sources)],
        known_types: vec![],
    };
    let summary = run(&config, &out, true).unwrap();
    assert_eq!(summary.modules_written.len(), 1);

    let ir = fs::read_to_string(out.join("ir.json")).unwrap();
    assert!(ir.contains("\"name\": \"Foo\""), "{ir}");
    assert!(ir.contains("\"kind\": \"class\""), "{ir}");
    assert!(!out.join("index.d.ts").exists());
}

#[test]
fn structural_parse_failures_abort_the_run() {
    let temp = tempfile::tempdir().unwrap();
    let sources = temp.path().join("sources");
    let out = temp.path().join("out");

    write_source(&sources, "a", "Broken", "package a; public class Broken {");

    let config = Config {
        sources: vec![source_set(&sources)],
        known_types: vec![],
    };
    let error = run(&config, &out, false).unwrap_err();
    assert!(format!("{error:#}").contains("Broken.java"), "{error:#}");
}

#[test]
fn empty_configuration_is_an_error() {
    let temp = tempfile::tempdir().unwrap();
    let config = Config::default();
    assert!(run(&config, temp.path(), false).is_err());
}
