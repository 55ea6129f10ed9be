use jdts_model::{Container, Project, ResolvedType, resolve};
use jdts_syntax::parse_compilation_unit;

fn project(sources: &[&str]) -> Project {
    let units = sources
        .iter()
        .map(|s| parse_compilation_unit(s).unwrap())
        .collect();
    Project::from_units(units)
}

fn type_container(project: &Project, canonical: &str) -> Container {
    Container::Type(project.find_type(canonical).unwrap())
}

fn resolve_name(project: &Project, canonical: &str, name: &str, known: &[&str]) -> Result<String, String> {
    let known: Vec<String> = known.iter().map(|s| s.to_string()).collect();
    resolve(project, type_container(project, canonical), name, &known)
        .map(|r| r.canonical_name(project))
        .map_err(|e| e.to_string())
}

#[test]
fn resolves_same_package_sibling() {
    let p = project(&[
        "package a.b; public class Foo {}",
        "package a.b; public class Bar { Foo f; }",
    ]);
    assert_eq!(resolve_name(&p, "a.b.Bar", "Foo", &[]).unwrap(), "a.b.Foo");
}

#[test]
fn explicit_import_outranks_same_package() {
    let p = project(&[
        "package a.b; import x.y.Foo; public class Bar {}",
        "package a.b; public class Foo {}",
    ]);
    assert_eq!(resolve_name(&p, "a.b.Bar", "Foo", &[]).unwrap(), "x.y.Foo");
}

#[test]
fn explicit_import_of_project_type_resolves_to_declaration() {
    let p = project(&[
        "package a.b; import c.d.Foo; public class Bar {}",
        "package c.d; public class Foo {}",
    ]);
    let result = resolve(
        &p,
        type_container(&p, "a.b.Bar"),
        "Foo",
        &[],
    )
    .unwrap();
    assert!(matches!(result, ResolvedType::Declaration(_)));
    assert_eq!(result.canonical_name(&p), "c.d.Foo");
}

#[test]
fn type_parameter_wins_over_imports() {
    let p = project(&["package a; import x.y.T; public class Box<T> {}"]);
    assert_eq!(resolve_name(&p, "a.Box", "T", &[]).unwrap(), "T");
}

#[test]
fn nested_and_self_names_resolve_through_enclosing_scopes() {
    let p = project(&[
        "package a; public class Outer { public class Inner { } public class Other { } }",
    ]);
    assert_eq!(
        resolve_name(&p, "a.Outer.Inner", "Other", &[]).unwrap(),
        "a.Outer.Other"
    );
    assert_eq!(
        resolve_name(&p, "a.Outer.Inner", "Outer", &[]).unwrap(),
        "a.Outer"
    );
}

#[test]
fn qualified_name_through_declared_type_finds_nested() {
    let p = project(&[
        "package a; public class Outer { public class Inner { } }",
        "package a; public class User {}",
    ]);
    assert_eq!(
        resolve_name(&p, "a.User", "Outer.Inner", &[]).unwrap(),
        "a.Outer.Inner"
    );
}

#[test]
fn qualified_name_through_reference_concatenates() {
    let p = project(&["package a; import x.y.Foo; public class User {}"]);
    assert_eq!(
        resolve_name(&p, "a.User", "Foo.Bar", &[]).unwrap(),
        "x.y.Foo.Bar"
    );
}

#[test]
fn implicit_java_lang_types_resolve_without_imports() {
    let p = project(&["package a; public class User {}"]);
    assert_eq!(
        resolve_name(&p, "a.User", "String", &[]).unwrap(),
        "java.lang.String"
    );
    assert_eq!(
        resolve_name(&p, "a.User", "IllegalStateException", &[]).unwrap(),
        "java.lang.IllegalStateException"
    );
}

#[test]
fn no_wildcards_falls_back_to_current_package() {
    let p = project(&["package a.b; public class User {}"]);
    assert_eq!(
        resolve_name(&p, "a.b.User", "Unseen", &[]).unwrap(),
        "a.b.Unseen"
    );
}

#[test]
fn single_wildcard_supplies_the_namespace() {
    let p = project(&["package a; import x.y.*; public class User {}"]);
    assert_eq!(
        resolve_name(&p, "a.User", "Widget", &[]).unwrap(),
        "x.y.Widget"
    );
}

#[test]
fn two_wildcards_without_hints_fail() {
    let p = project(&["package a; import x.y.*; import p.q.*; public class User {}"]);
    let err = resolve_name(&p, "a.User", "Widget", &[]).unwrap_err();
    assert!(err.contains("Widget"));
    assert!(err.contains("a.User"));
}

#[test]
fn known_external_names_disambiguate_wildcards() {
    let p = project(&["package a; import x.y.*; import p.q.*; public class User {}"]);
    assert_eq!(
        resolve_name(&p, "a.User", "Widget", &["p.q.Widget"]).unwrap(),
        "p.q.Widget"
    );
}

#[test]
fn known_external_names_matching_no_wildcard_fall_back_to_package() {
    let p = project(&["package a; import x.y.*; import p.q.*; public class User {}"]);
    assert_eq!(
        resolve_name(&p, "a.User", "Widget", &["unrelated.Widget"]).unwrap(),
        "a.Widget"
    );
}

#[test]
fn well_known_ambiguous_names_use_the_fixed_fallback() {
    let p = project(&["package a; import x.y.*; import p.q.*; public class User {}"]);
    assert_eq!(
        resolve_name(&p, "a.User", "List", &[]).unwrap(),
        "java.util.List"
    );
}

#[test]
fn resolution_is_deterministic() {
    let p = project(&[
        "package a.b; import x.y.*; public class Foo {}",
        "package a.b; public class Bar {}",
    ]);
    let first = resolve_name(&p, "a.b.Foo", "Bar", &[]).unwrap();
    let second = resolve_name(&p, "a.b.Foo", "Bar", &[]).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, "a.b.Bar");
}
