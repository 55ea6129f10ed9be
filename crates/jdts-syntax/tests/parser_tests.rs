use jdts_syntax::{TypeKindContext, parse_compilation_unit};

#[test]
fn parses_package_imports_and_class_header() {
    let unit = parse_compilation_unit(
        r#"
package io.papermc.paper.entity;

import java.util.List;
import org.bukkit.event.*;
import static java.util.Objects.requireNonNull;

public class Pig extends Animal implements Steerable, Cloneable {
}
"#,
    )
    .unwrap();

    assert_eq!(unit.package.as_deref(), Some("io.papermc.paper.entity"));
    assert_eq!(unit.imports.len(), 3);
    assert_eq!(unit.imports[0].path, "java.util.List");
    assert!(!unit.imports[0].wildcard);
    assert_eq!(unit.imports[1].path, "org.bukkit.event");
    assert!(unit.imports[1].wildcard);
    assert!(unit.imports[2].is_static);

    let ty = &unit.types[0];
    assert_eq!(ty.kind, TypeKindContext::Class);
    assert_eq!(ty.name, "Pig");
    assert_eq!(ty.superclass.as_ref().unwrap().name, "Animal");
    let interfaces: Vec<&str> = ty.interfaces.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(interfaces, ["Steerable", "Cloneable"]);
}

#[test]
fn assembles_compact_type_text_for_members() {
    let unit = parse_compilation_unit(
        r#"
package a;

public class Registry {
    public java.util.Map<String, java.util.List<Entry>> lookup;

    public <T extends Keyed> T get(NamespacedKey key, Class<? extends T> type) {
        return null;
    }
}
"#,
    )
    .unwrap();

    let ty = &unit.types[0];
    assert_eq!(
        ty.fields[0].type_text,
        "java.util.Map<String,java.util.List<Entry>>"
    );
    let method = &ty.methods[0];
    assert_eq!(method.type_params[0].name, "T");
    assert_eq!(method.type_params[0].bounds, ["Keyed"]);
    assert_eq!(method.parameters[0].type_text, "NamespacedKey");
    assert_eq!(method.parameters[1].type_text, "Class<?extendsT>");
}

#[test]
fn skips_bodies_and_initializers() {
    let unit = parse_compilation_unit(
        r#"
package a;

public class Util {
    public static final int LIMIT = compute(1 < 2 ? 3 : 4);
    private static int counter;

    static {
        counter = 0;
    }

    public int next() {
        if (counter > LIMIT) { throw new IllegalStateException("full"); }
        return counter++;
    }
}
"#,
    )
    .unwrap();

    let ty = &unit.types[0];
    assert_eq!(ty.fields.len(), 2);
    assert_eq!(ty.fields[0].name, "LIMIT");
    assert_eq!(ty.methods.len(), 1);
    assert_eq!(ty.methods[0].return_type_text, "int");
}

#[test]
fn parses_enum_constants_with_argument_lists_and_bodies() {
    let unit = parse_compilation_unit(
        r#"
package a;

public enum GameMode {
    /** Standard play. */
    SURVIVAL(0),
    CREATIVE(1) {
        void extra() {}
    },
    ADVENTURE(2);

    private final int id;

    GameMode(int id) { this.id = id; }

    public int getId() { return id; }
}
"#,
    )
    .unwrap();

    let ty = &unit.types[0];
    assert_eq!(ty.kind, TypeKindContext::Enum);
    let names: Vec<&str> = ty.constants.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["SURVIVAL", "CREATIVE", "ADVENTURE"]);
    assert!(ty.constants[0].javadoc.as_deref().unwrap().contains("Standard play."));
    assert_eq!(ty.constructors.len(), 1);
    assert_eq!(ty.methods[0].name, "getId");
}

#[test]
fn parses_varargs_annotations_and_javadoc() {
    let unit = parse_compilation_unit(
        r#"
package a;

public interface Audience {
    /**
     * Sends messages.
     *
     * @param messages the messages
     */
    void sendMessages(@Nullable String... messages);

    sealed interface Pointer permits NamedPointer {}
}
"#,
    )
    .unwrap();

    let ty = &unit.types[0];
    let method = &ty.methods[0];
    assert!(method.javadoc.as_deref().unwrap().contains("Sends messages."));
    assert!(method.parameters[0].varargs);
    assert_eq!(method.parameters[0].annotations, ["Nullable"]);

    let nested = &ty.types[0];
    assert_eq!(nested.kind, TypeKindContext::Interface);
    assert!(nested.modifiers.iter().any(|m| m == "sealed"));
}

#[test]
fn parses_records_and_nested_types() {
    let unit = parse_compilation_unit(
        r#"
package a;

public record Position(int x, int y) implements Comparable<Position> {
    public static final Position ORIGIN = new Position(0, 0);

    public class Inner {}
}
"#,
    )
    .unwrap();

    let ty = &unit.types[0];
    assert_eq!(ty.kind, TypeKindContext::Record);
    assert_eq!(ty.components.len(), 2);
    assert_eq!(ty.components[0].name, "x");
    assert_eq!(ty.interfaces[0].name, "Comparable");
    assert_eq!(ty.interfaces[0].arguments, ["Position"]);
    assert_eq!(ty.types[0].name, "Inner");
}

#[test]
fn multiple_field_declarators_share_the_type() {
    let unit = parse_compilation_unit("package a; class C { public int a = 1, b; }").unwrap();
    let ty = &unit.types[0];
    assert_eq!(ty.fields.len(), 2);
    assert_eq!(ty.fields[0].name, "a");
    assert_eq!(ty.fields[1].name, "b");
    assert_eq!(ty.fields[1].type_text, "int");
}

#[test]
fn unbalanced_body_is_a_structural_error() {
    assert!(parse_compilation_unit("package a; class C { void f() {").is_err());
}
