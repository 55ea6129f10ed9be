use jdts_emitter::TypeScriptEmitter;
use jdts_emitter::accessors::synthesize_accessors;
use jdts_emitter::flatten::flatten_inherited;
use jdts_ir::{
    ConstructorDefinition, FieldDefinition, GenericDefinition, MethodDefinition,
    ParameterDefinition, TypeDefinition, TypeDefinitionKind,
};
use rustc_hash::{FxHashMap, FxHashSet};

fn class_def(package: &str, name: &str) -> TypeDefinition {
    TypeDefinition {
        package: package.to_string(),
        name: name.to_string(),
        kind: TypeDefinitionKind::Class,
        superclass: None,
        interfaces: vec![],
        constructors: vec![],
        fields: vec![],
        methods: vec![],
        generics: vec![],
        javadoc: vec![],
    }
}

fn interface_def(package: &str, name: &str) -> TypeDefinition {
    TypeDefinition {
        kind: TypeDefinitionKind::Interface,
        ..class_def(package, name)
    }
}

fn method(name: &str, return_type: GenericDefinition) -> MethodDefinition {
    MethodDefinition {
        name: name.to_string(),
        return_type,
        parameters: vec![],
        generics: vec![],
        is_static: false,
        javadoc: vec![],
    }
}

fn parameter(name: &str, ty: GenericDefinition) -> ParameterDefinition {
    ParameterDefinition {
        name: name.to_string(),
        ty,
        spread: false,
        nullable: false,
    }
}

fn list_of(element: GenericDefinition) -> GenericDefinition {
    GenericDefinition::with_arguments("java.util.List", vec![element])
}

#[test]
fn list_generics_erase_to_arrays_at_every_level() {
    let mut def = class_def("a.b", "Store");
    def.methods.push(method(
        "all",
        list_of(GenericDefinition::simple("a.b.Entry")),
    ));
    def.methods.push(method(
        "nested",
        list_of(list_of(GenericDefinition::simple("a.b.Entry"))),
    ));
    let all = vec![def.clone()];
    let emitter = TypeScriptEmitter::new(&all);
    let output = emitter.emit_package("a.b", vec![def]);

    assert!(output.contains("all(): Entry[];"), "{output}");
    assert!(output.contains("nested(): Entry[][];"), "{output}");
    // The erased list type itself is never imported.
    assert!(!output.contains("java.util"), "{output}");
}

#[test]
fn primitive_map_and_module_block_shape() {
    let mut def = class_def("a.b", "Counter");
    def.fields.push(FieldDefinition {
        name: "count".to_string(),
        ty: GenericDefinition::simple("int"),
        readonly: true,
        is_static: false,
        javadoc: vec![],
    });
    def.methods
        .push(method("name", GenericDefinition::simple("String")));
    def.constructors.push(ConstructorDefinition {
        parameters: vec![parameter("initial", GenericDefinition::simple("long"))],
    });
    let all = vec![def.clone()];
    let output = TypeScriptEmitter::new(&all).emit_package("a.b", vec![def]);

    assert!(output.starts_with("declare module 'a.b' {"), "{output}");
    assert!(output.contains("class Counter {"), "{output}");
    assert!(output.contains("readonly count: number;"), "{output}");
    assert!(output.contains("constructor(initial: number);"), "{output}");
    assert!(output.contains("name(): string;"), "{output}");
    assert!(output.trim_end().ends_with('}'), "{output}");
}

#[test]
fn accessor_pairs_are_deprecated_and_synthesized_once() {
    let mut def = class_def("a.b", "Player");
    def.methods
        .push(method("getHealth", GenericDefinition::simple("double")));
    let mut setter = method("setHealth", GenericDefinition::simple("void"));
    setter.parameters = vec![parameter("value", GenericDefinition::simple("double"))];
    def.methods.push(setter);

    let inherited = FxHashSet::default();
    synthesize_accessors(&mut def, &inherited);
    let property_count = def.methods.iter().filter(|m| m.name == "get health").count();
    assert_eq!(property_count, 1);
    assert!(def.methods.iter().any(|m| m.name == "set health"));
    let getter = def.methods.iter().find(|m| m.name == "getHealth").unwrap();
    assert_eq!(getter.javadoc, ["@deprecated Use health instead."]);

    // Running synthesis again must not duplicate the pair.
    synthesize_accessors(&mut def, &inherited);
    let property_count = def.methods.iter().filter(|m| m.name == "get health").count();
    assert_eq!(property_count, 1);
}

#[test]
fn accessor_synthesis_skips_taken_and_inherited_bare_names() {
    let mut def = class_def("a.b", "Player");
    def.methods
        .push(method("getHealth", GenericDefinition::simple("double")));
    let mut setter = method("setHealth", GenericDefinition::simple("void"));
    setter.parameters = vec![parameter("value", GenericDefinition::simple("double"))];
    def.methods.push(setter);
    def.methods
        .push(method("health", GenericDefinition::simple("double")));

    synthesize_accessors(&mut def, &FxHashSet::default());
    assert!(!def.methods.iter().any(|m| m.name == "get health"));

    // Same again, but the conflict comes from an inherited member.
    let mut def = class_def("a.b", "Player");
    def.methods
        .push(method("getHealth", GenericDefinition::simple("double")));
    let mut setter = method("setHealth", GenericDefinition::simple("void"));
    setter.parameters = vec![parameter("value", GenericDefinition::simple("double"))];
    def.methods.push(setter);

    let mut inherited = FxHashSet::default();
    inherited.insert("health".to_string());
    synthesize_accessors(&mut def, &inherited);
    assert!(!def.methods.iter().any(|m| m.name == "get health"));
}

#[test]
fn rendered_accessors_use_property_syntax() {
    let mut def = class_def("a.b", "Player");
    def.methods
        .push(method("getHealth", GenericDefinition::simple("double")));
    let mut setter = method("setHealth", GenericDefinition::simple("void"));
    setter.parameters = vec![parameter("value", GenericDefinition::simple("double"))];
    def.methods.push(setter);

    let all = vec![def.clone()];
    let output = TypeScriptEmitter::new(&all).emit_package("a.b", vec![def]);
    assert!(output.contains("get health(): number;"), "{output}");
    assert!(output.contains("set health(value: number);"), "{output}");
    assert!(output.contains("@deprecated Use health instead."), "{output}");
}

#[test]
fn colliding_imports_are_aliased_consistently() {
    let mut def = class_def("a.b", "User");
    def.methods.push(method(
        "first",
        GenericDefinition::simple("x.y.Widget"),
    ));
    def.methods.push(method(
        "second",
        GenericDefinition::simple("p.q.Widget"),
    ));
    let all = vec![def.clone()];
    let output = TypeScriptEmitter::new(&all).emit_package("a.b", vec![def]);

    assert!(output.contains("import { Widget } from 'x.y';"), "{output}");
    assert!(
        output.contains("import { Widget as p_q_Widget } from 'p.q';"),
        "{output}"
    );
    assert!(output.contains("first(): Widget;"), "{output}");
    assert!(output.contains("second(): p_q_Widget;"), "{output}");
}

#[test]
fn diamond_inheritance_flattens_once_and_terminates() {
    // Root defines lookup(String); Left and Right both extend Root;
    // Bottom implements both and redeclares lookup(int).
    let mut root = interface_def("a.b", "Root");
    let mut lookup_string = method("lookup", GenericDefinition::simple("a.b.Root"));
    lookup_string.parameters = vec![parameter("name", GenericDefinition::simple("String"))];
    root.methods.push(lookup_string);

    let mut left = interface_def("a.b", "Left");
    left.interfaces = vec![GenericDefinition::simple("a.b.Root")];
    let mut right = interface_def("a.b", "Right");
    right.interfaces = vec![GenericDefinition::simple("a.b.Root")];

    let mut bottom = class_def("a.b", "Bottom");
    bottom.interfaces = vec![
        GenericDefinition::simple("a.b.Left"),
        GenericDefinition::simple("a.b.Right"),
    ];
    let mut lookup_int = method("lookup", GenericDefinition::simple("a.b.Root"));
    lookup_int.parameters = vec![parameter("id", GenericDefinition::simple("int"))];
    bottom.methods.push(lookup_int);

    let all = vec![root, left, right, bottom.clone()];
    let mut map: FxHashMap<String, &TypeDefinition> = FxHashMap::default();
    for def in &all {
        map.insert(def.canonical_name(), def);
    }

    flatten_inherited(&mut bottom, &map);
    let lookups: Vec<_> = bottom.methods.iter().filter(|m| m.name == "lookup").collect();
    // The declared overload plus exactly one copy of the ancestor's.
    assert_eq!(lookups.len(), 2);
}

#[test]
fn inherited_methods_bound_to_ancestor_generics_are_not_copied() {
    let mut holder = interface_def("a.b", "Holder");
    holder.generics = vec![GenericDefinition::simple("T")];
    let mut get_t = method("value", GenericDefinition::simple("T"));
    get_t.parameters = vec![];
    holder.methods.push(get_t);
    let mut value_int = method("value", GenericDefinition::simple("int"));
    value_int.parameters = vec![parameter("index", GenericDefinition::simple("int"))];
    holder.methods.push(value_int);

    let mut user = class_def("a.b", "User");
    user.interfaces = vec![GenericDefinition::with_arguments(
        "a.b.Holder",
        vec![GenericDefinition::simple("String")],
    )];
    user.methods.push({
        let mut m = method("value", GenericDefinition::simple("String"));
        m.parameters = vec![parameter("name", GenericDefinition::simple("String"))];
        m
    });

    let all = vec![holder, user.clone()];
    let mut map: FxHashMap<String, &TypeDefinition> = FxHashMap::default();
    for def in &all {
        map.insert(def.canonical_name(), def);
    }

    flatten_inherited(&mut user, &map);
    // `value(): T` references the ancestor's parameter and is excluded;
    // `value(int)` is copied.
    let value_methods: Vec<_> = user.methods.iter().filter(|m| m.name == "value").collect();
    assert_eq!(value_methods.len(), 2);
    assert!(!user.methods.iter().any(|m| m.return_type.name == "T"));
}

#[test]
fn priority_types_come_first_then_names_sort() {
    let all = vec![
        class_def("a.b", "Zebra"),
        class_def("a.b", "Keyed"),
        class_def("a.b", "Apple"),
    ];
    let output = TypeScriptEmitter::new(&all).emit_package("a.b", all.clone());
    let keyed = output.find("class Keyed").unwrap();
    let apple = output.find("class Apple").unwrap();
    let zebra = output.find("class Zebra").unwrap();
    assert!(keyed < apple && apple < zebra, "{output}");
}

#[test]
fn interfaces_with_static_members_emit_a_merged_pair() {
    let mut def = interface_def("a.b", "Registry");
    def.interfaces = vec![
        GenericDefinition::simple("a.b.First"),
        GenericDefinition::simple("a.b.Second"),
    ];
    def.fields.push(FieldDefinition {
        name: "LIMIT".to_string(),
        ty: GenericDefinition::simple("int"),
        readonly: true,
        is_static: true,
        javadoc: vec![],
    });
    let mut of = method("of", GenericDefinition::simple("a.b.Registry"));
    of.is_static = true;
    def.methods.push(of);

    let all = vec![def.clone()];
    let output = TypeScriptEmitter::new(&all).emit_package("a.b", vec![def]);

    assert!(
        output.contains("interface Registry extends First, Second {}"),
        "{output}"
    );
    assert!(output.contains("class Registry implements First {"), "{output}");
    assert!(output.contains("static readonly LIMIT: number;"), "{output}");
    assert!(output.contains("static of(): Registry;"), "{output}");
}

#[test]
fn plain_interfaces_render_members_inline() {
    let mut def = interface_def("a.b", "Audience");
    def.methods
        .push(method("name", GenericDefinition::simple("String")));
    let all = vec![def.clone()];
    let output = TypeScriptEmitter::new(&all).emit_package("a.b", vec![def]);
    assert!(output.contains("interface Audience {"), "{output}");
    assert!(output.contains("name(): string;"), "{output}");
}

#[test]
fn distinct_packages_in_one_key_get_separate_module_blocks() {
    let defs = vec![class_def("a.b.x", "Foo"), class_def("a.b.y", "Bar")];
    let output = TypeScriptEmitter::new(&defs).emit_package("a.b", defs.clone());
    assert!(output.contains("declare module 'a.b.x' {"), "{output}");
    assert!(output.contains("declare module 'a.b.y' {"), "{output}");
}

#[test]
fn generic_bounds_render_as_conjunctive_clauses() {
    let mut def = class_def("a.b", "Holder");
    def.generics = vec![GenericDefinition {
        name: "T".to_string(),
        generics: vec![],
        extends: vec![
            GenericDefinition::simple("a.b.Keyed"),
            GenericDefinition::simple("a.b.Named"),
        ],
        nullable: false,
    }];
    let all = vec![def.clone()];
    let output = TypeScriptEmitter::new(&all).emit_package("a.b", vec![def]);
    assert!(
        output.contains("class Holder<T extends Keyed & Named = any> {"),
        "{output}"
    );
}
