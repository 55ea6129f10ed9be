//! Property accessor synthesis.
//!
//! A `getX()` with a matching one-argument `setX(...)` is the Java
//! spelling of a property. Both originals stay (deprecated) and a
//! `get x` / `set x` property pair is appended, unless the bare value
//! name is already taken by a declared or inherited member.

use jdts_common::decapitalize;
use jdts_ir::{GenericDefinition, MethodDefinition, TypeDefinition};
use rustc_hash::FxHashSet;

pub fn synthesize_accessors(definition: &mut TypeDefinition, inherited_names: &FxHashSet<String>) {
    let mut additions: Vec<MethodDefinition> = Vec::new();

    for getter_index in 0..definition.methods.len() {
        let getter = &definition.methods[getter_index];
        let Some(value) = getter.name.strip_prefix("get") else {
            continue;
        };
        // Skip already-synthesized properties (`get x`) and bare `get()`.
        if value.is_empty() || value.contains(' ') || !getter.parameters.is_empty() {
            continue;
        }
        let setter_name = format!("set{value}");
        let Some(setter_index) = definition
            .methods
            .iter()
            .position(|m| m.name == setter_name && m.parameters.len() == 1)
        else {
            continue;
        };

        let value_name = decapitalize(value);
        let bare_name_taken = definition.methods.iter().any(|m| {
            m.name == value_name
                || m.name == format!("get {value_name}")
                || m.name == format!("set {value_name}")
        }) || definition.fields.iter().any(|f| f.name == value_name)
            || inherited_names.contains(&value_name)
            || additions
                .iter()
                .any(|m| m.name == format!("get {value_name}"));
        if bare_name_taken {
            continue;
        }

        let deprecation = format!("@deprecated Use {value_name} instead.");
        let getter = &mut definition.methods[getter_index];
        getter.javadoc = vec![deprecation.clone()];
        let property_getter = MethodDefinition {
            name: format!("get {value_name}"),
            return_type: getter.return_type.clone(),
            parameters: Vec::new(),
            generics: getter.generics.clone(),
            is_static: getter.is_static,
            javadoc: vec![format!("Returns the {value_name} value.")],
        };

        let setter = &mut definition.methods[setter_index];
        setter.javadoc = vec![deprecation];
        let property_setter = MethodDefinition {
            name: format!("set {value_name}"),
            return_type: GenericDefinition::simple("void"),
            parameters: setter.parameters.clone(),
            generics: setter.generics.clone(),
            is_static: setter.is_static,
            javadoc: Vec::new(),
        };

        additions.push(property_getter);
        additions.push(property_setter);
    }

    definition.methods.append(&mut additions);
}
