//! Inherited-method flattening.
//!
//! TypeScript resolves same-named members by simple override: a type
//! that redeclares `lookup(a)` hides every inherited `lookup(b)`
//! overload. Any inherited method that shares a name with a declared
//! member but not its exact signature is therefore copied onto the
//! declaring type.
//!
//! The supertype graph is a DAG (interfaces re-reach shared ancestors
//! through multiple paths), so the walk carries a visited set and each
//! ancestor contributes at most once.

use std::collections::VecDeque;

use jdts_ir::{GenericDefinition, MethodDefinition, TypeDefinition};
use rustc_hash::{FxHashMap, FxHashSet};

/// Copy overload-hidden inherited methods onto `definition`.
///
/// Returns the names of every inherited member (copied or not), which
/// the accessor-synthesis pass consults for bare-name conflicts.
pub fn flatten_inherited(
    definition: &mut TypeDefinition,
    all: &FxHashMap<String, &TypeDefinition>,
) -> FxHashSet<String> {
    let declared_names: FxHashSet<String> =
        definition.methods.iter().map(|m| m.name.clone()).collect();
    let mut existing_signatures: FxHashSet<String> = definition
        .methods
        .iter()
        .map(method_signature)
        .collect();

    let mut inherited_names = FxHashSet::default();
    let mut copied: Vec<MethodDefinition> = Vec::new();
    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut queue: VecDeque<String> = VecDeque::new();

    queue.extend(supertype_names(definition));

    while let Some(ancestor_name) = queue.pop_front() {
        if !visited.insert(ancestor_name.clone()) {
            continue;
        }
        let Some(ancestor) = all.get(&ancestor_name) else {
            // External ancestor; its members are not modeled.
            continue;
        };

        for field in &ancestor.fields {
            inherited_names.insert(field.name.clone());
        }
        for method in &ancestor.methods {
            inherited_names.insert(method.name.clone());

            if !declared_names.contains(&method.name) {
                // Plain inheritance works; only hidden overloads copy.
                continue;
            }
            if references_enclosing_generic(method, &ancestor.generics) {
                // Bound to the ancestor's own type parameters; the
                // member model cannot express that at this level.
                continue;
            }
            let signature = method_signature(method);
            if existing_signatures.contains(&signature) {
                continue;
            }
            existing_signatures.insert(signature);
            copied.push(method.clone());
        }

        queue.extend(supertype_names(ancestor));
    }

    if !copied.is_empty() {
        tracing::debug!(
            type_name = %definition.name,
            count = copied.len(),
            "copied overload-hidden inherited methods"
        );
        definition.methods.append(&mut copied);
    }
    inherited_names
}

fn supertype_names(definition: &TypeDefinition) -> Vec<String> {
    definition
        .superclass
        .iter()
        .chain(definition.interfaces.iter())
        .map(|s| s.name.clone())
        .collect()
}

/// Whether the method's return or parameter types mention a type
/// parameter of the enclosing declaration the method itself does not
/// offer.
fn references_enclosing_generic(
    method: &MethodDefinition,
    enclosing_generics: &[GenericDefinition],
) -> bool {
    let own: FxHashSet<&str> = method.generics.iter().map(|g| g.name.as_str()).collect();
    enclosing_generics
        .iter()
        .filter(|g| !own.contains(g.name.as_str()))
        .any(|g| {
            method.return_type.mentions(&g.name)
                || method.parameters.iter().any(|p| p.ty.mentions(&g.name))
        })
}

/// Stable textual key for overload identity: parameter types plus the
/// method's own type parameters. Names are compared raw; by this point
/// they are canonical or deliberately-degraded text.
pub fn method_signature(method: &MethodDefinition) -> String {
    let mut key = String::new();
    key.push_str(&method.name);
    key.push('(');
    for (index, parameter) in method.parameters.iter().enumerate() {
        if index > 0 {
            key.push(',');
        }
        push_generic_key(&parameter.ty, &mut key);
    }
    key.push(')');
    if !method.generics.is_empty() {
        key.push('<');
        for (index, generic) in method.generics.iter().enumerate() {
            if index > 0 {
                key.push(',');
            }
            key.push_str(&generic.name);
        }
        key.push('>');
    }
    key
}

fn push_generic_key(definition: &GenericDefinition, key: &mut String) {
    key.push_str(&definition.name);
    if !definition.generics.is_empty() {
        key.push('<');
        for (index, argument) in definition.generics.iter().enumerate() {
            if index > 0 {
                key.push(',');
            }
            push_generic_key(argument, key);
        }
        key.push('>');
    }
}
