//! Per-module import planning.
//!
//! Collects every external type a module block references and produces
//! its `import { ... } from '...'` lines. On a simple-name collision
//! between two source namespaces the second occurrence is renamed to a
//! namespace-tagged alias, recorded so every use site in the module
//! picks the alias up. The collision table lives and dies with one call;
//! nothing is shared across modules.

use indexmap::IndexMap;
use jdts_ir::{GenericDefinition, TypeDefinition};
use rustc_hash::{FxHashMap, FxHashSet};

/// One structural type with a native target equivalent: list generics
/// erase to arrays, so the name itself is never imported.
const ERASED_TYPES: &[&str] = &["java.util.List"];

#[derive(Debug, Default)]
pub struct ImportPlan {
    /// Rendered `import { ... } from '...';` lines, in first-use order.
    pub lines: Vec<String>,
    /// Qualified name -> alias, for every renamed collision.
    pub renamed: FxHashMap<String, String>,
}

pub fn plan_imports(types: &[TypeDefinition], current_package: &str) -> ImportPlan {
    let mut planner = Planner {
        current_package,
        entries: IndexMap::new(),
        seen: FxHashSet::default(),
        claimed_simple_names: FxHashMap::default(),
        renamed: FxHashMap::default(),
    };

    for definition in types {
        if let Some(superclass) = &definition.superclass {
            planner.add_tree(superclass);
        }
        for interface in &definition.interfaces {
            planner.add_tree(interface);
        }
        for generic in &definition.generics {
            planner.add_tree(generic);
        }
        for field in &definition.fields {
            planner.add_tree(&field.ty);
        }
        for constructor in &definition.constructors {
            for parameter in &constructor.parameters {
                planner.add_tree(&parameter.ty);
            }
        }
        for method in &definition.methods {
            planner.add_tree(&method.return_type);
            for parameter in &method.parameters {
                planner.add_tree(&parameter.ty);
            }
            for generic in &method.generics {
                planner.add_tree(generic);
            }
        }
    }

    let lines = planner
        .entries
        .iter()
        .map(|(package, names)| format!("import {{ {} }} from '{}';", names.join(", "), package))
        .collect();
    ImportPlan {
        lines,
        renamed: planner.renamed,
    }
}

struct Planner<'a> {
    current_package: &'a str,
    entries: IndexMap<String, Vec<String>>,
    seen: FxHashSet<String>,
    /// Simple name -> qualified name of its first claimant.
    claimed_simple_names: FxHashMap<String, String>,
    renamed: FxHashMap<String, String>,
}

impl Planner<'_> {
    /// Walk a type expression: the base name plus nested arguments and
    /// bounds all contribute references.
    fn add_tree(&mut self, definition: &GenericDefinition) {
        self.add_name(&definition.name);
        for argument in &definition.generics {
            self.add_tree(argument);
        }
        for bound in &definition.extends {
            self.add_tree(bound);
        }
    }

    fn add_name(&mut self, qualified: &str) {
        let mut qualified = qualified;
        while let Some(stripped) = qualified.strip_suffix("[]") {
            qualified = stripped;
        }
        if ERASED_TYPES.contains(&qualified) {
            return;
        }
        let Some((package, simple_name)) = qualified.rsplit_once('.') else {
            // Primitives, type parameters, degraded raw text.
            return;
        };
        if package == self.current_package {
            return;
        }
        if !self.seen.insert(qualified.to_string()) {
            return;
        }

        let entry = match self.claimed_simple_names.get(simple_name) {
            Some(claimant) if claimant != qualified => {
                let alias = format!("{}_{simple_name}", sanitize_namespace(package));
                self.renamed
                    .insert(qualified.to_string(), alias.clone());
                tracing::debug!(qualified, alias, "renamed colliding import");
                format!("{simple_name} as {alias}")
            }
            _ => {
                self.claimed_simple_names
                    .insert(simple_name.to_string(), qualified.to_string());
                simple_name.to_string()
            }
        };
        self.entries
            .entry(package.to_string())
            .or_default()
            .push(entry);
    }
}

fn sanitize_namespace(package: &str) -> String {
    package.to_lowercase().replace('.', "_")
}
