//! Construction of the type model from parse contexts.
//!
//! The parse tree is consumed once: contexts move into arena entries,
//! canonical names are computed top-down, and the lookup indexes are
//! populated. `@interface` declarations and static imports are dropped
//! here; neither can name a type downstream.

use jdts_common::qualified_name;
use jdts_syntax::{
    CompilationUnitContext, ConstructorContext, FieldContext, MethodContext, ParameterContext,
    TypeContext, TypeKindContext,
};

use crate::model::*;

impl Project {
    /// Build the project arena from parsed compilation units.
    pub fn from_units(unit_contexts: Vec<CompilationUnitContext>) -> Project {
        let mut project = Project::default();
        for context in unit_contexts {
            let unit_id = UnitId(project.units.len() as u32);
            let package_name = context.package.clone();

            let imports = context
                .imports
                .into_iter()
                .filter(|i| !i.is_static)
                .map(|i| Import {
                    path: i.path,
                    wildcard: i.wildcard,
                })
                .collect();

            project.units.push(CompilationUnit {
                package_name: package_name.clone(),
                imports,
                types: Vec::new(),
            });

            let mut top_level = Vec::new();
            for type_context in context.types {
                if let Some(id) = add_type(
                    &mut project,
                    type_context,
                    Container::Unit(unit_id),
                    package_name.as_deref(),
                ) {
                    top_level.push(id);
                }
            }
            project.units[unit_id.0 as usize].types = top_level;

            if let Some(package) = package_name {
                project.package_index.entry(package).or_default().push(unit_id);
            }
        }
        project
    }
}

/// Add one declaration (and its nested declarations) to the arena.
/// Returns `None` for `@interface` declarations, which are not modeled.
fn add_type(
    project: &mut Project,
    context: TypeContext,
    container: Container,
    enclosing_path: Option<&str>,
) -> Option<TypeId> {
    let kind = match context.kind {
        TypeKindContext::Class => TypeKind::Class,
        TypeKindContext::Interface => TypeKind::Interface,
        TypeKindContext::Enum => TypeKind::Enum,
        TypeKindContext::Record => TypeKind::Record,
        TypeKindContext::Annotation => return None,
    };

    let canonical = qualified_name(enclosing_path, &context.name);
    let id = TypeId(project.types.len() as u32);

    let mut constructors: Vec<Constructor> = context
        .constructors
        .into_iter()
        .map(convert_constructor)
        .collect();
    if kind == TypeKind::Record && constructors.is_empty() {
        // The canonical record constructor is implicit in source.
        constructors.push(Constructor {
            parameters: context.components.iter().cloned().map(convert_parameter).collect(),
            modifiers: vec!["public".to_string()],
            javadoc: None,
        });
    }

    project.types.push(TypeDeclaration {
        kind,
        name: context.name,
        canonical: canonical.clone(),
        modifiers: context.modifiers,
        annotations: context.annotations,
        type_params: context
            .type_params
            .into_iter()
            .map(|p| TypeParameter {
                name: p.name,
                bounds: p.bounds,
            })
            .collect(),
        superclass: context.superclass.map(|u| TypeUse {
            name: u.name,
            arguments: u.arguments,
        }),
        interfaces: context
            .interfaces
            .into_iter()
            .map(|u| TypeUse {
                name: u.name,
                arguments: u.arguments,
            })
            .collect(),
        constants: context
            .constants
            .into_iter()
            .map(|c| EnumConstant {
                name: c.name,
                javadoc: c.javadoc,
            })
            .collect(),
        fields: context.fields.into_iter().map(convert_field).collect(),
        methods: context.methods.into_iter().map(convert_method).collect(),
        constructors,
        nested: Vec::new(),
        container,
        javadoc: context.javadoc,
    });
    project.canonical_index.insert(canonical.clone(), id);

    let mut nested = Vec::new();
    for nested_context in context.types {
        if let Some(nested_id) = add_type(
            project,
            nested_context,
            Container::Type(id),
            Some(&canonical),
        ) {
            nested.push(nested_id);
        }
    }
    project.types[id.0 as usize].nested = nested;

    Some(id)
}

fn convert_field(context: FieldContext) -> Field {
    Field {
        name: context.name,
        type_text: context.type_text,
        modifiers: context.modifiers,
        annotations: context.annotations,
        javadoc: context.javadoc,
    }
}

fn convert_method(context: MethodContext) -> Method {
    Method {
        name: context.name,
        return_type_text: context.return_type_text,
        type_params: context
            .type_params
            .into_iter()
            .map(|p| TypeParameter {
                name: p.name,
                bounds: p.bounds,
            })
            .collect(),
        parameters: context.parameters.into_iter().map(convert_parameter).collect(),
        modifiers: context.modifiers,
        annotations: context.annotations,
        javadoc: context.javadoc,
    }
}

fn convert_parameter(context: ParameterContext) -> Parameter {
    Parameter {
        name: context.name,
        type_text: context.type_text,
        annotations: context.annotations,
        varargs: context.varargs,
    }
}

fn convert_constructor(context: ConstructorContext) -> Constructor {
    Constructor {
        parameters: context.parameters.into_iter().map(convert_parameter).collect(),
        modifiers: context.modifiers,
        javadoc: context.javadoc,
    }
}
