//! The declaration extractor.
//!
//! Walks every type declaration in the project and produces zero or one
//! IR entries each, applying the visibility projection (skip `*Impl`,
//! skip private/protected) and the per-kind mappings. Enums pick up
//! their constants as static readonly fields plus the two synthesized
//! lookup methods; sealed interfaces drop their extension lists.

use jdts_common::{DiagnosticSink, split_name};
use jdts_ir::{
    ConstructorDefinition, FieldDefinition, GenericDefinition, MethodDefinition,
    ParameterDefinition, TypeDefinition, TypeDefinitionKind,
};
use jdts_model::{
    Constructor, Container, Field, Method, Parameter, Project, TypeDeclaration, TypeId, TypeKind,
    TypeParameter, TypeUse,
};

use crate::generic::{parse_generic, resolve_type_text};

/// TypeScript reserved words that cannot be parameter names.
const RESERVED_WORDS: &[&str] = &[
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "new",
    "null",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
];

/// Extract the declaration IR for every eligible type in the project.
///
/// Never fails: per-member resolution failures degrade to raw text and a
/// diagnostic in the returned sink.
pub fn extract_project(
    project: &Project,
    known_external_names: &[String],
) -> (Vec<TypeDefinition>, DiagnosticSink) {
    let mut extractor = Extractor {
        project,
        known_external_names,
        sink: DiagnosticSink::new(),
    };
    let mut definitions = Vec::new();
    for (id, declaration) in project.types() {
        if let Some(definition) = extractor.extract_type(id, declaration) {
            definitions.push(definition);
        }
    }
    (definitions, extractor.sink)
}

struct Extractor<'a> {
    project: &'a Project,
    known_external_names: &'a [String],
    sink: DiagnosticSink,
}

impl Extractor<'_> {
    fn extract_type(
        &mut self,
        id: TypeId,
        declaration: &TypeDeclaration,
    ) -> Option<TypeDefinition> {
        if declaration.name.ends_with("Impl") {
            tracing::debug!(name = declaration.canonical_name(), "skipping implementation type");
            return None;
        }
        if declaration.has_modifier("private") || declaration.has_modifier("protected") {
            return None;
        }

        let (package, _) = split_name(declaration.canonical_name());
        let package = package.unwrap_or("").to_string();
        let container = Container::Type(id);

        let definition = match declaration.kind {
            TypeKind::Enum => self.extract_enum(container, declaration, package),
            TypeKind::Interface => self.extract_interface(container, declaration, package),
            TypeKind::Class | TypeKind::Record => {
                self.extract_class(container, declaration, package)
            }
        };
        Some(definition)
    }

    /// Enums become classes extending `java.lang.Enum<Self>`, with one
    /// static readonly field per constant and the two lookup methods the
    /// runtime always provides.
    fn extract_enum(
        &mut self,
        container: Container,
        declaration: &TypeDeclaration,
        package: String,
    ) -> TypeDefinition {
        let mut fields: Vec<FieldDefinition> = declaration
            .fields
            .iter()
            .filter(|f| has_modifier(&f.modifiers, "public"))
            .map(|f| self.convert_field(container, f, false))
            .collect();

        let self_type = declaration.canonical_name().to_string();
        for constant in &declaration.constants {
            fields.push(FieldDefinition {
                name: constant.name.clone(),
                ty: GenericDefinition::simple(self_type.clone()),
                readonly: true,
                is_static: true,
                javadoc: clean_javadoc(constant.javadoc.as_deref()),
            });
        }

        let mut methods: Vec<MethodDefinition> = declaration
            .methods
            .iter()
            .filter(|m| has_modifier(&m.modifiers, "public"))
            .map(|m| self.convert_method(container, m))
            .collect();

        methods.push(MethodDefinition {
            name: "valueOf".to_string(),
            return_type: GenericDefinition::simple(&declaration.name),
            parameters: vec![ParameterDefinition {
                name: "name".to_string(),
                ty: GenericDefinition::simple("String"),
                spread: false,
                nullable: false,
            }],
            generics: Vec::new(),
            is_static: true,
            javadoc: Vec::new(),
        });
        methods.push(MethodDefinition {
            name: "values".to_string(),
            return_type: GenericDefinition::with_arguments(
                "java.util.List",
                vec![GenericDefinition::simple(&declaration.name)],
            ),
            parameters: Vec::new(),
            generics: Vec::new(),
            is_static: true,
            javadoc: Vec::new(),
        });

        TypeDefinition {
            package,
            name: declaration.name.clone(),
            kind: TypeDefinitionKind::Class,
            superclass: Some(GenericDefinition::with_arguments(
                "java.lang.Enum",
                vec![GenericDefinition::simple(&declaration.name)],
            )),
            interfaces: Vec::new(),
            constructors: self.convert_constructors(container, &declaration.constructors),
            fields,
            methods,
            generics: Vec::new(),
            javadoc: clean_javadoc(declaration.javadoc.as_deref()),
        }
    }

    fn extract_interface(
        &mut self,
        container: Container,
        declaration: &TypeDeclaration,
        package: String,
    ) -> TypeDefinition {
        let interfaces = if declaration.has_modifier("sealed") {
            // Closed hierarchies have no structural equivalent on the
            // TypeScript side; the extension list is flattened away.
            Vec::new()
        } else {
            declaration
                .interfaces
                .iter()
                .map(|u| self.convert_type_use(container, u))
                .collect()
        };

        TypeDefinition {
            package,
            name: declaration.name.clone(),
            kind: TypeDefinitionKind::Interface,
            superclass: None,
            interfaces,
            constructors: Vec::new(),
            fields: declaration
                .fields
                .iter()
                .map(|f| self.convert_field(container, f, true))
                .collect(),
            methods: declaration
                .methods
                .iter()
                .filter(|m| {
                    !has_modifier(&m.modifiers, "private") && !has_modifier(&m.modifiers, "protected")
                })
                .map(|m| self.convert_method(container, m))
                .collect(),
            generics: self.convert_type_params(container, &declaration.type_params),
            javadoc: clean_javadoc(declaration.javadoc.as_deref()),
        }
    }

    fn extract_class(
        &mut self,
        container: Container,
        declaration: &TypeDeclaration,
        package: String,
    ) -> TypeDefinition {
        TypeDefinition {
            package,
            name: declaration.name.clone(),
            kind: TypeDefinitionKind::Class,
            superclass: declaration
                .superclass
                .as_ref()
                .map(|u| self.convert_type_use(container, u)),
            interfaces: declaration
                .interfaces
                .iter()
                .map(|u| self.convert_type_use(container, u))
                .collect(),
            constructors: self.convert_constructors(container, &declaration.constructors),
            fields: declaration
                .fields
                .iter()
                .filter(|f| has_modifier(&f.modifiers, "public"))
                .map(|f| self.convert_field(container, f, false))
                .collect(),
            methods: declaration
                .methods
                .iter()
                .filter(|m| has_modifier(&m.modifiers, "public"))
                .map(|m| self.convert_method(container, m))
                .collect(),
            generics: self.convert_type_params(container, &declaration.type_params),
            javadoc: clean_javadoc(declaration.javadoc.as_deref()),
        }
    }

    fn convert_field(
        &mut self,
        container: Container,
        field: &Field,
        force_static_readonly: bool,
    ) -> FieldDefinition {
        let nullable = has_annotation(&field.annotations, "Nullable");
        FieldDefinition {
            name: field.name.clone(),
            ty: parse_generic(
                self.project,
                container,
                &field.type_text,
                nullable,
                self.known_external_names,
                &mut self.sink,
            ),
            readonly: force_static_readonly || has_modifier(&field.modifiers, "final"),
            is_static: force_static_readonly || has_modifier(&field.modifiers, "static"),
            javadoc: clean_javadoc(field.javadoc.as_deref()),
        }
    }

    fn convert_method(&mut self, container: Container, method: &Method) -> MethodDefinition {
        let nullable = has_annotation(&method.annotations, "Nullable");
        MethodDefinition {
            name: method.name.clone(),
            return_type: parse_generic(
                self.project,
                container,
                &method.return_type_text,
                nullable,
                self.known_external_names,
                &mut self.sink,
            ),
            parameters: method
                .parameters
                .iter()
                .map(|p| self.convert_parameter(container, p))
                .collect(),
            generics: self.convert_type_params(container, &method.type_params),
            is_static: has_modifier(&method.modifiers, "static"),
            javadoc: clean_javadoc(method.javadoc.as_deref()),
        }
    }

    fn convert_parameter(
        &mut self,
        container: Container,
        parameter: &Parameter,
    ) -> ParameterDefinition {
        let nullable = has_annotation(&parameter.annotations, "Nullable");
        ParameterDefinition {
            name: legalize_parameter_name(&parameter.name),
            ty: parse_generic(
                self.project,
                container,
                &parameter.type_text,
                nullable,
                self.known_external_names,
                &mut self.sink,
            ),
            spread: parameter.varargs,
            nullable,
        }
    }

    fn convert_constructors(
        &mut self,
        container: Container,
        constructors: &[Constructor],
    ) -> Vec<ConstructorDefinition> {
        constructors
            .iter()
            .filter(|c| has_modifier(&c.modifiers, "public"))
            .map(|c| ConstructorDefinition {
                parameters: c
                    .parameters
                    .iter()
                    .map(|p| self.convert_parameter(container, p))
                    .collect(),
            })
            .collect()
    }

    /// Declared type parameters become IR generics with resolved bounds.
    /// The parameter name itself is never resolved.
    fn convert_type_params(
        &mut self,
        container: Container,
        parameters: &[TypeParameter],
    ) -> Vec<GenericDefinition> {
        parameters
            .iter()
            .map(|parameter| GenericDefinition {
                name: parameter.name.clone(),
                generics: Vec::new(),
                extends: parameter
                    .bounds
                    .iter()
                    .map(|bound| {
                        parse_generic(
                            self.project,
                            container,
                            bound,
                            false,
                            self.known_external_names,
                            &mut self.sink,
                        )
                    })
                    .collect(),
                nullable: false,
            })
            .collect()
    }

    fn convert_type_use(&mut self, container: Container, type_use: &TypeUse) -> GenericDefinition {
        GenericDefinition {
            name: resolve_type_text(
                self.project,
                container,
                &type_use.name,
                self.known_external_names,
                &mut self.sink,
            ),
            generics: type_use
                .arguments
                .iter()
                .map(|argument| {
                    parse_generic(
                        self.project,
                        container,
                        argument,
                        false,
                        self.known_external_names,
                        &mut self.sink,
                    )
                })
                .collect(),
            extends: Vec::new(),
            nullable: false,
        }
    }
}

fn has_modifier(modifiers: &[String], modifier: &str) -> bool {
    modifiers.iter().any(|m| m == modifier)
}

fn has_annotation(annotations: &[String], simple_name: &str) -> bool {
    annotations
        .iter()
        .any(|a| a == simple_name || a.rsplit('.').next() == Some(simple_name))
}

fn legalize_parameter_name(name: &str) -> String {
    if RESERVED_WORDS.contains(&name) {
        format!("{name}Parameter")
    } else {
        name.to_string()
    }
}

/// Strip the `/** */` fences and leading asterisks, yielding clean lines.
fn clean_javadoc(javadoc: Option<&str>) -> Vec<String> {
    let Some(javadoc) = javadoc else {
        return Vec::new();
    };
    let body = javadoc
        .trim()
        .trim_start_matches("/**")
        .trim_end_matches("*/");
    let mut lines: Vec<String> = body
        .lines()
        .map(|line| {
            let line = line.trim_start();
            let line = line.strip_prefix('*').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line).trim_end().to_string()
        })
        .collect();
    while lines.first().is_some_and(|l| l.is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::{clean_javadoc, legalize_parameter_name};

    #[test]
    fn javadoc_fences_and_asterisks_are_stripped() {
        let doc = "/**\n * Sends a message.\n *\n * @param text the text\n */";
        assert_eq!(
            clean_javadoc(Some(doc)),
            ["Sends a message.", "", "@param text the text"]
        );
    }

    #[test]
    fn single_line_javadoc_is_one_line() {
        assert_eq!(clean_javadoc(Some("/** Hello. */")), ["Hello."]);
        assert_eq!(clean_javadoc(None), Vec::<String>::new());
    }

    #[test]
    fn reserved_parameter_names_get_a_suffix() {
        assert_eq!(legalize_parameter_name("class"), "classParameter");
        assert_eq!(legalize_parameter_name("player"), "player");
    }
}
