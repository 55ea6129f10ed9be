//! Declaration IR for the jdts declaration generator.
//!
//! The normalized, resolution-complete structures the emitter consumes.
//! Nothing here references the parse tree or the type model: by the time
//! a `TypeDefinition` exists, every type name is canonical, primitive, or
//! deliberately-degraded raw text. The emitter mutates these in place
//! (accessor synthesis, member sorting, inherited-method injection)
//! before rendering, then the IR is discarded.
//!
//! All structures serialize with serde for the CLI's `--dump-ir` flag.

use serde::{Deserialize, Serialize};

/// A type expression: canonical or primitive base name, nested type
/// arguments, upper bounds, and nullability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generics: Vec<GenericDefinition>,
    /// Upper bounds (`extends` constraints); meaningful on type parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<GenericDefinition>,
    #[serde(default)]
    pub nullable: bool,
}

impl GenericDefinition {
    /// A plain, non-generic, non-nullable type expression.
    pub fn simple(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_arguments(name: impl Into<String>, generics: Vec<GenericDefinition>) -> Self {
        Self {
            name: name.into(),
            generics,
            ..Self::default()
        }
    }

    /// Whether any base name in this tree matches `name` exactly.
    /// Used to detect references to an enclosing type's parameters.
    pub fn mentions(&self, name: &str) -> bool {
        let mut base = self.name.as_str();
        while let Some(stripped) = base.strip_suffix("[]") {
            base = stripped;
        }
        base == name
            || self.generics.iter().any(|g| g.mentions(name))
            || self.extends.iter().any(|g| g.mentions(name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: GenericDefinition,
    pub readonly: bool,
    #[serde(rename = "static")]
    pub is_static: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub javadoc: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: GenericDefinition,
    pub spread: bool,
    pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDefinition {
    pub name: String,
    pub return_type: GenericDefinition,
    pub parameters: Vec<ParameterDefinition>,
    /// Method-level type parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generics: Vec<GenericDefinition>,
    #[serde(rename = "static")]
    pub is_static: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub javadoc: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorDefinition {
    pub parameters: Vec<ParameterDefinition>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeDefinitionKind {
    Class,
    Interface,
}

/// One emitted declaration: a class or interface in an output module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefinition {
    /// Module package: the canonical name minus the last segment, so
    /// nested types group under their enclosing type's module.
    pub package: String,
    pub name: String,
    pub kind: TypeDefinitionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<GenericDefinition>,
    pub interfaces: Vec<GenericDefinition>,
    pub constructors: Vec<ConstructorDefinition>,
    pub fields: Vec<FieldDefinition>,
    pub methods: Vec<MethodDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generics: Vec<GenericDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub javadoc: Vec<String>,
}

impl TypeDefinition {
    pub fn canonical_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mentions_walks_arguments_bounds_and_arrays() {
        let def = GenericDefinition::with_arguments(
            "java.util.Map",
            vec![
                GenericDefinition::simple("K"),
                GenericDefinition::simple("V[]"),
            ],
        );
        assert!(def.mentions("K"));
        assert!(def.mentions("V"));
        assert!(!def.mentions("T"));
    }

    #[test]
    fn canonical_name_handles_default_package() {
        let def = TypeDefinition {
            package: String::new(),
            name: "Foo".into(),
            kind: TypeDefinitionKind::Class,
            superclass: None,
            interfaces: vec![],
            constructors: vec![],
            fields: vec![],
            methods: vec![],
            generics: vec![],
            javadoc: vec![],
        };
        assert_eq!(def.canonical_name(), "Foo");
    }
}
