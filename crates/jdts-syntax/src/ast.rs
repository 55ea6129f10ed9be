//! Typed parse contexts produced by the declaration parser.
//!
//! These are plain owned trees with no back-references; the Type Model in
//! `jdts-model` is built from them once and owns the long-lived arena.
//! Type usages are carried as compact raw text (`Map<String,List<Foo>>`)
//! exactly as the generic signature parser expects them.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilationUnitContext {
    /// `None` for the default (unnamed) package.
    pub package: Option<String>,
    pub imports: Vec<ImportContext>,
    pub types: Vec<TypeContext>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportContext {
    /// Dotted path without any trailing `.*`.
    pub path: String,
    pub wildcard: bool,
    pub is_static: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TypeKindContext {
    Class,
    Interface,
    Enum,
    Record,
    /// `@interface` declarations; parsed so the file scans, never modeled.
    Annotation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeContext {
    pub kind: TypeKindContext,
    pub name: String,
    pub modifiers: Vec<String>,
    /// Annotation names as written (`Nullable`, `org.jetbrains.annotations.NotNull`).
    pub annotations: Vec<String>,
    pub type_params: Vec<TypeParameterContext>,
    pub superclass: Option<TypeUseContext>,
    pub interfaces: Vec<TypeUseContext>,
    pub javadoc: Option<String>,
    pub constants: Vec<EnumConstantContext>,
    /// Record components, in declaration order.
    pub components: Vec<ParameterContext>,
    pub fields: Vec<FieldContext>,
    pub methods: Vec<MethodContext>,
    pub constructors: Vec<ConstructorContext>,
    pub types: Vec<TypeContext>,
}

/// A supertype usage: base name plus raw top-level type argument texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeUseContext {
    pub name: String,
    pub arguments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParameterContext {
    pub name: String,
    /// Raw texts of the `extends` bounds, one per `&`-separated bound.
    pub bounds: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConstantContext {
    pub name: String,
    pub javadoc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldContext {
    pub name: String,
    pub type_text: String,
    pub modifiers: Vec<String>,
    pub annotations: Vec<String>,
    pub javadoc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodContext {
    pub name: String,
    pub return_type_text: String,
    pub type_params: Vec<TypeParameterContext>,
    pub parameters: Vec<ParameterContext>,
    pub modifiers: Vec<String>,
    pub annotations: Vec<String>,
    pub javadoc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterContext {
    pub name: String,
    pub type_text: String,
    pub annotations: Vec<String>,
    pub varargs: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorContext {
    pub parameters: Vec<ParameterContext>,
    pub modifiers: Vec<String>,
    pub javadoc: Option<String>,
}
