//! The type model: an index arena over one parsed project.
//!
//! Compilation units and type declarations live in flat `Vec` arenas
//! addressed by `UnitId`/`TypeId`, the same ownership shape as an AST
//! node arena. Nesting and the container back-reference are both id
//! links, so the recursive type graph needs no reference counting and
//! the whole model is trivially immutable after construction.

use rustc_hash::FxHashMap;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnitId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeId(pub u32);

/// A lexical scope that can be asked to resolve a simple name: either a
/// compilation unit or a type declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Container {
    Unit(UnitId),
    Type(TypeId),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Record,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// Dotted path; for wildcards this is the namespace without `.*`.
    pub path: String,
    pub wildcard: bool,
}

#[derive(Debug, Clone)]
pub struct CompilationUnit {
    /// `None` for the default (unnamed) package.
    pub package_name: Option<String>,
    pub imports: Vec<Import>,
    /// Top-level declarations, in source order.
    pub types: Vec<TypeId>,
}

impl CompilationUnit {
    /// Exact (non-wildcard) import whose last segment is `simple_name`.
    pub fn find_import(&self, simple_name: &str) -> Option<&str> {
        self.imports
            .iter()
            .find(|i| !i.wildcard && i.path.rsplit('.').next() == Some(simple_name))
            .map(|i| i.path.as_str())
    }

    pub fn wildcard_imports(&self) -> impl Iterator<Item = &str> {
        self.imports
            .iter()
            .filter(|i| i.wildcard)
            .map(|i| i.path.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParameter {
    pub name: String,
    /// Raw bound texts (`extends` constraints).
    pub bounds: Vec<String>,
}

/// A supertype usage: base name as written plus raw argument texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeUse {
    pub name: String,
    pub arguments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub type_text: String,
    pub modifiers: Vec<String>,
    pub annotations: Vec<String>,
    pub javadoc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub type_text: String,
    pub annotations: Vec<String>,
    pub varargs: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub return_type_text: String,
    pub type_params: Vec<TypeParameter>,
    pub parameters: Vec<Parameter>,
    pub modifiers: Vec<String>,
    pub annotations: Vec<String>,
    pub javadoc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    pub parameters: Vec<Parameter>,
    pub modifiers: Vec<String>,
    pub javadoc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConstant {
    pub name: String,
    pub javadoc: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TypeDeclaration {
    pub kind: TypeKind,
    pub name: String,
    /// Fully qualified dotted path through package and enclosing types.
    pub(crate) canonical: String,
    pub modifiers: Vec<String>,
    pub annotations: Vec<String>,
    pub type_params: Vec<TypeParameter>,
    pub superclass: Option<TypeUse>,
    pub interfaces: Vec<TypeUse>,
    pub constants: Vec<EnumConstant>,
    pub fields: Vec<Field>,
    pub methods: Vec<Method>,
    pub constructors: Vec<Constructor>,
    pub nested: Vec<TypeId>,
    /// Non-owning back-link used only for outward lookup walks.
    pub container: Container,
    pub javadoc: Option<String>,
}

impl TypeDeclaration {
    pub fn canonical_name(&self) -> &str {
        &self.canonical
    }

    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.modifiers.iter().any(|m| m == modifier)
    }
}

/// Everything parsed for one run. Built once; read-only afterwards.
#[derive(Debug, Default)]
pub struct Project {
    pub(crate) units: Vec<CompilationUnit>,
    pub(crate) types: Vec<TypeDeclaration>,
    pub(crate) canonical_index: FxHashMap<String, TypeId>,
    pub(crate) package_index: FxHashMap<String, Vec<UnitId>>,
}

impl Project {
    pub fn unit(&self, id: UnitId) -> &CompilationUnit {
        &self.units[id.0 as usize]
    }

    pub fn type_decl(&self, id: TypeId) -> &TypeDeclaration {
        &self.types[id.0 as usize]
    }

    pub fn units(&self) -> impl Iterator<Item = (UnitId, &CompilationUnit)> {
        self.units
            .iter()
            .enumerate()
            .map(|(i, u)| (UnitId(i as u32), u))
    }

    /// Every type declaration in the project, nested ones included, in
    /// arena order (parents before their nested types).
    pub fn types(&self) -> impl Iterator<Item = (TypeId, &TypeDeclaration)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, t)| (TypeId(i as u32), t))
    }

    pub fn find_type(&self, canonical_name: &str) -> Option<TypeId> {
        self.canonical_index.get(canonical_name).copied()
    }

    pub fn find_compilation_units(&self, package_name: &str) -> &[UnitId] {
        self.package_index
            .get(package_name)
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
    }

    /// The compilation unit reachable from a container, walking outward
    /// through enclosing declarations if necessary.
    pub fn unit_of(&self, container: Container) -> UnitId {
        let mut current = container;
        loop {
            match current {
                Container::Unit(id) => return id,
                Container::Type(id) => current = self.type_decl(id).container,
            }
        }
    }

    /// Enclosing type declaration, if the container is a nested type.
    pub fn parent_type(&self, id: TypeId) -> Option<TypeId> {
        match self.type_decl(id).container {
            Container::Type(parent) => Some(parent),
            Container::Unit(_) => None,
        }
    }

    /// Human-readable description of a container for diagnostics.
    pub fn describe_container(&self, container: Container) -> String {
        match container {
            Container::Type(id) => self.type_decl(id).canonical_name().to_string(),
            Container::Unit(id) => self
                .unit(id)
                .package_name
                .clone()
                .unwrap_or_else(|| "<default package>".to_string()),
        }
    }
}
