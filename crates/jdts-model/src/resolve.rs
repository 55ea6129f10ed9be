//! Name resolution over the type model.
//!
//! Reproduces Java's lookup rules for a simple or qualified identifier
//! seen from a lexical scope. The rule order is load-bearing: explicit
//! imports outrank same-package siblings, which outrank wildcard
//! fallback. The function is pure over the project; resolving the same
//! `(container, name, known names)` triple twice yields the same result.

use std::fmt;

use jdts_common::{qualified_name, split_name};

use crate::model::{Container, Project, TypeId};

/// A type not modeled in the current project, carried only as a dotted
/// name. Never validated or expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReference {
    pub name: String,
}

impl TypeReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The only two outcomes of resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedType {
    Declaration(TypeId),
    Reference(TypeReference),
}

impl ResolvedType {
    pub fn canonical_name(&self, project: &Project) -> String {
        match self {
            ResolvedType::Declaration(id) => project.type_decl(*id).canonical_name().to_string(),
            ResolvedType::Reference(reference) => reference.name.clone(),
        }
    }
}

/// No rule produced a type for this name in this container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveError {
    /// Canonical name (or package) of the scope the lookup started from.
    pub context: String,
    pub type_name: String,
}

impl ResolveError {
    fn new(context: String, type_name: &str) -> Self {
        Self {
            context,
            type_name: type_name.to_string(),
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot resolve type `{}` in `{}`",
            self.type_name, self.context
        )
    }
}

impl std::error::Error for ResolveError {}

/// Resolve `name` as seen from `container`.
///
/// `known_external_names` is an optional allow-list of fully qualified
/// dependency types, used only to disambiguate multi-wildcard imports.
pub fn resolve(
    project: &Project,
    container: Container,
    name: &str,
    known_external_names: &[String],
) -> Result<ResolvedType, ResolveError> {
    // 1. Qualified name: resolve the qualifier, then look inside it.
    if name.contains('.') {
        let (qualifier, simple_name) = split_name(name);
        let qualifier = qualifier.expect("dotted name has a qualifier");
        match resolve(project, container, qualifier, known_external_names)? {
            ResolvedType::Declaration(id) => {
                let declaration = project.type_decl(id);
                for nested in declaration.nested.iter().copied() {
                    if project.type_decl(nested).name == simple_name {
                        return Ok(ResolvedType::Declaration(nested));
                    }
                }
                return Err(ResolveError::new(
                    project.describe_container(container),
                    name,
                ));
            }
            ResolvedType::Reference(reference) => {
                // External references are never validated further.
                return Ok(ResolvedType::Reference(TypeReference::new(format!(
                    "{}.{}",
                    reference.name, simple_name
                ))));
            }
        }
    }

    if let Container::Type(start) = container {
        // 2. Type-parameter scope, innermost enclosing declaration first.
        // A parameter is not a declared type; its name is already the
        // canonical spelling for emission, so it travels as a reference.
        let mut cursor = Some(start);
        while let Some(id) = cursor {
            if project
                .type_decl(id)
                .type_params
                .iter()
                .any(|p| p.name == name)
            {
                return Ok(ResolvedType::Reference(TypeReference::new(name)));
            }
            cursor = project.parent_type(id);
        }

        // 3. Enclosing declaration names and their nested types.
        let mut cursor = Some(start);
        while let Some(id) = cursor {
            let declaration = project.type_decl(id);
            if declaration.name == name {
                return Ok(ResolvedType::Declaration(id));
            }
            for nested in declaration.nested.iter().copied() {
                if project.type_decl(nested).name == name {
                    return Ok(ResolvedType::Declaration(nested));
                }
            }
            cursor = project.parent_type(id);
        }
    }

    let unit = project.unit(project.unit_of(container));

    // 4. Explicit import.
    if let Some(import_path) = unit.find_import(name) {
        return Ok(match project.find_type(import_path) {
            Some(id) => ResolvedType::Declaration(id),
            None => ResolvedType::Reference(TypeReference::new(import_path)),
        });
    }

    // 5. Same-package sibling.
    if let Some(package) = unit.package_name.as_deref() {
        for sibling in project.find_compilation_units(package) {
            for top_level in project.unit(*sibling).types.iter().copied() {
                if project.type_decl(top_level).name == name {
                    return Ok(ResolvedType::Declaration(top_level));
                }
            }
        }
    }

    // 6. Implicit java.lang types.
    if JAVA_LANG_TYPES.contains(&name) {
        return Ok(ResolvedType::Reference(TypeReference::new(format!(
            "java.lang.{name}"
        ))));
    }

    // 7. Wildcard imports.
    let mut wildcards: Vec<&str> = unit.wildcard_imports().collect();
    if !known_external_names.is_empty() {
        wildcards.retain(|namespace| {
            let candidate = format!("{namespace}.{name}");
            known_external_names.iter().any(|known| *known == candidate)
        });
    }

    match wildcards.len() {
        // Assume the symbol belongs to the current package. This is the
        // strongest remaining fallback, not a proof.
        0 => Ok(ResolvedType::Reference(TypeReference::new(qualified_name(
            unit.package_name.as_deref(),
            name,
        )))),
        1 => Ok(ResolvedType::Reference(TypeReference::new(format!(
            "{}.{}",
            wildcards[0], name
        )))),
        _ => match ambiguous_fallback(name) {
            Some(namespace) => {
                tracing::debug!(name, namespace, "multi-wildcard fallback guess");
                Ok(ResolvedType::Reference(TypeReference::new(format!(
                    "{namespace}.{name}"
                ))))
            }
            None => Err(ResolveError::new(
                project.describe_container(container),
                name,
            )),
        },
    }
}

/// Last-resort namespaces for a few well-known short names that keep
/// showing up behind competing wildcard imports. Deliberately tiny:
/// failing loudly beats guessing wrong silently.
fn ambiguous_fallback(name: &str) -> Option<&'static str> {
    const FALLBACKS: &[(&str, &str)] = &[
        ("Collection", "java.util"),
        ("List", "java.util"),
        ("Map", "java.util"),
        ("Optional", "java.util"),
        ("Set", "java.util"),
        ("Stream", "java.util.stream"),
        ("Duration", "java.time"),
        ("Component", "net.kyori.adventure.text"),
    ];
    FALLBACKS
        .iter()
        .find(|(short, _)| *short == name)
        .map(|(_, namespace)| *namespace)
}

/// Types that resolve without an import, independent of the compilation
/// unit: the `java.lang` root types plus the exception/error hierarchies
/// and the standard annotations.
pub const JAVA_LANG_TYPES: &[&str] = &[
    "Appendable",
    "AutoCloseable",
    "CharSequence",
    "Cloneable",
    "Comparable",
    "Iterable",
    "Readable",
    "Runnable",
    "Thread.UncaughtExceptionHandler",
    "Boolean",
    "Byte",
    "Character",
    "Character.Subset",
    "Character.UnicodeBlock",
    "Class",
    "ClassLoader",
    "ClassValue",
    "Compiler",
    "Double",
    "Enum",
    "Float",
    "InheritableThreadLocal",
    "Integer",
    "Long",
    "Math",
    "Number",
    "Object",
    "Package",
    "Process",
    "ProcessBuilder",
    "ProcessBuilder.Redirect",
    "Runtime",
    "RuntimePermission",
    "SecurityManager",
    "Short",
    "StackTraceElement",
    "StrictMath",
    "String",
    "StringBuffer",
    "StringBuilder",
    "System",
    "Thread",
    "ThreadGroup",
    "ThreadLocal",
    "Throwable",
    "Void",
    "Character.UnicodeScript",
    "ProcessBuilder.Redirect.Type",
    "Thread.State",
    "ArithmeticException",
    "ArrayIndexOutOfBoundsException",
    "ArrayStoreException",
    "ClassCastException",
    "ClassNotFoundException",
    "CloneNotSupportedException",
    "EnumConstantNotPresentException",
    "Exception",
    "IllegalAccessException",
    "IllegalArgumentException",
    "IllegalMonitorStateException",
    "IllegalStateException",
    "IllegalThreadStateException",
    "IndexOutOfBoundsException",
    "InstantiationException",
    "InterruptedException",
    "NegativeArraySizeException",
    "NoSuchFieldException",
    "NoSuchMethodException",
    "NullPointerException",
    "NumberFormatException",
    "ReflectiveOperationException",
    "RuntimeException",
    "SecurityException",
    "StringIndexOutOfBoundsException",
    "TypeNotPresentException",
    "UnsupportedOperationException",
    "AbstractMethodError",
    "AssertionError",
    "BootstrapMethodError",
    "ClassCircularityError",
    "ClassFormatError",
    "Error",
    "ExceptionInInitializerError",
    "IllegalAccessError",
    "IncompatibleClassChangeError",
    "InstantiationError",
    "InternalError",
    "LinkageError",
    "NoClassDefFoundError",
    "NoSuchFieldError",
    "NoSuchMethodError",
    "OutOfMemoryError",
    "StackOverflowError",
    "ThreadDeath",
    "UnknownError",
    "UnsatisfiedLinkError",
    "UnsupportedClassVersionError",
    "VerifyError",
    "VirtualMachineError",
    "Deprecated",
    "Override",
    "SafeVarargs",
    "SuppressWarnings",
];
