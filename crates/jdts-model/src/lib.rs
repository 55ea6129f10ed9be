//! Type model and name resolver for the jdts declaration generator.
//!
//! This crate provides:
//! - `Project` - the index arena owning every compilation unit and type
//!   declaration parsed for one run
//! - `Container` / `ResolvedType` - the lexical-scope handle and the
//!   two-variant resolution result
//! - `resolve` - the Java scoping-rule lookup turning a bare or qualified
//!   identifier into a canonical type
//!
//! The model is built once from `jdts-syntax` parse contexts and never
//! mutated afterwards; resolution is a pure read over it.

pub mod builder;
pub mod model;
pub mod resolve;

pub use model::{
    CompilationUnit, Constructor, Container, EnumConstant, Field, Import, Method, Parameter,
    Project, TypeDeclaration, TypeId, TypeKind, TypeParameter, TypeUse, UnitId,
};
pub use resolve::{JAVA_LANG_TYPES, ResolveError, ResolvedType, TypeReference, resolve};
