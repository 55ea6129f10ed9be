//! Declaration-level Java parser for the jdts declaration generator.
//!
//! This crate provides the lexical and syntactic front end:
//! - `TokenKind` / `Token` - token types with attached doc comments
//! - `tokenize` - the scanner
//! - `parse_compilation_unit` - recursive-descent parser producing typed
//!   parse contexts (`CompilationUnitContext` and friends)
//!
//! This is deliberately a narrow parser for the declaration skeleton of a
//! Java source file: package, imports, type declarations, member
//! signatures, and doc comments. Method bodies, field initializers, and
//! annotation arguments are skipped by balanced-delimiter matching. It is
//! not a Java front end and performs no semantic checks.

pub mod ast;
pub mod parser;
pub mod scanner;

pub use ast::{
    CompilationUnitContext, ConstructorContext, EnumConstantContext, FieldContext, ImportContext,
    MethodContext, ParameterContext, TypeContext, TypeKindContext, TypeParameterContext,
    TypeUseContext,
};
pub use parser::{ParseError, parse_compilation_unit};
pub use scanner::{Token, TokenKind, tokenize};
