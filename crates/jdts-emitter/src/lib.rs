//! TypeScript declaration emitter for the jdts declaration generator.
//!
//! Consumes the declaration IR grouped by output module and renders
//! `declare module '...'` blocks. Each transform is a discrete pass over
//! the IR before printing:
//! - `flatten` - copy overload-hidden inherited methods onto the
//!   declaring type (TypeScript overrides by simple name)
//! - `accessors` - deprecate `getX`/`setX` pairs in favor of a
//!   synthesized property pair
//! - `imports` - per-module import planning with collision aliasing
//! - `render` - generic translation (primitive map, `java.util.List`
//!   erasure) and the final text

pub mod accessors;
pub mod flatten;
pub mod imports;
pub mod render;

pub use render::TypeScriptEmitter;
