//! Compiles a GraphQL schema and a set of executable documents (operations
//! and fragments) into typed selection-set source code.
//!
//! The pipeline runs in four stages, each usable on its own:
//!
//! 1. [`schema::SchemaBuilder`] loads SDL or introspection JSON into a
//!    [`schema::Schema`].
//! 2. [`operation::DocumentSetBuilder`] parses and validates documents
//!    against the schema, producing an [`operation::CompilationResult`].
//! 3. [`ir::IrBuilder`] merges every operation's and fragment's selections
//!    into an [`ir::Ir`] tree.
//! 4. [`render::Entity`] renders each generated file from the IR.
//!
//! [`codegen::generate()`] sequences all four.

pub mod ast;
pub mod codegen;
mod directive_annotation;
pub mod file_reader;
pub mod ir;
pub mod loc;
pub mod named_ref;
pub mod operation;
pub mod render;
pub mod schema;
pub mod types;
mod value;

pub use directive_annotation::DeprecationState;
pub use directive_annotation::DirectiveAnnotation;
pub(crate) use directive_annotation::DirectiveAnnotationBuilder;
pub use value::Value;
