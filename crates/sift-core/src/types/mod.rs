//! Core data types shared by the orchestrator and its collaborators.

pub mod diagnostic;
pub mod syntax;

pub use diagnostic::{AggregateResult, Diagnostic, FileDiagnostic};
pub use syntax::{
    ClassSymbol, MethodSymbol, PropertySymbol, Scope, SyntaxNode, TypeInfo, TypeKind,
    TypeOrigin, Visibility,
};
