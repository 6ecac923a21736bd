//! Syntax node and lexical scope model passed to node observers.
//!
//! The engine owns the real AST and symbol tables; this is the slice of
//! them an observer is allowed to see for each visited node.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A syntax node visited by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    /// A property declaration inside a class body.
    PropertyDeclaration { name: String },
    ClassDeclaration { name: String },
    MethodDeclaration { name: String },
    /// Any node kind observers do not care about.
    Other { kind: String },
}

impl SyntaxNode {
    pub fn property(name: impl Into<String>) -> Self {
        Self::PropertyDeclaration { name: name.into() }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::ClassDeclaration { name: name.into() }
    }

    pub fn method(name: impl Into<String>) -> Self {
        Self::MethodDeclaration { name: name.into() }
    }

    pub fn other(kind: impl Into<String>) -> Self {
        Self::Other { kind: kind.into() }
    }
}

/// Member visibility, ordered from least to most restrictive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn is_most_restrictive(self) -> bool {
        self == Visibility::Private
    }
}

/// The statically known type of a symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    /// The unconstrained type.
    Any,
    Named(String),
    Union(Vec<TypeKind>),
}

/// Whether a type was written in source or produced by inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeOrigin {
    Explicit,
    Inferred,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    pub kind: TypeKind,
    pub origin: TypeOrigin,
}

impl TypeInfo {
    pub fn inferred_any() -> Self {
        Self {
            kind: TypeKind::Any,
            origin: TypeOrigin::Inferred,
        }
    }

    pub fn explicit(kind: TypeKind) -> Self {
        Self {
            kind,
            origin: TypeOrigin::Explicit,
        }
    }

    /// `any` that nobody wrote down.
    pub fn is_inferred_any(&self) -> bool {
        self.kind == TypeKind::Any && self.origin == TypeOrigin::Inferred
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSymbol {
    pub name: String,
    /// Class the method body is written in; differs from the owning class
    /// when the method is inherited.
    pub declaring_class: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySymbol {
    pub name: String,
    pub declaring_class: String,
    pub is_static: bool,
    pub visibility: Visibility,
    pub ty: TypeInfo,
}

/// A class as seen from inside its body: own and inherited members.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassSymbol {
    pub name: String,
    pub methods: Vec<MethodSymbol>,
    pub properties: Vec<PropertySymbol>,
}

impl ClassSymbol {
    /// Name every class uses for its constructor in the method table.
    pub const CONSTRUCTOR: &'static str = "constructor";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn method(&self, name: &str) -> Option<&MethodSymbol> {
        self.methods.iter().find(|m| m.name == name)
    }

    pub fn constructor(&self) -> Option<&MethodSymbol> {
        self.method(Self::CONSTRUCTOR)
    }

    pub fn property(&self, name: &str) -> Option<&PropertySymbol> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Whether `member_class` names this class.
    pub fn declares(&self, member_class: &str) -> bool {
        self.name == member_class
    }
}

/// Lexical scope at the point a node is visited.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    pub class: Option<Arc<ClassSymbol>>,
}

impl Scope {
    pub fn global() -> Self {
        Self::default()
    }

    pub fn in_class(class: Arc<ClassSymbol>) -> Self {
        Self { class: Some(class) }
    }

    pub fn is_class_scope(&self) -> bool {
        self.class.is_some()
    }
}
