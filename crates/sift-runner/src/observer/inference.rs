//! Detects private properties whose `any` type was inferred rather than
//! written, a hint that stricter property inference would have found more.

use sift_core::types::{ClassSymbol, PropertySymbol, Scope, SyntaxNode};

use super::{InferenceFlag, NodeObserver};

pub struct InferenceObserver {
    flag: InferenceFlag,
}

impl InferenceObserver {
    pub fn new(flag: InferenceFlag) -> Self {
        Self { flag }
    }

    pub fn flag(&self) -> &InferenceFlag {
        &self.flag
    }
}

/// The own, non-static property `name` of `class`, if it has one.
fn own_instance_property<'a>(class: &'a ClassSymbol, name: &str) -> Option<&'a PropertySymbol> {
    class
        .property(name)
        .filter(|p| class.declares(&p.declaring_class) && !p.is_static)
}

/// All conditions, checked in order, cheapest first.
fn has_inferred_any_property(name: &str, scope: &Scope) -> bool {
    let Some(class) = scope.class.as_deref() else {
        return false;
    };
    let Some(constructor) = class.constructor() else {
        return false;
    };
    if !class.declares(&constructor.declaring_class) {
        return false;
    }
    let Some(property) = own_instance_property(class, name) else {
        return false;
    };
    property.visibility.is_most_restrictive() && property.ty.is_inferred_any()
}

impl NodeObserver for InferenceObserver {
    fn observe(&mut self, node: &SyntaxNode, scope: &Scope) {
        if self.flag.is_set() {
            return;
        }
        let SyntaxNode::PropertyDeclaration { name } = node else {
            return;
        };
        if has_inferred_any_property(name, scope) {
            tracing::debug!(
                class = scope.class.as_deref().map(|c| c.name.as_str()).unwrap_or_default(),
                property = %name,
                "private property with inferred any type"
            );
            self.flag.set();
        }
    }
}
