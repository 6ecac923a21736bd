//! Observers fed the engine's stream of syntax nodes.

pub mod inference;

use std::cell::Cell;
use std::rc::Rc;

use sift_core::types::{Scope, SyntaxNode};

pub use inference::InferenceObserver;

/// Callback invoked by the engine for every syntax node it visits.
pub trait NodeObserver {
    fn observe(&mut self, node: &SyntaxNode, scope: &Scope);
}

/// A boolean that can only go from `false` to `true`.
///
/// Clones share the same cell: the orchestrator keeps one and hands
/// another to the observer, then reads it after the engine returns.
#[derive(Debug, Default, Clone)]
pub struct InferenceFlag {
    cell: Rc<Cell<bool>>,
}

impl InferenceFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.cell.get()
    }

    /// Set the flag. Returns true only on the transition.
    pub fn set(&self) -> bool {
        !self.cell.replace(true)
    }
}
