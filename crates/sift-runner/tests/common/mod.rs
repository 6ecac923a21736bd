//! Shared fixtures for sift-runner integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use sift_core::config::AnalysisScope;
use sift_core::errors::EngineError;
use sift_core::types::*;
use sift_runner::engine::{AnalysisEngine, AnalyzeRequest};
use sift_runner::formatter::Formatter;
use sift_runner::output::{BufferStream, Output, OutputStream};
use sift_runner::watchdog::MemorySampler;

pub const MB: u64 = 1024 * 1024;

/// Engine that walks the file list, fires hooks, feeds a fixed node
/// stream to the observer, and returns canned diagnostics.
#[derive(Default)]
pub struct ScriptedEngine {
    pub diagnostics: Vec<Diagnostic>,
    pub nodes: Vec<(SyntaxNode, Scope)>,
    pub fail_with: Option<String>,
    pub panic_with: Option<String>,
    /// Extra `after_file` calls beyond the file list.
    pub extra_after_calls: usize,
    pub analyzed: Vec<PathBuf>,
    pub seen_scope: Option<AnalysisScope>,
    pub seen_debug: Option<bool>,
    pub calls: usize,
}

impl ScriptedEngine {
    pub fn returning(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            diagnostics,
            ..Default::default()
        }
    }
}

impl AnalysisEngine for ScriptedEngine {
    fn analyze(&mut self, request: AnalyzeRequest<'_>) -> Result<Vec<Diagnostic>, EngineError> {
        self.calls += 1;
        self.seen_scope = Some(request.scope);
        self.seen_debug = Some(request.debug);

        for file in request.files {
            request.hooks.before_file(file);
            self.analyzed.push(file.clone());
            request.hooks.after_file(file);
        }
        for _ in 0..self.extra_after_calls {
            request.hooks.after_file(&PathBuf::from("phantom.src"));
        }
        for (node, scope) in &self.nodes {
            request.observer.observe(node, scope);
        }

        if let Some(message) = &self.panic_with {
            panic!("{message}");
        }
        if let Some(message) = &self.fail_with {
            return Err(message.clone().into());
        }
        Ok(self.diagnostics.clone())
    }
}

/// Replays byte readings, then reports nothing.
pub struct SequenceSampler {
    readings: VecDeque<u64>,
    pub calls: Rc<Cell<usize>>,
}

impl SequenceSampler {
    pub fn megabytes(values: &[u64]) -> Self {
        Self {
            readings: values.iter().map(|mb| mb * MB).collect(),
            calls: Rc::new(Cell::new(0)),
        }
    }

    pub fn bytes(values: &[u64]) -> Self {
        Self {
            readings: values.iter().copied().collect(),
            calls: Rc::new(Cell::new(0)),
        }
    }
}

impl MemorySampler for SequenceSampler {
    fn peak_bytes(&mut self) -> Option<u64> {
        self.calls.set(self.calls.get() + 1);
        self.readings.pop_front()
    }
}

/// Always reports the same reading and counts calls.
pub struct CountingSampler {
    pub calls: Rc<Cell<usize>>,
}

impl CountingSampler {
    pub fn new() -> (Self, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        (
            Self {
                calls: Rc::clone(&calls),
            },
            calls,
        )
    }
}

impl MemorySampler for CountingSampler {
    fn peak_bytes(&mut self) -> Option<u64> {
        self.calls.set(self.calls.get() + 1);
        Some(64 * MB)
    }
}

/// Formatter that keeps the aggregate it was given and returns `status`.
#[derive(Clone)]
pub struct CapturingFormatter {
    pub status: i32,
    pub received: Rc<RefCell<Vec<AggregateResult>>>,
}

impl CapturingFormatter {
    pub fn returning(status: i32) -> Self {
        Self {
            status,
            received: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn only_result(&self) -> AggregateResult {
        let received = self.received.borrow();
        assert_eq!(received.len(), 1, "formatter should run exactly once");
        received[0].clone()
    }
}

impl Formatter for CapturingFormatter {
    fn name(&self) -> &'static str {
        "capture"
    }

    fn format_errors(&self, result: AggregateResult, out: &mut dyn OutputStream) -> i32 {
        out.write_line("formatted").unwrap();
        self.received.borrow_mut().push(result);
        self.status
    }
}

/// Buffered stdout/stderr plus handles to inspect them.
pub fn buffered_output() -> (Output, BufferStream, BufferStream) {
    let stdout = BufferStream::new();
    let stderr = BufferStream::new();
    let output = Output::new(Box::new(stdout.clone()), Box::new(stderr.clone()));
    (output, stdout, stderr)
}

/// A class `name` with its own constructor and one property.
pub fn class_with_property(name: &str, property: PropertySymbol) -> Arc<ClassSymbol> {
    Arc::new(ClassSymbol {
        name: name.to_string(),
        methods: vec![MethodSymbol {
            name: ClassSymbol::CONSTRUCTOR.to_string(),
            declaring_class: name.to_string(),
        }],
        properties: vec![property],
    })
}

/// A private, non-static property of `class` with an inferred `any` type.
pub fn inferred_any_property(class: &str, name: &str) -> PropertySymbol {
    PropertySymbol {
        name: name.to_string(),
        declaring_class: class.to_string(),
        is_static: false,
        visibility: Visibility::Private,
        ty: TypeInfo::inferred_any(),
    }
}

/// Node and scope that satisfy every inference condition.
pub fn qualifying_node() -> (SyntaxNode, Scope) {
    let class = class_with_property("Cart", inferred_any_property("Cart", "items"));
    (SyntaxNode::property("items"), Scope::in_class(class))
}

/// What an engine visits walking `class Cart { constructor() {} private items; }`:
/// the class, its constructor, then the qualifying property.
pub fn class_body_stream() -> Vec<(SyntaxNode, Scope)> {
    let (property, class_scope) = qualifying_node();
    vec![
        (SyntaxNode::class("Cart"), Scope::global()),
        (SyntaxNode::method(ClassSymbol::CONSTRUCTOR), class_scope.clone()),
        (property, class_scope),
    ]
}
