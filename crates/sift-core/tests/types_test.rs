//! Tests for diagnostic and syntax model types.

use std::sync::Arc;

use sift_core::errors::{CacheError, RunError, SiftErrorCode};
use sift_core::types::*;

#[test]
fn test_diagnostic_serializes_by_shape() {
    let global = Diagnostic::global("config missing");
    let file = Diagnostic::file("src/a.src", 3, "type error");

    assert_eq!(serde_json::to_value(&global).unwrap(), serde_json::json!("config missing"));
    assert_eq!(
        serde_json::to_value(&file).unwrap(),
        serde_json::json!({"file": "src/a.src", "line": 3, "message": "type error"})
    );

    let parsed: Vec<Diagnostic> = serde_json::from_str(
        r#"["config missing", {"file": "src/a.src", "line": 3, "message": "type error"}]"#,
    )
    .unwrap();
    assert_eq!(parsed, vec![global, file]);
}

#[test]
fn test_file_diagnostic_display() {
    let d = FileDiagnostic::new("lib/x.src", 12, "unused variable");
    assert_eq!(d.to_string(), "lib/x.src:12: unused variable");
}

#[test]
fn test_aggregate_accessors() {
    let result = AggregateResult::new(
        vec![FileDiagnostic::new("a", 1, "m")],
        vec!["g".to_string()],
        true,
        false,
        Some("sift.toml".into()),
    );
    assert_eq!(result.total_diagnostics(), 2);
    assert!(!result.is_clean());
    assert!(result.non_default_strictness());
    assert!(!result.inferred_any_property());
    assert_eq!(result.config_path().unwrap().to_str(), Some("sift.toml"));
}

#[test]
fn test_class_symbol_lookup() {
    let class = ClassSymbol {
        name: "Widget".into(),
        methods: vec![MethodSymbol {
            name: ClassSymbol::CONSTRUCTOR.into(),
            declaring_class: "Base".into(),
        }],
        properties: vec![],
    };
    let ctor = class.constructor().unwrap();
    assert!(!class.declares(&ctor.declaring_class));
    assert!(class.property("missing").is_none());

    let scope = Scope::in_class(Arc::new(class));
    assert!(scope.is_class_scope());
    assert!(!Scope::global().is_class_scope());
}

#[test]
fn test_type_info_inferred_any() {
    assert!(TypeInfo::inferred_any().is_inferred_any());
    assert!(!TypeInfo::explicit(TypeKind::Any).is_inferred_any());
    assert!(Visibility::Private.is_most_restrictive());
    assert!(Visibility::Protected < Visibility::Private);
}

#[test]
fn test_run_error_codes() {
    let engine: RunError = RunError::Engine("engine exploded".into());
    assert_eq!(engine.error_code(), "ENGINE_ERROR");
    assert_eq!(engine.to_string(), "engine exploded");

    let cache: RunError = CacheError::Poisoned.into();
    assert_eq!(cache.coded_string(), "[CACHE_ERROR] Cache lock poisoned");
}
