use crate::*;
use serde_json::json;

// ========== Tabular shape ==========

#[test]
fn test_shape_uniform_records() {
    let doc = json!([
        {"id": 1, "name": "Alice", "role": "admin"},
        {"id": 2, "name": "Bob", "role": "user"},
    ]);
    let items = doc.as_array().unwrap();
    match tabular_shape(items) {
        TabularShape::Uniform { columns, rows } => {
            assert_eq!(columns, vec!["id", "name", "role"]);
            assert_eq!(rows.len(), 2);
        }
        TabularShape::Irregular => panic!("expected uniform shape"),
    }
}

#[test]
fn test_shape_columns_follow_first_record() {
    let doc = json!([{"b": 1, "a": 2}, {"a": 3, "b": 4}]);
    let shape = tabular_shape(doc.as_array().unwrap());
    assert_eq!(
        shape,
        TabularShape::Uniform {
            columns: vec!["b", "a"],
            rows: doc.as_array().unwrap(),
        }
    );
}

#[test]
fn test_shape_key_mismatch() {
    let doc = json!([{"a": 1}, {"b": 1}]);
    assert!(!tabular_shape(doc.as_array().unwrap()).is_uniform());
}

#[test]
fn test_shape_extra_key() {
    let doc = json!([{"a": 1}, {"a": 1, "b": 2}]);
    assert!(!tabular_shape(doc.as_array().unwrap()).is_uniform());
}

#[test]
fn test_shape_empty_key_set() {
    let doc = json!([{}, {}]);
    assert!(!tabular_shape(doc.as_array().unwrap()).is_uniform());
}

#[test]
fn test_shape_mixed_elements() {
    let doc = json!([{"a": 1}, 2]);
    assert!(!tabular_shape(doc.as_array().unwrap()).is_uniform());
}

#[test]
fn test_shape_empty_sequence() {
    assert_eq!(tabular_shape(&[]), TabularShape::Irregular);
}

#[test]
fn test_mapping_equality_ignores_order() {
    let a: Document = serde_json::from_str(r#"{"x":1,"y":2}"#).unwrap();
    let b: Document = serde_json::from_str(r#"{"y":2,"x":1}"#).unwrap();
    assert_eq!(a, b);
    let keys: Vec<_> = b.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["y", "x"]);
}

// ========== Config ==========

#[test]
fn test_config_defaults() {
    let config = OptimizerConfig::default();
    assert_eq!(config.cache.max_size, 100);
    assert_eq!(config.cache.ttl(), std::time::Duration::from_secs(3600));
    assert_eq!(config.default_filters, vec!["extra-whitespace", "repeated-lines"]);
}

#[test]
fn test_config_partial_json() {
    let config = OptimizerConfig::from_json_str(r#"{"cache":{"max_size":5}}"#).unwrap();
    assert_eq!(config.cache.max_size, 5);
    assert_eq!(config.cache.ttl_secs, 3600);
    assert_eq!(config.default_filters.len(), 2);
}

#[test]
fn test_config_zero_capacity_rejected() {
    let err = OptimizerConfig::from_json_str(r#"{"cache":{"max_size":0}}"#).unwrap_err();
    assert!(matches!(err, TwError::InvalidConfig(_)));
}

#[test]
fn test_config_zero_ttl_rejected() {
    let err = OptimizerConfig::from_json_str(r#"{"cache":{"ttl_secs":0}}"#).unwrap_err();
    assert!(err.to_string().contains("ttl_secs"));
}

#[test]
fn test_config_malformed_json() {
    let err = OptimizerConfig::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, TwError::Serialization(_)));
}

#[test]
fn test_error_from_anyhow() {
    let err: TwError = anyhow::anyhow!("host failure").into();
    assert_eq!(err.to_string(), "host failure");
}
