use super::*;

#[test]
fn test_empty_config_uses_defaults() {
    let config = ParseConfig::from_json_str("{}").unwrap();
    assert_eq!(config, ParseConfig::default());
    assert_eq!(config.resolve().unwrap(), BuildOptions::default());
}

#[test]
fn test_fields_override_defaults() {
    let config =
        ParseConfig::from_json_str(r#"{"maxDepth": 64, "eventPrefix": "event:"}"#).unwrap();
    let options = config.resolve().unwrap();
    assert_eq!(options.max_depth, 64);
    assert_eq!(options.event_prefix, "event:");
    assert_eq!(options.bindable_prefix, limits::BINDABLE_PREFIX);
}

#[test]
fn test_zero_depth_is_rejected() {
    let config = ParseConfig::from_json_str(r#"{"maxDepth": 0}"#).unwrap();
    let err = config.resolve().unwrap_err();
    assert!(matches!(err, ConfigError::DepthTooSmall { value: 0, min: 1 }));
    assert_eq!(err.code(), ErrorCode::InvalidConfig);
}

#[test]
fn test_unknown_field_is_rejected() {
    let err = ParseConfig::from_json_str(r#"{"depth": 3}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
    assert!(err.to_string().contains("unknown field"));
}

#[test]
fn test_wrong_type_is_rejected() {
    let err = ParseConfig::from_json_str(r#"{"maxDepth": "deep"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_missing_file() {
    let err = ParseConfig::from_path(Path::new("/nonexistent/docgraph.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert_eq!(err.code(), ErrorCode::InvalidConfig);
}
