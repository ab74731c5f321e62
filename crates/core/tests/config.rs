use taboo_core::{ConfigError, SessionConfig};

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config = SessionConfig::from_json_str("{}").expect("empty object");
    assert_eq!(config, SessionConfig::default());
    assert_eq!(config.human_name, "Human");
    assert_eq!(config.computer_name, "Computer");
    assert_eq!(config.seed, None);
}

#[test]
fn reads_names_and_seed() {
    let config =
        SessionConfig::from_json_str(r#"{"seed": 42, "human_name": "Ada"}"#).expect("config");
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.human_name, "Ada");
    assert_eq!(config.computer_name, "Computer");
}

#[test]
fn blank_names_are_rejected() {
    let err = SessionConfig::from_json_str(r#"{"computer_name": "  "}"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyName));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = SessionConfig::from_json_str("{seed:").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn with_seed_overrides_the_file_seed() {
    let config = SessionConfig::from_json_str(r#"{"seed": 1}"#)
        .expect("config")
        .with_seed(9);
    assert_eq!(config.seed, Some(9));
}
