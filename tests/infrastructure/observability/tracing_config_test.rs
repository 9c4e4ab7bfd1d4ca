use cisec_nexus::infrastructure::observability::TracingConfig;
use cisec_nexus::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_default_config_when_created_then_uses_plain_text_and_crate_filter() {
    let config = TracingConfig::default();

    assert!(!config.json_format);
    assert_eq!(config.environment, Environment::Local);
    assert!(config.default_filter.contains("cisec_nexus=debug"));
}

#[test]
fn given_json_logging_settings_when_building_config_then_carries_them() {
    let logging = LoggingSettings {
        json_format: true,
        filter: "warn".to_string(),
    };

    let config = TracingConfig::from_settings(Environment::Prod, &logging);

    assert!(config.json_format);
    assert_eq!(config.default_filter, "warn");
    assert_eq!(config.environment, Environment::Prod);
}
