use std::time::Duration;

use cisec_nexus::presentation::config::{Environment, Settings};

#[test]
fn given_no_sources_when_loading_settings_then_uses_defaults() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.simulator.reply_latency(), Duration::from_millis(1500));
    assert_eq!(settings.simulator.rng_seed, None);
    assert_eq!(settings.simulator.max_sessions, 1000);
    assert_eq!(
        settings.portal.verification_delay(),
        Duration::from_millis(1000)
    );
}

#[test]
fn given_default_settings_when_created_then_match_loaded_defaults() {
    let settings = Settings::default();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert!(!settings.logging.json_format);
    assert_eq!(settings.simulator.reply_latency_ms, 1500);
}
