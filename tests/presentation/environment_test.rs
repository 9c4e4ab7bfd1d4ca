use cisec_nexus::presentation::config::Environment;

#[test]
fn given_known_names_when_parsing_environment_then_resolves() {
    assert_eq!(Environment::try_from("LOCAL".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("test".to_string()), Ok(Environment::Test));
    assert_eq!(
        Environment::try_from("production".to_string()),
        Ok(Environment::Prod)
    );
}

#[test]
fn given_unknown_name_when_parsing_environment_then_fails() {
    assert!(Environment::try_from("staging".to_string()).is_err());
}

#[test]
fn given_environment_when_building_file_name_then_uses_lowercase_suffix() {
    assert_eq!(Environment::Prod.file_suffix(), "prod");
    assert_eq!(Environment::Prod.to_string(), "Prod");
}
