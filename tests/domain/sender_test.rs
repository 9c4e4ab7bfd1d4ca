use cisec_nexus::domain::Sender;

#[test]
fn given_sender_when_round_tripping_string_then_matches() {
    for sender in [Sender::User, Sender::SimulatedPatient] {
        assert_eq!(sender.as_str().parse::<Sender>(), Ok(sender));
    }
}

#[test]
fn given_unknown_string_when_parsing_sender_then_fails() {
    assert!("AI".parse::<Sender>().is_err());
}

#[test]
fn given_sender_when_serializing_then_uses_camel_case() {
    assert_eq!(
        serde_json::to_string(&Sender::SimulatedPatient).unwrap(),
        "\"simulatedPatient\""
    );
    assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
}
