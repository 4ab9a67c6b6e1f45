use ledger_bard_core::{Persona, PersonaKind};
use strum::IntoEnumIterator;

#[test]
fn test_every_persona_has_a_distinct_description() {
    let descriptions: std::collections::HashSet<_> =
        PersonaKind::iter().map(|kind| kind.description()).collect();
    assert_eq!(descriptions.len(), PersonaKind::iter().count());
}

#[test]
fn test_persona_serializes_name_and_description() {
    let value = serde_json::to_value(Persona::from(PersonaKind::Whale)).unwrap();
    assert_eq!(value["name"], "The Whale");
    assert_eq!(value["kind"], "Whale");
    assert!(value["description"].as_str().unwrap().contains("empire"));
}
