use formkit_domain::constants::{CUSTOMER, LEAD};
use formkit_domain::kinds::FormSet;
use serde_json::json;

#[test]
fn constants_match_registry_keys() {
    assert_eq!(LEAD, "lead");
    assert_eq!(CUSTOMER, "customer");
}

#[test]
fn names_map_to_flags() {
    assert_eq!(FormSet::from("lead"), FormSet::LEAD);
    assert_eq!(FormSet::from("*"), FormSet::ALL);
    assert_eq!(FormSet::from("all"), FormSet::ALL);
    assert!(FormSet::from("invoice").is_empty());
}

#[test]
fn keys_follow_declaration_order() {
    assert_eq!(FormSet::ALL.keys().collect::<Vec<_>>(), ["lead", "customer"]);
    assert_eq!(FormSet::CUSTOMER.keys().collect::<Vec<_>>(), ["customer"]);
    assert_eq!(FormSet::empty().keys().count(), 0);
}

#[test]
fn deserializes_from_lists_strings_and_bits() {
    let set: FormSet = serde_json::from_value(json!(["lead", "customer"])).unwrap();
    assert_eq!(set, FormSet::ALL);

    let set: FormSet = serde_json::from_value(json!("lead, customer")).unwrap();
    assert_eq!(set, FormSet::ALL);

    let set: FormSet = serde_json::from_value(json!(2)).unwrap();
    assert_eq!(set, FormSet::CUSTOMER);
}

#[test]
fn serializes_as_names() {
    assert_eq!(serde_json::to_value(FormSet::ALL).unwrap(), json!(["lead", "customer"]));
}

#[test]
fn unknown_names_are_rejected() {
    let err = serde_json::from_value::<FormSet>(json!("leads")).unwrap_err();
    assert!(err.to_string().contains("unknown variant `leads`"));

    assert!(serde_json::from_value::<FormSet>(json!(["lead", "invoice"])).is_err());
}

#[test]
fn blank_names_are_skipped() {
    let set: FormSet = serde_json::from_value(json!("lead, ")).unwrap();
    assert_eq!(set, FormSet::LEAD);

    let set: FormSet = serde_json::from_value(json!("")).unwrap();
    assert!(set.is_empty());
}
