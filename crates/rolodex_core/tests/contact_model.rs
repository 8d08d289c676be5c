use rolodex_core::{Address, Company, Person, COUNTRY_UNKNOWN};

fn sample_address() -> Address {
    Address::new("BigStreet 23", 1111, "Pittsburgh", "USA")
}

#[test]
fn country_name_follows_full_chain() {
    let person = Person::new(
        "Dmitry",
        Some(Company::new("Acme LTD", Some(sample_address()))),
    );

    assert_eq!(person.country_name(), "USA");
}

#[test]
fn country_name_falls_back_without_company() {
    let person = Person::new("Alexey", None);

    assert_eq!(person.country_name(), COUNTRY_UNKNOWN);
    assert_eq!(person.country_name(), "Unknown");
}

#[test]
fn country_name_falls_back_without_address() {
    let person = Person::new("Sam", Some(Company::new("Stealth Startup", None)));

    assert_eq!(person.country_name(), COUNTRY_UNKNOWN);
}

#[test]
fn address_accessor_short_circuits_on_absent_links() {
    assert!(Person::new("Alexey", None).address().is_none());
    assert!(Person::new("Sam", Some(Company::new("Stealth Startup", None)))
        .address()
        .is_none());

    let person = Person::new("Dmitry", Some(Company::new("Acme LTD", Some(sample_address()))));
    assert_eq!(person.address(), Some(&sample_address()));
}

#[test]
fn person_serialization_uses_expected_wire_fields() {
    let person = Person::new(
        "Dmitry",
        Some(Company::new("Acme LTD", Some(sample_address()))),
    );

    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(json["name"], "Dmitry");
    assert_eq!(json["company"]["name"], "Acme LTD");
    assert_eq!(json["company"]["address"]["street"], "BigStreet 23");
    assert_eq!(json["company"]["address"]["zip_code"], 1111);
    assert_eq!(json["company"]["address"]["city"], "Pittsburgh");
    assert_eq!(json["company"]["address"]["country"], "USA");

    let decoded: Person = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, person);
}

#[test]
fn absent_links_serialize_as_null() {
    let person = Person::new("Alexey", None);

    let json = serde_json::to_value(&person).unwrap();
    assert!(json["company"].is_null());

    let decoded: Person = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, person);
}
