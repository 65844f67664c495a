use contactbook_core::{CoreError, CoreErrorKind, Directory, PhoneNumber, Record};

fn record(name: &str, phone: &str) -> Record {
    let mut record = Record::new(name).expect("record");
    record.add_phone(PhoneNumber::parse(phone).expect("phone"));
    record
}

#[test]
fn values_follow_insertion_order() {
    let mut directory = Directory::new();
    for (name, phone) in [
        ("Charlie", "0501111111"),
        ("Alice", "0502222222"),
        ("Bob", "0503333333"),
    ] {
        directory.add_record(record(name, phone));
    }

    let names: Vec<_> = directory.values().map(Record::name).collect();
    assert_eq!(names, vec!["Charlie", "Alice", "Bob"]);
}

#[test]
fn edit_through_directory_updates_stored_record() {
    let mut directory = Directory::new();
    directory.add_record(record("Alice", "(050)-222-2222"));

    let old = PhoneNumber::parse("050-222-2222").expect("old");
    let new = PhoneNumber::parse("0509999999").expect("new");
    directory
        .find_mut("Alice")
        .expect("find")
        .edit_phone(&old, new)
        .expect("edit");

    assert_eq!(
        directory.find("Alice").expect("find").format_phones(),
        "0509999999"
    );
}

#[test]
fn lookups_on_missing_contacts_are_not_found() {
    let mut directory = Directory::new();
    let err = directory.find_mut("Nobody").unwrap_err();
    assert_eq!(err, CoreError::ContactNotFound("Nobody".to_string()));
    assert_eq!(err.kind(), CoreErrorKind::NotFound);
    assert!(directory.is_empty());
}
