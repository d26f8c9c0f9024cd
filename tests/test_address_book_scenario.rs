//! End-to-end tests for the record and address book lifecycle.
//!
//! These tests drive the public API the way a caller would: build a record,
//! edit its phones, register it and look it up again.

use address_book::{AddressBook, AddressBookError, Config, Phone, Record};

fn phones(record: &Record) -> Vec<&str> {
    record.phones().iter().map(Phone::as_str).collect()
}

/// Full contact lifecycle with a single record.
#[test]
fn test_contact_lifecycle() {
    // 1. Create and fill the record
    let mut record = Record::new("Alice");
    record.add_phone("050-123-4567").unwrap();
    assert_eq!(phones(&record), vec!["+380501234567"]);

    // 2. Same number in another format is rejected
    assert_eq!(
        record.add_phone("+380501234567"),
        Err(AddressBookError::DuplicatePhone("+380501234567".to_string()))
    );

    // 3. Edit in place
    record.edit_phone("050-123-4567", "0671112233").unwrap();
    assert_eq!(phones(&record), vec!["+380671112233"]);

    // 4. Register and look up
    let mut book = AddressBook::new();
    book.add_record(record.clone()).unwrap();
    let found = book.find("Alice").unwrap();
    assert_eq!(found, &record);
    assert_eq!(
        found.to_string(),
        "Contact name: Alice, phones: +380671112233"
    );

    // 5. Delete and verify it is gone
    book.delete("Alice");
    assert_eq!(
        book.find("Alice").unwrap_err(),
        AddressBookError::ContactNotFound("Alice".to_string())
    );
}

#[test]
fn test_address_book_contact_rules() {
    let mut book = AddressBook::new();
    book.add_record(Record::new("Bob")).unwrap();

    assert!(matches!(
        book.add_record(Record::new("Bob")),
        Err(AddressBookError::DuplicateContact(name)) if name == "Bob"
    ));
    assert!(matches!(
        book.find("Carol"),
        Err(AddressBookError::ContactNotFound(_))
    ));

    // Deleting an unknown contact changes nothing
    book.delete("Carol");
    assert_eq!(book.len(), 1);
}

#[test]
fn test_updates_through_address_book_are_kept() {
    let mut book = AddressBook::new();
    book.add_record(Record::new("Dana")).unwrap();

    {
        let dana = book.find_mut("Dana").unwrap();
        dana.add_phone("0501234567").unwrap();
        dana.add_phone("0671112233").unwrap();
        dana.remove_phone("050 123 45 67").unwrap();
        dana.remove_phone("0990000000").unwrap();
    }

    assert_eq!(phones(book.find("Dana").unwrap()), vec!["+380671112233"]);
}

#[test]
fn test_record_uses_configured_phone_format() {
    let config = Config {
        country_code: "44".to_string(),
        phone_length: 13,
        ..Config::default()
    };
    let format = config.phone_format().unwrap();

    let mut record = Record::with_format("Eve", format);
    record.add_phone("7911 123456").unwrap();
    record.add_phone("447700900123").unwrap();
    assert_eq!(phones(&record), vec!["+447911123456", "+447700900123"]);

    // A leading trunk zero makes the number one digit too long
    assert!(matches!(
        record.add_phone("07911 123456"),
        Err(AddressBookError::InvalidPhoneNumber(number)) if number == "+4407911123456"
    ));
}
