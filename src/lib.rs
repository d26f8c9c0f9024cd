//! Address Book - an in-memory contact store with phone number normalization.
//!
//! Raw phone strings in any common format are normalized into a canonical
//! `+<country code><subscriber>` form before they are stored, so a record
//! never holds a malformed or duplicate number.
//!
//! # Architecture
//!
//! - **domain**: `Field`, `Name` and `Phone` value objects
//! - **record**: A contact name with its phone numbers
//! - **address_book**: Records keyed by name
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **observability**: Logging setup
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Record};
//!
//! let mut record = Record::new("Alice");
//! record.add_phone("050-123-4567").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(record).unwrap();
//!
//! let alice = book.find("Alice").unwrap();
//! assert_eq!(alice.to_string(), "Contact name: Alice, phones: +380501234567");
//! ```

pub mod address_book;
pub mod config;
pub mod domain;
pub mod error;
pub mod observability;
pub mod record;

pub use address_book::AddressBook;
pub use config::Config;
pub use domain::{Field, Name, Phone, PhoneFormat};
pub use error::{
    AddressBookError, AddressBookResult, ConfigError, ConfigResult, PhoneFormatError,
    PhoneFormatResult,
};
pub use observability::init_logging;
pub use record::Record;
