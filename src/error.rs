//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors raised by phone, record and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// Normalized phone number does not have the expected shape
    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),

    /// Phone is already stored on the record
    #[error("Phone already exists: {0}")]
    DuplicatePhone(String),

    /// Phone to edit is not stored on the record
    #[error("Phone does not exist: {0}")]
    PhoneNotFound(String),

    /// A contact with the same name is already in the address book
    #[error("Contact {0} already exists")]
    DuplicateContact(String),

    /// No contact with this name in the address book
    #[error("Address book does not contain this contact: {0}")]
    ContactNotFound(String),
}

/// Errors raised when a phone format cannot accept any number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneFormatError {
    /// Country code is empty or contains non-digits
    #[error("Country code must be a non-empty string of digits, got: {0}")]
    InvalidCountryCode(String),

    /// Length leaves no room for a subscriber number
    #[error("Phone length must be greater than {minimum}, got: {length}")]
    LengthTooShort { length: usize, minimum: usize },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// A .env file exists but could not be read or parsed
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with PhoneFormatError
pub type PhoneFormatResult<T> = Result<T, PhoneFormatError>;
