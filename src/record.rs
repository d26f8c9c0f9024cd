//! Record: a contact name and its phone numbers.

use crate::domain::{Name, Phone, PhoneFormat};
use crate::error::{AddressBookError, AddressBookResult};
use std::fmt;

/// A single contact with an ordered list of unique phone numbers.
///
/// Every phone operation takes a raw string and normalizes it with the
/// record's `PhoneFormat` before comparing, so `"050-123-4567"` and
/// `"+380501234567"` refer to the same stored phone.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    format: PhoneFormat,
}

impl Record {
    /// Create a new Record with no phones, using the default phone format.
    pub fn new(name: impl Into<Name>) -> Self {
        Self::with_format(name, PhoneFormat::default())
    }

    /// Create a new Record with no phones, normalizing against `format`.
    pub fn with_format(name: impl Into<Name>, format: PhoneFormat) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            format,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Stored phones in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The format raw phone strings are normalized against.
    pub fn format(&self) -> &PhoneFormat {
        &self.format
    }

    /// Add a phone number.
    ///
    /// # Errors
    ///
    /// - `InvalidPhoneNumber` if `raw` does not normalize to a valid phone
    /// - `DuplicatePhone` if an equal phone is already stored
    pub fn add_phone(&mut self, raw: &str) -> AddressBookResult<()> {
        let phone = self.parse(raw)?;

        if self.phones.contains(&phone) {
            return Err(AddressBookError::DuplicatePhone(phone.into_inner()));
        }

        tracing::debug!(contact = %self.name, phone = %phone, "Phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove a phone number. Removing a phone that is not stored is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPhoneNumber` if `raw` does not normalize to a valid phone.
    pub fn remove_phone(&mut self, raw: &str) -> AddressBookResult<()> {
        let phone = self.parse(raw)?;

        if let Some(index) = self.position(&phone) {
            self.phones.remove(index);
            tracing::debug!(contact = %self.name, phone = %phone, "Phone removed");
        }

        Ok(())
    }

    /// Replace `old` with `new`, keeping its position in the list.
    ///
    /// # Errors
    ///
    /// - `InvalidPhoneNumber` if either number does not normalize
    /// - `PhoneNotFound` if `old` is not stored
    /// - `DuplicatePhone` if `new` is already stored as a different entry
    pub fn edit_phone(&mut self, old: &str, new: &str) -> AddressBookResult<()> {
        let old_phone = self.parse(old)?;
        let index = self
            .position(&old_phone)
            .ok_or_else(|| AddressBookError::PhoneNotFound(old_phone.as_str().to_string()))?;

        let new_phone = self.parse(new)?;
        if new_phone != old_phone && self.phones.contains(&new_phone) {
            return Err(AddressBookError::DuplicatePhone(new_phone.into_inner()));
        }

        tracing::debug!(
            contact = %self.name,
            old = %old_phone,
            new = %new_phone,
            "Phone edited"
        );
        self.phones[index] = new_phone;
        Ok(())
    }

    /// Find the stored phone equal to `raw` after normalization.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPhoneNumber` if `raw` does not normalize to a valid phone.
    pub fn find_phone(&self, raw: &str) -> AddressBookResult<Option<&Phone>> {
        let phone = self.parse(raw)?;
        Ok(self.phones.iter().find(|p| **p == phone))
    }

    fn parse(&self, raw: &str) -> AddressBookResult<Phone> {
        Phone::with_format(raw, &self.format)
    }

    fn position(&self, phone: &Phone) -> Option<usize> {
        self.phones.iter().position(|p| p == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}
