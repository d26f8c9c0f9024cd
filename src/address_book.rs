//! AddressBook: records keyed by contact name.

use crate::domain::Name;
use crate::error::{AddressBookError, AddressBookResult};
use crate::record::Record;
use std::collections::hash_map;
use std::collections::HashMap;

/// A collection of records with at most one record per name.
///
/// Iteration order is unspecified.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<Name, Record>,
}

impl AddressBook {
    /// Create an empty AddressBook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a record under its name.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateContact` if a record with the same name is already stored.
    pub fn add_record(&mut self, record: Record) -> AddressBookResult<()> {
        match self.records.entry(record.name().clone()) {
            hash_map::Entry::Occupied(entry) => Err(AddressBookError::DuplicateContact(
                entry.key().as_str().to_string(),
            )),
            hash_map::Entry::Vacant(entry) => {
                tracing::debug!(contact = %record.name(), "Contact added");
                entry.insert(record);
                Ok(())
            }
        }
    }

    /// Look up a record by name.
    ///
    /// # Errors
    ///
    /// Returns `ContactNotFound` if no record has this name.
    pub fn find(&self, name: &str) -> AddressBookResult<&Record> {
        tracing::trace!(contact = %name, "Looking up contact");
        self.records
            .get(&Name::new(name))
            .ok_or_else(|| AddressBookError::ContactNotFound(name.to_string()))
    }

    /// Look up a record by name for modification.
    ///
    /// Changes made through the returned reference apply to the stored record.
    pub fn find_mut(&mut self, name: &str) -> AddressBookResult<&mut Record> {
        tracing::trace!(contact = %name, "Looking up contact for update");
        self.records
            .get_mut(&Name::new(name))
            .ok_or_else(|| AddressBookError::ContactNotFound(name.to_string()))
    }

    /// Remove a record by name. Deleting an unknown name is a no-op.
    pub fn delete(&mut self, name: &str) {
        if self.records.remove(&Name::new(name)).is_some() {
            tracing::debug!(contact = %name, "Contact deleted");
        }
    }

    /// Check whether a record with this name is stored.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(&Name::new(name))
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the address book is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over `(name, record)` pairs.
    pub fn iter(&self) -> hash_map::Iter<'_, Name, Record> {
        self.records.iter()
    }

    /// Iterate over stored records.
    pub fn records(&self) -> hash_map::Values<'_, Name, Record> {
        self.records.values()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = (&'a Name, &'a Record);
    type IntoIter = hash_map::Iter<'a, Name, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
