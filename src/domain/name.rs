//! Name value object.

use super::field::Field;
use std::fmt;

/// A contact's display name.
///
/// Names are free-form and stored verbatim; `"alice"` and `"Alice"` are
/// different contacts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(Field<String>);

impl Name {
    /// Create a new Name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Field::new(name.into()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.value()
    }

    /// Borrow the underlying field.
    pub fn as_field(&self) -> &Field<String> {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0.into_inner()
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
