//! Field value object.

use std::fmt;

/// A value wrapper compared and hashed by its contents.
///
/// `Name` and `Phone` are built on top of this type, so two fields holding
/// equal values are interchangeable as map keys.
///
/// # Example
///
/// ```
/// use address_book::domain::Field;
///
/// let a = Field::new("Alice".to_string());
/// let b = Field::new("Alice".to_string());
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field<T>(T);

impl<T> Field<T> {
    /// Wrap a value without transforming it.
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the wrapped value.
    pub fn value(&self) -> &T {
        &self.0
    }

    /// Convert into the wrapped value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: fmt::Display> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
