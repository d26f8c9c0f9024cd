//! Domain value objects.
//!
//! This module contains the value types an address book is built from:
//! the generic `Field` wrapper and the `Name` and `Phone` specializations.
//! Phones are validated at construction time so that a malformed number can
//! never be stored on a record.

pub mod field;
pub mod name;
pub mod phone;

pub use field::Field;
pub use name::Name;
pub use phone::{Phone, PhoneFormat};
