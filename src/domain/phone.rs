//! Phone value object and the format it is normalized against.

use super::field::Field;
use crate::error::{AddressBookError, AddressBookResult, PhoneFormatError, PhoneFormatResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static FORMATTING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^+0-9]").expect("Failed to compile phone formatting regex"));

/// Country code and total length a normalized phone number must have.
///
/// The length counts the leading `+`, so the default `+38` format expects
/// `+` followed by 12 digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneFormat {
    country_code: String,
    length: usize,
}

impl PhoneFormat {
    /// Create a new PhoneFormat.
    ///
    /// # Errors
    ///
    /// - `PhoneFormatError::InvalidCountryCode` if the country code is empty
    ///   or not all digits
    /// - `PhoneFormatError::LengthTooShort` if the length leaves no room for a
    ///   subscriber number
    pub fn new(country_code: impl Into<String>, length: usize) -> PhoneFormatResult<Self> {
        let country_code = country_code.into();

        if country_code.is_empty() || !country_code.chars().all(|c| c.is_ascii_digit()) {
            return Err(PhoneFormatError::InvalidCountryCode(country_code));
        }

        let minimum = country_code.len() + 1;
        if length <= minimum {
            return Err(PhoneFormatError::LengthTooShort { length, minimum });
        }

        Ok(Self {
            country_code,
            length,
        })
    }

    /// Country code digits, without the `+`.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Expected length of a normalized number, `+` included.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Normalize a raw phone string into `+<country code><subscriber>` form.
    ///
    /// Formatting characters are dropped first. Numbers that do not start
    /// with `+` get the country code prepended, after stripping one leading
    /// copy of it so `380...` and `0...` end up the same.
    fn normalize(&self, raw: &str) -> AddressBookResult<String> {
        let stripped = FORMATTING_REGEX.replace_all(raw, "");

        let normalized = if stripped.starts_with('+') {
            stripped.into_owned()
        } else {
            let local = stripped
                .strip_prefix(self.country_code.as_str())
                .unwrap_or(&*stripped);
            format!("+{}{}", self.country_code, local)
        };

        let digits_only = normalized[1..].chars().all(|c| c.is_ascii_digit());
        if normalized.len() != self.length || !digits_only {
            return Err(AddressBookError::InvalidPhoneNumber(normalized));
        }

        Ok(normalized)
    }
}

impl Default for PhoneFormat {
    fn default() -> Self {
        PhoneFormat {
            country_code: "38".to_string(),
            length: 13,
        }
    }
}

/// A normalized phone number.
///
/// A `Phone` can only be obtained through normalization, so its value always
/// starts with `+` followed by digits and has the length of its format.
///
/// # Example
///
/// ```
/// use address_book::domain::Phone;
///
/// let phone = Phone::new("(050) 123-45-67").unwrap();
/// assert_eq!(phone.as_str(), "+380501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(Field<String>);

impl Phone {
    /// Normalize and validate a phone number using the default format.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::InvalidPhoneNumber` carrying the normalized
    /// string if it does not have the expected shape.
    pub fn new(raw: &str) -> AddressBookResult<Self> {
        Self::with_format(raw, &PhoneFormat::default())
    }

    /// Normalize and validate a phone number against `format`.
    pub fn with_format(raw: &str, format: &PhoneFormat) -> AddressBookResult<Self> {
        format.normalize(raw).map(|number| Self(Field::new(number)))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.value()
    }

    /// Borrow the underlying field.
    pub fn as_field(&self) -> &Field<String> {
        &self.0
    }

    /// Get the phone number without the leading `+`.
    pub fn digits(&self) -> &str {
        &self.as_str()[1..]
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0.into_inner()
    }
}

impl FromStr for Phone {
    type Err = AddressBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phone::new(s)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
