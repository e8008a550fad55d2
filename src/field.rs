//! Field identity, raw input values, and field-level errors.

use std::collections::HashMap;
use std::fmt;

/// Error produced when a field value is missing or fails a validation rule.
///
/// Both variants carry the complete human-readable message; the variant only
/// records whether the failure was a missing value or an invalid one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	/// The field is required and no usable value was supplied.
	#[error("{0}")]
	Required(String),
	/// The supplied value failed a validation rule.
	#[error("{0}")]
	Validation(String),
}

/// Result type for field-level operations.
pub type FieldResult<T> = Result<T, FieldError>;

/// Mapping from field to its current validation message.
///
/// A field is absent from the map when it is valid. The map is recomputed
/// wholesale on every validation pass and is the sole source of truth for
/// whether the form may submit.
pub type ErrorMap = HashMap<FieldName, String>;

/// The closed set of registration form fields.
///
/// `as_str` returns the camelCase wire name used in the submission document
/// and by rendering layers.
///
/// # Examples
///
/// ```
/// use enrollment_forms::FieldName;
///
/// assert_eq!(FieldName::FirstName.as_str(), "firstName");
/// assert_eq!(FieldName::AgreeToTerms.as_str(), "agreeToTerms");
/// assert_eq!(FieldName::ALL.len(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
	FirstName,
	LastName,
	Email,
	Phone,
	DateOfBirth,
	Address,
	City,
	ZipCode,
	Program,
	Password,
	ConfirmPassword,
	AgreeToTerms,
}

impl FieldName {
	/// Every form field, in display order.
	pub const ALL: [FieldName; 12] = [
		FieldName::FirstName,
		FieldName::LastName,
		FieldName::Email,
		FieldName::Phone,
		FieldName::DateOfBirth,
		FieldName::Address,
		FieldName::City,
		FieldName::ZipCode,
		FieldName::Program,
		FieldName::Password,
		FieldName::ConfirmPassword,
		FieldName::AgreeToTerms,
	];

	/// The camelCase wire name of the field.
	pub fn as_str(&self) -> &'static str {
		match self {
			FieldName::FirstName => "firstName",
			FieldName::LastName => "lastName",
			FieldName::Email => "email",
			FieldName::Phone => "phone",
			FieldName::DateOfBirth => "dateOfBirth",
			FieldName::Address => "address",
			FieldName::City => "city",
			FieldName::ZipCode => "zipCode",
			FieldName::Program => "program",
			FieldName::Password => "password",
			FieldName::ConfirmPassword => "confirmPassword",
			FieldName::AgreeToTerms => "agreeToTerms",
		}
	}
}

impl fmt::Display for FieldName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A raw input value as delivered by the form surface.
///
/// Every field takes `Text` except `agreeToTerms`, which takes `Flag`.
///
/// # Examples
///
/// ```
/// use enrollment_forms::FieldValue;
///
/// let text = FieldValue::from("Ada");
/// assert_eq!(text.as_text(), Some("Ada"));
/// assert_eq!(text.as_flag(), None);
///
/// let flag = FieldValue::from(true);
/// assert_eq!(flag.as_flag(), Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
	Text(String),
	Flag(bool),
}

impl FieldValue {
	/// The text content, if this is a text value.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			FieldValue::Text(s) => Some(s),
			FieldValue::Flag(_) => None,
		}
	}

	/// The boolean content, if this is a flag value.
	pub fn as_flag(&self) -> Option<bool> {
		match self {
			FieldValue::Text(_) => None,
			FieldValue::Flag(b) => Some(*b),
		}
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		FieldValue::Text(value.to_string())
	}
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		FieldValue::Text(value)
	}
}

impl From<bool> for FieldValue {
	fn from(value: bool) -> Self {
		FieldValue::Flag(value)
	}
}
