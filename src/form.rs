//! The registration record, the program catalogue, and the submission payload.

use std::fmt;

use serde::Serialize;

use crate::field::{FieldError, FieldName, FieldResult, FieldValue};

/// Academic program offered on the registration form.
///
/// # Examples
///
/// ```
/// use enrollment_forms::Program;
///
/// assert_eq!(Program::ALL.len(), 8);
/// assert_eq!(Program::ComputerScience.as_str(), "Computer Science");
/// assert_eq!(Program::from_input("Art & Design"), Some(Program::ArtAndDesign));
/// assert_eq!(Program::from_input("Astrology"), None);
/// assert_eq!(Program::from_input(""), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Program {
	ComputerScience,
	BusinessAdministration,
	Engineering,
	Medicine,
	Psychology,
	ArtAndDesign,
	Mathematics,
	Literature,
}

impl Program {
	/// Every offered program, in display order.
	pub const ALL: [Program; 8] = [
		Program::ComputerScience,
		Program::BusinessAdministration,
		Program::Engineering,
		Program::Medicine,
		Program::Psychology,
		Program::ArtAndDesign,
		Program::Mathematics,
		Program::Literature,
	];

	/// The display name used by the program select input.
	pub fn as_str(&self) -> &'static str {
		match self {
			Program::ComputerScience => "Computer Science",
			Program::BusinessAdministration => "Business Administration",
			Program::Engineering => "Engineering",
			Program::Medicine => "Medicine",
			Program::Psychology => "Psychology",
			Program::ArtAndDesign => "Art & Design",
			Program::Mathematics => "Mathematics",
			Program::Literature => "Literature",
		}
	}

	/// Parse a raw form value into a program.
	///
	/// Returns `None` for anything outside the catalogue, including the
	/// empty string a fresh select input produces.
	pub fn from_input(input: &str) -> Option<Program> {
		Program::ALL.iter().copied().find(|p| p.as_str() == input)
	}
}

impl fmt::Display for Program {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The single mutable registration record.
///
/// All text fields store raw user input verbatim; the date of birth and
/// program stay strings until the validation pass parses them. `Default`
/// produces the all-empty/false record a fresh form starts from.
///
/// # Examples
///
/// ```
/// use enrollment_forms::{FieldName, FieldValue, RegistrationForm};
///
/// let mut form = RegistrationForm::default();
/// assert!(form.first_name.is_empty());
/// assert!(!form.agree_to_terms);
///
/// form.set_value(FieldName::Email, FieldValue::from("ada@example.com")).unwrap();
/// assert_eq!(form.email, "ada@example.com");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub phone: String,
	pub date_of_birth: String,
	pub address: String,
	pub city: String,
	pub zip_code: String,
	pub program: String,
	pub password: String,
	pub confirm_password: String,
	pub agree_to_terms: bool,
}

impl RegistrationForm {
	/// Create the all-empty/false record.
	pub fn new() -> Self {
		Self::default()
	}

	/// The current value of the named field.
	pub fn value(&self, field: FieldName) -> FieldValue {
		match field {
			FieldName::FirstName => FieldValue::Text(self.first_name.clone()),
			FieldName::LastName => FieldValue::Text(self.last_name.clone()),
			FieldName::Email => FieldValue::Text(self.email.clone()),
			FieldName::Phone => FieldValue::Text(self.phone.clone()),
			FieldName::DateOfBirth => FieldValue::Text(self.date_of_birth.clone()),
			FieldName::Address => FieldValue::Text(self.address.clone()),
			FieldName::City => FieldValue::Text(self.city.clone()),
			FieldName::ZipCode => FieldValue::Text(self.zip_code.clone()),
			FieldName::Program => FieldValue::Text(self.program.clone()),
			FieldName::Password => FieldValue::Text(self.password.clone()),
			FieldName::ConfirmPassword => FieldValue::Text(self.confirm_password.clone()),
			FieldName::AgreeToTerms => FieldValue::Flag(self.agree_to_terms),
		}
	}

	/// Overwrite the named field with a new value.
	///
	/// `agreeToTerms` takes a flag, every other field takes text; a value of
	/// the wrong shape is rejected and the record is left unchanged.
	///
	/// # Examples
	///
	/// ```
	/// use enrollment_forms::{FieldName, FieldValue, RegistrationForm};
	///
	/// let mut form = RegistrationForm::default();
	///
	/// form.set_value(FieldName::AgreeToTerms, FieldValue::from(true)).unwrap();
	/// assert!(form.agree_to_terms);
	///
	/// // A flag is not a usable email value
	/// assert!(form.set_value(FieldName::Email, FieldValue::from(true)).is_err());
	/// assert!(form.email.is_empty());
	/// ```
	pub fn set_value(&mut self, field: FieldName, value: FieldValue) -> FieldResult<()> {
		match (field, value) {
			(FieldName::AgreeToTerms, FieldValue::Flag(flag)) => {
				self.agree_to_terms = flag;
				Ok(())
			}
			(FieldName::AgreeToTerms, FieldValue::Text(_)) => Err(FieldError::Validation(
				format!("{} expects a boolean value", field),
			)),
			(_, FieldValue::Flag(_)) => Err(FieldError::Validation(format!(
				"{} expects a text value",
				field
			))),
			(_, FieldValue::Text(text)) => {
				match field {
					FieldName::FirstName => self.first_name = text,
					FieldName::LastName => self.last_name = text,
					FieldName::Email => self.email = text,
					FieldName::Phone => self.phone = text,
					FieldName::DateOfBirth => self.date_of_birth = text,
					FieldName::Address => self.address = text,
					FieldName::City => self.city = text,
					FieldName::ZipCode => self.zip_code = text,
					FieldName::Program => self.program = text,
					FieldName::Password => self.password = text,
					FieldName::ConfirmPassword => self.confirm_password = text,
					// Handled by the arms above
					FieldName::AgreeToTerms => unreachable!(),
				}
				Ok(())
			}
		}
	}
}

/// The JSON document the submission backend accepts: the registration record
/// minus `confirmPassword`.
///
/// # Examples
///
/// ```
/// use enrollment_forms::{RegistrationForm, RegistrationPayload};
///
/// let mut form = RegistrationForm::default();
/// form.first_name = "Ada".to_string();
/// form.confirm_password = "Secret99".to_string();
///
/// let payload = RegistrationPayload::from(&form);
/// let json = payload.to_json();
/// assert_eq!(json["firstName"], "Ada");
/// assert!(json.get("confirmPassword").is_none());
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub phone: String,
	pub date_of_birth: String,
	pub address: String,
	pub city: String,
	pub zip_code: String,
	pub program: String,
	pub password: String,
	pub agree_to_terms: bool,
}

impl From<&RegistrationForm> for RegistrationPayload {
	fn from(form: &RegistrationForm) -> Self {
		Self {
			first_name: form.first_name.clone(),
			last_name: form.last_name.clone(),
			email: form.email.clone(),
			phone: form.phone.clone(),
			date_of_birth: form.date_of_birth.clone(),
			address: form.address.clone(),
			city: form.city.clone(),
			zip_code: form.zip_code.clone(),
			program: form.program.clone(),
			password: form.password.clone(),
			agree_to_terms: form.agree_to_terms,
		}
	}
}

impl RegistrationPayload {
	/// Render the payload as the JSON document the backend would receive.
	pub fn to_json(&self) -> serde_json::Value {
		serde_json::to_value(self).expect("RegistrationPayload: string/bool struct cannot fail to serialize")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_form_is_all_empty_false() {
		// Act
		let form = RegistrationForm::new();

		// Assert
		for field in FieldName::ALL {
			match form.value(field) {
				FieldValue::Text(s) => assert!(s.is_empty(), "{field} not empty"),
				FieldValue::Flag(b) => assert!(!b, "{field} not false"),
			}
		}
	}

	#[rstest]
	#[case(FieldName::FirstName, "Ada")]
	#[case(FieldName::Program, "Medicine")]
	#[case(FieldName::ZipCode, "94107")]
	fn test_set_value_overwrites_text_fields(#[case] field: FieldName, #[case] text: &str) {
		// Arrange
		let mut form = RegistrationForm::default();

		// Act
		form.set_value(field, FieldValue::from(text)).unwrap();

		// Assert
		assert_eq!(form.value(field), FieldValue::Text(text.to_string()));
	}

	#[rstest]
	fn test_set_value_rejects_wrong_shape() {
		// Arrange
		let mut form = RegistrationForm::default();

		// Act & Assert
		assert!(
			form.set_value(FieldName::AgreeToTerms, FieldValue::from("yes"))
				.is_err()
		);
		assert!(form.set_value(FieldName::City, FieldValue::from(true)).is_err());
		assert_eq!(form, RegistrationForm::default());
	}

	#[rstest]
	#[case("Computer Science", Some(Program::ComputerScience))]
	#[case("Business Administration", Some(Program::BusinessAdministration))]
	#[case("Art & Design", Some(Program::ArtAndDesign))]
	#[case("Literature", Some(Program::Literature))]
	#[case("", None)]
	#[case("computer science", None)]
	#[case("History", None)]
	fn test_program_from_input(#[case] input: &str, #[case] expected: Option<Program>) {
		// Act & Assert
		assert_eq!(Program::from_input(input), expected);
	}

	#[rstest]
	fn test_payload_excludes_confirm_password() {
		// Arrange
		let mut form = RegistrationForm::default();
		form.email = "ada@example.com".to_string();
		form.password = "Secret99".to_string();
		form.confirm_password = "Secret99".to_string();
		form.agree_to_terms = true;

		// Act
		let json = RegistrationPayload::from(&form).to_json();

		// Assert
		assert_eq!(json["email"], "ada@example.com");
		assert_eq!(json["password"], "Secret99");
		assert_eq!(json["agreeToTerms"], true);
		assert!(json.get("confirmPassword").is_none());
		assert_eq!(json.as_object().map(|o| o.len()), Some(11));
	}
}
