//! The whole-form validation pass.
//!
//! [`validate`] is a pure function of the registration record (and the
//! current calendar year). Every field's check runs independently and
//! populates a fresh [`ErrorMap`]; nothing short-circuits across fields, so
//! check order never affects the outcome.

use chrono::{Datelike, Local, NaiveDate};

use crate::field::{ErrorMap, FieldName};
use crate::form::{Program, RegistrationForm};
use crate::validators::{
	AgeRangeValidator, EmailValidator, PasswordStrengthValidator, PhoneValidator,
};

/// Validate the whole form against the current calendar year.
///
/// Returns the freshly computed [`ErrorMap`]; the form is valid iff the map
/// is empty.
///
/// # Examples
///
/// ```
/// use enrollment_forms::{rules, FieldName, RegistrationForm};
///
/// let form = RegistrationForm::default();
/// let errors = rules::validate(&form);
///
/// assert_eq!(errors[&FieldName::FirstName], "First name is required");
/// assert_eq!(errors.len(), FieldName::ALL.len());
/// ```
pub fn validate(form: &RegistrationForm) -> ErrorMap {
	validate_in_year(form, Local::now().year())
}

/// Validate the whole form against an explicit reference year.
///
/// The age check is the only rule that depends on the clock; pinning the
/// year makes the pass fully deterministic for tests.
pub fn validate_in_year(form: &RegistrationForm, current_year: i32) -> ErrorMap {
	let mut errors = ErrorMap::new();

	// Name checks
	if form.first_name.trim().is_empty() {
		errors.insert(FieldName::FirstName, "First name is required".to_string());
	}
	if form.last_name.trim().is_empty() {
		errors.insert(FieldName::LastName, "Last name is required".to_string());
	}

	// Email
	if form.email.is_empty() {
		errors.insert(FieldName::Email, "Email is required".to_string());
	} else if let Err(e) = EmailValidator::new().validate(&form.email) {
		errors.insert(FieldName::Email, e.to_string());
	}

	// Phone
	if form.phone.is_empty() {
		errors.insert(FieldName::Phone, "Phone number is required".to_string());
	} else if let Err(e) = PhoneValidator::new().validate(&form.phone) {
		errors.insert(FieldName::Phone, e.to_string());
	}

	// Date of birth: age window via plain year subtraction
	if form.date_of_birth.is_empty() {
		errors.insert(
			FieldName::DateOfBirth,
			"Date of birth is required".to_string(),
		);
	} else {
		match NaiveDate::parse_from_str(form.date_of_birth.trim(), "%Y-%m-%d") {
			Ok(birth) => {
				if let Err(e) = AgeRangeValidator::new().validate(birth, current_year) {
					errors.insert(FieldName::DateOfBirth, e.to_string());
				}
			}
			Err(_) => {
				errors.insert(
					FieldName::DateOfBirth,
					"Please enter a valid date of birth".to_string(),
				);
			}
		}
	}

	// Address checks
	if form.address.trim().is_empty() {
		errors.insert(FieldName::Address, "Address is required".to_string());
	}
	if form.city.trim().is_empty() {
		errors.insert(FieldName::City, "City is required".to_string());
	}
	if form.zip_code.trim().is_empty() {
		errors.insert(FieldName::ZipCode, "ZIP code is required".to_string());
	}

	// Program must be one of the catalogue values; an empty select fails too
	if Program::from_input(form.program.trim()).is_none() {
		errors.insert(FieldName::Program, "Please select a program".to_string());
	}

	// Password
	if form.password.is_empty() {
		errors.insert(FieldName::Password, "Password is required".to_string());
	} else if let Err(e) = PasswordStrengthValidator::new().validate(&form.password) {
		errors.insert(FieldName::Password, e.to_string());
	}

	// Confirmation must byte-equal the password
	if form.confirm_password.is_empty() {
		errors.insert(
			FieldName::ConfirmPassword,
			"Please confirm your password".to_string(),
		);
	} else if form.confirm_password != form.password {
		errors.insert(
			FieldName::ConfirmPassword,
			"Passwords do not match".to_string(),
		);
	}

	// Terms
	if !form.agree_to_terms {
		errors.insert(
			FieldName::AgreeToTerms,
			"You must agree to the terms and conditions".to_string(),
		);
	}

	tracing::debug!(error_count = errors.len(), "registration form validated");

	errors
}
