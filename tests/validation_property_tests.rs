//! Validation property tests
//!
//! Property-based tests for the whole-form validation pass.

use enrollment_forms::{FieldName, RegistrationForm, rules};
use proptest::prelude::*;
use rstest::*;

/// Reference year pinned so the age rule is deterministic.
const YEAR: i32 = 2026;

/// A record that passes every rule when validated against [`YEAR`].
fn valid_form() -> RegistrationForm {
	RegistrationForm {
		first_name: "Ada".to_string(),
		last_name: "Lovelace".to_string(),
		email: "ada@example.com".to_string(),
		phone: "+1 (555) 123-4567".to_string(),
		date_of_birth: "2000-05-20".to_string(),
		address: "12 Analytical Way".to_string(),
		city: "London".to_string(),
		zip_code: "94107".to_string(),
		program: "Mathematics".to_string(),
		password: "Engine99".to_string(),
		confirm_password: "Engine99".to_string(),
		agree_to_terms: true,
	}
}

proptest! {
	/// Test: validation idempotence
	///
	/// Category: Property
	/// Repeated validation of an unchanged record yields identical error maps.
	#[rstest]
	fn prop_validate_is_idempotent(
		first in ".{0,20}",
		email in ".{0,20}",
		password in ".{0,20}",
	) {
		let mut form = valid_form();
		form.first_name = first;
		form.email = email;
		form.password = password.clone();
		form.confirm_password = password;

		let first_pass = rules::validate_in_year(&form, YEAR);
		let second_pass = rules::validate_in_year(&form, YEAR);

		prop_assert_eq!(first_pass, second_pass);
	}

	/// Test: well-formed emails pass
	///
	/// Category: Property
	/// Any `local@domain.tld` shape satisfies the email rule.
	#[rstest]
	fn prop_generated_emails_pass(
		local in "[a-z0-9]{1,12}",
		domain in "[a-z0-9]{1,12}",
		tld in "[a-z]{2,4}",
	) {
		let mut form = valid_form();
		form.email = format!("{local}@{domain}.{tld}");

		let errors = rules::validate_in_year(&form, YEAR);

		prop_assert!(!errors.contains_key(&FieldName::Email));
	}

	/// Test: digit-only phone numbers pass
	///
	/// Category: Property
	/// Ten or more digits always satisfy the phone rule.
	#[rstest]
	fn prop_long_digit_phones_pass(phone in "[0-9]{10,15}") {
		let mut form = valid_form();
		form.phone = phone;

		let errors = rules::validate_in_year(&form, YEAR);

		prop_assert!(!errors.contains_key(&FieldName::Phone));
	}

	/// Test: generated strong passwords pass
	///
	/// Category: Property
	/// Eight-plus characters covering all three classes satisfy the
	/// password rule.
	#[rstest]
	fn prop_strong_passwords_pass(
		lower in "[a-z]{6,12}",
		upper in "[A-Z]{1,4}",
		digits in "[0-9]{1,4}",
	) {
		let password = format!("{lower}{upper}{digits}");
		let mut form = valid_form();
		form.password = password.clone();
		form.confirm_password = password;

		let errors = rules::validate_in_year(&form, YEAR);

		prop_assert!(!errors.contains_key(&FieldName::Password));
		prop_assert!(!errors.contains_key(&FieldName::ConfirmPassword));
	}

	/// Test: blank required text fields error
	///
	/// Category: Property
	/// Whitespace-only names never pass the required check.
	#[rstest]
	fn prop_blank_first_name_is_required(whitespace in "[ \t]{0,10}") {
		let mut form = valid_form();
		form.first_name = whitespace;

		let errors = rules::validate_in_year(&form, YEAR);

		prop_assert_eq!(
			errors.get(&FieldName::FirstName).map(String::as_str),
			Some("First name is required")
		);
	}

	/// Test: mismatched confirmations error
	///
	/// Category: Property
	/// Any non-empty confirmation differing from the password is rejected.
	#[rstest]
	fn prop_mismatched_confirmation_errors(suffix in "[a-z0-9]{1,8}") {
		let mut form = valid_form();
		form.confirm_password = format!("{}{}", form.password, suffix);

		let errors = rules::validate_in_year(&form, YEAR);

		prop_assert_eq!(
			errors.get(&FieldName::ConfirmPassword).map(String::as_str),
			Some("Passwords do not match")
		);
	}
}
