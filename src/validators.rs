//! Reusable validators for registration form fields.
//!
//! Each validator owns one rule and reports failures as [`FieldError`]
//! values carrying the message the form surface should display.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::field::{FieldError, FieldResult};

// Basic `local@domain.tld` shape: runs of non-space/non-@ characters around
// a single `@`, with at least one dot in the domain part. No DNS or length
// checks.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// Optional leading `+`, then at least 10 characters drawn from digits,
// spaces, hyphens, and parentheses.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\+?[\d\s()-]{10,}$").expect("PHONE_REGEX: invalid regex pattern")
});

/// Validates that a string value looks like an email address.
///
/// # Examples
///
/// ```
/// use enrollment_forms::EmailValidator;
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("a@b.c").is_ok());
/// assert!(validator.validate("a@b").is_err());
/// assert!(validator.validate("not an email").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmailValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl EmailValidator {
	/// Creates a new `EmailValidator` with the default message.
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	///
	/// # Examples
	///
	/// ```
	/// use enrollment_forms::EmailValidator;
	///
	/// let validator = EmailValidator::new().with_message("That address looks wrong");
	/// assert!(validator.validate("broken").is_err());
	/// ```
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Validates the given string slice as an email address.
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("Please enter a valid email address");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

impl Default for EmailValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates that a string value looks like a phone number.
///
/// # Examples
///
/// ```
/// use enrollment_forms::PhoneValidator;
///
/// let validator = PhoneValidator::new();
/// assert!(validator.validate("+1 (555) 123-4567").is_ok());
/// assert!(validator.validate("5551234567").is_ok());
/// assert!(validator.validate("12345").is_err());
/// assert!(validator.validate("555-CALL-NOW").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PhoneValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl PhoneValidator {
	/// Creates a new `PhoneValidator` with the default message.
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Validates the given string slice as a phone number.
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if PHONE_REGEX.is_match(value) {
			Ok(())
		} else {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("Please enter a valid phone number");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

impl Default for PhoneValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates password length and character-class coverage.
///
/// The length rule runs first; only a long-enough password is checked for
/// the combined complexity rule (one ASCII lowercase letter, one uppercase
/// letter, and one digit — a single rule, not three separate messages).
///
/// # Examples
///
/// ```
/// use enrollment_forms::PasswordStrengthValidator;
///
/// let validator = PasswordStrengthValidator::new();
/// assert!(validator.validate("Abcdefg1").is_ok());
/// assert!(validator.validate("abcdefg1").is_err()); // no uppercase
/// assert!(validator.validate("Ab1").is_err()); // too short
/// ```
#[derive(Debug, Clone)]
pub struct PasswordStrengthValidator {
	/// Minimum password length in characters
	min_length: usize,
}

impl PasswordStrengthValidator {
	/// Creates a validator with the default 8-character minimum.
	pub fn new() -> Self {
		Self { min_length: 8 }
	}

	/// Sets a different minimum length.
	///
	/// # Examples
	///
	/// ```
	/// use enrollment_forms::PasswordStrengthValidator;
	///
	/// let validator = PasswordStrengthValidator::new().with_min_length(12);
	/// assert!(validator.validate("Abcdefg1").is_err());
	/// assert!(validator.validate("Abcdefg1hij2").is_ok());
	/// ```
	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = min_length;
		self
	}

	/// Validates the given password.
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if value.chars().count() < self.min_length {
			return Err(FieldError::Validation(format!(
				"Password must be at least {} characters long",
				self.min_length
			)));
		}

		let has_lowercase = value.chars().any(|c| c.is_ascii_lowercase());
		let has_uppercase = value.chars().any(|c| c.is_ascii_uppercase());
		let has_digit = value.chars().any(|c| c.is_ascii_digit());

		if has_lowercase && has_uppercase && has_digit {
			Ok(())
		} else {
			Err(FieldError::Validation(
				"Password must contain uppercase, lowercase, and number".to_string(),
			))
		}
	}
}

impl Default for PasswordStrengthValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates that a birth date falls inside an age window.
///
/// Age is computed as `reference_year - birth_year`, ignoring month and day.
/// Near a birthday this can misstate the age by one year; the behavior is
/// preserved from the original form.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use enrollment_forms::AgeRangeValidator;
///
/// let validator = AgeRangeValidator::new();
/// let birth = NaiveDate::from_ymd_opt(2010, 12, 31).unwrap();
///
/// // 2026 - 2010 = 16, even before the December birthday
/// assert!(validator.validate(birth, 2026).is_ok());
/// assert!(validator.validate(birth, 2025).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct AgeRangeValidator {
	/// Inclusive minimum age in years
	min_years: i32,
	/// Inclusive maximum age in years
	max_years: i32,
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl AgeRangeValidator {
	/// Creates a validator with the registration window of 16 to 100 years.
	pub fn new() -> Self {
		Self {
			min_years: 16,
			max_years: 100,
			message: None,
		}
	}

	/// Sets different inclusive age bounds.
	///
	/// # Examples
	///
	/// ```
	/// use chrono::NaiveDate;
	/// use enrollment_forms::AgeRangeValidator;
	///
	/// let validator = AgeRangeValidator::new().with_bounds(18, 65);
	/// let birth = NaiveDate::from_ymd_opt(2009, 1, 1).unwrap();
	/// assert!(validator.validate(birth, 2026).is_err());
	/// ```
	pub fn with_bounds(mut self, min_years: i32, max_years: i32) -> Self {
		self.min_years = min_years;
		self.max_years = max_years;
		self
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Validates the birth date against the window, using plain year
	/// subtraction relative to `reference_year`.
	pub fn validate(&self, birth_date: NaiveDate, reference_year: i32) -> FieldResult<()> {
		let age = reference_year - birth_date.year();
		if age < self.min_years || age > self.max_years {
			let msg = match &self.message {
				Some(m) => m.clone(),
				None => format!(
					"Age must be between {} and {} years",
					self.min_years, self.max_years
				),
			};
			return Err(FieldError::Validation(msg));
		}
		Ok(())
	}
}

impl Default for AgeRangeValidator {
	fn default() -> Self {
		Self::new()
	}
}
