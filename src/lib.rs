//! Registration form state and validation for a student enrollment portal
//!
//! This crate provides the UI-independent core of a single-screen
//! registration form:
//! - A typed registration record with a closed field set and all-empty
//!   defaults
//! - A pure, wholesale validation pass producing a field-keyed error map
//! - Reusable validators for email, phone, password strength, and age range
//! - A lifecycle controller (`Editing` → `Submitting` → `Submitted`) with
//!   optimistic per-field error clearing and an explicit re-entrancy guard
//! - A pluggable asynchronous submission backend, defaulting to a simulated
//!   always-succeeds call with a fixed delay

pub mod backend;
pub mod controller;
pub mod field;
pub mod form;
pub mod rules;
pub mod validators;

pub use backend::{BackendError, SimulatedBackend, SubmissionBackend};
pub use controller::{Confirmation, Phase, RegistrationController, SubmitError};
pub use field::{ErrorMap, FieldError, FieldName, FieldResult, FieldValue};
pub use form::{Program, RegistrationForm, RegistrationPayload};
pub use validators::{
	AgeRangeValidator, EmailValidator, PasswordStrengthValidator, PhoneValidator,
};
