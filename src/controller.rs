//! The form controller: field updates, validation, and the submit lifecycle.

use crate::backend::{BackendError, SimulatedBackend, SubmissionBackend};
use crate::field::{ErrorMap, FieldName, FieldValue};
use crate::form::{RegistrationForm, RegistrationPayload};
use crate::rules;

/// Where the controller is in the registration lifecycle.
///
/// `Editing --submit(valid)--> Submitting --backend ok--> Submitted
/// --reset--> Editing`; an invalid submit stays in `Editing` with the error
/// map populated. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	Editing,
	Submitting,
	Submitted,
}

/// Why a submit attempt did not reach the submitted state.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
	/// A submission is already in flight. The controller guards against
	/// double submission itself instead of relying on a disabled button.
	#[error("a submission is already in flight")]
	InFlight,
	/// The form was already submitted; call `reset` before submitting again.
	#[error("the form was already submitted")]
	AlreadySubmitted,
	/// Validation failed; the freshly installed error map says why.
	#[error("the form has validation errors")]
	Invalid,
	/// The backend rejected the registration.
	#[error(transparent)]
	Backend(#[from] BackendError),
}

/// Read-only view of a completed registration, for the success screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
	pub first_name: String,
	pub email: String,
}

/// Owns the registration record, its error map, the password-reveal flags,
/// and the lifecycle phase.
///
/// # Examples
///
/// ```
/// use enrollment_forms::{FieldName, Phase, RegistrationController};
///
/// let mut controller = RegistrationController::new();
/// assert_eq!(controller.phase(), Phase::Editing);
///
/// controller.update_field(FieldName::FirstName, "Ada");
/// assert_eq!(controller.form().first_name, "Ada");
///
/// // The empty form does not validate
/// assert!(!controller.validate());
/// assert!(controller.errors().contains_key(&FieldName::Email));
/// ```
pub struct RegistrationController {
	form: RegistrationForm,
	errors: ErrorMap,
	show_password: bool,
	show_confirm_password: bool,
	phase: Phase,
	backend: Box<dyn SubmissionBackend>,
}

impl RegistrationController {
	/// Creates a controller with the default [`SimulatedBackend`].
	pub fn new() -> Self {
		Self::with_backend(SimulatedBackend::new())
	}

	/// Creates a controller submitting through the given backend.
	///
	/// # Examples
	///
	/// ```
	/// use std::time::Duration;
	/// use enrollment_forms::{RegistrationController, SimulatedBackend};
	///
	/// let controller =
	/// 	RegistrationController::with_backend(SimulatedBackend::with_delay(Duration::ZERO));
	/// ```
	pub fn with_backend(backend: impl SubmissionBackend + 'static) -> Self {
		Self {
			form: RegistrationForm::default(),
			errors: ErrorMap::new(),
			show_password: false,
			show_confirm_password: false,
			phase: Phase::Editing,
			backend: Box::new(backend),
		}
	}

	/// The current registration record.
	pub fn form(&self) -> &RegistrationForm {
		&self.form
	}

	/// The error map installed by the last validation pass.
	pub fn errors(&self) -> &ErrorMap {
		&self.errors
	}

	/// The current lifecycle phase.
	pub fn phase(&self) -> Phase {
		self.phase
	}

	/// Whether a submission is in flight. The submit control should be
	/// disabled while this is true.
	pub fn is_submitting(&self) -> bool {
		self.phase == Phase::Submitting
	}

	/// Whether the registration completed.
	pub fn is_submitted(&self) -> bool {
		self.phase == Phase::Submitted
	}

	pub fn password_visible(&self) -> bool {
		self.show_password
	}

	pub fn confirm_password_visible(&self) -> bool {
		self.show_confirm_password
	}

	pub fn toggle_password_visibility(&mut self) {
		self.show_password = !self.show_password;
	}

	pub fn toggle_confirm_password_visibility(&mut self) {
		self.show_confirm_password = !self.show_confirm_password;
	}

	/// Overwrites one field with a new value.
	///
	/// Any stale error message for that field is cleared immediately so the
	/// user sees progress while typing; no re-validation happens until the
	/// next submit attempt. A value of the wrong shape (a flag for a text
	/// field or vice versa) is logged and ignored, leaving both the record
	/// and the error map untouched. Updates apply in call order and are
	/// permitted in every phase.
	///
	/// # Examples
	///
	/// ```
	/// use enrollment_forms::{FieldName, RegistrationController};
	///
	/// let mut controller = RegistrationController::new();
	/// controller.validate();
	/// assert!(controller.errors().contains_key(&FieldName::Email));
	///
	/// // Typing clears the stale message without re-validating
	/// controller.update_field(FieldName::Email, "a");
	/// assert!(!controller.errors().contains_key(&FieldName::Email));
	/// ```
	pub fn update_field(&mut self, field: FieldName, value: impl Into<FieldValue>) {
		match self.form.set_value(field, value.into()) {
			Ok(()) => {
				self.errors.remove(&field);
				tracing::debug!(field = %field, "field updated");
			}
			Err(e) => {
				tracing::warn!(field = %field, error = %e, "ignored wrong-shape field update");
			}
		}
	}

	/// Runs the full validation pass and installs the fresh error map
	/// wholesale. Returns whether the form may submit.
	pub fn validate(&mut self) -> bool {
		self.errors = rules::validate(&self.form);
		self.errors.is_empty()
	}

	/// Attempts to submit the registration.
	///
	/// The phase guard runs first: a submit while one is in flight fails
	/// with [`SubmitError::InFlight`], and a submit after completion fails
	/// with [`SubmitError::AlreadySubmitted`]. Then the full validation pass
	/// runs; if it fails, the only state change is the installed error map.
	/// On success the controller passes the payload (the record minus the
	/// password confirmation) to the backend and moves to `Submitted`; if
	/// the backend rejects it, the controller returns to `Editing`.
	pub async fn submit(&mut self) -> Result<(), SubmitError> {
		match self.phase {
			Phase::Submitting => return Err(SubmitError::InFlight),
			Phase::Submitted => return Err(SubmitError::AlreadySubmitted),
			Phase::Editing => {}
		}

		if !self.validate() {
			tracing::debug!(error_count = self.errors.len(), "submit aborted by validation");
			return Err(SubmitError::Invalid);
		}

		self.phase = Phase::Submitting;
		let payload = RegistrationPayload::from(&self.form);

		match self.backend.submit(&payload).await {
			Ok(()) => {
				self.phase = Phase::Submitted;
				tracing::info!(email = %self.form.email, "registration submitted");
				Ok(())
			}
			Err(e) => {
				self.phase = Phase::Editing;
				tracing::warn!(error = %e, "backend rejected registration");
				Err(SubmitError::Backend(e))
			}
		}
	}

	/// The success view, available only after a completed submission.
	pub fn success(&self) -> Option<Confirmation> {
		(self.phase == Phase::Submitted).then(|| Confirmation {
			first_name: self.form.first_name.clone(),
			email: self.form.email.clone(),
		})
	}

	/// Full fresh start: reinitializes the record to its defaults, clears
	/// the error map and both reveal flags, and returns to `Editing`.
	/// Usable from any phase, including a wedged `Submitting` left behind by
	/// a dropped submit future.
	pub fn reset(&mut self) {
		self.form = RegistrationForm::default();
		self.errors.clear();
		self.show_password = false;
		self.show_confirm_password = false;
		self.phase = Phase::Editing;
		tracing::debug!("registration form reset");
	}
}

impl Default for RegistrationController {
	fn default() -> Self {
		Self::new()
	}
}
