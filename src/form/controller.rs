use chrono::NaiveDate;
use thiserror::Error;
use tracing::{error, info};

use super::navigator::Navigator;
use super::reducer::{reduce, FormEvent, PickerOutcome};
use super::validation::{self, ValidationError};
use crate::models::{parse_birth_date, Gender, InvalidDate, Registration, SignupDraft, UnknownGender};
use crate::services::RegistrationService;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("registration failed: {0:#}")]
    Registration(anyhow::Error),
}

/// Owns the draft for one sign-up session and routes every change through
/// the reducer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormController {
    draft: SignupDraft,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &SignupDraft {
        &self.draft
    }

    pub fn dispatch(&mut self, event: FormEvent) {
        self.draft = reduce(&self.draft, event);
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.dispatch(FormEvent::FirstNameChanged(value.into()));
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.dispatch(FormEvent::LastNameChanged(value.into()));
    }

    pub fn set_date_of_birth(&mut self, date: NaiveDate) {
        self.dispatch(FormEvent::DateOfBirthPicked(PickerOutcome::Selected(date)));
    }

    /// Set the date of birth from a `YYYY-MM-DD` string
    ///
    /// Holds to the same bounds as the date picker: no earlier than 1900 and
    /// no later than `today`. A rejected date leaves the draft untouched.
    pub fn set_date_of_birth_iso(&mut self, value: &str, today: NaiveDate) -> Result<(), InvalidDate> {
        let date = parse_birth_date(value, today)?;
        self.set_date_of_birth(date);
        Ok(())
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.dispatch(FormEvent::GenderPicked(PickerOutcome::Selected(gender)));
    }

    /// Set the gender from its display label
    ///
    /// Labels outside [`Gender::ALL`] are rejected and never stored.
    pub fn set_gender_label(&mut self, label: &str) -> Result<(), UnknownGender> {
        let gender = label.parse::<Gender>()?;
        self.set_gender(gender);
        Ok(())
    }

    pub fn set_accepted(&mut self, accepted: bool) {
        self.dispatch(FormEvent::AcceptanceSet(accepted));
    }

    pub fn toggle_accepted(&mut self) {
        self.dispatch(FormEvent::AcceptanceToggled);
    }

    pub fn can_submit(&self) -> bool {
        validation::can_submit(&self.draft)
    }

    /// Validate and, on success, navigate to the destination exactly once
    ///
    /// On failure the draft is left unchanged and nothing is navigated.
    pub fn submit<N>(&self, navigator: &mut N) -> Result<Registration, ValidationError>
    where
        N: Navigator + ?Sized,
    {
        let submission = validation::submit(&self.draft)?;
        info!(destination = %submission.destination, "sign-up submitted");
        navigator.navigate(submission.destination);
        Ok(submission.registration)
    }

    /// Like [`submit`](Self::submit), but hands the registration to a
    /// registrar first and only navigates if it accepted it
    pub async fn submit_with<R, N>(
        &self,
        registrar: &R,
        navigator: &mut N,
    ) -> Result<Registration, SubmitError>
    where
        R: RegistrationService + ?Sized,
        N: Navigator + Send + ?Sized,
    {
        let submission = validation::submit(&self.draft)?;

        if let Err(err) = registrar.register(&submission.registration).await {
            error!("Registration failed: {:#}", err);
            return Err(SubmitError::Registration(err));
        }

        info!(destination = %submission.destination, "sign-up registered");
        navigator.navigate(submission.destination);
        Ok(submission.registration)
    }

    /// Discard the draft and start over
    pub fn reset(&mut self) {
        self.draft = SignupDraft::default();
    }
}
