use thiserror::Error;

use super::navigator::Route;
use crate::models::{Registration, SignupDraft};

/// Form fields, in focus and validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    DateOfBirth,
    Gender,
    Terms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("First name is required")]
    MissingFirstName,

    #[error("Last name is required")]
    MissingLastName,

    #[error("Date of birth is required")]
    MissingDateOfBirth,

    #[error("Gender is required")]
    MissingGender,

    #[error("Please accept the terms and conditions")]
    TermsNotAccepted,
}

impl ValidationError {
    /// The field that failed
    pub fn field(&self) -> Field {
        match self {
            Self::MissingFirstName => Field::FirstName,
            Self::MissingLastName => Field::LastName,
            Self::MissingDateOfBirth => Field::DateOfBirth,
            Self::MissingGender => Field::Gender,
            Self::TermsNotAccepted => Field::Terms,
        }
    }
}

/// Run the validation chain
///
/// Checks run in a fixed order and stop at the first failure: first name,
/// last name, date of birth, gender, then acceptance of the terms.
pub fn validate(draft: &SignupDraft) -> Result<Registration, ValidationError> {
    let first_name = draft.first_name.trim();
    if first_name.is_empty() {
        return Err(ValidationError::MissingFirstName);
    }

    let last_name = draft.last_name.trim();
    if last_name.is_empty() {
        return Err(ValidationError::MissingLastName);
    }

    let date_of_birth = draft
        .date_of_birth
        .ok_or(ValidationError::MissingDateOfBirth)?;
    let gender = draft.gender.ok_or(ValidationError::MissingGender)?;

    if !draft.accepted {
        return Err(ValidationError::TermsNotAccepted);
    }

    Ok(Registration {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        date_of_birth,
        gender,
    })
}

/// Whether `submit` would succeed for this draft
pub fn can_submit(draft: &SignupDraft) -> bool {
    validate(draft).is_ok()
}

/// Outcome of a successful submission, before any navigation happens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub registration: Registration,
    pub destination: Route,
}

/// Validate a draft and decide where a successful submission leads
pub fn submit(draft: &SignupDraft) -> Result<Submission, ValidationError> {
    let registration = validate(draft)?;
    Ok(Submission {
        registration,
        destination: Route::Home,
    })
}
