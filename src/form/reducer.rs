use chrono::NaiveDate;
use tracing::debug;

use crate::models::{Gender, SignupDraft};

/// Result of presenting a modal choice (date picker, gender selector)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOutcome<T> {
    Selected(T),
    Cancelled,
}

/// A single user interaction with the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    FirstNameChanged(String),
    LastNameChanged(String),
    DateOfBirthPicked(PickerOutcome<NaiveDate>),
    GenderPicked(PickerOutcome<Gender>),
    AcceptanceSet(bool),
    AcceptanceToggled,
}

/// Apply an event to a draft, producing the next draft
///
/// Pure: the input draft is never modified. A cancelled picker yields an
/// unchanged copy.
pub fn reduce(draft: &SignupDraft, event: FormEvent) -> SignupDraft {
    let mut next = draft.clone();

    match event {
        FormEvent::FirstNameChanged(value) => next.first_name = value,
        FormEvent::LastNameChanged(value) => next.last_name = value,
        FormEvent::DateOfBirthPicked(PickerOutcome::Selected(date)) => {
            debug!(date = %date, "date of birth selected");
            next.date_of_birth = Some(date);
        }
        FormEvent::GenderPicked(PickerOutcome::Selected(gender)) => {
            debug!(gender = %gender, "gender selected");
            next.gender = Some(gender);
        }
        FormEvent::DateOfBirthPicked(PickerOutcome::Cancelled)
        | FormEvent::GenderPicked(PickerOutcome::Cancelled) => {
            debug!("picker cancelled");
        }
        FormEvent::AcceptanceSet(accepted) => next.accepted = accepted,
        FormEvent::AcceptanceToggled => next.accepted = !next.accepted,
    }

    next
}
