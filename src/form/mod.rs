//! Sign-up form state: draft reducer, validation chain and submission

pub mod controller;
pub mod navigator;
pub mod reducer;
pub mod validation;

pub use controller::{FormController, SubmitError};
pub use navigator::{Navigator, Route, UnknownRoute};
pub use reducer::{reduce, FormEvent, PickerOutcome};
pub use validation::{can_submit, submit, validate, Field, Submission, ValidationError};
