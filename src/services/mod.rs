pub mod registration;
#[cfg(test)]
pub mod mock_registration;

pub use registration::{HttpRegistration, NoopRegistration, RegistrationService};
