pub mod config;
pub mod signup;

// Re-export commonly used types at models root for convenience
pub use config::AppConfig;
pub use signup::{
    earliest_birth_date, parse_birth_date, parse_iso_date, Gender, InvalidDate, Registration, SignupDraft, UnknownGender,
    ISO_DATE_FORMAT, MIN_BIRTH_YEAR,
};
