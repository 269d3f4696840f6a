use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// ISO 8601 calendar date format used for display and parsing
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// The fixed set of gender choices offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    NonBinary,
    PreferNotToAnswer,
}

impl Gender {
    /// All choices, in the order they are presented
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::NonBinary,
        Gender::PreferNotToAnswer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NonBinary => "Non-binary",
            Gender::PreferNotToAnswer => "Prefer not to answer",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gender option: {0:?}")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| UnknownGender(s.to_string()))
    }
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Earliest year a date of birth may fall in
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// January 1st of [`MIN_BIRTH_YEAR`]
pub fn earliest_birth_date() -> NaiveDate {
    NaiveDate::from_yo_opt(MIN_BIRTH_YEAR, 1).unwrap_or(NaiveDate::MIN)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    Malformed(String),

    #[error("date of birth {date} is outside {min} to {max}")]
    OutOfRange {
        date: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },
}

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`)
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, InvalidDate> {
    NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT)
        .map_err(|_| InvalidDate::Malformed(s.to_string()))
}

/// Parse a date of birth, which must fall between [`earliest_birth_date`]
/// and `today` inclusive
pub fn parse_birth_date(s: &str, today: NaiveDate) -> Result<NaiveDate, InvalidDate> {
    let date = parse_iso_date(s)?;
    let min = earliest_birth_date();
    if date < min || date > today {
        return Err(InvalidDate::OutOfRange {
            date,
            min,
            max: today,
        });
    }
    Ok(date)
}

/// In-memory form data for the current sign-up session
///
/// Created empty when the sign-up screen mounts and mutated one field at a
/// time through [`crate::form::reduce`]. Nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupDraft {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub accepted: bool,
}

impl SignupDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Date of birth as `YYYY-MM-DD`, or an empty string when unset
    pub fn date_of_birth_iso(&self) -> String {
        self.date_of_birth
            .map(|d| d.format(ISO_DATE_FORMAT).to_string())
            .unwrap_or_default()
    }

    /// Gender label, or an empty string when unset
    pub fn gender_label(&self) -> &'static str {
        self.gender.map(|g| g.as_str()).unwrap_or("")
    }
}

/// A draft that passed every validation check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "dob")]
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
}
