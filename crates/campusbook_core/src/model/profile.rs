//! Instructor profile field value objects.
//!
//! # Responsibility
//! - Wrap the teaching-profile attributes a professor or teaching assistant
//!   may carry (rating, specialisation, office hour, GitHub username).
//!
//! # Invariants
//! - These types always hold a validated, supplied value. "Not supplied" is
//!   expressed as `Option::None` on the owning person record; the storage
//!   sentinel never reaches the in-memory model.

use crate::model::fields::InvalidFieldError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

// DAY, hh:mm AM - hh:mm PM with a 12-hour clock, teaching weekdays only.
static OFFICE_HOUR_RE: Lazy<Regex> = Lazy::new(|| {
    let time = r"(0[1-9]|1[0-2]):[0-5][0-9] (AM|PM)";
    Regex::new(&format!(
        "^(MONDAY|TUESDAY|WEDNESDAY|THURSDAY|FRIDAY), {time} - {time}$"
    ))
    .expect("valid office hour regex")
});

// GitHub rules: alphanumeric segments joined by single hyphens, no leading
// or trailing hyphen. The 39-char cap is checked separately; the repetition
// bound alone would admit hyphenated names up to twice that length.
static GITHUB_USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:alnum:]](-?[[:alnum:]])*$").expect("valid username regex"));

const GITHUB_USERNAME_MAX_LEN: usize = 39;

/// A teaching rating on a 0-5 scale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rating {
    value: String,
}

impl Rating {
    pub const FIELD_NAME: &'static str = "Rating";
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Rating should be a single digit from 0 to 5";

    pub fn is_valid(value: &str) -> bool {
        matches!(value, "0" | "1" | "2" | "3" | "4" | "5")
    }

    /// Wraps a validated rating.
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidFieldError> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self { value })
        } else {
            Err(InvalidFieldError {
                field: Self::FIELD_NAME,
                constraint: Self::MESSAGE_CONSTRAINTS,
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A professor's field of specialisation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Specialisation {
    value: String,
}

impl Specialisation {
    pub const FIELD_NAME: &'static str = "Specialisation";
    pub const MESSAGE_CONSTRAINTS: &'static str = "Specialisations should only contain \
        alphanumeric characters and spaces, and it should not be blank";

    /// Same shape as a name: alphanumeric first char, then alphanumeric or
    /// spaces.
    pub fn is_valid(value: &str) -> bool {
        let mut chars = value.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphanumeric() => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == ' ')
    }

    /// Wraps a validated specialisation.
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidFieldError> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self { value })
        } else {
            Err(InvalidFieldError {
                field: Self::FIELD_NAME,
                constraint: Self::MESSAGE_CONSTRAINTS,
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Display for Specialisation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A weekly consultation slot, e.g. `MONDAY, 03:00 PM - 05:00 PM`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OfficeHour {
    value: String,
}

impl OfficeHour {
    pub const FIELD_NAME: &'static str = "OfficeHour";
    pub const MESSAGE_CONSTRAINTS: &'static str = "Office hours should be in the format \
        DAY, hh:mm AM - hh:mm PM, where DAY is an uppercase weekday from MONDAY to FRIDAY";

    pub fn is_valid(value: &str) -> bool {
        OFFICE_HOUR_RE.is_match(value)
    }

    /// Wraps a validated office hour slot.
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidFieldError> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self { value })
        } else {
            Err(InvalidFieldError {
                field: Self::FIELD_NAME,
                constraint: Self::MESSAGE_CONSTRAINTS,
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Display for OfficeHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A GitHub account username.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GithubUsername {
    value: String,
}

impl GithubUsername {
    pub const FIELD_NAME: &'static str = "GithubUsername";
    pub const MESSAGE_CONSTRAINTS: &'static str = "GitHub usernames should only contain \
        alphanumeric characters or single hyphens, cannot begin or end with a hyphen, \
        and must be at most 39 characters long";

    pub fn is_valid(value: &str) -> bool {
        value.len() <= GITHUB_USERNAME_MAX_LEN && GITHUB_USERNAME_RE.is_match(value)
    }

    /// Wraps a validated GitHub username.
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidFieldError> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self { value })
        } else {
            Err(InvalidFieldError {
                field: Self::FIELD_NAME,
                constraint: Self::MESSAGE_CONSTRAINTS,
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Display for GithubUsername {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
