//! Mandatory person field value objects.
//!
//! # Responsibility
//! - Wrap each required scalar attribute in a self-validating type.
//! - Expose every validity predicate publicly so storage adapters can
//!   pre-check raw values and report precise constraint messages.
//!
//! # Invariants
//! - A value object can only be constructed from data that passes its own
//!   predicate; invalid state is unrepresentable in memory.
//! - Predicates are pure and side-effect free.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

// Local part: alphanumeric plus `+_.-`, must start and end alphanumeric.
// Domain: period-separated labels, each starting/ending alphanumeric with
// optional interior hyphens; the final label is at least 2 chars long.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    let local = r"[[:alnum:]]([[:alnum:]+_.-]*[[:alnum:]])?";
    let label = r"[[:alnum:]]([[:alnum:]-]*[[:alnum:]])?";
    let final_label = r"[[:alnum:]][[:alnum:]-]*[[:alnum:]]";
    Regex::new(&format!("^{local}@({label}\\.)*{final_label}$")).expect("valid email regex")
});

static MODULE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2,4}[0-9]{4}[A-Z]{0,2}$").expect("valid module code regex"));

/// Raised when a raw value fails its field's format predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFieldError {
    /// Display name of the offending field.
    pub field: &'static str,
    /// The field's full constraint message.
    pub constraint: &'static str,
}

impl Display for InvalidFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.constraint)
    }
}

impl Error for InvalidFieldError {}

/// A person's name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    value: String,
}

impl Name {
    pub const FIELD_NAME: &'static str = "Name";
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    /// Returns whether `value` is usable as a name.
    ///
    /// The first character must be alphanumeric; the rest may be
    /// alphanumeric or spaces.
    pub fn is_valid(value: &str) -> bool {
        let mut chars = value.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphanumeric() => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == ' ')
    }

    /// Wraps a validated name.
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

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A person's phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone {
    value: String,
}

impl Phone {
    pub const FIELD_NAME: &'static str = "Phone";
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    /// Returns whether `value` is a digits-only string of at least 3 digits.
    pub fn is_valid(value: &str) -> bool {
        value.len() >= 3 && value.chars().all(|c| c.is_ascii_digit())
    }

    /// Wraps a validated phone number.
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

impl Display for Phone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A person's email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email {
    value: String,
}

impl Email {
    pub const FIELD_NAME: &'static str = "Email";
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain. \
        The local-part should only contain alphanumeric characters and these special characters: +_.- \
        and may not start or end with a special character. \
        The domain is made up of period-separated labels that start and end with alphanumeric \
        characters, and the last label must be at least 2 characters long";

    /// Returns whether `value` has a `local-part@domain` shape.
    pub fn is_valid(value: &str) -> bool {
        EMAIL_RE.is_match(value)
    }

    /// Wraps a validated email address.
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

impl Display for Email {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A person's gender marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gender {
    value: String,
}

impl Gender {
    pub const FIELD_NAME: &'static str = "Gender";
    pub const MESSAGE_CONSTRAINTS: &'static str = "Gender should be either M or F";

    pub fn is_valid(value: &str) -> bool {
        matches!(value, "M" | "F")
    }

    /// Wraps a validated gender marker.
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

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A person's campus location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    value: String,
}

impl Location {
    pub const FIELD_NAME: &'static str = "Location";
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Locations can take any values, and it should not be blank";

    /// Returns whether `value` is non-blank with a non-whitespace first char.
    pub fn is_valid(value: &str) -> bool {
        value.chars().next().is_some_and(|c| !c.is_whitespace())
    }

    /// Wraps a validated location.
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

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The module a professor or teaching assistant is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleCode {
    value: String,
}

impl ModuleCode {
    pub const FIELD_NAME: &'static str = "ModuleCode";
    pub const MESSAGE_CONSTRAINTS: &'static str = "Module codes should start with 2 to 4 capital \
        letters, followed by 4 digits and up to 2 optional capital letters";

    pub fn is_valid(value: &str) -> bool {
        MODULE_CODE_RE.is_match(value)
    }

    /// Wraps a validated module code.
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

impl Display for ModuleCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
